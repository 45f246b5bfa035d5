use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::Discovery;
use crate::models::{CreateEventRequest, DiscoverRequest, DiscoverResponse, ErrorResponse, EventListResponse, HealthResponse};
use crate::services::{CatalogError, EventCatalog};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<EventCatalog>,
    pub discovery: Arc<Discovery>,
    pub default_radius_km: f64,
}

/// Configure all event-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/events", web::get().to(list_events))
        .route("/events", web::post().to(create_event))
        .route("/events/discover", web::post().to(discover_events))
        .route("/events/{id}", web::get().to(get_event));
}

fn error_response(status: actix_web::http::StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        event_count: state.catalog.len().await,
    })
}

/// Discover events endpoint
///
/// POST /api/v1/events/discover
///
/// Request body:
/// ```json
/// {
///   "query": "beach",
///   "category": "all",
///   "observer": { "latitude": 37.7749, "longitude": -122.4194 },
///   "radiusKm": 10,
///   "openRolesOnly": false
/// }
/// ```
async fn discover_events(
    state: web::Data<AppState>,
    req: web::Json<DiscoverRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate_all() {
        tracing::info!("Validation failed for discover request: field_errors={:?}", errors);
        return error_response(
            actix_web::http::StatusCode::BAD_REQUEST,
            "Validation failed",
            errors.to_string(),
        );
    }

    let criteria = req.into_inner().into_criteria(state.default_radius_km);

    tracing::info!(
        "Discovering events: query={:?}, category={}, observer={:?}, radius_km={}",
        criteria.query,
        criteria.category,
        criteria.observer_location,
        criteria.radius_km
    );

    // Run the pipeline outside the catalog lock
    let candidates = state.catalog.snapshot().await;
    let result = state.discovery.discover_ranked(&candidates, &criteria);

    let response = DiscoverResponse {
        total_results: result.events.len(),
        total_candidates: result.total_candidates,
        events: result.events,
    };

    tracing::info!(
        "Returning {} events (from {} candidates)",
        response.total_results,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// List every catalog event
///
/// GET /api/v1/events
async fn list_events(state: web::Data<AppState>) -> impl Responder {
    let events = state.catalog.snapshot().await;

    HttpResponse::Ok().json(EventListResponse {
        count: events.len(),
        events,
    })
}

/// Get a single event
///
/// GET /api/v1/events/{id}
async fn get_event(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get(&id).await {
        Ok(event) => HttpResponse::Ok().json(event),
        Err(e) => {
            tracing::debug!("Event lookup failed: {}", e);
            error_response(actix_web::http::StatusCode::NOT_FOUND, "Event not found", e.to_string())
        }
    }
}

/// Create event endpoint
///
/// POST /api/v1/events
///
/// Only organizers with the Motivator role may create events.
async fn create_event(
    state: web::Data<AppState>,
    req: web::Json<CreateEventRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate_all() {
        tracing::info!("Validation failed for create_event request: field_errors={:?}", errors);
        return error_response(
            actix_web::http::StatusCode::BAD_REQUEST,
            "Validation failed",
            errors.to_string(),
        );
    }

    match state.catalog.create(req.into_inner()).await {
        Ok(event) => {
            tracing::info!("Created event {} '{}'", event.id, event.title);
            HttpResponse::Created().json(event)
        }
        Err(e @ CatalogError::Forbidden(_)) => {
            tracing::warn!("Rejected event creation: {}", e);
            error_response(actix_web::http::StatusCode::FORBIDDEN, "Not allowed to create events", e.to_string())
        }
        Err(e) => {
            tracing::error!("Failed to create event: {}", e);
            error_response(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create event",
                e.to_string(),
            )
        }
    }
}
