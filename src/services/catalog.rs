use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{CreateEventRequest, Event, MOTIVATOR_ROLE};

/// Errors that can occur with catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON seed error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML seed error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unsupported seed format: {0}")]
    UnsupportedFormat(String),

    #[error("Duplicate event id: {0}")]
    DuplicateId(String),

    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Organizer role '{0}' cannot create events")]
    Forbidden(String),
}

/// Seed file layout, shared by the JSON and TOML formats
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    events: Vec<Event>,
}

/// In-memory event store
///
/// Holds the candidate events handed to the discovery pipeline. Reads take a
/// shared lock and clone a snapshot so the pipeline never runs under the lock.
#[derive(Debug, Default)]
pub struct EventCatalog {
    events: RwLock<Vec<Event>>,
}

impl EventCatalog {
    /// Create a catalog from a list of events, rejecting duplicate ids
    pub fn new(events: Vec<Event>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id.as_str()) {
                return Err(CatalogError::DuplicateId(event.id.clone()));
            }
        }

        Ok(Self {
            events: RwLock::new(events),
        })
    }

    /// Load a catalog from a `.json` or `.toml` seed file
    ///
    /// Both formats hold a top-level `events` list.
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;

        let seed: SeedFile = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&raw)?,
            Some("toml") => toml::from_str(&raw)?,
            other => {
                return Err(CatalogError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        tracing::info!("Loaded {} seed events from {}", seed.events.len(), path.display());

        Self::new(seed.events)
    }

    /// Copy of every event in insertion order
    pub async fn snapshot(&self) -> Vec<Event> {
        self.events.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }

    pub async fn get(&self, id: &str) -> Result<Event, CatalogError> {
        self.events
            .read()
            .await
            .iter()
            .find(|event| event.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Append an event, rejecting duplicate ids
    pub async fn insert(&self, event: Event) -> Result<(), CatalogError> {
        let mut events = self.events.write().await;
        if events.iter().any(|existing| existing.id == event.id) {
            return Err(CatalogError::DuplicateId(event.id));
        }
        events.push(event);
        Ok(())
    }

    /// Create a new event from a request
    ///
    /// Only motivators may host. The event gets a fresh id and every role
    /// starts with zero filled slots.
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event, CatalogError> {
        if request.organizer.role != MOTIVATOR_ROLE {
            return Err(CatalogError::Forbidden(request.organizer.role));
        }

        let event = Event {
            id: uuid::Uuid::new_v4().to_string(),
            title: request.title,
            description: request.description,
            event_type: request.event_type,
            date: request.date,
            location: request.location,
            coordinates: request.coordinates,
            organizer: Some(request.organizer),
            roles: request.roles.into(),
        };

        self.insert(event.clone()).await?;

        tracing::debug!("Created event {} ({})", event.id, event.title);

        Ok(event)
    }
}
