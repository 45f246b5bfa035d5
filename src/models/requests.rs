use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::domain::{Coordinate, EventRoles, Organizer, SearchCriteria, ALL_CATEGORIES};

/// Request to discover events
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiscoverRequest {
    #[serde(default)]
    pub query: String,
    #[validate(length(min = 1))]
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(alias = "observerLocation", default)]
    pub observer: Option<Coordinate>,
    #[serde(alias = "radius_km", rename = "radiusKm", default)]
    pub radius_km: Option<f64>,
    #[serde(alias = "open_roles_only", rename = "openRolesOnly", default)]
    pub open_roles_only: bool,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

impl DiscoverRequest {
    /// Validate the request and the nested observer location
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.validate()?;
        if let Some(observer) = &self.observer {
            observer.validate()?;
        }
        Ok(())
    }

    /// Build engine criteria, falling back to the configured radius
    pub fn into_criteria(self, default_radius_km: f64) -> SearchCriteria {
        SearchCriteria {
            query: self.query,
            category: self.category,
            observer_location: self.observer,
            radius_km: self.radius_km.unwrap_or(default_radius_km),
            open_roles_only: self.open_roles_only,
        }
    }
}

/// Required headcount per role for a new event
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RoleRequirements {
    #[serde(default)]
    pub sponsor: u32,
    #[serde(default)]
    pub booster: u32,
    #[serde(default)]
    pub crew: u32,
}

impl From<RoleRequirements> for EventRoles {
    fn from(value: RoleRequirements) -> Self {
        let mut roles = EventRoles::default();
        roles.sponsor.required = value.sponsor;
        roles.booster.required = value.booster;
        roles.crew.required = value.crew;
        roles
    }
}

/// Request to create an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub coordinates: Option<Coordinate>,
    pub organizer: Organizer,
    #[serde(default)]
    pub roles: RoleRequirements,
}

impl CreateEventRequest {
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.validate()?;
        if let Some(coordinates) = &self.coordinates {
            coordinates.validate()?;
        }
        Ok(())
    }
}
