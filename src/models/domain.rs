use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Category sentinel that disables the category stage
pub const ALL_CATEGORIES: &str = "all";

/// Organizer role allowed to create events
pub const MOTIVATOR_ROLE: &str = "Motivator";

/// Geographic coordinate in degrees
///
/// Ranges are only enforced at the HTTP boundary through `validate()`;
/// the distance calculator accepts any value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinate {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Person hosting an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    pub name: String,
    #[serde(default)]
    pub rating: f64,
    pub role: String,
}

/// Required vs. filled headcount for one event role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSlots {
    pub required: u32,
    #[serde(default)]
    pub filled: u32,
}

impl RoleSlots {
    pub fn is_open(&self) -> bool {
        self.filled < self.required
    }
}

/// Role slots an event needs filled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRoles {
    #[serde(default)]
    pub sponsor: RoleSlots,
    #[serde(default)]
    pub booster: RoleSlots,
    #[serde(default)]
    pub crew: RoleSlots,
}

impl EventRoles {
    /// True when at least one role still has unfilled slots
    pub fn has_open_slots(&self) -> bool {
        self.sponsor.is_open() || self.booster.is_open() || self.crew.is_open()
    }
}

/// Community event as held by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Venue name, e.g. "Sunset Beach"
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub coordinates: Option<Coordinate>,
    #[serde(default)]
    pub organizer: Option<Organizer>,
    #[serde(default)]
    pub roles: EventRoles,
}

/// Criteria for a single discovery request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(rename = "observerLocation", default)]
    pub observer_location: Option<Coordinate>,
    #[serde(rename = "radiusKm")]
    pub radius_km: f64,
    #[serde(rename = "openRolesOnly", default)]
    pub open_roles_only: bool,
}

impl SearchCriteria {
    /// Criteria that let every event through in input order
    pub fn new(radius_km: f64) -> Self {
        Self {
            query: String::new(),
            category: default_category(),
            observer_location: None,
            radius_km,
            open_roles_only: false,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_observer(mut self, observer: Coordinate) -> Self {
        self.observer_location = Some(observer);
        self
    }

    pub fn with_open_roles_only(mut self, open_roles_only: bool) -> Self {
        self.open_roles_only = open_roles_only;
        self
    }

    pub fn matches_all_categories(&self) -> bool {
        self.category == ALL_CATEGORIES
    }
}

fn default_category() -> String { ALL_CATEGORIES.to_string() }

/// Discovered event together with its distance from the observer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEvent {
    #[serde(flatten)]
    pub event: Event,
    #[serde(rename = "distanceKm", skip_serializing_if = "Option::is_none", default)]
    pub distance_km: Option<f64>,
}
