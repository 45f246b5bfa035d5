// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinate, Event, EventRoles, Organizer, RankedEvent, RoleSlots, SearchCriteria, ALL_CATEGORIES, MOTIVATOR_ROLE};
pub use requests::{CreateEventRequest, DiscoverRequest, RoleRequirements};
pub use responses::{DiscoverResponse, ErrorResponse, EventListResponse, HealthResponse};
