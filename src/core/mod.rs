// Core algorithm exports
pub mod discovery;
pub mod distance;
pub mod filters;

pub use discovery::{discover, Discovery, DiscoveryResult};
pub use distance::haversine_distance;
pub use filters::{
    matches_category, matches_text, within_radius, CategoryFilter, DiscoveryContext, EventFilter,
    OpenRolesFilter, RadiusFilter, TextFilter,
};
