//! Event Discovery - location-aware event search for Party Connect
//!
//! This library provides the discovery engine used by the Party Connect app.
//! It filters a candidate event list through an ordered list of independent
//! stages (category, open roles, text, radius) and sorts the survivors by
//! great-circle distance from the observer.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{discover, Discovery, DiscoveryResult, EventFilter, distance::haversine_distance};
pub use crate::models::{Coordinate, Event, RankedEvent, SearchCriteria, DiscoverRequest, DiscoverResponse};
pub use crate::services::EventCatalog;
