use crate::models::{Event, SearchCriteria};

/// Per-call view of the criteria shared by every stage
///
/// Holds the lowercased query so it is normalized once per discovery call
/// instead of once per event.
#[derive(Debug)]
pub struct DiscoveryContext<'a> {
    pub criteria: &'a SearchCriteria,
    needle: String,
}

impl<'a> DiscoveryContext<'a> {
    pub fn new(criteria: &'a SearchCriteria) -> Self {
        Self {
            criteria,
            needle: criteria.query.to_lowercase(),
        }
    }

    /// Lowercased search query
    pub fn needle(&self) -> &str {
        &self.needle
    }
}

/// One independent predicate of the discovery pipeline
///
/// Stages must be pure: the surviving set may not depend on the order
/// stages are evaluated in.
pub trait EventFilter: Send + Sync {
    /// Short name used in pipeline logs
    fn name(&self) -> &'static str;

    fn accepts(&self, event: &Event, ctx: &DiscoveryContext<'_>) -> bool;
}

/// Free-text stage: case-insensitive substring match on title or description
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFilter;

impl EventFilter for TextFilter {
    fn name(&self) -> &'static str {
        "text"
    }

    #[inline]
    fn accepts(&self, event: &Event, ctx: &DiscoveryContext<'_>) -> bool {
        matches_text(event, ctx.needle())
    }
}

/// Category stage: exact match on event type unless the sentinel is set
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryFilter;

impl EventFilter for CategoryFilter {
    fn name(&self) -> &'static str {
        "category"
    }

    #[inline]
    fn accepts(&self, event: &Event, ctx: &DiscoveryContext<'_>) -> bool {
        matches_category(event, ctx.criteria)
    }
}

/// Radius stage: inclusive great-circle bound around the observer
#[derive(Debug, Clone, Copy, Default)]
pub struct RadiusFilter;

impl EventFilter for RadiusFilter {
    fn name(&self) -> &'static str {
        "radius"
    }

    #[inline]
    fn accepts(&self, event: &Event, ctx: &DiscoveryContext<'_>) -> bool {
        within_radius(event, ctx.criteria)
    }
}

/// Availability stage: keeps events that still need people
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenRolesFilter;

impl EventFilter for OpenRolesFilter {
    fn name(&self) -> &'static str {
        "open_roles"
    }

    #[inline]
    fn accepts(&self, event: &Event, ctx: &DiscoveryContext<'_>) -> bool {
        !ctx.criteria.open_roles_only || event.roles.has_open_slots()
    }
}

/// Check whether the title or description contains an already-lowercased needle
#[inline]
pub fn matches_text(event: &Event, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    event.title.to_lowercase().contains(needle)
        || event.description.to_lowercase().contains(needle)
}

#[inline]
pub fn matches_category(event: &Event, criteria: &SearchCriteria) -> bool {
    criteria.matches_all_categories() || event.event_type == criteria.category
}

/// Check the radius bound
///
/// Passes when either side has no location. A NaN distance or radius fails
/// the comparison, which excludes the event.
#[inline]
pub fn within_radius(event: &Event, criteria: &SearchCriteria) -> bool {
    match (criteria.observer_location, event.coordinates) {
        (Some(observer), Some(coordinates)) => {
            observer.distance_to(&coordinates) <= criteria.radius_km
        }
        _ => true,
    }
}
