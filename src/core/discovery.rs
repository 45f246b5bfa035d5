use std::cmp::Ordering;
use std::fmt;

use crate::core::filters::{
    CategoryFilter, DiscoveryContext, EventFilter, OpenRolesFilter, RadiusFilter, TextFilter,
};
use crate::models::{Event, RankedEvent, SearchCriteria};

/// Result of the discovery process
#[derive(Debug)]
pub struct DiscoveryResult {
    pub events: Vec<RankedEvent>,
    pub total_candidates: usize,
}

/// Discovery orchestrator - an ordered list of filter stages plus a distance sort
///
/// # Pipeline Stages
/// 1. Category
/// 2. Open roles
/// 3. Free text
/// 4. Radius
/// 5. Stable sort by distance from the observer
///
/// Stages are independent predicates. The default order runs the cheap ones
/// first; it never changes which events survive.
pub struct Discovery {
    stages: Vec<Box<dyn EventFilter>>,
}

impl Discovery {
    /// Pipeline without any stages; every event passes
    pub fn empty() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn with_default_stages() -> Self {
        Self::empty()
            .with_stage(CategoryFilter)
            .with_stage(OpenRolesFilter)
            .with_stage(TextFilter)
            .with_stage(RadiusFilter)
    }

    /// Append a stage after the existing ones
    pub fn with_stage<F>(mut self, stage: F) -> Self
    where
        F: EventFilter + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    fn accepts(&self, event: &Event, ctx: &DiscoveryContext<'_>) -> bool {
        self.stages.iter().all(|stage| stage.accepts(event, ctx))
    }

    /// Filter and order events for display
    ///
    /// Borrows `events` for the duration of the call only and returns owned
    /// copies of the survivors. Calling twice with the same arguments yields
    /// the same output.
    pub fn discover(&self, events: &[Event], criteria: &SearchCriteria) -> Vec<Event> {
        self.discover_ranked(events, criteria)
            .events
            .into_iter()
            .map(|ranked| ranked.event)
            .collect()
    }

    /// Same as [`Discovery::discover`] but keeps each survivor's distance
    pub fn discover_ranked(&self, events: &[Event], criteria: &SearchCriteria) -> DiscoveryResult {
        let ctx = DiscoveryContext::new(criteria);

        let mut ranked: Vec<RankedEvent> = events
            .iter()
            .filter(|event| self.accepts(event, &ctx))
            .map(|event| RankedEvent {
                distance_km: criteria
                    .observer_location
                    .zip(event.coordinates)
                    .map(|(observer, coordinates)| observer.distance_to(&coordinates)),
                event: event.clone(),
            })
            .collect();

        // Without an observer the filtered input order is kept
        if criteria.observer_location.is_some() {
            // sort_by is stable: equal distances and located-less events keep input order
            ranked.sort_by(|a, b| compare_distance(a.distance_km, b.distance_km));
        }

        tracing::debug!(
            candidates = events.len(),
            survivors = ranked.len(),
            stages = ?self.stage_names(),
            "Discovery pipeline finished"
        );

        DiscoveryResult {
            events: ranked,
            total_candidates: events.len(),
        }
    }
}

/// Ascending distance, unknown distances after every known one
fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Default for Discovery {
    fn default() -> Self {
        Self::with_default_stages()
    }
}

impl fmt::Debug for Discovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Discovery")
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Run the default pipeline
pub fn discover(events: &[Event], criteria: &SearchCriteria) -> Vec<Event> {
    Discovery::with_default_stages().discover(events, criteria)
}
