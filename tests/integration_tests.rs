// Integration tests for Event Discovery

use event_discovery::core::{discover, Discovery};
use event_discovery::models::{Coordinate, Event, EventRoles, RoleSlots, SearchCriteria};

fn create_test_event(id: &str, title: &str, event_type: &str, lat_lon: Option<(f64, f64)>) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("Description for {}", title),
        event_type: event_type.to_string(),
        date: None,
        location: String::new(),
        coordinates: lat_lon.map(|(lat, lon)| Coordinate::new(lat, lon)),
        organizer: None,
        roles: EventRoles::default(),
    }
}

fn san_francisco() -> Coordinate {
    Coordinate::new(37.7749, -122.4194)
}

fn create_catalog() -> Vec<Event> {
    vec![
        create_test_event("1", "Community Beach Cleanup", "Civic Engagement", Some((34.0522, -118.2437))), // LA, ~560km
        create_test_event("2", "Mission Mural Walk", "Arts & Culture", Some((37.7526, -122.4123))),       // ~2.5km
        create_test_event("3", "Chess in the Park", "Education", Some((37.7596, -122.4269))),             // ~1.8km
        create_test_event("4", "Neighborhood Potluck", "Social", None),
        create_test_event("5", "Ocean Beach Bonfire", "Social", Some((37.7594, -122.5107))),              // ~8km
    ]
}

fn ids(events: &[Event]) -> Vec<&str> {
    events.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn test_filter_independence() {
    let events = create_catalog();

    let result = discover(&events, &SearchCriteria::new(10.0));

    assert_eq!(result, events);
}

#[test]
fn test_integration_end_to_end_discovery() {
    let events = create_catalog();
    let criteria = SearchCriteria::new(10.0).with_observer(san_francisco());

    let result = discover(&events, &criteria);

    // LA is filtered out by the radius, the potluck has no coordinates and sorts last
    assert_eq!(ids(&result), vec!["3", "2", "5", "4"]);
}

#[test]
fn test_combined_stages() {
    let events = create_catalog();
    let criteria = SearchCriteria::new(10.0)
        .with_query("BEACH")
        .with_category("Social")
        .with_observer(san_francisco());

    let result = discover(&events, &criteria);

    assert_eq!(ids(&result), vec!["5"]);
}

#[test]
fn test_query_matches_no_coordinates_event() {
    let events = create_catalog();
    let criteria = SearchCriteria::new(1.0)
        .with_query("potluck")
        .with_observer(san_francisco());

    let result = discover(&events, &criteria);

    assert_eq!(ids(&result), vec!["4"]);
}

#[test]
fn test_radius_inclusivity() {
    let observer = san_francisco();
    let events = create_catalog();
    let chess = events[2].coordinates.unwrap();
    let exact = observer.distance_to(&chess);

    let at_boundary = discover(&events[2..3], &SearchCriteria::new(exact).with_observer(observer));
    assert_eq!(ids(&at_boundary), vec!["3"]);

    // Equivalent to the event sitting 0.001km beyond the radius
    let beyond = discover(&events[2..3], &SearchCriteria::new(exact - 0.001).with_observer(observer));
    assert!(beyond.is_empty());
}

#[test]
fn test_sort_correctness() {
    let observer = Coordinate::new(0.0, 0.0);
    // Roughly 5km, 1km and 3km east of the observer
    let events = vec![
        create_test_event("five", "Five", "Social", Some((0.0, 0.045))),
        create_test_event("one", "One", "Social", Some((0.0, 0.009))),
        create_test_event("three", "Three", "Social", Some((0.0, 0.027))),
    ];

    let result = discover(&events, &SearchCriteria::new(10.0).with_observer(observer));

    assert_eq!(ids(&result), vec!["one", "three", "five"]);
}

#[test]
fn test_idempotence_and_no_mutation() {
    let events = create_catalog();
    let before = events.clone();
    let discovery = Discovery::default();
    let criteria = SearchCriteria::new(600.0).with_observer(san_francisco());

    let first = discovery.discover(&events, &criteria);
    let second = discovery.discover(&events, &criteria);

    assert_eq!(first, second);
    assert_eq!(events, before);
}

#[test]
fn test_nan_radius_keeps_only_unlocated_events() {
    let events = create_catalog();
    let criteria = SearchCriteria::new(f64::NAN).with_observer(san_francisco());

    let result = discover(&events, &criteria);

    assert_eq!(ids(&result), vec!["4"]);
}

#[test]
fn test_open_roles_only() {
    let mut events = create_catalog();
    events[0].roles.crew = RoleSlots { required: 10, filled: 4 };
    events[1].roles.crew = RoleSlots { required: 3, filled: 3 };

    let result = discover(&events, &SearchCriteria::new(10.0).with_open_roles_only(true));

    assert_eq!(ids(&result), vec!["1"]);
}

#[test]
fn test_ranked_result_counts() {
    let events = create_catalog();
    let criteria = SearchCriteria::new(10.0).with_observer(san_francisco());

    let result = Discovery::default().discover_ranked(&events, &criteria);

    assert_eq!(result.total_candidates, 5);
    assert_eq!(result.events.len(), 4);
    for pair in result.events.windows(2) {
        if let (Some(a), Some(b)) = (pair[0].distance_km, pair[1].distance_km) {
            assert!(a <= b, "Events not sorted by distance");
        }
    }
    assert_eq!(result.events.last().and_then(|r| r.distance_km), None);
}
