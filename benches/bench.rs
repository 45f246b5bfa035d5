// Criterion benchmarks for Event Discovery

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use event_discovery::core::{Discovery, distance::haversine_distance};
use event_discovery::models::{Coordinate, Event, EventRoles, RoleSlots, SearchCriteria};

const CATEGORIES: [&str; 4] = ["Civic Engagement", "Arts & Culture", "Education", "Social"];

fn create_event(id: usize, lat: f64, lon: f64) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Event {} at the park", id),
        description: "Community gathering with music and food".to_string(),
        event_type: CATEGORIES[id % CATEGORIES.len()].to_string(),
        date: None,
        location: String::new(),
        // Every fifth event has no known location
        coordinates: (id % 5 != 0).then(|| Coordinate::new(lat, lon)),
        organizer: None,
        roles: EventRoles {
            crew: RoleSlots { required: 4, filled: (id % 6) as u32 },
            ..EventRoles::default()
        },
    }
}

fn create_events(count: usize) -> Vec<Event> {
    (0..count)
        .map(|i| {
            let lat_offset = (i as f64 * 0.001) % 0.5;
            let lon_offset = (i as f64 * 0.001) % 0.5;
            create_event(i, 37.7749 + lat_offset, -122.4194 + lon_offset)
        })
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(37.7749),
                black_box(-122.4194),
                black_box(37.7596),
                black_box(-122.4269),
            )
        });
    });
}

fn bench_discovery(c: &mut Criterion) {
    let discovery = Discovery::with_default_stages();
    let criteria = SearchCriteria::new(25.0).with_observer(Coordinate::new(37.7749, -122.4194));

    let mut group = c.benchmark_group("discovery");

    for event_count in [10, 50, 100, 500, 1000].iter() {
        let events = create_events(*event_count);

        group.bench_with_input(
            BenchmarkId::new("discover_ranked", event_count),
            event_count,
            |b, _| {
                b.iter(|| discovery.discover_ranked(black_box(&events), black_box(&criteria)));
            },
        );
    }

    group.finish();
}

fn bench_text_query(c: &mut Criterion) {
    let discovery = Discovery::with_default_stages();
    let events = create_events(1000);
    let criteria = SearchCriteria::new(25.0)
        .with_query("MUSIC")
        .with_category("Social")
        .with_open_roles_only(true);

    c.bench_function("text_query_1000_events", |b| {
        b.iter(|| black_box(discovery.discover(black_box(&events), black_box(&criteria))));
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_discovery,
    bench_text_query
);

criterion_main!(benches);
