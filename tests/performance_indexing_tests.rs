use multiprop::{IndexedCollection, PropertySet, Value};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Widget {
    id: usize,
    color: String,
}

const COLORS: [&str; 10] = [
    "red", "orange", "yellow", "green", "blue", "indigo", "violet", "black", "white", "grey",
];

fn widgets(count: usize) -> IndexedCollection<Widget, &'static str> {
    let properties = PropertySet::new()
        .property("color", |w: &Widget| Value::from(w.color.as_str()))
        .property("id", |w: &Widget| Value::from(w.id as i64));
    let mut collection = IndexedCollection::with_capacity(properties, count).unwrap();
    for id in 0..count {
        collection
            .add_element(Widget {
                id,
                color: COLORS[id % COLORS.len()].to_string(),
            })
            .unwrap();
    }
    collection
}

fn time_lookups(collection: &IndexedCollection<Widget, &'static str>, rounds: usize) -> Duration {
    let start = Instant::now();
    for round in 0..rounds {
        let key = Value::from(COLORS[round % COLORS.len()]);
        let found = collection.search_iter(&"color", &key).len();
        assert_eq!(found, collection.len() / COLORS.len());
    }
    start.elapsed()
}

#[test]
fn test_bucket_sizes_for_ten_colors() {
    let collection = widgets(1_000);

    for color in COLORS {
        let matches = collection.search_by_property(&"color", &Value::from(color));
        assert_eq!(matches.len(), 100);
        assert!(matches.iter().all(|w| w.color == color));
        assert!(matches.windows(2).all(|w| w[0].id < w[1].id));
    }
    assert_eq!(collection.stats().properties[0].distinct_values, 10);
}

#[test]
fn test_unique_key_lookup_is_independent_of_size() {
    let small = widgets(1_000);
    let large = widgets(100_000);
    let rounds = 10_000;

    let single = |c: &IndexedCollection<Widget, &'static str>| {
        let start = Instant::now();
        for i in 0..rounds {
            let key = Value::from((i % 1_000) as i64);
            assert_eq!(c.count_by_property(&"id", &key), 1);
        }
        start.elapsed()
    };

    let small_time = single(&small);
    let large_time = single(&large);
    println!("id lookups: 1k elements {:?}, 100k elements {:?}", small_time, large_time);

    // Hash lookups; a linear scan would be ~100x slower on the large set.
    assert!(
        large_time < small_time * 20 + Duration::from_millis(50),
        "lookup time grew with collection size"
    );
}

#[test]
fn test_bucket_lookup_scales_with_bucket_not_collection() {
    let collection = widgets(10_000);
    let rounds = 200;

    let indexed = time_lookups(&collection, rounds);

    let start = Instant::now();
    for round in 0..rounds {
        let color = COLORS[round % COLORS.len()];
        let scanned = collection.iter().filter(|w| w.color == color).count();
        assert_eq!(scanned, 1_000);
    }
    let scanned = start.elapsed();

    println!("indexed: {:?}, full scan: {:?}", indexed, scanned);
    assert!(indexed <= scanned, "index lookup should not be slower than a scan");
}
