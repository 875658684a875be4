use crate::{
    aggregate::CounterMap,
    obs::{AggregateReport, CounterReport},
    test_support::{Abc, abc_factory, abc_with},
};
use serde_json::json;

#[test]
fn counter_report_keeps_ordinal_order() {
    let report = CounterReport::from(&abc_with([3, -1, 0]));

    assert_eq!(report.get("B"), Some(-1));
    assert_eq!(report.get("D"), None);
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({
            "counts": [
                { "name": "A", "value": 3 },
                { "name": "B", "value": -1 },
                { "name": "C", "value": 0 },
            ]
        })
    );
}

#[test]
fn aggregate_report_includes_total() {
    let mut map: CounterMap<&str, Abc> = CounterMap::new(abc_factory());
    map.get_counts("y").set(Abc::C, 7);
    map.get_counts("x").set(Abc::A, 5);
    map.get_counts("x").add(Abc::B, 3);

    let report = map.report().unwrap();
    let keys: Vec<_> = report.entries.keys().cloned().collect();
    assert_eq!(keys, vec!["x".to_string(), "y".to_string()]);
    assert_eq!(report.entries["x"], CounterReport::from(&abc_with([5, 3, 0])));
    assert_eq!(report.total, CounterReport::from(&abc_with([5, 3, 7])));
}

#[test]
fn aggregate_report_labels_absent_keys() {
    let mut map: CounterMap<Option<u32>, Abc> = CounterMap::new(abc_factory());
    map.get_counts(None).set(Abc::A, 1);
    map.get_counts(Some(4)).set(Abc::A, 2);

    let report = map
        .report_with(|key| key.map_or_else(|| "<none>".to_string(), |k| k.to_string()))
        .unwrap();

    assert_eq!(report.entries["<none>"].get("A"), Some(1));
    assert_eq!(report.entries["4"].get("A"), Some(2));
    assert_eq!(report.total.get("A"), Some(3));
}

#[test]
fn aggregate_report_merges_colliding_labels() {
    let mut map: CounterMap<u8, Abc> = CounterMap::new(abc_factory());
    for key in 0..8u8 {
        map.get_counts(key).set(Abc::A, i64::from(key));
        map.get_counts(key).set(Abc::C, 1);
    }

    let report = map.report_with(|_| "same".to_string()).unwrap();

    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries["same"], CounterReport::from(&abc_with([28, 0, 8])));
    assert_eq!(report.entries["same"], report.total);
}

#[test]
fn aggregate_report_merges_only_matching_labels() {
    let mut map: CounterMap<u8, Abc> = CounterMap::new(abc_factory());
    for key in 0..6u8 {
        map.get_counts(key).set(Abc::B, i64::from(key));
    }

    let report = map
        .report_with(|key| if key % 2 == 0 { "even" } else { "odd" }.to_string())
        .unwrap();

    assert_eq!(report.entries["even"].get("B"), Some(6));
    assert_eq!(report.entries["odd"].get("B"), Some(9));
    assert_eq!(report.total.get("B"), Some(15));
}

#[test]
fn aggregate_report_round_trips_through_json() {
    let mut map: CounterMap<&str, Abc> = CounterMap::new(abc_factory());
    map.get_counts("x").set(Abc::B, 9);

    let report = map.report().unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let decoded: AggregateReport = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, report);
}
