mod common;
use chrono::NaiveDate;
use common::{at, record};
use horimetro::core::query::{
    ViewQuery, aggregate, build_view, filter_by_fleet, filter_by_range, fleet_options,
    sort_by_date_desc,
};
use horimetro::export::range::parse_range;
use horimetro::models::{FleetFilter, Record, Summary};

fn sample() -> Vec<Record> {
    vec![
        record(at(2024, 1, 10, 8, 0), "Ana", "230", 100.0, 102.0),
        record(at(2024, 2, 5, 7, 30), "Bruno", "231", 50.0, 53.0),
        record(at(2024, 1, 20, 9, 0), "Carla", "230", 102.0, 106.75),
        record(at(2024, 2, 5, 7, 30), "Davi", "232", 10.0, 10.5),
    ]
}

#[test]
fn test_filter_all_returns_full_store_in_order() {
    let store = sample();
    assert_eq!(filter_by_fleet(&store, &FleetFilter::All), store);
    assert_eq!(filter_by_fleet(&store, &FleetFilter::parse("All")), store);
    assert_eq!(filter_by_fleet(&store, &FleetFilter::parse("todas")), store);
}

#[test]
fn test_filter_by_fleet_preserves_source_order() {
    let store = sample();
    let only_230 = filter_by_fleet(&store, &FleetFilter::parse("230"));

    let operators: Vec<&str> = only_230.iter().map(|r| r.operator.as_str()).collect();
    assert_eq!(operators, vec!["Ana", "Carla"]);
}

#[test]
fn test_aggregate_matches_fleet_sum() {
    let store = sample();

    for fleet in ["230", "231", "232", "999"] {
        let expected: f64 = store
            .iter()
            .filter(|r| r.fleet == fleet)
            .map(|r| r.worked_hours)
            .sum();
        let summary = aggregate(&filter_by_fleet(&store, &FleetFilter::parse(fleet)));
        assert_eq!(summary.total_hours, expected, "fleet {fleet}");
    }

    let absent = aggregate(&filter_by_fleet(&store, &FleetFilter::parse("999")));
    assert_eq!(
        absent,
        Summary {
            count: 0,
            total_hours: 0.0
        }
    );
}

#[test]
fn test_aggregate_rounds_total() {
    let records = vec![
        record(at(2024, 1, 1, 0, 0), "A", "1", 0.0, 0.1),
        record(at(2024, 1, 2, 0, 0), "A", "1", 0.0, 0.2),
    ];
    let summary = aggregate(&records);
    assert_eq!(summary.count, 2);
    assert_eq!(summary.total_hours, 0.3);
}

#[test]
fn test_sort_by_date_desc_is_stable() {
    let sorted = sort_by_date_desc(sample());
    let operators: Vec<&str> = sorted.iter().map(|r| r.operator.as_str()).collect();

    // Bruno and Davi share a timestamp: insertion order kept
    assert_eq!(operators, vec!["Bruno", "Davi", "Carla", "Ana"]);
}

#[test]
fn test_fleet_options_are_distinct_and_sorted() {
    let mut store = sample();
    store.push(record(at(2024, 3, 1, 0, 0), "Eva", "230", 1.0, 2.0));

    assert_eq!(fleet_options(&store), vec!["All", "230", "231", "232"]);
    assert_eq!(fleet_options(&[]), vec!["All"]);
}

#[test]
fn test_filter_by_range_uses_calendar_date() {
    let store = sample();
    let (start, end) = parse_range("2024-01").unwrap();
    let january = filter_by_range(&store, start, end);
    assert_eq!(january.len(), 2);

    let feb_5 = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
    assert_eq!(filter_by_range(&store, feb_5, feb_5).len(), 2);
}

#[test]
fn test_build_view_combines_filters() {
    let store = sample();
    let query = ViewQuery {
        fleet: FleetFilter::parse("230"),
        range: Some(parse_range("2024-01-15:2024-12-31").unwrap()),
    };

    let view = build_view(&store, &query);
    assert_eq!(view.records.len(), 1);
    assert_eq!(view.records[0].operator, "Carla");
    assert_eq!(view.summary.count, 1);
    assert_eq!(view.summary.total_hours, 4.75);
}

#[test]
fn test_parse_range_forms() {
    let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

    assert_eq!(parse_range("2024").unwrap(), (d(2024, 1, 1), d(2024, 12, 31)));
    assert_eq!(parse_range("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
    assert_eq!(parse_range("2024-02:2024-03").unwrap(), (d(2024, 2, 1), d(2024, 3, 31)));
    assert_eq!(parse_range("2023:2024").unwrap(), (d(2023, 1, 1), d(2024, 12, 31)));
    assert_eq!(
        parse_range("2024-01-10:2024-01-12").unwrap(),
        (d(2024, 1, 10), d(2024, 1, 12))
    );

    assert!(parse_range("24").is_err());
    assert!(parse_range("2024-13").is_err());
    assert!(parse_range("2024:2024-01").is_err());
    assert!(parse_range("2024-03-01:2024-01-01").is_err());
}

#[test]
fn test_fleet_options_sort_numeric_codes_numerically() {
    let store = vec![
        record(at(2024, 1, 1, 0, 0), "Ana", "1000", 1.0, 2.0),
        record(at(2024, 1, 2, 0, 0), "Ana", "230", 1.0, 2.0),
        record(at(2024, 1, 3, 0, 0), "Ana", "PA-7", 1.0, 2.0),
        record(at(2024, 1, 4, 0, 0), "Ana", "99", 1.0, 2.0),
    ];

    assert_eq!(fleet_options(&store), vec!["All", "99", "230", "1000", "PA-7"]);
}

#[test]
fn test_fleet_named_like_the_sentinel_can_be_selected() {
    let store = vec![
        record(at(2024, 1, 1, 0, 0), "Ana", "todas", 1.0, 2.0),
        record(at(2024, 1, 2, 0, 0), "Bruno", "230", 1.0, 2.0),
    ];

    assert_eq!(FleetFilter::parse("todas"), FleetFilter::All);
    assert_eq!(FleetFilter::parse("=todas"), FleetFilter::Fleet("todas".into()));

    let only = filter_by_fleet(&store, &FleetFilter::parse("=todas"));
    assert_eq!(only.len(), 1);
    assert_eq!(only[0].operator, "Ana");
}
