//! Tests verifying the JSON sent to the monetr API matches the wire format
//! the server expects.

use monetr::{DataPoint, RealtimeValue};

#[test]
fn test_bulk_payload_is_a_flat_array() {
    let block = vec![
        DataPoint::new("proj_1", 12, 4, 99.5, 1706400000000),
        DataPoint::new("proj_1", 12, 5, 10.0, 1706400000000),
    ];

    let json = serde_json::to_value(&block).unwrap();

    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["projectId"], "proj_1");
    assert_eq!(items[0]["kpiId"], 12);
    assert_eq!(items[0]["dimensionId"], 4);
    assert_eq!(items[1]["value"], 10.0);
}

#[test]
fn test_bulk_item_uses_camel_case() {
    let point = DataPoint::new("proj_1", 12, 4, 1.0, 1706400000000);

    let json = serde_json::to_value(&point).unwrap();

    assert!(json.get("projectId").is_some());
    assert!(json.get("project_id").is_none()); // snake_case should NOT exist
    assert!(json.get("kpiId").is_some());
    assert!(json.get("kpi_id").is_none());
    assert!(json.get("dimensionId").is_some());
    assert!(json.get("dimension_id").is_none());
}

#[test]
fn test_create_flag_round_trip() {
    let mut point = DataPoint::new("proj_1", 12, 4, 1.0, 1706400000000);

    // Absent unless explicitly tagged.
    let json_str = serde_json::to_string(&point).unwrap();
    assert!(!json_str.contains("create"));

    point.create = Some(true);
    let json = serde_json::to_value(&point).unwrap();
    assert_eq!(json["create"], true);
}

#[test]
fn test_realtime_body_has_exactly_value_and_date() {
    let body = RealtimeValue {
        value: 42.5,
        date: 1706400000000,
    };

    let json = serde_json::to_value(&body).unwrap();

    let fields = json.as_object().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(json["value"], 42.5);
    assert_eq!(json["date"], 1706400000000i64);
}
