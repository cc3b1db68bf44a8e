use chart_host::api::CHART_DOCUMENT_JSON_SCHEMA_V1;
use chart_host::core::{ChartOptionDocument, ZoomWindow};
use chart_host::presets::{ReservesParams, compute_reserve_series, reserves_document};
use serde_json::json;

fn document() -> ChartOptionDocument {
    reserves_document(&compute_reserve_series(&ReservesParams::default()))
        .with_zoom(ZoomWindow::new(5.0, 95.0).expect("zoom"))
        .with_extra("grid", json!({ "left": 48, "right": 48 }))
}

#[test]
fn contract_v1_roundtrip_preserves_document() {
    let original = document();
    let json = original.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {CHART_DOCUMENT_JSON_SCHEMA_V1}")));

    let parsed = ChartOptionDocument::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, original);
}

#[test]
fn bare_document_is_accepted_with_pass_through_keys() {
    let input = json!({
        "axes": [
            { "kind": "category", "labels": ["A", "B", "C"] },
            { "kind": "value" }
        ],
        "series": [
            { "name": "Fake Data", "kind": "line", "values": [120, 200, 150] }
        ],
        "toolbox": { "feature": { "restore": {} } }
    })
    .to_string();

    let parsed = ChartOptionDocument::from_json_compat_str(&input).expect("parse");
    assert_eq!(parsed.series[0].values, vec![120.0, 200.0, 150.0]);
    assert!(parsed.zoom.is_full());
    assert!(parsed.tooltip.visible);
    assert_eq!(
        parsed.extra.get("toolbox"),
        Some(&json!({ "feature": { "restore": {} } }))
    );

    let reserialized = parsed.to_json_pretty().expect("serialize");
    assert!(reserialized.contains("toolbox"));
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let payload = json!({ "schema_version": 99, "document": document() }).to_string();
    assert!(ChartOptionDocument::from_json_compat_str(&payload).is_err());
}

#[test]
fn invalid_documents_are_rejected_on_import() {
    let dangling_axis = json!({
        "axes": [{ "kind": "category", "labels": ["A"] }, { "kind": "value" }],
        "series": [{ "name": "S", "kind": "bar", "values": [1], "axis_ref": 3 }]
    })
    .to_string();
    assert!(ChartOptionDocument::from_json_compat_str(&dangling_axis).is_err());

    let inverted_zoom = json!({
        "axes": [{ "kind": "category", "labels": ["A"] }, { "kind": "value" }],
        "series": [{ "name": "S", "kind": "bar", "values": [1] }],
        "zoom": { "start_percent": 90, "end_percent": 10 }
    })
    .to_string();
    assert!(ChartOptionDocument::from_json_compat_str(&inverted_zoom).is_err());
}

#[test]
fn bare_document_may_pass_through_a_schema_version_key() {
    let input = json!({
        "axes": [{ "kind": "category", "labels": ["A", "B"] }, { "kind": "value" }],
        "series": [{ "name": "S", "kind": "bar", "values": [1, 2] }],
        "schema_version": "2024-06"
    })
    .to_string();

    let parsed = ChartOptionDocument::from_json_compat_str(&input).expect("bare document");
    assert_eq!(parsed.series[0].values, vec![1.0, 2.0]);
    assert_eq!(parsed.extra.get("schema_version"), Some(&json!("2024-06")));
}
