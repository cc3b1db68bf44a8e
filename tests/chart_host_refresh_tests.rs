use chart_host::api::{ChartHost, ChartHostConfig, RefreshOutcome};
use chart_host::core::Viewport;
use chart_host::data_source::{ReserveFeedMapping, SeriesRefresh, StaticDataSource};
use chart_host::error::ChartError;
use chart_host::presets::{ReservesParams, compute_reserve_series, reserves_document};
use chart_host::render::{NullBackend, SurfaceHandle};
use serde_json::{Value, json};

fn reserves_payload(actual: (f64, f64), requirement: (f64, f64)) -> Value {
    json!({
        "dto": {
            "operational": {
                "data": [{
                    "types": {
                        "ACTUAL": { "values": {
                            "SYNCHRONIZED_RESERVES": { "value": actual.0 },
                            "PRIMARY_RESERVES": { "value": actual.1 }
                        }},
                        "RELIABILITY_REQUIREMENT": { "values": {
                            "SYNCHRONIZED_RESERVES": { "value": requirement.0 },
                            "PRIMARY_RESERVES": { "value": requirement.1 }
                        }}
                    }
                }]
            }
        }
    })
}

fn mounted_host() -> (NullBackend, ChartHost<NullBackend>) {
    let backend = NullBackend::new();
    let mut host =
        ChartHost::new(backend.clone(), ChartHostConfig::new(Viewport::new(360, 640))).expect("host");
    let series = compute_reserve_series(&ReservesParams::default());
    host.mount(Some(SurfaceHandle::new(1)), reserves_document(&series))
        .expect("mount");
    (backend, host)
}

#[test]
fn feed_values_replace_mapped_categories_only() {
    let (backend, mut host) = mounted_host();
    let source = StaticDataSource::new(reserves_payload((1_500.0, 2_300.0), (1_400.0, 2_100.0)));

    let outcome = host
        .refresh_from(&source, &ReserveFeedMapping::default())
        .expect("refresh");

    assert_eq!(outcome, RefreshOutcome::Applied);
    let document = host.document().expect("document");
    assert_eq!(document.series[0].values, vec![1_500.0, 2_300.0, 150.0]);
    assert_eq!(document.series[1].values, vec![1_400.0, 2_100.0, 90.0]);
    assert_eq!(document.series[0].name, "Actual");
    assert_eq!(backend.stats().documents_applied, 2);
}

#[test]
fn missing_feed_field_keeps_placeholder_document() {
    let (backend, mut host) = mounted_host();
    let before = host.document().expect("document");
    let source = StaticDataSource::new(json!({ "dto": { "operational": { "data": [] } } }));

    let outcome = host
        .refresh_from(&source, &ReserveFeedMapping::default())
        .expect("failed fetch is not an error for the caller");

    assert_eq!(outcome, RefreshOutcome::Failed);
    assert_eq!(host.document().expect("document"), before);
    assert_eq!(backend.stats().documents_applied, 1);
}

#[test]
fn extraction_reports_fetch_failure_for_non_numeric_values() {
    let mut payload = reserves_payload((1.0, 2.0), (3.0, 4.0));
    payload["dto"]["operational"]["data"][0]["types"]["ACTUAL"]["values"]["PRIMARY_RESERVES"]
        ["value"] = json!(true);
    let result = ReserveFeedMapping::default().extract(&payload);
    assert!(matches!(result, Err(ChartError::FetchFailure(_))));
}

#[test]
fn late_refresh_after_unmount_is_discarded() {
    let (backend, mut host) = mounted_host();
    let ticket = host.begin_refresh();
    host.unmount();

    let outcome = host
        .complete_refresh(ticket, Ok(SeriesRefresh::new(vec![vec![9.0, 9.0]])))
        .expect("discard");
    assert_eq!(outcome, RefreshOutcome::Discarded);
    assert_eq!(backend.stats().documents_applied, 1);
}

#[test]
fn refresh_started_before_remount_is_discarded() {
    let (backend, mut host) = mounted_host();
    let ticket = host.begin_refresh();
    host.unmount();
    let series = compute_reserve_series(&ReservesParams::default());
    host.mount(Some(SurfaceHandle::new(2)), reserves_document(&series))
        .expect("remount");

    let outcome = host
        .complete_refresh(ticket, Ok(SeriesRefresh::new(vec![vec![9.0, 9.0]])))
        .expect("discard");
    assert_eq!(outcome, RefreshOutcome::Discarded);
    assert_eq!(
        host.document().expect("document").series[0].values,
        vec![120.0, 200.0, 150.0]
    );
    assert_eq!(backend.stats().documents_applied, 2);
}

#[test]
fn refresh_merges_into_document_current_at_completion() {
    let (_backend, mut host) = mounted_host();
    let ticket = host.begin_refresh();

    // Another update lands while the fetch is in flight.
    host.on_document_change(reserves_document(&compute_reserve_series(&ReservesParams {
        actual: vec![1.0, 1.0, 7_777.0],
        requirement: vec![2.0, 2.0, 3_333.0],
    })))
    .expect("update");

    host.complete_refresh(ticket, Ok(SeriesRefresh::new(vec![vec![5.0, 6.0], vec![7.0, 8.0]])))
        .expect("refresh");

    let document = host.document().expect("document");
    assert_eq!(document.series[0].values, vec![5.0, 6.0, 7_777.0]);
    assert_eq!(document.series[1].values, vec![7.0, 8.0, 3_333.0]);
}

#[test]
fn explicit_failure_result_is_reported_as_failed() {
    let (_backend, mut host) = mounted_host();
    let ticket = host.begin_refresh();
    let outcome = host
        .complete_refresh(ticket, Err(ChartError::FetchFailure("timeout".to_owned())))
        .expect("failure is handled");
    assert_eq!(outcome, RefreshOutcome::Failed);
}
