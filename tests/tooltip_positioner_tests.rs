use approx::assert_relative_eq;
use chart_host::api::{TooltipLayout, TooltipPositioner, TooltipQuery, dominant_series};
use chart_host::core::{HoveredValue, Point, Size};

fn query(hovered: &[HoveredValue]) -> TooltipQuery<'_> {
    TooltipQuery {
        hovered,
        cursor: Point::new(200.0, 300.0),
        view: Size::new(400.0, 800.0),
        content: Size::new(150.0, 90.0),
    }
}

#[test]
fn dual_axis_dominant_series_lifts_tooltip_above_it() {
    let hovered = [
        HoveredValue::new(0, 80.0, 100.0),
        HoveredValue::new(1, 20.0, 200.0),
    ];
    let dominant = dominant_series(&hovered).expect("dominant");
    assert_eq!(dominant.series_index, 0);
    assert_relative_eq!(dominant.normalized, 0.8);

    let position = TooltipPositioner::default()
        .position(query(&hovered))
        .expect("position");
    // 800 * 0.85 - 0.8 * 800 * 0.8 - 90 * 0.8
    assert_relative_eq!(position.y, 96.0, epsilon = 1e-9);
    assert_relative_eq!(position.x, 125.0);
}

#[test]
fn tooltip_is_clamped_below_top_edge() {
    let hovered = [HoveredValue::new(0, 100.0, 100.0)];
    let position = TooltipPositioner::default()
        .position(query(&hovered))
        .expect("position");
    assert_relative_eq!(position.y, 36.0, epsilon = 1e-9);
}

#[test]
fn empty_selection_suppresses_tooltip() {
    assert_eq!(TooltipPositioner::default().position(query(&[])), None);
    assert_eq!(dominant_series(&[]), None);
}

#[test]
fn normalized_ties_resolve_to_lowest_series_index() {
    let hovered = [
        HoveredValue::new(0, 30.0, 60.0),
        HoveredValue::new(1, 50.0, 100.0),
        HoveredValue::new(2, 10.0, 100.0),
    ];
    for _ in 0..16 {
        assert_eq!(dominant_series(&hovered).map(|d| d.series_index), Some(0));
    }
}

#[test]
fn larger_raw_value_does_not_win_over_larger_normalized_value() {
    let hovered = [
        HoveredValue::new(0, 150.0, 1_000.0),
        HoveredValue::new(1, 30.0, 40.0),
    ];
    assert_eq!(dominant_series(&hovered).map(|d| d.series_index), Some(1));
}

#[test]
fn custom_layout_ratios_drive_the_formula() {
    let layout = TooltipLayout {
        view_anchor_ratio: 1.0,
        value_span_ratio: 0.5,
        content_lift_ratio: 0.0,
        min_top_ratio: 0.0,
    };
    let hovered = [HoveredValue::new(0, 50.0, 100.0)];
    let position = TooltipPositioner::new(layout)
        .position(query(&hovered))
        .expect("position");
    assert_relative_eq!(position.y, 600.0);
}

#[test]
fn repeated_calls_yield_identical_positions() {
    let positioner = TooltipPositioner::default();
    let hovered = [
        HoveredValue::new(0, 42.0, 50.0),
        HoveredValue::new(1, 17.0, 30.0),
        HoveredValue::new(2, 3.0, 30.0),
    ];
    let first = positioner.position(query(&hovered));
    for _ in 0..8 {
        assert_eq!(positioner.position(query(&hovered)), first);
    }
}

#[test]
fn unbounded_view_height_still_respects_clamp() {
    let hovered = [HoveredValue::new(0, 80.0, 100.0)];
    let position = TooltipPositioner::default()
        .position(TooltipQuery {
            view: Size::new(400.0, f64::INFINITY),
            ..query(&hovered)
        })
        .expect("position");
    assert_relative_eq!(position.y, 90.0 * 0.4);
}
