use chrono::{Days, NaiveDate};
use serde_json::json;

use crate::core::{
    AreaFill, AxisDefinition, ChartOptionDocument, SeriesDefinition, SeriesStyle, TooltipConfig,
    TooltipPlacement, ZoomWindow,
};
use crate::error::{ChartError, ChartResult};

/// Tooltip top offset for the large area chart, as a fraction of view height.
pub const LARGE_AREA_TOOLTIP_TOP_RATIO: f64 = 0.10;

/// One `Y/M/D` label per day starting at `start`, without zero padding.
pub fn daily_date_labels(start: NaiveDate, count: usize) -> ChartResult<Vec<String>> {
    (0..count)
        .map(|offset| {
            start
                .checked_add_days(Days::new(offset as u64))
                .map(|day| day.format("%Y/%-m/%-d").to_string())
                .ok_or_else(|| ChartError::InvalidData("date label out of range".to_owned()))
        })
        .collect()
}

/// Single daily line series with a gradient area fill, opened zoomed to the
/// first tenth of the range.
pub fn large_area_document(
    name: &str,
    start: NaiveDate,
    values: Vec<f64>,
) -> ChartResult<ChartOptionDocument> {
    let labels = daily_date_labels(start, values.len())?;
    let series = SeriesDefinition::line(name, values).with_style(SeriesStyle {
        color: Some("rgb(255, 70, 131)".to_owned()),
        area_fill: Some(AreaFill {
            top_color: "rgb(255, 158, 68)".to_owned(),
            bottom_color: "rgb(255, 70, 131)".to_owned(),
        }),
        show_symbol: false,
        ..SeriesStyle::default()
    });

    let document = ChartOptionDocument::new(
        vec![AxisDefinition::category(labels), AxisDefinition::value()],
        vec![series],
    )
    .with_tooltip(TooltipConfig::default().with_placement(TooltipPlacement::PointerFixedTop {
        top_ratio: LARGE_AREA_TOOLTIP_TOP_RATIO,
    }))
    .with_zoom(ZoomWindow::new(0.0, 10.0)?)
    .with_extra("title", json!({ "left": "center", "text": "Large Area Chart" }));
    document.validate()?;
    Ok(document)
}
