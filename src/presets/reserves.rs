use serde::{Deserialize, Serialize};

use crate::core::{
    AxisDefinition, ChartOptionDocument, LegendConfig, SeriesDefinition, SeriesStyle,
    TooltipConfig, TooltipPlacement, TooltipTrigger,
};

pub const RESERVE_CATEGORIES: [&str; 3] = [
    "Synchronized\nReserves",
    "Primary\nReserves",
    "30-Minute\nReserves",
];

/// Placeholder values shown until the reserves feed answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservesParams {
    pub actual: Vec<f64>,
    pub requirement: Vec<f64>,
}

impl Default for ReservesParams {
    fn default() -> Self {
        Self {
            actual: vec![120.0, 200.0, 150.0],
            requirement: vec![20.0, 105.0, 90.0],
        }
    }
}

#[must_use]
pub fn compute_reserve_series(params: &ReservesParams) -> Vec<SeriesDefinition> {
    vec![
        SeriesDefinition::bar("Actual", params.actual.clone()).with_style(SeriesStyle {
            color: Some("#689D41".to_owned()),
            stack: Some("Actual".to_owned()),
            ..SeriesStyle::default()
        }),
        SeriesDefinition::bar("Reliability Requirement", params.requirement.clone()).with_style(
            SeriesStyle {
                color: Some("#EBECEE".to_owned()),
                border_color: Some("#689D41".to_owned()),
                stack: Some("Reliability Requirement".to_owned()),
                ..SeriesStyle::default()
            },
        ),
    ]
}

/// Actual vs. requirement bar chart over the three reserve products.
#[must_use]
pub fn reserves_document(series: &[SeriesDefinition]) -> ChartOptionDocument {
    let legend = LegendConfig::bottom(series.iter().map(|s| s.name.clone()));
    ChartOptionDocument::new(
        vec![
            AxisDefinition::category(RESERVE_CATEGORIES),
            AxisDefinition::value(),
        ],
        series.to_vec(),
    )
    .with_tooltip(
        TooltipConfig::default()
            .with_trigger(TooltipTrigger::Item)
            .with_placement(TooltipPlacement::Library),
    )
    .with_legend(legend)
}
