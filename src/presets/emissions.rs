use serde::{Deserialize, Serialize};

use crate::core::{
    AxisDefinition, AxisPosition, ChartOptionDocument, LegendConfig, SeriesDefinition,
    TooltipConfig, TooltipPlacement, TooltipTrigger,
};

/// Inputs of the hourly emissions derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmissionParams {
    /// Number of hourly samples.
    pub hours: usize,
    /// Clock hour (0-23) of the first sample.
    pub start_hour: u32,
}

impl Default for EmissionParams {
    fn default() -> Self {
        Self {
            hours: 25,
            start_hour: 13,
        }
    }
}

/// 12-hour clock label, e.g. `1:00\np.m.`.
#[must_use]
pub fn hour_label(hour: u32) -> String {
    match hour % 24 {
        0 => "12:00\na.m.".to_owned(),
        h @ 1..=11 => format!("{h}:00\na.m."),
        12 => "12:00\np.m.".to_owned(),
        h => format!("{}:00\np.m.", h - 12),
    }
}

#[must_use]
pub fn hour_labels(params: &EmissionParams) -> Vec<String> {
    (0..params.hours)
        .map(|i| hour_label(params.start_hour + (i % 24) as u32))
        .collect()
}

/// Carbon dioxide bars on the left axis, sulphur dioxide and nitrogen oxides
/// lines sharing the right axis.
#[must_use]
pub fn compute_emission_series(params: &EmissionParams) -> Vec<SeriesDefinition> {
    let steps = || (1..=params.hours).map(|step| step as f64);
    let carbon = steps().map(|s| -(s - 13.0).powi(2) + 14.0_f64.powi(2) - 20.0);
    let sulphur = steps().map(|s| ((s - 12.0) / 6.0).powi(3) + 25.0);
    let nitrogen = steps().map(|s| ((s - 12.0) / 2.0).powi(2) + 10.0);

    vec![
        SeriesDefinition::bar("Carbon Dioxide", carbon.collect()).with_color("#D4D4D4"),
        SeriesDefinition::line("Sulphur Dioxide", sulphur.collect())
            .on_axis(1)
            .with_color("#E6C36E"),
        SeriesDefinition::line("Nitrogen Oxides", nitrogen.collect())
            .on_axis(1)
            .with_color("#507DAB"),
    ]
}

#[must_use]
pub fn emissions_document(params: &EmissionParams, series: &[SeriesDefinition]) -> ChartOptionDocument {
    let legend = LegendConfig::bottom(series.iter().map(|s| s.name.clone()));
    ChartOptionDocument::new(
        vec![
            AxisDefinition::category(hour_labels(params)).with_name("Hour"),
            AxisDefinition::value()
                .with_name("CO\u{2082} (Millions)")
                .with_position(AxisPosition::Left),
            AxisDefinition::value()
                .with_name("SO\u{2082}, NO\u{2093} (Thousands)")
                .with_position(AxisPosition::Right),
        ],
        series.to_vec(),
    )
    .with_tooltip(
        TooltipConfig::default()
            .with_trigger(TooltipTrigger::Axis)
            .with_placement(TooltipPlacement::DominantSeries),
    )
    .with_legend(legend)
}

/// Tooltip body for one hovered hour: the time followed by one line per
/// series, millions for the first and thousands for the rest.
#[must_use]
pub fn emissions_tooltip_text(document: &ChartOptionDocument, index: usize) -> Option<String> {
    let label = document.category_axis()?.labels.get(index)?;
    let mut lines = vec![format!("At {}", label.replacen('\n', " ", 1))];
    for (position, series) in document.series.iter().enumerate() {
        let value = series.value_at(index)?;
        let unit = if position == 0 { 'M' } else { 'K' };
        lines.push(format!("{:.1}{unit}", (value * 10.0).round() / 10.0));
    }
    Some(lines.join("\n"))
}
