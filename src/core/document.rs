use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

use super::{
    AxisDefinition, AxisKind, HoveredValue, SeriesDefinition, SeriesPatch, TooltipConfig,
    ZoomWindow, axis_scale_max,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    Top,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    pub entries: Vec<String>,
    #[serde(default)]
    pub position: LegendPosition,
}

impl LegendConfig {
    #[must_use]
    pub fn bottom<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            position: LegendPosition::Bottom,
        }
    }
}

/// Full declarative chart configuration applied to a render context.
///
/// Series sit behind `Arc` so documents derived by a merge share every series
/// the patch did not touch. Keys other than the recognized ones are kept in
/// `extra` and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptionDocument {
    pub axes: Vec<AxisDefinition>,
    pub series: Vec<Arc<SeriesDefinition>>,
    #[serde(default)]
    pub tooltip: TooltipConfig,
    #[serde(default)]
    pub zoom: ZoomWindow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendConfig>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl ChartOptionDocument {
    #[must_use]
    pub fn new(axes: Vec<AxisDefinition>, series: Vec<SeriesDefinition>) -> Self {
        Self {
            axes,
            series: series.into_iter().map(Arc::new).collect(),
            tooltip: TooltipConfig::default(),
            zoom: ZoomWindow::full(),
            legend: None,
            extra: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: ZoomWindow) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendConfig) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn value_axes(&self) -> impl Iterator<Item = &AxisDefinition> {
        self.axes.iter().filter(|axis| axis.kind == AxisKind::Value)
    }

    #[must_use]
    pub fn value_axis_count(&self) -> usize {
        self.value_axes().count()
    }

    #[must_use]
    pub fn category_axis(&self) -> Option<&AxisDefinition> {
        self.axes.iter().find(|axis| axis.kind == AxisKind::Category)
    }

    #[must_use]
    pub fn category_len(&self) -> Option<usize> {
        self.category_axis().map(|axis| axis.labels.len())
    }

    #[must_use]
    pub fn series_by_name(&self, name: &str) -> Option<&SeriesDefinition> {
        self.series
            .iter()
            .map(AsRef::as_ref)
            .find(|series| series.name == name)
    }

    /// Rounded-up scale maximum of every value axis, in value-axis order.
    #[must_use]
    pub fn axis_scale_maxima(&self) -> Vec<f64> {
        (0..self.value_axis_count())
            .map(|axis_ref| {
                axis_scale_max(
                    self.series
                        .iter()
                        .filter(|series| series.axis_ref == axis_ref)
                        .flat_map(|series| series.values.iter()),
                )
            })
            .collect()
    }

    /// Values of every series at `category_index` with their axis maxima.
    ///
    /// Series without a value at that index are skipped.
    #[must_use]
    pub fn hovered_values(&self, category_index: usize) -> SmallVec<[HoveredValue; 4]> {
        self.hovered_values_with_maxima(category_index, &self.axis_scale_maxima())
    }

    /// Same as `hovered_values` with maxima already computed for this
    /// document, in value-axis order.
    #[must_use]
    pub fn hovered_values_with_maxima(
        &self,
        category_index: usize,
        maxima: &[f64],
    ) -> SmallVec<[HoveredValue; 4]> {
        self.series
            .iter()
            .enumerate()
            .filter_map(|(series_index, series)| {
                let value = series.value_at(category_index)?;
                let axis_max = maxima.get(series.axis_ref).copied()?;
                Some(HoveredValue::new(series_index, value, axis_max))
            })
            .collect()
    }

    /// Checks the structural invariants every installed document must hold.
    pub fn validate(&self) -> ChartResult<()> {
        let value_axes = self.value_axis_count();
        let category_len = self.category_len();
        let mut names = HashSet::with_capacity(self.series.len());

        if self
            .axes
            .iter()
            .any(|axis| axis.kind == AxisKind::Value && !axis.labels.is_empty())
        {
            return Err(ChartError::schema_mismatch(
                "value axes must not carry category labels",
            ));
        }

        for (index, series) in self.series.iter().enumerate() {
            if series.axis_ref >= value_axes {
                return Err(ChartError::schema_mismatch(format!(
                    "series {index} (`{}`) references value axis {} but only {value_axes} exist",
                    series.name, series.axis_ref
                )));
            }
            if let Some(expected) = category_len {
                if series.values.len() != expected {
                    return Err(ChartError::schema_mismatch(format!(
                        "series {index} (`{}`) has {} values for {expected} categories",
                        series.name,
                        series.values.len()
                    )));
                }
            }
            if !names.insert(series.name.as_str()) {
                return Err(ChartError::schema_mismatch(format!(
                    "duplicate series name `{}`",
                    series.name
                )));
            }
        }
        Ok(())
    }
}

/// Partial document update consumed by `ChartOptionStore::merge`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axes: Option<Vec<AxisDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<SeriesPatch>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<ZoomWindow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendConfig>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl OptionPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn axes(mut self, axes: Vec<AxisDefinition>) -> Self {
        self.axes = Some(axes);
        self
    }

    #[must_use]
    pub fn series(mut self, series: Vec<SeriesPatch>) -> Self {
        self.series = Some(series);
        self
    }

    #[must_use]
    pub fn tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    #[must_use]
    pub fn zoom(mut self, zoom: ZoomWindow) -> Self {
        self.zoom = Some(zoom);
        self
    }

    #[must_use]
    pub fn legend(mut self, legend: LegendConfig) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_none()
            && self.series.is_none()
            && self.tooltip.is_none()
            && self.zoom.is_none()
            && self.legend.is_none()
            && self.extra.is_empty()
    }
}
