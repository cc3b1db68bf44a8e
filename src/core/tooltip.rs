use serde::{Deserialize, Serialize};

use super::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TooltipTrigger {
    /// One tooltip for every series at the hovered category.
    #[default]
    Axis,
    /// One tooltip per hovered data item.
    Item,
}

/// How the tooltip position is computed on pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum TooltipPlacement {
    /// Above the tallest normalized value under the cursor.
    #[default]
    DominantSeries,
    /// Follows the cursor horizontally at a fixed fraction of the view height.
    PointerFixedTop { top_ratio: f64 },
    /// The charting library places the tooltip itself.
    Library,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    pub visible: bool,
    #[serde(default)]
    pub trigger: TooltipTrigger,
    #[serde(default)]
    pub placement: TooltipPlacement,
    #[serde(default)]
    pub last_computed_position: Option<Point>,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            visible: true,
            trigger: TooltipTrigger::Axis,
            placement: TooltipPlacement::DominantSeries,
            last_computed_position: None,
        }
    }
}

impl TooltipConfig {
    #[must_use]
    pub fn with_placement(mut self, placement: TooltipPlacement) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn with_trigger(mut self, trigger: TooltipTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    #[must_use]
    pub fn at(&self, position: Option<Point>) -> Self {
        Self {
            last_computed_position: position,
            ..self.clone()
        }
    }
}

/// Value of one series at the hovered category, paired with its axis maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoveredValue {
    pub series_index: usize,
    pub value: f64,
    pub axis_max: f64,
}

impl HoveredValue {
    #[must_use]
    pub fn new(series_index: usize, value: f64, axis_max: f64) -> Self {
        Self {
            series_index,
            value,
            axis_max,
        }
    }

    /// `value / axis_max`, or `0.0` when either side is unusable.
    #[must_use]
    pub fn normalized(self) -> f64 {
        if !self.value.is_finite() || !self.axis_max.is_finite() || self.axis_max <= 0.0 {
            return 0.0;
        }
        self.value / self.axis_max
    }
}
