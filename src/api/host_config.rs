use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::Theme;

/// Ratios used by the dominant-series tooltip placement.
///
/// Defaults reproduce the placement shipped with the dual-axis emissions
/// screen. They were tuned for a portrait phone viewport and are not known to
/// hold for other aspect ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipLayout {
    /// Baseline anchor as a fraction of the view height.
    #[serde(default = "default_view_anchor_ratio")]
    pub view_anchor_ratio: f64,
    /// Fraction of the view height spanned by a normalized value of 1.0.
    #[serde(default = "default_value_span_ratio")]
    pub value_span_ratio: f64,
    /// Fraction of the tooltip height lifted above the dominant value.
    #[serde(default = "default_content_lift_ratio")]
    pub content_lift_ratio: f64,
    /// Smallest allowed top offset as a fraction of the tooltip height.
    #[serde(default = "default_min_top_ratio")]
    pub min_top_ratio: f64,
}

impl Default for TooltipLayout {
    fn default() -> Self {
        Self {
            view_anchor_ratio: default_view_anchor_ratio(),
            value_span_ratio: default_value_span_ratio(),
            content_lift_ratio: default_content_lift_ratio(),
            min_top_ratio: default_min_top_ratio(),
        }
    }
}

impl TooltipLayout {
    pub fn validate(self) -> ChartResult<Self> {
        let ratios = [
            self.view_anchor_ratio,
            self.value_span_ratio,
            self.content_lift_ratio,
            self.min_top_ratio,
        ];
        if ratios.iter().any(|r| !r.is_finite() || *r < 0.0) {
            return Err(ChartError::InvalidData(
                "tooltip layout ratios must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Public host bootstrap configuration.
///
/// Serializable so embedding screens can ship chart setup as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartHostConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub tooltip_layout: TooltipLayout,
    /// Tooltip size used until the backend reports a measured one.
    #[serde(default = "default_tooltip_size")]
    pub tooltip_size: (f64, f64),
}

impl ChartHostConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            theme: Theme::default(),
            tooltip_layout: TooltipLayout::default(),
            tooltip_size: default_tooltip_size(),
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_tooltip_layout(mut self, layout: TooltipLayout) -> Self {
        self.tooltip_layout = layout;
        self
    }

    #[must_use]
    pub fn with_tooltip_size(mut self, width: f64, height: f64) -> Self {
        self.tooltip_size = (width, height);
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.tooltip_layout.validate()?;
        let (width, height) = self.tooltip_size;
        validate_tooltip_size(width, height)?;
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse host config: {e}")))?;
        config.validate()
    }
}

pub(crate) fn validate_tooltip_size(width: f64, height: f64) -> ChartResult<()> {
    if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
        return Err(ChartError::InvalidData(
            "tooltip size must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

fn default_view_anchor_ratio() -> f64 {
    0.85
}

fn default_value_span_ratio() -> f64 {
    0.8
}

fn default_content_lift_ratio() -> f64 {
    0.8
}

fn default_min_top_ratio() -> f64 {
    0.4
}

fn default_tooltip_size() -> (f64, f64) {
    (150.0, 90.0)
}
