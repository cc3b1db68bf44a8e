use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Bar,
    Line,
}

/// Vertical gradient painted under a line series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaFill {
    pub top_color: String,
    pub bottom_color: String,
}

/// Presentation hints forwarded untouched to the render backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SeriesStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_fill: Option<AreaFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(default)]
    pub show_symbol: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDefinition {
    pub name: String,
    pub kind: SeriesKind,
    pub values: Vec<f64>,
    /// Index into the document's value axes, not into all axes.
    #[serde(default)]
    pub axis_ref: usize,
    #[serde(default)]
    pub style: SeriesStyle,
}

impl SeriesDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: SeriesKind, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            kind,
            values,
            axis_ref: 0,
            style: SeriesStyle::default(),
        }
    }

    #[must_use]
    pub fn bar(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(name, SeriesKind::Bar, values)
    }

    #[must_use]
    pub fn line(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(name, SeriesKind::Line, values)
    }

    #[must_use]
    pub fn on_axis(mut self, axis_ref: usize) -> Self {
        self.axis_ref = axis_ref;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.style.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

/// Partial update for one series; `None` fields keep the current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SeriesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SeriesKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_ref: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<SeriesStyle>,
}

impl SeriesPatch {
    /// Patch that leaves the series untouched.
    #[must_use]
    pub fn keep() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn values(values: Vec<f64>) -> Self {
        Self {
            values: Some(values),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.kind.is_none()
            && self.values.is_none()
            && self.axis_ref.is_none()
            && self.style.is_none()
    }

    #[must_use]
    pub fn apply_to(&self, series: &SeriesDefinition) -> SeriesDefinition {
        SeriesDefinition {
            name: self.name.clone().unwrap_or_else(|| series.name.clone()),
            kind: self.kind.unwrap_or(series.kind),
            values: self.values.clone().unwrap_or_else(|| series.values.clone()),
            axis_ref: self.axis_ref.unwrap_or(series.axis_ref),
            style: self.style.clone().unwrap_or_else(|| series.style.clone()),
        }
    }
}
