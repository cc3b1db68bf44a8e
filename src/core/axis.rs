use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    Category,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisPosition {
    Left,
    Right,
    Bottom,
}

/// One chart axis. Category axes carry labels; value axes derive their scale
/// maximum from the series bound to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDefinition {
    pub kind: AxisKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<AxisPosition>,
}

impl AxisDefinition {
    #[must_use]
    pub fn category<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: AxisKind::Category,
            labels: labels.into_iter().map(Into::into).collect(),
            name: None,
            position: Some(AxisPosition::Bottom),
        }
    }

    #[must_use]
    pub fn value() -> Self {
        Self {
            kind: AxisKind::Value,
            labels: Vec::new(),
            name: None,
            position: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: AxisPosition) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn is_value(&self) -> bool {
        self.kind == AxisKind::Value
    }
}

/// Rounds the largest finite value up to the next multiple of 10.
///
/// Matches the granularity of the rendered axis ticks so the scale stays
/// stable across refreshes. Returns `0.0` when no finite value is present.
#[must_use]
pub fn axis_scale_max<'a, I>(values: I) -> f64
where
    I: IntoIterator<Item = &'a f64>,
{
    let max = values
        .into_iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |current| current.max(v)))
        });
    match max {
        Some(max) => (max / 10.0).ceil() * 10.0,
        None => 0.0,
    }
}
