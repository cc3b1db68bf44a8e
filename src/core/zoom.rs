use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Visible category window expressed in percent of the full data range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawZoomWindow")]
pub struct ZoomWindow {
    start_percent: f64,
    end_percent: f64,
}

#[derive(Deserialize)]
struct RawZoomWindow {
    start_percent: f64,
    end_percent: f64,
}

impl TryFrom<RawZoomWindow> for ZoomWindow {
    type Error = ChartError;

    fn try_from(raw: RawZoomWindow) -> ChartResult<Self> {
        Self::new(raw.start_percent, raw.end_percent)
    }
}

impl Default for ZoomWindow {
    fn default() -> Self {
        Self::full()
    }
}

impl ZoomWindow {
    pub fn new(start_percent: f64, end_percent: f64) -> ChartResult<Self> {
        let in_range = |v: f64| v.is_finite() && (0.0..=100.0).contains(&v);
        if !in_range(start_percent) || !in_range(end_percent) {
            return Err(ChartError::InvalidData(
                "zoom window bounds must be finite and within [0, 100]".to_owned(),
            ));
        }
        if start_percent > end_percent {
            return Err(ChartError::InvalidData(
                "zoom window start must be <= end".to_owned(),
            ));
        }
        Ok(Self {
            start_percent,
            end_percent,
        })
    }

    /// The whole data range, `{0, 100}`.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            start_percent: 0.0,
            end_percent: 100.0,
        }
    }

    #[must_use]
    pub fn start_percent(self) -> f64 {
        self.start_percent
    }

    #[must_use]
    pub fn end_percent(self) -> f64 {
        self.end_percent
    }

    #[must_use]
    pub fn is_full(self) -> bool {
        self == Self::full()
    }

    /// Category index range covered by the window for `len` categories.
    #[must_use]
    pub fn visible_indices(self, len: usize) -> std::ops::Range<usize> {
        if len == 0 {
            return 0..0;
        }
        let last = (len - 1) as f64;
        let start = (last * self.start_percent / 100.0).floor() as usize;
        let end = (last * self.end_percent / 100.0).ceil() as usize;
        start..(end + 1).min(len)
    }
}
