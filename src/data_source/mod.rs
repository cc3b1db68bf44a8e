//! External data boundary.
//!
//! Sources only fetch raw JSON; extraction into series values and the merge
//! into the live document happen on the host side, against the document that
//! is current when the result arrives.

mod reserves;

#[cfg(feature = "http-source")]
mod http;

#[cfg(feature = "http-source")]
pub use http::HttpDataSource;
pub use reserves::ReserveFeedMapping;

use serde::{Deserialize, Serialize};

use crate::core::{ChartOptionDocument, OptionPatch, SeriesPatch};
use crate::error::{ChartError, ChartResult};

/// One-shot provider of a nested JSON payload.
pub trait DataSource {
    fn fetch(&self) -> ChartResult<serde_json::Value>;
}

/// Source returning a fixed payload; useful offline and in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticDataSource {
    payload: serde_json::Value,
}

impl StaticDataSource {
    #[must_use]
    pub fn new(payload: serde_json::Value) -> Self {
        Self { payload }
    }
}

impl DataSource for StaticDataSource {
    fn fetch(&self) -> ChartResult<serde_json::Value> {
        Ok(self.payload.clone())
    }
}

/// Fresh leading values for the first series of a document, in series order.
///
/// Each entry replaces the start of the matching series' values; categories
/// past the end of an entry keep the values of the document being patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRefresh {
    pub series: Vec<Vec<f64>>,
}

impl SeriesRefresh {
    #[must_use]
    pub fn new(series: Vec<Vec<f64>>) -> Self {
        Self { series }
    }

    /// Builds a positional series patch against `current`.
    pub fn to_patch(&self, current: &ChartOptionDocument) -> ChartResult<OptionPatch> {
        if self.series.len() > current.series.len() {
            return Err(ChartError::schema_mismatch(format!(
                "refresh carries {} series but the document has {}",
                self.series.len(),
                current.series.len()
            )));
        }

        let patches = current
            .series
            .iter()
            .enumerate()
            .map(|(index, existing)| match self.series.get(index) {
                Some(leading) => {
                    let mut values = leading.clone();
                    if existing.values.len() > values.len() {
                        values.extend_from_slice(&existing.values[leading.len()..]);
                    }
                    SeriesPatch::values(values)
                }
                None => SeriesPatch::keep(),
            })
            .collect();
        Ok(OptionPatch::new().series(patches))
    }
}
