use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

use super::SeriesRefresh;

/// Where the reserve values live inside the operational feed payload.
///
/// Each series key selects one reserve type under
/// `<root_pointer>/types/<series_key>/values`, and each category key one
/// reserve product under it, read from its `value` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveFeedMapping {
    pub root_pointer: String,
    pub series_keys: Vec<String>,
    pub category_keys: Vec<String>,
}

impl Default for ReserveFeedMapping {
    fn default() -> Self {
        Self {
            root_pointer: "/dto/operational/data/0".to_owned(),
            series_keys: vec!["ACTUAL".to_owned(), "RELIABILITY_REQUIREMENT".to_owned()],
            category_keys: vec![
                "SYNCHRONIZED_RESERVES".to_owned(),
                "PRIMARY_RESERVES".to_owned(),
            ],
        }
    }
}

impl ReserveFeedMapping {
    /// Reads every mapped value; any missing or non-numeric field fails the
    /// whole extraction with `FetchFailure`.
    pub fn extract(&self, payload: &Value) -> ChartResult<SeriesRefresh> {
        let series = self
            .series_keys
            .iter()
            .map(|series_key| {
                self.category_keys
                    .iter()
                    .map(|category_key| {
                        let pointer = format!(
                            "{}/types/{}/values/{}/value",
                            self.root_pointer,
                            escape_pointer_token(series_key),
                            escape_pointer_token(category_key)
                        );
                        let value = payload.pointer(&pointer).ok_or_else(|| {
                            ChartError::FetchFailure(format!("missing field `{pointer}`"))
                        })?;
                        parse_feed_number(value, &pointer)
                    })
                    .collect::<ChartResult<Vec<f64>>>()
            })
            .collect::<ChartResult<Vec<Vec<f64>>>>()?;
        Ok(SeriesRefresh::new(series))
    }
}

fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

fn parse_feed_number(value: &Value, pointer: &str) -> ChartResult<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ChartError::FetchFailure(format!(
            "field `{pointer}` is not a finite number: {value}"
        ))),
    }
}
