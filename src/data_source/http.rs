use std::time::Duration;

use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::DataSource;

/// Blocking JSON GET against a fixed endpoint.
///
/// Call it off the UI thread and feed the result back through
/// `ChartHost::complete_refresh`.
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    url: String,
    timeout: Duration,
}

impl HttpDataSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(12),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DataSource for HttpDataSource {
    fn fetch(&self) -> ChartResult<serde_json::Value> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ChartError::FetchFailure(format!("http client error: {e}")))?;
        debug!(url = %self.url, "fetching chart data");
        client
            .get(&self.url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| ChartError::FetchFailure(format!("request error: {e}")))?
            .json()
            .map_err(|e| ChartError::FetchFailure(format!("decode error: {e}")))
    }
}
