use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The native surface is not attached yet; mount must be retried on attach.
    #[error("render surface is not attached")]
    SurfaceUnavailable,

    #[error("schema mismatch: {reason}")]
    SchemaMismatch { reason: String },

    #[error("data fetch failed: {0}")]
    FetchFailure(String),
}

impl ChartError {
    pub(crate) fn schema_mismatch(reason: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            reason: reason.into(),
        }
    }
}
