use serde::{Deserialize, Serialize};

use crate::core::ChartOptionDocument;
use crate::error::{ChartError, ChartResult};

pub const CHART_DOCUMENT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocumentJsonContractV1 {
    pub schema_version: u32,
    pub document: ChartOptionDocument,
}

impl ChartOptionDocument {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart document: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartDocumentJsonContractV1 {
            schema_version: CHART_DOCUMENT_JSON_SCHEMA_V1,
            document: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart document contract v1: {e}"))
        })
    }

    /// Accepts either a bare document or a versioned contract envelope.
    ///
    /// Only an object carrying both `schema_version` and `document` is read as
    /// an envelope; a bare document may pass `schema_version` through `extra`.
    ///
    /// The parsed document is validated before it is returned.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart document json: {e}"))
        })?;

        let is_envelope = value.get("schema_version").is_some() && value.get("document").is_some();
        let document = if is_envelope {
            let payload: ChartDocumentJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    ChartError::InvalidData(format!(
                        "failed to parse chart document contract: {e}"
                    ))
                })?;
            if payload.schema_version != CHART_DOCUMENT_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported chart document schema version: {}",
                    payload.schema_version
                )));
            }
            payload.document
        } else {
            serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse chart document: {e}"))
            })?
        };

        document.validate()?;
        Ok(document)
    }
}
