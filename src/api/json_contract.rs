use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::interaction::StackHighlight;

pub const STACK_HIGHLIGHT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackHighlightJsonContractV1 {
    pub schema_version: u32,
    pub highlight: StackHighlight,
}

impl StackHighlight {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize highlight json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = StackHighlightJsonContractV1 {
            schema_version: STACK_HIGHLIGHT_JSON_SCHEMA_V1,
            highlight: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize highlight contract v1: {e}"))
        })
    }

    /// Accepts both the bare highlight and the v1 contract envelope.
    ///
    /// Index nesting is re-established on the parsed value.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(highlight) = serde_json::from_str::<StackHighlight>(input) {
            return Ok(highlight.normalized());
        }
        let payload: StackHighlightJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse highlight json payload: {e}"))
        })?;
        if payload.schema_version != STACK_HIGHLIGHT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported highlight schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.highlight.normalized())
    }
}
