use serde::Serialize;
use serde_json::Value;

use crate::API_VERSION;
use crate::error::{AnalyticsError, AnalyticsResult};

#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope {
    pub ok: bool,
    pub command: String,
    pub version: String,
    pub data: Value,
}

/// The user-facing part of an [`AnalyticsError`]; `data` stays internal.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorContract {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
}

pub fn success<T>(command: &str, data: T) -> AnalyticsResult<SuccessEnvelope>
where
    T: Serialize,
{
    let json_data = serde_json::to_value(data)
        .map_err(|err| AnalyticsError::internal_serialization(&err.to_string()))?;
    Ok(SuccessEnvelope {
        ok: true,
        command: command.to_string(),
        version: API_VERSION.to_string(),
        data: json_data,
    })
}

pub fn error_contract(error: &AnalyticsError) -> ErrorContract {
    ErrorContract {
        code: error.code.clone(),
        message: error.message.clone(),
        recovery_steps: error.recovery_steps.clone(),
    }
}
