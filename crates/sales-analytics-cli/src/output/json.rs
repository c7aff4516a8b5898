use std::io;

use sales_analytics_core::{AnalyticsError, SuccessEnvelope, error_contract};
use serde::Serialize;
use serde_json::json;

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let value = json!({
        "ok": success.ok,
        "version": success.version,
        "command": success.command,
        "data": success.data,
    });
    serialize_json_pretty(&value)
}

pub fn render_error_json(error: &AnalyticsError) -> io::Result<String> {
    let payload = json!({
        "error": error_contract(error),
    });
    serialize_json_pretty(&payload)
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}
