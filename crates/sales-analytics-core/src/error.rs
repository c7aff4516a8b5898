use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AnalyticsError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl AnalyticsError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `sales-analytics {cmd} --help` for usage."),
            None => "Run `sales-analytics --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    /// The enriched-data file or the report could not be created or written.
    pub fn destination_unwritable(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "destination_unwritable",
            &format!("Cannot write output to `{location}`: {detail}"),
            vec![
                format!("Grant write access to `{location}` or choose another output path."),
                "Rerun the command once the destination is writable.".to_string(),
            ],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn is_internal(&self) -> bool {
        self.code.starts_with("internal_") || self.code == "destination_unwritable"
    }
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::AnalyticsError;

    #[test]
    fn destination_error_carries_path_in_message_and_data() {
        let error = AnalyticsError::destination_unwritable(
            Path::new("/readonly/report.txt"),
            "permission denied",
        );
        assert_eq!(error.code, "destination_unwritable");
        assert!(error.message.contains("/readonly/report.txt"));
        assert!(error.message.contains("permission denied"));
        assert!(error.is_internal());
        let path = error
            .data
            .as_ref()
            .and_then(|data| data.get("path"))
            .and_then(|value| value.as_str());
        assert_eq!(path, Some("/readonly/report.txt"));
    }

    #[test]
    fn invalid_argument_points_at_command_help() {
        let error = AnalyticsError::invalid_argument_for_command("bad top", Some("analyze"));
        assert_eq!(error.code, "invalid_argument");
        assert!(!error.is_internal());
        assert_eq!(
            error.recovery_steps,
            vec!["Run `sales-analytics analyze --help` for usage.".to_string()]
        );
    }
}
