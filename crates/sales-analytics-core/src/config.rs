use std::path::{Path, PathBuf};

use crate::analytics::{ANALYTICS_POLICY_V1, AnalyticsPolicy};

pub const HOME_ENV_VAR: &str = "SALES_ANALYTICS_HOME";
pub const DEFAULT_INPUT_PATH: &str = "data/sales_data.txt";
pub const DEFAULT_ENRICHED_OUTPUT_PATH: &str = "data/enriched_sales_data.txt";
pub const DEFAULT_REPORT_OUTPUT_PATH: &str = "output/sales_report.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub enriched_output_path: PathBuf,
    pub report_output_path: PathBuf,
    pub region: Option<String>,
    pub policy: AnalyticsPolicy,
}

impl PipelineConfig {
    /// Default layout rooted at `base`.
    pub fn rooted_at(base: &Path) -> Self {
        Self {
            input_path: base.join(DEFAULT_INPUT_PATH),
            catalog_path: None,
            enriched_output_path: base.join(DEFAULT_ENRICHED_OUTPUT_PATH),
            report_output_path: base.join(DEFAULT_REPORT_OUTPUT_PATH),
            region: None,
            policy: ANALYTICS_POLICY_V1,
        }
    }
}

/// Base directory for default paths: explicit override, then
/// `SALES_ANALYTICS_HOME`, then the working directory.
pub fn resolve_base_dir(home_override: Option<&Path>) -> PathBuf {
    if let Some(path) = home_override {
        return path.to_path_buf();
    }
    match std::env::var_os(HOME_ENV_VAR) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::new(),
    }
}

/// Joins relative user-supplied paths onto `base`; absolute paths pass through.
pub fn resolve_against(base: &Path, candidate: &Path) -> PathBuf {
    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }
    base.join(candidate)
}
