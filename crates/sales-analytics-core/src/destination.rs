use std::fs;
use std::path::Path;

use crate::{AnalyticsError, AnalyticsResult};

/// Creates the parent directory of an output file when it is missing.
pub(crate) fn ensure_parent_directory(path: &Path) -> AnalyticsResult<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|error| map_write_error(path, &error))
}

pub(crate) fn map_write_error(path: &Path, error: &dyn std::fmt::Display) -> AnalyticsError {
    AnalyticsError::destination_unwritable(path, &error.to_string())
}
