use std::path::Path;

use tracing::info;

use crate::contracts::types::{IngestSummary, rejection_counts};
use crate::ingest::Transaction;
use crate::ingest::filter::filter_by_region;
use crate::ingest::parse::parse_and_clean;
use crate::ingest::source::read_sales_lines;

pub(crate) struct IngestedRecords {
    pub(crate) records: Vec<Transaction>,
    pub(crate) summary: IngestSummary,
}

/// Read, clean and optionally region-filter the sales file.
pub(crate) fn ingest(input_path: &Path, region: Option<&str>) -> IngestedRecords {
    let lines = read_sales_lines(input_path);
    info!(path = %input_path.display(), lines = lines.len(), "read sales data");

    let outcome = parse_and_clean(&lines);
    info!(
        parsed = outcome.records.len(),
        invalid = outcome.invalid_count,
        "parsed and cleaned sales records"
    );

    let (records, filter) = filter_by_region(&outcome.records, region);
    info!(
        filter_applied = filter.filter_applied,
        records = records.len(),
        "applied region filter"
    );

    IngestedRecords {
        summary: IngestSummary {
            input_path: input_path.display().to_string(),
            lines_read: lines.len(),
            records_parsed: outcome.records.len(),
            invalid_records: outcome.invalid_count,
            rejections: rejection_counts(&outcome.rejections),
            filter,
        },
        records,
    }
}
