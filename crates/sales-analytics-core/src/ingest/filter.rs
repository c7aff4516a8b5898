use serde::Serialize;

use crate::ingest::Transaction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSummary {
    pub filter_applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub records_before_filter: usize,
    pub records_after_filter: usize,
}

impl FilterSummary {
    fn unfiltered(total_records: usize) -> Self {
        Self {
            filter_applied: false,
            region: None,
            records_before_filter: total_records,
            records_after_filter: total_records,
        }
    }
}

/// Keeps only the records whose region matches `region` ignoring case. The
/// requested key is also trimmed; record regions are compared as stored.
pub fn filter_by_region(
    records: &[Transaction],
    region: Option<&str>,
) -> (Vec<Transaction>, FilterSummary) {
    if records.is_empty() {
        return (Vec::new(), FilterSummary::unfiltered(0));
    }

    let Some(requested) = region else {
        return (records.to_vec(), FilterSummary::unfiltered(records.len()));
    };

    let key = requested.trim().to_lowercase();
    let filtered = records
        .iter()
        .filter(|record| record.region.to_lowercase() == key)
        .cloned()
        .collect::<Vec<Transaction>>();

    let summary = FilterSummary {
        filter_applied: true,
        region: Some(key),
        records_before_filter: records.len(),
        records_after_filter: filtered.len(),
    };
    (filtered, summary)
}
