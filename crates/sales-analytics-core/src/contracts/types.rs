use std::collections::BTreeMap;

use serde::Serialize;

use crate::analytics::date::DateSpan;
use crate::analytics::{CustomerSummary, DailySummary, PeakDay, ProductRanking, RegionSummary};
use crate::enrichment::EnrichmentStats;
use crate::ingest::filter::FilterSummary;
use crate::ingest::parse::RejectReason;

#[derive(Debug, Clone, Serialize)]
pub struct RejectionCount {
    pub reason: String,
    pub count: usize,
}

pub(crate) fn rejection_counts(rejections: &BTreeMap<RejectReason, usize>) -> Vec<RejectionCount> {
    rejections
        .iter()
        .map(|(reason, count)| RejectionCount {
            reason: reason.as_str().to_string(),
            count: *count,
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct IngestSummary {
    pub input_path: String,
    pub lines_read: usize,
    pub records_parsed: usize,
    pub invalid_records: usize,
    pub rejections: Vec<RejectionCount>,
    pub filter: FilterSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunData {
    pub ingest: IngestSummary,
    pub records_analyzed: usize,
    pub total_revenue: f64,
    pub catalog_products: usize,
    pub enrichment: EnrichmentStats,
    pub enriched_output_path: String,
    pub report_output_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeData {
    pub ingest: IngestSummary,
    pub total_revenue: f64,
    pub date_span: Option<DateSpan>,
    pub non_iso_dates: usize,
    pub regions: Vec<RegionSummary>,
    pub top_products: Vec<ProductRanking>,
    pub customers: Vec<CustomerSummary>,
    pub daily_trend: Vec<DailySummary>,
    pub peak_day: PeakDay,
    pub low_performers: Vec<ProductRanking>,
}
