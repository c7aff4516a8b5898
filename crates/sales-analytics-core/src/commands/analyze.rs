use std::path::{Path, PathBuf};

use crate::analytics::date::{count_non_iso_dates, date_span};
use crate::analytics::{
    AnalyticsPolicy, calculate_total_revenue, customer_analysis, daily_sales_trend,
    low_performing_products, peak_of_trend, region_wise_sales, top_selling_products,
};
use crate::commands::common::ingest;
use crate::config::{PipelineConfig, resolve_against, resolve_base_dir};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::AnalyzeData;
use crate::{AnalyticsError, AnalyticsResult};

#[derive(Debug, Default)]
pub struct AnalyzeOptions<'a> {
    pub input: Option<PathBuf>,
    pub region: Option<String>,
    pub top_n: Option<usize>,
    pub low_performer_threshold: Option<i64>,
    pub home_override: Option<&'a Path>,
}

/// Computes every analytic for the input without writing any file.
pub fn run(options: AnalyzeOptions<'_>) -> AnalyticsResult<SuccessEnvelope> {
    let base = resolve_base_dir(options.home_override);
    let mut config = PipelineConfig::rooted_at(&base);
    if let Some(path) = &options.input {
        config.input_path = resolve_against(&base, path);
    }
    config.region = options.region;
    config.policy = policy_from_options(
        config.policy,
        options.top_n,
        options.low_performer_threshold,
    )?;

    let data = execute(&config);
    success("analyze", data)
}

fn policy_from_options(
    mut policy: AnalyticsPolicy,
    top_n: Option<usize>,
    threshold: Option<i64>,
) -> AnalyticsResult<AnalyticsPolicy> {
    if let Some(value) = top_n {
        if value == 0 {
            return Err(AnalyticsError::invalid_argument_for_command(
                "`--top` must be at least 1.",
                Some("analyze"),
            ));
        }
        policy.top_n = value;
    }
    if let Some(value) = threshold {
        policy.low_performer_threshold = value;
    }
    Ok(policy)
}

pub fn execute(config: &PipelineConfig) -> AnalyzeData {
    let ingested = ingest(&config.input_path, config.region.as_deref());
    let records = ingested.records;
    let daily_trend = daily_sales_trend(&records);
    let peak_day = peak_of_trend(&daily_trend);

    AnalyzeData {
        ingest: ingested.summary,
        total_revenue: calculate_total_revenue(&records),
        date_span: date_span(&records),
        non_iso_dates: count_non_iso_dates(&records),
        regions: region_wise_sales(&records),
        top_products: top_selling_products(&records, config.policy.top_n),
        customers: customer_analysis(&records),
        daily_trend,
        peak_day,
        low_performers: low_performing_products(&records, config.policy.low_performer_threshold),
    }
}
