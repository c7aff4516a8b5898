use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{info, warn};

use crate::AnalyticsResult;
use crate::analytics::calculate_total_revenue;
use crate::commands::common::ingest;
use crate::config::{PipelineConfig, resolve_against, resolve_base_dir};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::RunData;
use crate::enrichment::{
    CatalogSource, EmptyCatalog, JsonCatalogFile, build_product_mapping, enrich_transactions,
    enrichment_stats,
};
use crate::export::write_enriched_data;
use crate::report::write_report;

#[derive(Debug, Default)]
pub struct RunOptions<'a> {
    pub input: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub region: Option<String>,
    pub enriched_output: Option<PathBuf>,
    pub report_output: Option<PathBuf>,
    pub home_override: Option<&'a Path>,
    pub generated_at: Option<NaiveDateTime>,
}

pub fn run(options: RunOptions<'_>) -> AnalyticsResult<SuccessEnvelope> {
    let config = config_from_options(&options);
    let generated_at = options
        .generated_at
        .unwrap_or_else(|| Local::now().naive_local());
    let data = execute(&config, generated_at)?;
    success("run", data)
}

fn config_from_options(options: &RunOptions<'_>) -> PipelineConfig {
    let base = resolve_base_dir(options.home_override);
    let mut config = PipelineConfig::rooted_at(&base);
    if let Some(path) = &options.input {
        config.input_path = resolve_against(&base, path);
    }
    if let Some(path) = &options.catalog {
        config.catalog_path = Some(resolve_against(&base, path));
    }
    if let Some(path) = &options.enriched_output {
        config.enriched_output_path = resolve_against(&base, path);
    }
    if let Some(path) = &options.report_output {
        config.report_output_path = resolve_against(&base, path);
    }
    config.region = options.region.clone();
    config
}

/// Runs the whole pipeline for `config` and writes both output files.
pub fn execute(config: &PipelineConfig, generated_at: NaiveDateTime) -> AnalyticsResult<RunData> {
    let ingested = ingest(&config.input_path, config.region.as_deref());
    let records = ingested.records;
    let total_revenue = calculate_total_revenue(&records);

    let products = match &config.catalog_path {
        Some(path) => JsonCatalogFile { path: path.clone() }.fetch_products(),
        None => EmptyCatalog.fetch_products(),
    };
    let catalog = build_product_mapping(products);
    info!(products = catalog.len(), "loaded product catalog");
    if config.catalog_path.is_some() && catalog.is_empty() {
        warn!("product catalog has no titled products");
    }

    let enriched = enrich_transactions(&records, &catalog);
    let stats = enrichment_stats(&enriched);
    info!(
        matched = stats.matched,
        total = stats.total,
        "enriched sales records"
    );

    write_enriched_data(&config.enriched_output_path, &enriched)?;
    write_report(
        &config.report_output_path,
        &records,
        &enriched,
        generated_at,
        config.policy,
    )?;

    Ok(RunData {
        ingest: ingested.summary,
        records_analyzed: records.len(),
        total_revenue,
        catalog_products: catalog.len(),
        enrichment: stats,
        enriched_output_path: config.enriched_output_path.display().to_string(),
        report_output_path: config.report_output_path.display().to_string(),
    })
}
