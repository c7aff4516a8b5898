use std::path::Path;

use tracing::info;

use crate::AnalyticsResult;
use crate::destination::{ensure_parent_directory, map_write_error};
use crate::enrichment::EnrichedTransaction;
use crate::report::format::format_decimal;

pub const ENRICHED_HEADER: [&str; 12] = [
    "TransactionID",
    "Date",
    "ProductID",
    "ProductName",
    "Quantity",
    "UnitPrice",
    "CustomerID",
    "Region",
    "API_Category",
    "API_Brand",
    "API_Rating",
    "API_Match",
];

/// Writes the pipe-delimited enriched-data file: one header line, then one
/// row per record in input order.
pub fn write_enriched_data(path: &Path, enriched: &[EnrichedTransaction]) -> AnalyticsResult<()> {
    ensure_parent_directory(path)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'|')
        .quote_style(csv::QuoteStyle::Never)
        .from_path(path)
        .map_err(|error| map_write_error(path, &error))?;

    writer
        .write_record(ENRICHED_HEADER)
        .map_err(|error| map_write_error(path, &error))?;
    for row in enriched {
        writer
            .write_record(enriched_fields(row))
            .map_err(|error| map_write_error(path, &error))?;
    }
    writer.flush().map_err(|error| map_write_error(path, &error))?;

    info!(path = %path.display(), rows = enriched.len(), "wrote enriched sales data");
    Ok(())
}

fn enriched_fields(row: &EnrichedTransaction) -> [String; 12] {
    let transaction = &row.transaction;
    [
        transaction.transaction_id.clone(),
        transaction.date.clone(),
        transaction.product_id.clone(),
        transaction.product_name.clone(),
        transaction.quantity.to_string(),
        format_decimal(transaction.unit_price),
        transaction.customer_id.clone(),
        transaction.region.clone(),
        row.api_category.clone(),
        row.api_brand.clone(),
        format_decimal(row.api_rating),
        format_flag(row.api_match).to_string(),
    ]
}

fn format_flag(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
