use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::AnalyticsResult;
use crate::analytics::date::{count_non_iso_dates, date_span};
use crate::analytics::{
    AnalyticsPolicy, calculate_total_revenue, customer_analysis, daily_sales_trend,
    low_performing_products, peak_of_trend, region_wise_sales, top_selling_products,
};
use crate::destination::{ensure_parent_directory, map_write_error};
use crate::enrichment::{EnrichedTransaction, enrichment_stats};
use crate::ingest::Transaction;
use crate::report::format::{format_currency, format_decimal, join_fields};

const BANNER: &str = "============================================";
const RULE: &str = "--------------------------------------------";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders the full report. Every section is always present; empty analytics
/// render an explicit fallback line instead of an empty table.
pub fn render_report(
    transactions: &[Transaction],
    enriched: &[EnrichedTransaction],
    generated_at: NaiveDateTime,
    policy: AnalyticsPolicy,
) -> String {
    let mut lines = Vec::new();

    lines.push(BANNER.to_string());
    lines.push("SALES ANALYTICS REPORT".to_string());
    lines.push(format!("Generated: {}", generated_at.format(TIMESTAMP_FORMAT)));
    lines.push(format!("Records Processed: {}", transactions.len()));
    lines.push(BANNER.to_string());
    lines.push(String::new());

    push_overall_summary(&mut lines, transactions);
    push_region_section(&mut lines, transactions);
    push_top_products_section(&mut lines, transactions, policy);
    push_top_customers_section(&mut lines, transactions, policy);
    push_daily_section(&mut lines, transactions);
    push_product_performance_section(&mut lines, transactions, policy);
    push_enrichment_section(&mut lines, enriched);

    let mut document = lines.join("\n");
    document.push('\n');
    document
}

/// Renders the report and writes it to `path`, creating parent directories.
pub fn write_report(
    path: &Path,
    transactions: &[Transaction],
    enriched: &[EnrichedTransaction],
    generated_at: NaiveDateTime,
    policy: AnalyticsPolicy,
) -> AnalyticsResult<()> {
    let document = render_report(transactions, enriched, generated_at, policy);
    ensure_parent_directory(path)?;

    let file = File::create(path).map_err(|error| map_write_error(path, &error))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(document.as_bytes())
        .map_err(|error| map_write_error(path, &error))?;
    writer.flush().map_err(|error| map_write_error(path, &error))?;

    info!(path = %path.display(), bytes = document.len(), "wrote sales report");
    Ok(())
}

fn push_heading(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_string());
    lines.push(RULE.to_string());
}

fn push_overall_summary(lines: &mut Vec<String>, transactions: &[Transaction]) {
    let total_revenue = calculate_total_revenue(transactions);
    let average_order_value = if transactions.is_empty() {
        0.0
    } else {
        total_revenue / transactions.len() as f64
    };

    push_heading(lines, "OVERALL SUMMARY");
    lines.push(format!("Total Revenue: {}", format_currency(total_revenue)));
    lines.push(format!("Total Transactions: {}", transactions.len()));
    lines.push(format!(
        "Average Order Value: {}",
        format_currency(average_order_value)
    ));
    match date_span(transactions) {
        Some(span) => lines.push(format!("Date Range: {} to {}", span.start, span.end)),
        None => lines.push("Date Range: N/A".to_string()),
    }

    let non_iso = count_non_iso_dates(transactions);
    if non_iso > 0 {
        warn!(records = non_iso, "records use non-ISO dates; date ordering may be unreliable");
        lines.push(format!(
            "Warning: {non_iso} records use non-ISO dates; date ordering may be unreliable."
        ));
    }
    lines.push(String::new());
}

fn push_region_section(lines: &mut Vec<String>, transactions: &[Transaction]) {
    push_heading(lines, "REGION-WISE PERFORMANCE");
    let regions = region_wise_sales(transactions);
    if regions.is_empty() {
        lines.push("No regional sales recorded.".to_string());
    } else {
        lines.push("Region | Total Sales | % of Total | Transactions".to_string());
        for region in regions {
            lines.push(join_fields(&[
                region.region,
                format_currency(region.total_sales),
                format!("{}%", format_decimal(region.percentage)),
                region.transaction_count.to_string(),
            ]));
        }
    }
    lines.push(String::new());
}

fn push_top_products_section(
    lines: &mut Vec<String>,
    transactions: &[Transaction],
    policy: AnalyticsPolicy,
) {
    push_heading(lines, &format!("TOP {} PRODUCTS", policy.top_n));
    let products = top_selling_products(transactions, policy.top_n);
    if products.is_empty() {
        lines.push("No products sold.".to_string());
    } else {
        lines.push("Rank | Product | Quantity | Revenue".to_string());
        for (index, product) in products.into_iter().enumerate() {
            lines.push(join_fields(&[
                (index + 1).to_string(),
                product.name,
                product.total_quantity.to_string(),
                format_currency(product.total_revenue),
            ]));
        }
    }
    lines.push(String::new());
}

fn push_top_customers_section(
    lines: &mut Vec<String>,
    transactions: &[Transaction],
    policy: AnalyticsPolicy,
) {
    push_heading(lines, &format!("TOP {} CUSTOMERS", policy.top_customers));
    let customers = customer_analysis(transactions);
    if customers.is_empty() {
        lines.push("No customer purchases recorded.".to_string());
    } else {
        lines.push("Rank | CustomerID | Total Spent | Orders".to_string());
        for (index, customer) in customers
            .into_iter()
            .take(policy.top_customers)
            .enumerate()
        {
            lines.push(join_fields(&[
                (index + 1).to_string(),
                customer.customer_id,
                format_currency(customer.total_spent),
                customer.purchase_count.to_string(),
            ]));
        }
    }
    lines.push(String::new());
}

fn push_daily_section(lines: &mut Vec<String>, transactions: &[Transaction]) {
    push_heading(lines, "DAILY SALES TREND");
    let trend = daily_sales_trend(transactions);
    if trend.is_empty() {
        lines.push("No daily sales recorded.".to_string());
    } else {
        lines.push("Date | Revenue | Transactions | Customers".to_string());
        for day in trend {
            lines.push(join_fields(&[
                day.date,
                format_currency(day.revenue),
                day.transaction_count.to_string(),
                day.unique_customers.to_string(),
            ]));
        }
    }
    lines.push(String::new());
}

fn push_product_performance_section(
    lines: &mut Vec<String>,
    transactions: &[Transaction],
    policy: AnalyticsPolicy,
) {
    push_heading(lines, "PRODUCT PERFORMANCE ANALYSIS");

    let peak = peak_of_trend(&daily_sales_trend(transactions));
    match peak.date {
        Some(date) => lines.push(format!(
            "Best Selling Day: {date} ({} in {} transactions)",
            format_currency(peak.revenue),
            peak.transaction_count
        )),
        None => lines.push("Best Selling Day: N/A (no sales recorded)".to_string()),
    }

    let low = low_performing_products(transactions, policy.low_performer_threshold);
    if low.is_empty() {
        lines.push("No low performing products found.".to_string());
    } else {
        lines.push("Low Performing Products:".to_string());
        for product in low {
            lines.push(format!(
                "{} - Qty: {}, Revenue: {}",
                product.name,
                product.total_quantity,
                format_currency(product.total_revenue)
            ));
        }
    }
    lines.push(String::new());
}

fn push_enrichment_section(lines: &mut Vec<String>, enriched: &[EnrichedTransaction]) {
    push_heading(lines, "API ENRICHMENT SUMMARY");

    let stats = enrichment_stats(enriched);
    lines.push(format!("Products Enriched: {}/{}", stats.matched, stats.total));
    lines.push(format!("Success Rate: {}%", format_decimal(stats.success_rate)));

    if stats.unmatched_products.is_empty() {
        lines.push("All products were enriched successfully.".to_string());
    } else {
        lines.push("Products not enriched:".to_string());
        for name in stats.unmatched_products {
            lines.push(format!("- {name}"));
        }
    }
}
