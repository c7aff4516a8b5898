use std::io;

use sales_analytics_core::report::format::{format_currency, format_decimal};
use serde_json::Value;

use super::format::{self, Align, Column, get_f64, get_i64, get_str, get_u64, rows_of};

pub fn render_analyze(data: &Value) -> io::Result<String> {
    let ingest = data
        .get("ingest")
        .ok_or_else(|| io::Error::other("analyze output requires ingest summary"))?;

    let mut lines = vec!["Sales analysis".to_string(), String::new(), "Summary:".to_string()];
    let records = records_analyzed(ingest);
    let entries = vec![
        ("Records analyzed:", records.to_string()),
        ("Invalid records:", get_u64(ingest, "invalid_records").to_string()),
        ("Total revenue:", format_currency(get_f64(data, "total_revenue"))),
        ("Date range:", describe_date_span(data.get("date_span"))),
        ("Best selling day:", describe_peak(data.get("peak_day"))),
    ];
    lines.extend(format::key_value_rows(&entries, 2));

    let non_iso = get_u64(data, "non_iso_dates");
    if non_iso > 0 {
        lines.push(String::new());
        lines.push(format!(
            "Warning: {non_iso} records use non-ISO dates; date ordering may be unreliable."
        ));
    }

    push_section(&mut lines, "Regions:", &region_table(rows_of(data, "regions")));
    push_section(
        &mut lines,
        "Top products:",
        &product_table(rows_of(data, "top_products")),
    );
    push_section(
        &mut lines,
        "Customers:",
        &customer_table(rows_of(data, "customers")),
    );
    push_section(
        &mut lines,
        "Daily trend:",
        &daily_table(rows_of(data, "daily_trend")),
    );
    push_section(
        &mut lines,
        "Low performing products:",
        &product_table(rows_of(data, "low_performers")),
    );

    Ok(lines.join("\n"))
}

fn records_analyzed(ingest: &Value) -> u64 {
    ingest
        .get("filter")
        .map(|filter| get_u64(filter, "records_after_filter"))
        .unwrap_or(0)
}

fn push_section(lines: &mut Vec<String>, title: &str, table: &[String]) {
    lines.push(String::new());
    lines.push(title.to_string());
    if table.is_empty() {
        lines.push("  None.".to_string());
    } else {
        lines.extend(table.iter().cloned());
    }
}

fn describe_date_span(span: Option<&Value>) -> String {
    match span {
        Some(value) if !value.is_null() => {
            format!("{} to {}", get_str(value, "start"), get_str(value, "end"))
        }
        _ => "N/A".to_string(),
    }
}

fn describe_peak(peak: Option<&Value>) -> String {
    let Some(peak) = peak else {
        return "N/A".to_string();
    };
    match peak.get("date").and_then(Value::as_str) {
        Some(date) => format!(
            "{date} ({} in {} transactions)",
            format_currency(get_f64(peak, "revenue")),
            get_u64(peak, "transaction_count")
        ),
        None => "N/A".to_string(),
    }
}

fn region_table(rows: &[Value]) -> Vec<String> {
    if rows.is_empty() {
        return Vec::new();
    }
    let columns = [
        Column {
            name: "Region",
            align: Align::Left,
        },
        Column {
            name: "Total Sales",
            align: Align::Right,
        },
        Column {
            name: "Share",
            align: Align::Right,
        },
        Column {
            name: "Transactions",
            align: Align::Right,
        },
    ];
    let cells = rows
        .iter()
        .map(|row| {
            vec![
                get_str(row, "region").to_string(),
                format_currency(get_f64(row, "total_sales")),
                format!("{}%", format_decimal(get_f64(row, "percentage"))),
                get_u64(row, "transaction_count").to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    format::render_table(&columns, &cells)
}

fn product_table(rows: &[Value]) -> Vec<String> {
    if rows.is_empty() {
        return Vec::new();
    }
    let columns = [
        Column {
            name: "Product",
            align: Align::Left,
        },
        Column {
            name: "Quantity",
            align: Align::Right,
        },
        Column {
            name: "Revenue",
            align: Align::Right,
        },
    ];
    let cells = rows
        .iter()
        .map(|row| {
            vec![
                get_str(row, "name").to_string(),
                get_i64(row, "total_quantity").to_string(),
                format_currency(get_f64(row, "total_revenue")),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    format::render_table(&columns, &cells)
}

fn customer_table(rows: &[Value]) -> Vec<String> {
    if rows.is_empty() {
        return Vec::new();
    }
    let columns = [
        Column {
            name: "Customer",
            align: Align::Left,
        },
        Column {
            name: "Total Spent",
            align: Align::Right,
        },
        Column {
            name: "Orders",
            align: Align::Right,
        },
        Column {
            name: "Avg Order",
            align: Align::Right,
        },
        Column {
            name: "Products",
            align: Align::Right,
        },
    ];
    let cells = rows
        .iter()
        .map(|row| {
            vec![
                get_str(row, "customer_id").to_string(),
                format_currency(get_f64(row, "total_spent")),
                get_u64(row, "purchase_count").to_string(),
                format_currency(get_f64(row, "avg_order_value")),
                rows_of(row, "products_bought").len().to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    format::render_table(&columns, &cells)
}

fn daily_table(rows: &[Value]) -> Vec<String> {
    if rows.is_empty() {
        return Vec::new();
    }
    let columns = [
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Revenue",
            align: Align::Right,
        },
        Column {
            name: "Transactions",
            align: Align::Right,
        },
        Column {
            name: "Customers",
            align: Align::Right,
        },
    ];
    let cells = rows
        .iter()
        .map(|row| {
            vec![
                get_str(row, "date").to_string(),
                format_currency(get_f64(row, "revenue")),
                get_u64(row, "transaction_count").to_string(),
                get_u64(row, "unique_customers").to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    format::render_table(&columns, &cells)
}
