use std::io;

use sales_analytics_core::report::format::{format_currency, format_decimal};
use serde_json::Value;

use super::format::{self, get_f64, get_str, get_u64, rows_of};

pub fn render_run(data: &Value) -> io::Result<String> {
    let ingest = data
        .get("ingest")
        .ok_or_else(|| io::Error::other("run output requires ingest summary"))?;
    let enrichment = data
        .get("enrichment")
        .ok_or_else(|| io::Error::other("run output requires enrichment summary"))?;

    let mut lines = vec![
        "Pipeline completed successfully.".to_string(),
        String::new(),
        "Summary:".to_string(),
    ];

    let entries = vec![
        ("Input:", get_str(ingest, "input_path").to_string()),
        ("Lines read:", get_u64(ingest, "lines_read").to_string()),
        ("Records parsed:", get_u64(ingest, "records_parsed").to_string()),
        ("Invalid records:", get_u64(ingest, "invalid_records").to_string()),
        ("Region filter:", describe_filter(ingest.get("filter"))),
        ("Records analyzed:", get_u64(data, "records_analyzed").to_string()),
        (
            "Total revenue:",
            format_currency(get_f64(data, "total_revenue")),
        ),
        ("Catalog products:", get_u64(data, "catalog_products").to_string()),
        (
            "Enriched:",
            format!(
                "{}/{} ({}%)",
                get_u64(enrichment, "matched"),
                get_u64(enrichment, "total"),
                format_decimal(get_f64(enrichment, "success_rate"))
            ),
        ),
    ];
    lines.extend(format::key_value_rows(&entries, 2));

    let rejections = rows_of(ingest, "rejections");
    if !rejections.is_empty() {
        lines.push(String::new());
        lines.push("Skipped lines by reason:".to_string());
        let entries = rejections
            .iter()
            .map(|row| (get_str(row, "reason"), get_u64(row, "count").to_string()))
            .collect::<Vec<(&str, String)>>();
        lines.extend(format::key_value_rows(&entries, 2));
    }

    lines.push(String::new());
    lines.push("Outputs:".to_string());
    lines.extend(format::key_value_rows(
        &[
            ("Enriched data:", get_str(data, "enriched_output_path").to_string()),
            ("Report:", get_str(data, "report_output_path").to_string()),
        ],
        2,
    ));

    Ok(lines.join("\n"))
}

fn describe_filter(filter: Option<&Value>) -> String {
    let Some(filter) = filter else {
        return "none".to_string();
    };
    let applied = filter
        .get("filter_applied")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !applied {
        return "none".to_string();
    }
    format!(
        "{} ({} of {} records kept)",
        get_str(filter, "region"),
        get_u64(filter, "records_after_filter"),
        get_u64(filter, "records_before_filter")
    )
}
