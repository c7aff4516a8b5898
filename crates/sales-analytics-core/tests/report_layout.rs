use chrono::{NaiveDate, NaiveDateTime};
use sales_analytics_core::analytics::ANALYTICS_POLICY_V1;
use sales_analytics_core::enrichment::{ProductCatalog, enrich_transactions};
use sales_analytics_core::ingest::parse::parse_and_clean;
use sales_analytics_core::report::render_report;

fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .and_then(|date| date.and_hms_opt(9, 5, 0))
        .unwrap_or_default()
}

const EXPECTED_REPORT: &str = "============================================
SALES ANALYTICS REPORT
Generated: 2025-01-15 09:05:00
Records Processed: 2
============================================

OVERALL SUMMARY
--------------------------------------------
Total Revenue: ₹31.00
Total Transactions: 2
Average Order Value: ₹15.50
Date Range: 2024-01-01 to 2024-01-01

REGION-WISE PERFORMANCE
--------------------------------------------
Region | Total Sales | % of Total | Transactions
South | ₹20.00 | 64.52% | 1
North | ₹11.00 | 35.48% | 1

TOP 5 PRODUCTS
--------------------------------------------
Rank | Product | Quantity | Revenue
1 | USB Cable | 2 | ₹11.00
2 | Wireless Mouse | 1 | ₹20.00

TOP 5 CUSTOMERS
--------------------------------------------
Rank | CustomerID | Total Spent | Orders
1 | C2 | ₹20.00 | 1
2 | C1 | ₹11.00 | 1

DAILY SALES TREND
--------------------------------------------
Date | Revenue | Transactions | Customers
2024-01-01 | ₹31.00 | 2 | 2

PRODUCT PERFORMANCE ANALYSIS
--------------------------------------------
Best Selling Day: 2024-01-01 (₹31.00 in 2 transactions)
Low Performing Products:
Wireless Mouse - Qty: 1, Revenue: ₹20.00
USB Cable - Qty: 2, Revenue: ₹11.00

API ENRICHMENT SUMMARY
--------------------------------------------
Products Enriched: 2/2
Success Rate: 100.0%
All products were enriched successfully.
";

#[test]
fn report_matches_fixed_layout() {
    let outcome = parse_and_clean(&[
        "T1|2024-01-01|P1|USB Cable|2|5.50|C1|North",
        "T2|2024-01-01|P2|Wireless Mouse|1|20.00|C2|South",
        "BADLINE",
    ]);
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.invalid_count, 1);

    let enriched = enrich_transactions(&outcome.records, &ProductCatalog::default());
    let document = render_report(
        &outcome.records,
        &enriched,
        generated_at(),
        ANALYTICS_POLICY_V1,
    );
    assert_eq!(document, EXPECTED_REPORT);
}

#[test]
fn report_lists_unmatched_products_once_and_large_amounts_grouped() {
    let outcome = parse_and_clean(&[
        "T1|2024-02-01|P1|Desk Lamp|1|1,250,000.00|C1|North",
        "T2|2024-02-02|P2|Desk Lamp|1|10.00|C1|North",
        "T3|2024-02-02|P3|Laptop|12|100.00|C2|North",
    ]);
    let enriched = enrich_transactions(&outcome.records, &ProductCatalog::default());
    let document = render_report(
        &outcome.records,
        &enriched,
        generated_at(),
        ANALYTICS_POLICY_V1,
    );

    assert!(document.contains("Total Revenue: ₹1,251,210.00\n"));
    assert!(document.contains("Products Enriched: 1/3\n"));
    assert!(document.contains("Success Rate: 33.33%\n"));
    assert!(document.ends_with("Products not enriched:\n- Desk Lamp\n"));
    assert!(document.contains("Low Performing Products:\nDesk Lamp - Qty: 2, Revenue: ₹1,250,010.00\n"));
    assert!(!document.contains("Laptop - Qty"));
}
