use proptest::prelude::*;
use sales_analytics_core::analytics::{
    calculate_total_revenue, daily_sales_trend, find_peak_sales_day, low_performing_products,
    region_wise_sales, top_selling_products,
};
use sales_analytics_core::enrichment::rules::match_product;
use sales_analytics_core::enrichment::{ProductCatalog, enrich_transactions};
use sales_analytics_core::ingest::Transaction;
use sales_analytics_core::ingest::parse::parse_and_clean;

const PRODUCT_NAMES: [&str; 10] = [
    "USB Cable",
    "Wireless Mouse",
    "Phone Charger",
    "4K Monitor",
    "HD Webcam",
    "Mechanical Keyboard",
    "Noise Cancelling Headphones",
    "External Hard Drive",
    "Desk Lamp",
    "Office Chair",
];

const KEYWORDS: [&str; 11] = [
    "usb",
    "cable",
    "mouse",
    "charger",
    "monitor",
    "webcam",
    "keyboard",
    "headphone",
    "external hard drive",
    "hard drive",
    "laptop",
];

fn valid_line() -> impl Strategy<Value = String> {
    (
        1_u32..999,
        1_u32..20,
        prop::sample::select(PRODUCT_NAMES.to_vec()),
        1_i64..40,
        1_u32..500_000,
        1_u32..8,
        prop::sample::select(vec!["North", "South", "East", "West"]),
    )
        .prop_map(|(id, day, name, quantity, cents, customer, region)| {
            format!(
                "T{id:03}|2024-03-{day:02}|P{id:03}|{name}|{quantity}|{}.{:02}|C{customer:03}|{region}",
                cents / 100,
                cents % 100
            )
        })
}

fn any_line() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => valid_line(),
        1 => "[A-Za-z0-9|, .-]{0,60}",
        1 => valid_line().prop_map(|line| line.replacen('T', "X", 1)),
        1 => valid_line().prop_map(|line| format!("{line}|extra")),
    ]
}

fn cleaned(lines: &[String]) -> Vec<Transaction> {
    parse_and_clean(lines).records
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn every_line_is_either_kept_or_counted_invalid(
        lines in prop::collection::vec(any_line(), 0..40)
    ) {
        let outcome = parse_and_clean(&lines);
        prop_assert_eq!(outcome.records.len() + outcome.invalid_count, lines.len());
        let tallied: usize = outcome.rejections.values().sum();
        prop_assert_eq!(tallied, outcome.invalid_count);
    }

    #[test]
    fn region_totals_add_up_to_total_revenue(
        lines in prop::collection::vec(valid_line(), 1..40)
    ) {
        let records = cleaned(&lines);
        let total = calculate_total_revenue(&records);
        let regions = region_wise_sales(&records);
        let by_region: f64 = regions.iter().map(|row| row.total_sales).sum();
        prop_assert!((total - by_region).abs() <= 1e-6 * total.max(1.0));

        let share: f64 = regions.iter().map(|row| row.percentage).sum();
        prop_assert!((share - 100.0).abs() <= 0.01 * regions.len() as f64);
    }

    #[test]
    fn low_performers_stay_below_threshold(
        lines in prop::collection::vec(valid_line(), 0..40),
        threshold in 1_i64..60
    ) {
        let records = cleaned(&lines);
        let low = low_performing_products(&records, threshold);
        prop_assert!(low.iter().all(|row| row.total_quantity < threshold));

        let top = top_selling_products(&records, PRODUCT_NAMES.len());
        for product in top.iter().filter(|row| row.total_quantity >= threshold) {
            prop_assert!(low.iter().all(|row| row.name != product.name));
        }
        for window in low.windows(2) {
            prop_assert!(window[0].total_quantity <= window[1].total_quantity);
        }
    }

    #[test]
    fn daily_trend_is_ascending_and_peak_is_earliest_maximum(
        lines in prop::collection::vec(valid_line(), 0..40)
    ) {
        let records = cleaned(&lines);
        let trend = daily_sales_trend(&records);
        for window in trend.windows(2) {
            prop_assert!(window[0].date < window[1].date);
        }

        let peak = find_peak_sales_day(&records);
        let best = trend.iter().map(|day| day.revenue).fold(0.0_f64, f64::max);
        let earliest = trend.iter().find(|day| day.revenue == best && best > 0.0);
        prop_assert_eq!(peak.date.as_deref(), earliest.map(|day| day.date.as_str()));
    }

    #[test]
    fn enrichment_keeps_every_record_and_matches_keywords(
        lines in prop::collection::vec(valid_line(), 0..40)
    ) {
        let records = cleaned(&lines);
        let catalog = ProductCatalog::default();
        let first = enrich_transactions(&records, &catalog);
        let second = enrich_transactions(&records, &catalog);
        prop_assert_eq!(first.len(), records.len());
        prop_assert_eq!(&first, &second);

        for row in &first {
            let lowered = row.transaction.product_name.to_lowercase();
            let expected = KEYWORDS.iter().any(|keyword| lowered.contains(keyword));
            prop_assert_eq!(row.api_match, expected);
            prop_assert_eq!(match_product(&row.transaction.product_name).is_some(), expected);
        }
    }
}
