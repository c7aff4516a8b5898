pub mod customers;
pub mod daily;
pub mod date;
pub mod policy;
pub mod products;
pub mod regions;
pub mod revenue;
mod tally;

pub use customers::{CustomerSummary, customer_analysis};
pub use daily::{DailySummary, PeakDay, daily_sales_trend, find_peak_sales_day, peak_of_trend};
pub use policy::{ANALYTICS_POLICY_V1, AnalyticsPolicy};
pub use products::{ProductRanking, low_performing_products, top_selling_products};
pub use regions::{RegionSummary, region_wise_sales};
pub use revenue::calculate_total_revenue;

/// Rounds on the exact decimal expansion of `value`, so 2.675 (stored as
/// 2.67499...) becomes 2.67 rather than 2.68.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let precision = usize::try_from(decimals).unwrap_or(2);
    format!("{value:.precision$}").parse::<f64>().unwrap_or(value)
}


#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn round_to_keeps_requested_decimals() {
        assert_eq!(round_to(41.666_666, 2), 41.67);
        assert_eq!(round_to(58.333_333, 2), 58.33);
        assert_eq!(round_to(100.0, 2), 100.0);
    }

    #[test]
    fn round_to_uses_stored_decimal_value() {
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(1.005, 2), 1.0);
        assert_eq!(round_to(-0.004, 2), 0.0);
    }
}
