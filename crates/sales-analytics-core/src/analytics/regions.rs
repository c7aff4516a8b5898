use serde::Serialize;

use crate::analytics::revenue::calculate_total_revenue;
use crate::analytics::round_to;
use crate::analytics::tally::Tallies;
use crate::ingest::Transaction;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSummary {
    pub region: String,
    pub total_sales: f64,
    pub transaction_count: usize,
    /// Share of overall revenue, rounded to 2 decimals.
    pub percentage: f64,
}

#[derive(Debug, Default)]
struct RegionTally {
    total_sales: f64,
    transaction_count: usize,
}

/// Per-region revenue, highest first; equal totals keep first-seen order.
pub fn region_wise_sales(transactions: &[Transaction]) -> Vec<RegionSummary> {
    let overall = calculate_total_revenue(transactions);
    let mut tallies = Tallies::<RegionTally>::new();

    for transaction in transactions {
        let tally = tallies.entry(&transaction.region);
        tally.total_sales += transaction.line_total();
        tally.transaction_count += 1;
    }

    tallies
        .into_ranked_by(|left, right| right.total_sales.total_cmp(&left.total_sales))
        .into_iter()
        .map(|group| RegionSummary {
            percentage: share_of(group.tally.total_sales, overall),
            region: group.key,
            total_sales: group.tally.total_sales,
            transaction_count: group.tally.transaction_count,
        })
        .collect()
}

fn share_of(part: f64, overall: f64) -> f64 {
    if overall <= 0.0 {
        return 0.0;
    }
    round_to((part / overall) * 100.0, 2)
}
