use serde::Serialize;

use crate::analytics::tally::Tallies;
use crate::ingest::Transaction;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRanking {
    pub name: String,
    pub total_quantity: i64,
    pub total_revenue: f64,
}

#[derive(Debug, Default)]
struct ProductTally {
    total_quantity: i64,
    total_revenue: f64,
}

fn tally_products(transactions: &[Transaction]) -> Tallies<ProductTally> {
    let mut tallies = Tallies::<ProductTally>::new();
    for transaction in transactions {
        let tally = tallies.entry(&transaction.product_name);
        tally.total_quantity = tally.total_quantity.saturating_add(transaction.quantity);
        tally.total_revenue += transaction.line_total();
    }
    tallies
}

/// The `limit` best sellers by quantity; equal quantities keep first-seen order.
pub fn top_selling_products(transactions: &[Transaction], limit: usize) -> Vec<ProductRanking> {
    tally_products(transactions)
        .into_ranked_by(|left, right| right.total_quantity.cmp(&left.total_quantity))
        .into_iter()
        .take(limit)
        .map(|group| ProductRanking {
            name: group.key,
            total_quantity: group.tally.total_quantity,
            total_revenue: group.tally.total_revenue,
        })
        .collect()
}

/// Products whose total quantity is strictly below `threshold`, fewest first.
pub fn low_performing_products(
    transactions: &[Transaction],
    threshold: i64,
) -> Vec<ProductRanking> {
    tally_products(transactions)
        .into_ranked_by(|left, right| left.total_quantity.cmp(&right.total_quantity))
        .into_iter()
        .filter(|group| group.tally.total_quantity < threshold)
        .map(|group| ProductRanking {
            name: group.key,
            total_quantity: group.tally.total_quantity,
            total_revenue: group.tally.total_revenue,
        })
        .collect()
}
