use std::collections::BTreeSet;

use serde::Serialize;

use crate::analytics::round_to;
use crate::analytics::tally::Tallies;
use crate::ingest::Transaction;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSummary {
    pub customer_id: String,
    pub total_spent: f64,
    pub purchase_count: usize,
    pub avg_order_value: f64,
    pub products_bought: BTreeSet<String>,
}

#[derive(Debug, Default)]
struct CustomerTally {
    total_spent: f64,
    purchase_count: usize,
    products_bought: BTreeSet<String>,
}

/// Per-customer spend, biggest spender first; equal spend keeps first-seen order.
pub fn customer_analysis(transactions: &[Transaction]) -> Vec<CustomerSummary> {
    let mut tallies = Tallies::<CustomerTally>::new();
    for transaction in transactions {
        let tally = tallies.entry(&transaction.customer_id);
        tally.total_spent += transaction.line_total();
        tally.purchase_count += 1;
        tally
            .products_bought
            .insert(transaction.product_name.clone());
    }

    tallies
        .into_ranked_by(|left, right| {
            round_to(right.total_spent, 2).total_cmp(&round_to(left.total_spent, 2))
        })
        .into_iter()
        .map(|group| {
            let tally = group.tally;
            CustomerSummary {
                customer_id: group.key,
                total_spent: round_to(tally.total_spent, 2),
                purchase_count: tally.purchase_count,
                avg_order_value: average_order_value(tally.total_spent, tally.purchase_count),
                products_bought: tally.products_bought,
            }
        })
        .collect()
}

fn average_order_value(total_spent: f64, purchase_count: usize) -> f64 {
    if purchase_count == 0 {
        return 0.0;
    }
    round_to(total_spent / purchase_count as f64, 2)
}
