use crate::ingest::Transaction;

/// Sum of `quantity * unit_price`; zero for an empty collection.
pub fn calculate_total_revenue(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(Transaction::line_total).sum()
}
