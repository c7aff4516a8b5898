pub mod filter;
pub mod parse;
pub mod source;

use serde::Serialize;

/// One validated sale line item.
///
/// Built only by [`parse::parse_and_clean`]; every field is present, both
/// numeric fields are strictly positive and the ID prefixes are enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub date: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub customer_id: String,
    pub region: String,
}

impl Transaction {
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}
