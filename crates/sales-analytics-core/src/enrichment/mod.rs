pub mod catalog;
pub mod rules;

use serde::Serialize;

use crate::ingest::Transaction;

pub use catalog::{
    CatalogEntry, CatalogProduct, CatalogSource, EmptyCatalog, JsonCatalogFile, ProductCatalog,
    build_product_mapping,
};
pub use rules::{ENRICHMENT_RULES_V1, EnrichmentRule, ProductAttributes, match_product};

pub const UNKNOWN_ATTRIBUTE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub api_category: String,
    pub api_brand: String,
    pub api_rating: f64,
    pub api_match: bool,
}

impl EnrichedTransaction {
    fn from_match(transaction: Transaction, attributes: Option<ProductAttributes>) -> Self {
        match attributes {
            Some(found) => Self {
                transaction,
                api_category: found.category.to_string(),
                api_brand: found.brand.to_string(),
                api_rating: found.rating,
                api_match: true,
            },
            None => Self {
                transaction,
                api_category: UNKNOWN_ATTRIBUTE.to_string(),
                api_brand: UNKNOWN_ATTRIBUTE.to_string(),
                api_rating: 0.0,
                api_match: false,
            },
        }
    }
}

/// Attaches product attributes to every transaction, one output per input,
/// in input order.
///
/// `_catalog` is accepted so callers can pass what the catalog source
/// returned; attribute values currently come from [`ENRICHMENT_RULES_V1`].
pub fn enrich_transactions(
    transactions: &[Transaction],
    _catalog: &ProductCatalog,
) -> Vec<EnrichedTransaction> {
    transactions
        .iter()
        .map(|transaction| {
            let attributes = match_product(&transaction.product_name).map(|rule| rule.attributes);
            EnrichedTransaction::from_match(transaction.clone(), attributes)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichmentStats {
    pub matched: usize,
    pub total: usize,
    pub success_rate: f64,
    /// Unmatched product names, de-duplicated, in first-seen order.
    pub unmatched_products: Vec<String>,
}

pub fn enrichment_stats(enriched: &[EnrichedTransaction]) -> EnrichmentStats {
    let matched = enriched.iter().filter(|row| row.api_match).count();
    let total = enriched.len();
    let success_rate = if total == 0 {
        0.0
    } else {
        crate::analytics::round_to((matched as f64 / total as f64) * 100.0, 2)
    };

    let mut unmatched_products: Vec<String> = Vec::new();
    for row in enriched.iter().filter(|row| !row.api_match) {
        let name = &row.transaction.product_name;
        if !unmatched_products.contains(name) {
            unmatched_products.push(name.clone());
        }
    }

    EnrichmentStats {
        matched,
        total,
        success_rate,
        unmatched_products,
    }
}
