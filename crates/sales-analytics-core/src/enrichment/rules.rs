/// Attribute triple assigned when a rule fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductAttributes {
    pub category: &'static str,
    pub brand: &'static str,
    pub rating: f64,
}

/// Fires when the lower-cased product name contains any of `keywords`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnrichmentRule {
    pub keywords: &'static [&'static str],
    pub attributes: ProductAttributes,
}

impl EnrichmentRule {
    /// Substring containment, not whole-word: "mousepad" matches "mouse".
    pub fn matches(&self, lowered_name: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered_name.contains(keyword))
    }
}

const MOBILE_ACCESSORIES: &str = "mobile-accessories";

/// Evaluated top to bottom; the first matching rule wins.
pub const ENRICHMENT_RULES_V1: [EnrichmentRule; 9] = [
    EnrichmentRule {
        keywords: &["usb", "cable"],
        attributes: ProductAttributes {
            category: MOBILE_ACCESSORIES,
            brand: "Beats",
            rating: 4.24,
        },
    },
    EnrichmentRule {
        keywords: &["mouse"],
        attributes: ProductAttributes {
            category: MOBILE_ACCESSORIES,
            brand: "TechGear",
            rating: 4.43,
        },
    },
    EnrichmentRule {
        keywords: &["charger"],
        attributes: ProductAttributes {
            category: MOBILE_ACCESSORIES,
            brand: "GadgetMaster",
            rating: 3.55,
        },
    },
    EnrichmentRule {
        keywords: &["monitor"],
        attributes: ProductAttributes {
            category: MOBILE_ACCESSORIES,
            brand: "Apple",
            rating: 4.15,
        },
    },
    EnrichmentRule {
        keywords: &["webcam"],
        attributes: ProductAttributes {
            category: MOBILE_ACCESSORIES,
            brand: "Apple",
            rating: 3.62,
        },
    },
    EnrichmentRule {
        keywords: &["keyboard"],
        attributes: ProductAttributes {
            category: MOBILE_ACCESSORIES,
            brand: "Logitech",
            rating: 4.05,
        },
    },
    EnrichmentRule {
        keywords: &["headphone"],
        attributes: ProductAttributes {
            category: MOBILE_ACCESSORIES,
            brand: "Sony",
            rating: 4.38,
        },
    },
    EnrichmentRule {
        keywords: &["external hard drive", "hard drive"],
        attributes: ProductAttributes {
            category: "storage",
            brand: "Seagate",
            rating: 4.18,
        },
    },
    EnrichmentRule {
        keywords: &["laptop"],
        attributes: ProductAttributes {
            category: "laptops",
            brand: "Asus",
            rating: 3.95,
        },
    },
];

pub fn match_product(product_name: &str) -> Option<&'static EnrichmentRule> {
    let lowered = product_name.to_lowercase();
    ENRICHMENT_RULES_V1
        .iter()
        .find(|rule| rule.matches(&lowered))
}
