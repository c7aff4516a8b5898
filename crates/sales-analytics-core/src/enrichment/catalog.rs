use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// One product as delivered by the catalog source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogProduct {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub title: String,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub rating: Option<f64>,
}

/// Catalog entries keyed by trimmed, lower-cased title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl ProductCatalog {
    pub fn get(&self, title: &str) -> Option<&CatalogEntry> {
        self.entries.get(&title.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn build_product_mapping(products: Vec<CatalogProduct>) -> ProductCatalog {
    let mut entries = BTreeMap::new();
    for product in products {
        let Some(title) = product.title.filter(|value| !value.is_empty()) else {
            continue;
        };
        entries.insert(
            title.trim().to_lowercase(),
            CatalogEntry {
                title,
                category: product.category,
                brand: product.brand,
                rating: product.rating,
            },
        );
    }
    ProductCatalog { entries }
}

/// Supplies catalog products. Implementations degrade to an empty list
/// instead of failing.
pub trait CatalogSource {
    fn fetch_products(&self) -> Vec<CatalogProduct>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl CatalogSource for EmptyCatalog {
    fn fetch_products(&self) -> Vec<CatalogProduct> {
        Vec::new()
    }
}

/// Reads a `{"products": [...]}` document from disk.
#[derive(Debug, Clone)]
pub struct JsonCatalogFile {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    products: Vec<CatalogProduct>,
}

impl CatalogSource for JsonCatalogFile {
    fn fetch_products(&self) -> Vec<CatalogProduct> {
        let body = match fs::read_to_string(&self.path) {
            Ok(value) => value,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "catalog file could not be read");
                return Vec::new();
            }
        };

        match serde_json::from_str::<CatalogDocument>(&body) {
            Ok(document) => document.products,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "catalog file is not a product document");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{
        CatalogProduct, CatalogSource, EmptyCatalog, JsonCatalogFile, build_product_mapping,
    };

    fn product(title: Option<&str>, brand: &str) -> CatalogProduct {
        CatalogProduct {
            title: title.map(ToString::to_string),
            category: Some("laptops".to_string()),
            brand: Some(brand.to_string()),
            rating: Some(4.5),
        }
    }

    #[test]
    fn mapping_keys_are_trimmed_lowercase_titles() {
        let catalog = build_product_mapping(vec![
            product(Some("  MacBook Pro "), "Apple"),
            product(None, "Nobody"),
            product(Some(""), "Nobody"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
        assert!(build_product_mapping(vec![product(None, "Nobody")]).is_empty());

        let entry = catalog.get("macbook pro");
        assert!(entry.is_some());
        if let Some(found) = entry {
            assert_eq!(found.title, "  MacBook Pro ");
            assert_eq!(found.brand.as_deref(), Some("Apple"));
        }
    }

    #[test]
    fn later_duplicates_overwrite_earlier_entries() {
        let catalog = build_product_mapping(vec![
            product(Some("Phone"), "First"),
            product(Some("phone"), "Second"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get("PHONE").and_then(|entry| entry.brand.clone()),
            Some("Second".to_string())
        );
    }

    #[test]
    fn json_catalog_reads_products_and_degrades_on_errors() {
        let dir = tempdir();
        assert!(dir.is_ok());
        if let Ok(dir) = dir {
            let good = dir.path().join("catalog.json");
            let written = fs::write(
                &good,
                r#"{"products":[{"id":1,"title":"Essence Mascara","category":"beauty","brand":"Essence","rating":4.94}],"total":1}"#,
            );
            assert!(written.is_ok());
            let products = JsonCatalogFile { path: good }.fetch_products();
            assert_eq!(products.len(), 1);
            assert_eq!(products[0].rating, Some(4.94));

            let broken = dir.path().join("broken.json");
            assert!(fs::write(&broken, "not json").is_ok());
            assert!(JsonCatalogFile { path: broken }.fetch_products().is_empty());

            let missing = dir.path().join("missing.json");
            assert!(JsonCatalogFile { path: missing }.fetch_products().is_empty());
        }
        assert!(EmptyCatalog.fetch_products().is_empty());
    }
}
