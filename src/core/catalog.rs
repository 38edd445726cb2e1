//! Product catalog indexing
//!
//! This module provides the `ProductCatalog`, a SKU lookup index built once
//! per run from the input product collection. Building the index also
//! performs duplicate-SKU detection, the one advisory diagnostic the
//! engine reports.

use std::collections::HashMap;

use tracing::warn;

use crate::types::{Diagnostic, Product};

/// SKU -> product lookup index for one analysis run
///
/// Borrows the input products; the catalog lives no longer than the run
/// that built it.
pub struct ProductCatalog<'a> {
    by_sku: HashMap<&'a str, &'a Product>,
}

impl<'a> ProductCatalog<'a> {
    /// Index the product collection by SKU
    ///
    /// SKUs are expected unique. A duplicate is non-fatal: the later entry
    /// overwrites the earlier mapping, one [`Diagnostic::DuplicateSku`] is
    /// collected per duplicate occurrence, and a warn event is emitted.
    ///
    /// # Returns
    ///
    /// The catalog plus the diagnostics gathered while building it.
    pub fn build(products: &'a [Product]) -> (Self, Vec<Diagnostic>) {
        let mut by_sku = HashMap::with_capacity(products.len());
        let mut diagnostics = Vec::new();

        for product in products {
            if by_sku.insert(product.sku.as_str(), product).is_some() {
                warn!(sku = %product.sku, "duplicate SKU in product catalog, later entry wins");
                diagnostics.push(Diagnostic::DuplicateSku {
                    sku: product.sku.clone(),
                });
            }
        }

        (ProductCatalog { by_sku }, diagnostics)
    }

    /// Look up a product by SKU
    pub fn get(&self, sku: &str) -> Option<&'a Product> {
        self.by_sku.get(sku).copied()
    }

    /// Number of distinct SKUs in the catalog
    pub fn len(&self) -> usize {
        self.by_sku.len()
    }

    /// Whether the catalog holds no products
    pub fn is_empty(&self) -> bool {
        self.by_sku.is_empty()
    }
}
