//! Per-seller running statistics
//!
//! This module defines the accumulator the aggregator builds while scanning
//! purchase records. A `SellerStat` is owned exclusively by one engine run
//! and is discarded after the final report rows are projected.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::input::{Seller, SellerId, Sku};
use super::report::ProductSale;

/// Running totals for one seller
///
/// Revenue and profit are kept at full precision while aggregation runs;
/// rounding happens once, at report emission. The per-SKU quantity counters
/// preserve first-encounter order so quantity ties in the top-products list
/// resolve deterministically.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStat {
    /// The seller identifier
    pub seller_id: SellerId,

    /// Display name, first and last name joined by a space
    pub name: String,

    /// Accumulated revenue across all attributed line items
    pub revenue: Decimal,

    /// Accumulated profit across all attributed line items
    pub profit: Decimal,

    /// Number of purchase records attributed to this seller
    ///
    /// Incremented once per record, not once per line item.
    pub sales_count: u32,

    /// Cumulative quantity per SKU, in first-encounter order
    products_sold: Vec<ProductSale>,

    /// SKU -> position in `products_sold`
    positions: HashMap<Sku, usize>,
}

impl SellerStat {
    /// Create a zeroed accumulator for the given seller
    pub fn new(seller: &Seller) -> Self {
        SellerStat {
            seller_id: seller.id.clone(),
            name: format!("{} {}", seller.first_name, seller.last_name),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Add sold units to the seller's counter for a SKU
    ///
    /// The counter starts at zero on first encounter; the encounter order
    /// is retained for tie-breaking in [`SellerStat::top_products`].
    pub fn record_quantity(&mut self, sku: &str, quantity: u32) {
        match self.positions.get(sku) {
            Some(&position) => {
                self.products_sold[position].quantity += quantity;
            }
            None => {
                self.positions
                    .insert(sku.to_string(), self.products_sold.len());
                self.products_sold.push(ProductSale {
                    sku: sku.to_string(),
                    quantity,
                });
            }
        }
    }

    /// All per-SKU counters in first-encounter order
    pub fn products_sold(&self) -> &[ProductSale] {
        &self.products_sold
    }

    /// The seller's best-selling SKUs
    ///
    /// Sorted by cumulative quantity descending and truncated to at most
    /// `limit` entries. The sort is stable, so SKUs with equal quantities
    /// keep their first-encounter order.
    pub fn top_products(&self, limit: usize) -> Vec<ProductSale> {
        let mut products = self.products_sold.clone();
        products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        products.truncate(limit);
        products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller() -> Seller {
        Seller {
            id: "seller-1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    #[test]
    fn test_new_stat_is_zeroed() {
        let stat = SellerStat::new(&seller());

        assert_eq!(stat.seller_id, "seller-1");
        assert_eq!(stat.name, "Ada Lovelace");
        assert_eq!(stat.revenue, Decimal::ZERO);
        assert_eq!(stat.profit, Decimal::ZERO);
        assert_eq!(stat.sales_count, 0);
        assert!(stat.products_sold().is_empty());
    }

    #[test]
    fn test_record_quantity_accumulates_per_sku() {
        let mut stat = SellerStat::new(&seller());

        stat.record_quantity("sku-a", 2);
        stat.record_quantity("sku-b", 1);
        stat.record_quantity("sku-a", 3);

        assert_eq!(
            stat.products_sold(),
            &[
                ProductSale {
                    sku: "sku-a".to_string(),
                    quantity: 5,
                },
                ProductSale {
                    sku: "sku-b".to_string(),
                    quantity: 1,
                },
            ]
        );
    }

    #[test]
    fn test_top_products_sorts_by_quantity_descending() {
        let mut stat = SellerStat::new(&seller());

        stat.record_quantity("sku-a", 1);
        stat.record_quantity("sku-b", 7);
        stat.record_quantity("sku-c", 4);

        let top = stat.top_products(10);
        let skus: Vec<&str> = top.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["sku-b", "sku-c", "sku-a"]);
    }

    #[test]
    fn test_top_products_ties_keep_first_encounter_order() {
        let mut stat = SellerStat::new(&seller());

        stat.record_quantity("sku-late", 3);
        stat.record_quantity("sku-early", 3);
        stat.record_quantity("sku-big", 9);

        let top = stat.top_products(10);
        let skus: Vec<&str> = top.iter().map(|p| p.sku.as_str()).collect();
        // sku-late was encountered before sku-early, so it wins the tie
        assert_eq!(skus, vec!["sku-big", "sku-late", "sku-early"]);
    }

    #[test]
    fn test_top_products_truncates_to_limit() {
        let mut stat = SellerStat::new(&seller());

        for n in 0..15 {
            stat.record_quantity(&format!("sku-{}", n), n + 1);
        }

        let top = stat.top_products(10);
        assert_eq!(top.len(), 10);
        // Highest quantities survive the cut
        assert_eq!(top[0].sku, "sku-14");
        assert_eq!(top[0].quantity, 15);
        assert_eq!(top[9].sku, "sku-5");
    }
}
