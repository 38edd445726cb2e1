//! Default revenue strategy
//!
//! Computes a line item's realized revenue as the discounted sale total.
//! The result keeps full precision; the engine rounds monetary values once,
//! at report emission, so rounding error never compounds across the many
//! line items of an aggregation run.

use rust_decimal::Decimal;

use crate::strategy::RevenueStrategy;
use crate::types::{LineItem, Product};

/// Discounted sale total: `sale_price * quantity * (1 - discount/100)`
///
/// A discount of zero (the default for items that omit the field) leaves
/// the gross total untouched. The matching product is ignored; it is part
/// of the signature for custom strategies that price off catalog data.
#[derive(Debug, Clone, Copy)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn revenue(&self, item: &LineItem, _product: &Product) -> Decimal {
        let gross = item.sale_price * Decimal::from(item.quantity);
        let discount_factor = Decimal::ONE - item.discount / Decimal::ONE_HUNDRED;
        gross * discount_factor
    }
}
