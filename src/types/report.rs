//! Report output types for the sales report engine
//!
//! This module defines the rows the analysis emits, the advisory
//! diagnostics side channel, and the single monetary rounding rule applied
//! at report emission.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::input::{SellerId, Sku};

/// Maximum number of entries in a seller's top-products list
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Cumulative quantity sold for one SKU
///
/// Used both as the per-seller running counter and as the top-products
/// entry in the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSale {
    /// SKU of the product
    pub sku: Sku,

    /// Total units of this SKU sold by the seller
    pub quantity: u32,
}

/// One seller's row in the final report
///
/// Monetary fields are rounded to exactly two decimal places; counts and
/// the top-products list are passed through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// The seller identifier
    pub seller_id: SellerId,

    /// Display name (first and last name joined)
    pub name: String,

    /// Total realized revenue, rounded to 2 decimal places
    pub revenue: Decimal,

    /// Total profit (revenue minus cost), rounded to 2 decimal places
    pub profit: Decimal,

    /// Number of purchase records attributed to the seller
    pub sales_count: u32,

    /// Best-selling SKUs by cumulative quantity, at most
    /// [`TOP_PRODUCTS_LIMIT`] entries, descending by quantity
    pub top_products: Vec<ProductSale>,

    /// Rank-based bonus, rounded to 2 decimal places
    pub bonus: Decimal,
}

/// Advisory diagnostic raised during aggregation
///
/// Diagnostics are non-fatal: the report is still produced. They are
/// returned alongside the rows and mirrored as `tracing` warn events, so
/// the computation itself stays pure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A SKU appeared more than once in the product catalog
    ///
    /// The later catalog entry overwrites the earlier one. One diagnostic
    /// is emitted per duplicate occurrence.
    DuplicateSku {
        /// The duplicated SKU
        sku: Sku,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::DuplicateSku { sku } => {
                write!(f, "duplicate SKU in product catalog: {}", sku)
            }
        }
    }
}

/// The complete result of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    /// One row per input seller, ordered by descending profit
    pub rows: Vec<ReportRow>,

    /// Advisory diagnostics collected during the run
    pub diagnostics: Vec<Diagnostic>,
}

/// Round a monetary amount to two decimal places, half-up
///
/// This is the single rounding rule of the engine and it is applied once,
/// at report emission. Revenue, profit, and bonus keep full precision
/// through aggregation so rounding error does not compound across line
/// items. Midpoints round away from zero: `12750.835` becomes `12750.84`,
/// `-0.005` becomes `-0.01`.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
