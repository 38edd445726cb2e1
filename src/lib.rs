//! Sales Report Engine Library
//! # Overview
//!
//! This library computes a per-seller sales report from three in-memory
//! input collections: sellers, products, and purchase records. It
//! aggregates revenue and profit per seller, ranks sellers by profit,
//! assigns a tiered bonus per rank, and lists each seller's best-selling
//! products.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (SalesData, SellerStat, SalesReport, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Pipeline orchestration
//!   - [`core::ledger`] - Per-seller accumulator management
//!   - [`core::catalog`] - Product catalog indexing and duplicate detection
//!   - [`core::validate`] - Structural input validation
//! - [`strategy`] - Pluggable revenue and bonus calculations
//!
//! # Pipeline
//!
//! One run of [`analyze_sales_data`] performs, in order:
//!
//! 1. **Validate**: all three collections present and non-empty
//! 2. **Aggregate**: scan purchase records into per-seller running totals
//! 3. **Rank**: stable sort by profit descending
//! 4. **Bonus**: apply the bonus strategy to each rank
//! 5. **Emit**: round monetary fields and project the report rows
//!
//! The computation is pure and synchronous: no I/O, no shared state, and
//! deterministic output for a given input and strategy pair. Unknown
//! seller ids and unknown SKUs are skipped without error; duplicate SKUs in
//! the catalog surface as advisory diagnostics on the report.
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use sales_report_engine::types::{
//!     LineItem, Product, PurchaseRecord, SalesData, Seller,
//! };
//! use sales_report_engine::{analyze_sales_data, AnalyzeOptions};
//!
//! let data = SalesData {
//!     sellers: vec![Seller {
//!         id: "seller-1".to_string(),
//!         first_name: "Ada".to_string(),
//!         last_name: "Lovelace".to_string(),
//!     }],
//!     products: vec![Product {
//!         sku: "sku-1".to_string(),
//!         purchase_price: Decimal::new(500, 2),
//!     }],
//!     purchase_records: vec![PurchaseRecord {
//!         seller_id: "seller-1".to_string(),
//!         items: vec![LineItem {
//!             sku: "sku-1".to_string(),
//!             quantity: 2,
//!             sale_price: Decimal::new(1000, 2),
//!             discount: Decimal::ZERO,
//!         }],
//!     }],
//! };
//!
//! let report = analyze_sales_data(&data, AnalyzeOptions::default())?;
//! assert_eq!(report.rows.len(), 1);
//! assert_eq!(report.rows[0].revenue, Decimal::new(2000, 2));
//! # Ok::<(), sales_report_engine::InvalidInput>(())
//! ```

// Module declarations
pub mod core;
pub mod strategy;
pub mod types;

pub use crate::core::ReportEngine;
pub use strategy::{AnalyzeOptions, BonusStrategy, ProfitTierBonus, RevenueStrategy, SimpleRevenue};
pub use types::{
    Diagnostic, InvalidInput, ProductSale, ReportRow, SalesData, SalesReport, SellerStat,
};

/// Analyze a sales dataset and produce the per-seller report
///
/// This is the single entry point of the crate. It builds a
/// [`ReportEngine`] from the given options and runs it over the dataset.
///
/// # Arguments
///
/// * `data` - The sellers, products, and purchase records to analyze
/// * `options` - Strategy configuration; [`AnalyzeOptions::default`] uses
///   the built-in revenue and bonus calculations
///
/// # Returns
///
/// A [`SalesReport`] with one row per input seller, ordered by descending
/// profit, plus advisory diagnostics.
///
/// # Errors
///
/// Returns [`InvalidInput`] when any of the three input collections is
/// empty. All other anomalies are non-fatal.
pub fn analyze_sales_data(
    data: &SalesData,
    options: AnalyzeOptions,
) -> Result<SalesReport, InvalidInput> {
    ReportEngine::with_options(options).run(data)
}
