//! Types module
//!
//! Contains core data structures used throughout the engine.
//! This module organizes types into logical submodules:
//! - `input`: the three input collections and their records
//! - `stat`: per-seller running statistics built during aggregation
//! - `report`: final report rows, diagnostics, and monetary rounding
//! - `error`: the input validation error

pub mod error;
pub mod input;
pub mod report;
pub mod stat;

pub use error::InvalidInput;
pub use input::{LineItem, Product, PurchaseRecord, SalesData, Seller, SellerId, Sku};
pub use report::{round_money, Diagnostic, ProductSale, ReportRow, SalesReport, TOP_PRODUCTS_LIMIT};
pub use stat::SellerStat;
