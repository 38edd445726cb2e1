//! Input record types for the sales report engine
//!
//! This module defines the three input collections the analysis consumes:
//! sellers, products, and purchase records. All records derive serde
//! (de)serialization so datasets can be loaded from untyped payloads;
//! structurally malformed payloads (a collection that is not a sequence,
//! a missing field, a non-numeric price) are rejected at that boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Seller identifier
///
/// Opaque string key, unique within the sellers collection.
pub type SellerId = String;

/// Stock keeping unit
///
/// Product key, expected unique within the product catalog. Duplicates are
/// tolerated with an advisory diagnostic; the later definition wins.
pub type Sku = String;

/// A seller as supplied in the input dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    /// The seller identifier referenced by purchase records
    pub id: SellerId,

    /// Given name, joined with the family name for report display
    pub first_name: String,

    /// Family name
    pub last_name: String,
}

/// A product as supplied in the input catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// The SKU referenced by purchase line items
    pub sku: Sku,

    /// Cost price paid to acquire one unit
    ///
    /// Item cost is `purchase_price * quantity`; profit is revenue minus
    /// that cost.
    pub purchase_price: Decimal,
}

/// One SKU + quantity + price entry within a purchase record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// SKU of the product sold
    pub sku: Sku,

    /// Units sold in this line item
    pub quantity: u32,

    /// Sale price per unit, before discount
    pub sale_price: Decimal,

    /// Discount percentage in the range 0..=100
    ///
    /// Absent in most records; defaults to zero (no discount).
    #[serde(default)]
    pub discount: Decimal,
}

/// A purchase record: one checkout by one seller
///
/// The record as a whole counts as a single sale for the seller's
/// `sales_count`, regardless of how many line items it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Identifier of the seller who made the sale
    pub seller_id: SellerId,

    /// Ordered line items in this purchase
    pub items: Vec<LineItem>,
}

/// The complete input dataset for one analysis run
///
/// All three collections are required and must be non-empty; the validator
/// rejects anything less before aggregation starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    /// Sellers to report on, one output row each
    pub sellers: Vec<Seller>,

    /// Product catalog keyed by SKU
    pub products: Vec<Product>,

    /// Purchase records to aggregate
    pub purchase_records: Vec<PurchaseRecord>,
}
