//! Error types for the sales report engine
//!
//! The engine exposes exactly one user-facing error kind: structural input
//! validation failure. Every other anomaly encountered during a run
//! (unknown seller id, unknown SKU, duplicate SKU) is non-fatal and handled
//! by skipping or by advisory diagnostics, never by an error.

use thiserror::Error;

/// Structural input validation failure
///
/// Raised before any aggregation work begins; the first violation aborts
/// the run. Each variant names the structural check that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The sellers collection is empty
    #[error("invalid input: sellers must be a non-empty collection")]
    NoSellers,

    /// The product catalog is empty
    #[error("invalid input: products must be a non-empty collection")]
    NoProducts,

    /// The purchase records collection is empty
    #[error("invalid input: purchase_records must be a non-empty collection")]
    NoPurchaseRecords,
}
