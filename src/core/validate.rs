//! Structural input validation
//!
//! Validation runs once, before any aggregation work, and the first
//! violation aborts the run. There is no partial validation and no partial
//! output.

use crate::types::{InvalidInput, SalesData};

/// Validate the structural shape of the input dataset
///
/// All three collections must be non-empty. Shape violations that a typed
/// dataset cannot represent (a collection that is not a sequence, a missing
/// field) are rejected earlier, when the dataset is deserialized.
///
/// # Errors
///
/// Returns [`InvalidInput`] naming the first empty collection, checked in
/// the order sellers, products, purchase records.
pub fn validate(data: &SalesData) -> Result<(), InvalidInput> {
    if data.sellers.is_empty() {
        return Err(InvalidInput::NoSellers);
    }
    if data.products.is_empty() {
        return Err(InvalidInput::NoProducts);
    }
    if data.purchase_records.is_empty() {
        return Err(InvalidInput::NoPurchaseRecords);
    }
    Ok(())
}
