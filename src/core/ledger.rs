//! Seller ledger
//!
//! This module provides the `SellerLedger`, which owns the per-seller
//! accumulators for one analysis run. The ledger keeps sellers in input
//! order so the later profit sort, being stable, breaks ties by that order.

use std::collections::HashMap;

use crate::types::{Seller, SellerStat};

/// Owns the per-seller running statistics during aggregation
///
/// One zeroed [`SellerStat`] is created per input seller up front; purchase
/// records referencing ids outside this set do not create entries.
pub struct SellerLedger {
    /// Accumulators in seller input order
    stats: Vec<SellerStat>,

    /// Seller id -> position in `stats`
    index: HashMap<String, usize>,
}

impl SellerLedger {
    /// Initialize one accumulator per seller, in input order
    ///
    /// A duplicated seller id keeps a row per input entry, but id lookups
    /// resolve to the later entry.
    pub fn new(sellers: &[Seller]) -> Self {
        let mut stats = Vec::with_capacity(sellers.len());
        let mut index = HashMap::with_capacity(sellers.len());

        for (position, seller) in sellers.iter().enumerate() {
            index.insert(seller.id.clone(), position);
            stats.push(SellerStat::new(seller));
        }

        SellerLedger { stats, index }
    }

    /// Mutable access to the accumulator for a seller id
    ///
    /// Returns `None` for ids not present in the seller collection; the
    /// caller skips such records.
    pub fn stat_mut(&mut self, seller_id: &str) -> Option<&mut SellerStat> {
        let position = *self.index.get(seller_id)?;
        self.stats.get_mut(position)
    }

    /// Number of sellers in the ledger
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Whether the ledger tracks no sellers
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Consume the ledger, yielding the accumulators in input order
    pub fn into_stats(self) -> Vec<SellerStat> {
        self.stats
    }
}
