//! Default bonus strategy
//!
//! Maps a seller's rank in the profit-descending order to a tiered share of
//! its aggregated profit.

use rust_decimal::Decimal;

use crate::strategy::BonusStrategy;
use crate::types::SellerStat;

/// Tiered bonus on aggregated profit
///
/// | rank              | bonus           |
/// |-------------------|-----------------|
/// | 0 (top performer) | 15% of profit   |
/// | 1 or 2            | 10% of profit   |
/// | last              | nothing         |
/// | all other ranks   | 5% of profit    |
///
/// The checks run strictly top-down, so when tiers overlap the earlier one
/// wins: a sole seller is both rank 0 and last, and receives the top-tier
/// bonus; with two or three sellers the runner-up tier shadows the
/// last-place tier.
///
/// The bonus is computed from the full-precision profit; the engine rounds
/// it at report emission.
#[derive(Debug, Clone, Copy)]
pub struct ProfitTierBonus;

impl BonusStrategy for ProfitTierBonus {
    fn bonus(&self, rank: usize, total: usize, stat: &SellerStat) -> Decimal {
        if rank == 0 {
            stat.profit * Decimal::new(15, 2)
        } else if rank == 1 || rank == 2 {
            stat.profit * Decimal::new(10, 2)
        } else if rank + 1 == total {
            Decimal::ZERO
        } else {
            stat.profit * Decimal::new(5, 2)
        }
    }
}
