//! Pluggable calculation strategies
//!
//! This module defines the Strategy pattern for the two calculations the
//! report engine leaves open to callers: how a line item's realized revenue
//! is computed, and how a seller's rank maps to a bonus. Defaults are
//! provided ([`SimpleRevenue`], [`ProfitTierBonus`]); callers can override
//! either with their own implementation or with a plain closure via
//! [`AnalyzeOptions`].

use rust_decimal::Decimal;

use crate::types::{LineItem, Product, SellerStat};

pub mod bonus;
pub mod revenue;

pub use bonus::ProfitTierBonus;
pub use revenue::SimpleRevenue;

/// Strategy for computing a line item's realized revenue
///
/// Invoked once per attributed line item with the item and its matching
/// product. The product is unused by the default strategy but is passed so
/// custom strategies can price off catalog data (e.g. margin floors).
pub trait RevenueStrategy: Send + Sync {
    /// Compute the revenue realized by one line item
    fn revenue(&self, item: &LineItem, product: &Product) -> Decimal;
}

/// Strategy for computing a seller's bonus from its rank
///
/// Invoked once per seller after ranking, with the zero-based rank in the
/// profit-descending order, the total seller count, and the seller's
/// aggregated statistics.
pub trait BonusStrategy: Send + Sync {
    /// Compute the bonus for the seller at the given rank
    fn bonus(&self, rank: usize, total: usize, stat: &SellerStat) -> Decimal;
}

// Plain closures work as strategies, mirroring the options-object style of
// passing behavior as data.
impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> Decimal + Send + Sync,
{
    fn revenue(&self, item: &LineItem, product: &Product) -> Decimal {
        self(item, product)
    }
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStat) -> Decimal + Send + Sync,
{
    fn bonus(&self, rank: usize, total: usize, stat: &SellerStat) -> Decimal {
        self(rank, total, stat)
    }
}

/// Configuration for one analysis run
///
/// Selects the revenue and bonus strategies; both default to the built-in
/// implementations when not overridden.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use sales_report_engine::strategy::AnalyzeOptions;
/// use sales_report_engine::types::{LineItem, Product};
///
/// // Flat pricing: ignore discounts entirely.
/// let options = AnalyzeOptions::new().with_revenue(
///     |item: &LineItem, _product: &Product| item.sale_price * Decimal::from(item.quantity),
/// );
/// # let _ = options;
/// ```
pub struct AnalyzeOptions {
    revenue: Box<dyn RevenueStrategy>,
    bonus: Box<dyn BonusStrategy>,
}

impl AnalyzeOptions {
    /// Create options with the default strategies
    pub fn new() -> Self {
        AnalyzeOptions {
            revenue: Box::new(SimpleRevenue),
            bonus: Box::new(ProfitTierBonus),
        }
    }

    /// Replace the revenue strategy
    pub fn with_revenue(mut self, strategy: impl RevenueStrategy + 'static) -> Self {
        self.revenue = Box::new(strategy);
        self
    }

    /// Replace the bonus strategy
    pub fn with_bonus(mut self, strategy: impl BonusStrategy + 'static) -> Self {
        self.bonus = Box::new(strategy);
        self
    }

    /// Split into the boxed strategies for the engine
    pub(crate) fn into_parts(self) -> (Box<dyn RevenueStrategy>, Box<dyn BonusStrategy>) {
        (self.revenue, self.bonus)
    }
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self::new()
    }
}
