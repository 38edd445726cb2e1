//! Report engine
//!
//! This module provides the ReportEngine that orchestrates the full
//! analysis pipeline: validate the input, build the product catalog and
//! seller ledger, scan purchase records into per-seller accumulators, rank
//! sellers by profit, apply the bonus strategy per rank, and project the
//! final report rows.
//!
//! The engine enforces the aggregation rules:
//! - A record referencing an unknown seller id is skipped whole
//! - An item referencing an unknown SKU is skipped alone; the rest of the
//!   record still counts
//! - `sales_count` is incremented once per record, not per item
//! - Monetary fields are rounded only at report emission

use rust_decimal::Decimal;
use tracing::debug;

use crate::core::catalog::ProductCatalog;
use crate::core::ledger::SellerLedger;
use crate::core::validate::validate;
use crate::strategy::{AnalyzeOptions, BonusStrategy, RevenueStrategy};
use crate::types::{
    round_money, InvalidInput, ReportRow, SalesData, SalesReport, SellerStat, TOP_PRODUCTS_LIMIT,
};

/// Sales report engine
///
/// Holds the revenue and bonus strategies; all per-run state lives inside
/// [`ReportEngine::run`], so one engine can serve any number of independent
/// runs.
pub struct ReportEngine {
    revenue: Box<dyn RevenueStrategy>,
    bonus: Box<dyn BonusStrategy>,
}

impl ReportEngine {
    /// Create an engine with the default strategies
    pub fn new() -> Self {
        Self::with_options(AnalyzeOptions::new())
    }

    /// Create an engine from an options object
    pub fn with_options(options: AnalyzeOptions) -> Self {
        let (revenue, bonus) = options.into_parts();
        ReportEngine { revenue, bonus }
    }

    /// Run the full analysis pipeline over one dataset
    ///
    /// # Arguments
    ///
    /// * `data` - The sellers, products, and purchase records to analyze
    ///
    /// # Returns
    ///
    /// A [`SalesReport`] with one row per input seller, ordered by
    /// descending profit, plus any advisory diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if any required collection is empty. No
    /// aggregation work happens in that case.
    pub fn run(&self, data: &SalesData) -> Result<SalesReport, InvalidInput> {
        validate(data)?;

        let (catalog, diagnostics) = ProductCatalog::build(&data.products);
        let mut ledger = SellerLedger::new(&data.sellers);

        // Accumulate per-seller totals from the purchase records
        for record in &data.purchase_records {
            let Some(stat) = ledger.stat_mut(&record.seller_id) else {
                debug!(seller_id = %record.seller_id, "record references unknown seller, skipped");
                continue;
            };

            // One sale per record, however many items it carries
            stat.sales_count += 1;

            for item in &record.items {
                let Some(product) = catalog.get(&item.sku) else {
                    debug!(sku = %item.sku, "item references unknown SKU, skipped");
                    continue;
                };

                let revenue = self.revenue.revenue(item, product);
                let cost = product.purchase_price * Decimal::from(item.quantity);
                let profit = revenue - cost;

                stat.revenue += revenue;
                stat.profit += profit;
                stat.record_quantity(&item.sku, item.quantity);
            }
        }

        // Rank by profit descending; the sort is stable, so profit ties
        // keep seller input order.
        let mut stats = ledger.into_stats();
        stats.sort_by(|a, b| b.profit.cmp(&a.profit));

        let total = stats.len();
        let rows = stats
            .iter()
            .enumerate()
            .map(|(rank, stat)| self.project_row(rank, total, stat))
            .collect();

        Ok(SalesReport { rows, diagnostics })
    }

    /// Project one ranked accumulator into its final report row
    ///
    /// Applies the bonus strategy for the rank and rounds the monetary
    /// fields; counts and top products pass through unmodified.
    fn project_row(&self, rank: usize, total: usize, stat: &SellerStat) -> ReportRow {
        let bonus = self.bonus.bonus(rank, total, stat);

        ReportRow {
            seller_id: stat.seller_id.clone(),
            name: stat.name.clone(),
            revenue: round_money(stat.revenue),
            profit: round_money(stat.profit),
            sales_count: stat.sales_count,
            top_products: stat.top_products(TOP_PRODUCTS_LIMIT),
            bonus: round_money(bonus),
        }
    }
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new()
    }
}
