//! Purchase record aggregation
//!
//! Walks the purchase records once, in input order, and folds each one into
//! the accumulator of its seller. Records for unknown sellers and items for
//! unknown SKUs are skipped without error:
//!
//! - unknown seller: the whole record is ignored
//! - unknown SKU: only that item is ignored, the record's `total_amount` and
//!   sale still count towards the seller
//!
//! All sums use checked arithmetic. An overflow aborts the pass with
//! `ArithmeticOverflow`.

use crate::core::indexer::{ProductIndex, SellerIndex};
use crate::strategy::RevenueStrategy;
use crate::types::{AnalysisError, PurchaseRecord, SellerAccumulator};
use tracing::{debug, info};

/// Counters describing what an aggregation pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationStats {
    pub records_counted: usize,
    pub records_skipped: usize,
    pub items_counted: usize,
    pub items_skipped: usize,
}

/// Accumulates per-seller statistics from purchase records
pub struct Aggregator<'a> {
    products: &'a ProductIndex<'a>,
    sellers: SellerIndex,
    calculate_revenue: &'a RevenueStrategy,
    stats: AggregationStats,
}

impl<'a> Aggregator<'a> {
    pub fn new(
        products: &'a ProductIndex<'a>,
        sellers: SellerIndex,
        calculate_revenue: &'a RevenueStrategy,
    ) -> Self {
        Aggregator {
            products,
            sellers,
            calculate_revenue,
            stats: AggregationStats::default(),
        }
    }

    /// Fold one purchase record into its seller's accumulator
    ///
    /// Returns `Ok(false)` if the record was skipped because its seller is
    /// unknown.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the seller's revenue, profit or a
    /// product quantity no longer fits in a `Decimal`, or if the revenue
    /// strategy reports an unrepresentable profit.
    pub fn process(&mut self, record: &PurchaseRecord) -> Result<bool, AnalysisError> {
        let Some(seller) = self.sellers.get_mut(&record.seller_id) else {
            debug!(seller_id = %record.seller_id, "skipping purchase record for unknown seller");
            self.stats.records_skipped += 1;
            return Ok(false);
        };

        seller.revenue = seller
            .revenue
            .checked_add(record.total_amount)
            .ok_or_else(|| AnalysisError::arithmetic_overflow("revenue", &seller.seller_id))?;
        seller.sales_count += 1;
        self.stats.records_counted += 1;

        for item in &record.items {
            let Some(product) = self.products.get(&item.sku) else {
                debug!(
                    seller_id = %record.seller_id,
                    sku = %item.sku,
                    "skipping item for unknown product"
                );
                self.stats.items_skipped += 1;
                continue;
            };

            seller.profit = (self.calculate_revenue)(item, product)
                .and_then(|profit| seller.profit.checked_add(profit))
                .ok_or_else(|| AnalysisError::arithmetic_overflow("profit", &seller.seller_id))?;
            seller
                .products_sold
                .add(&item.sku, item.quantity)
                .ok_or_else(|| {
                    AnalysisError::arithmetic_overflow("quantity sold", &seller.seller_id)
                })?;
            self.stats.items_counted += 1;
        }

        Ok(true)
    }

    /// Process every record in order, stopping at the first error
    pub fn process_all(&mut self, records: &[PurchaseRecord]) -> Result<(), AnalysisError> {
        for record in records {
            self.process(record)?;
        }
        Ok(())
    }

    /// Finish aggregation, releasing the accumulators in seller input order
    pub fn finish(self) -> (Vec<SellerAccumulator>, AggregationStats) {
        info!(
            records_counted = self.stats.records_counted,
            records_skipped = self.stats.records_skipped,
            items_counted = self.stats.items_counted,
            items_skipped = self.stats.items_skipped,
            "aggregation complete"
        );
        (self.sellers.into_accumulators(), self.stats)
    }
}
