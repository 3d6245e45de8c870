//! Pluggable computation strategies
//!
//! The pipeline does not hardcode how item profit or seller bonuses are
//! computed. Both are injected through [`AnalysisOptions`] as boxed
//! closures, so callers can pass plain functions or closures capturing
//! their own parameters (rates, thresholds, etc.).
//!
//! The default strategies reproduce the standard shop policy:
//! - [`calculate_simple_revenue`] - discounted sale amount minus cost
//! - [`calculate_bonus_by_profit`] - 15% / 10% / 5% / 0% of profit by rank

use crate::types::{Item, Product, SellerAccumulator};
use rust_decimal::Decimal;
use std::fmt;

pub mod bonus;
pub mod revenue;

pub use bonus::calculate_bonus_by_profit;
pub use revenue::calculate_simple_revenue;

/// Computes the net profit of one item given its product
///
/// `None` means the profit cannot be represented and aborts the run with
/// [`crate::AnalysisError::ArithmeticOverflow`].
pub type RevenueStrategy = Box<dyn Fn(&Item, &Product) -> Option<Decimal> + Send + Sync>;

/// Computes the bonus for a seller at `index` out of `total` ranked sellers
pub type BonusStrategy = Box<dyn Fn(usize, usize, &SellerAccumulator) -> Decimal + Send + Sync>;

/// Strategies supplied to [`crate::analyze`]
///
/// Both strategies are required for an analysis run; a missing one is
/// reported as [`crate::AnalysisError::InvalidConfig`]. `Default` carries
/// the standard strategies, [`AnalysisOptions::empty`] carries none.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use sales_analytics::strategy::AnalysisOptions;
///
/// // Flat 1% bonus for everybody, default profit calculation
/// let options = AnalysisOptions::default()
///     .with_bonus(|_, _, seller| seller.profit * Decimal::new(1, 2));
/// assert!(options.calculate_bonus.is_some());
/// ```
pub struct AnalysisOptions {
    pub calculate_revenue: Option<RevenueStrategy>,
    pub calculate_bonus: Option<BonusStrategy>,
}

impl AnalysisOptions {
    /// Options with no strategies configured
    pub fn empty() -> Self {
        AnalysisOptions {
            calculate_revenue: None,
            calculate_bonus: None,
        }
    }

    /// Replace the revenue strategy
    pub fn with_revenue<F>(mut self, f: F) -> Self
    where
        F: Fn(&Item, &Product) -> Option<Decimal> + Send + Sync + 'static,
    {
        self.calculate_revenue = Some(Box::new(f));
        self
    }

    /// Replace the bonus strategy
    pub fn with_bonus<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, usize, &SellerAccumulator) -> Decimal + Send + Sync + 'static,
    {
        self.calculate_bonus = Some(Box::new(f));
        self
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions::empty()
            .with_revenue(calculate_simple_revenue)
            .with_bonus(calculate_bonus_by_profit)
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .finish()
    }
}
