//! Output record of the analysis

use super::accumulator::TopProduct;
use super::catalog::SellerId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Final, immutable statistics for one seller
///
/// Money fields are already rounded to 2 decimal places and serialize as
/// JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: SellerId,

    /// First and last name separated by a single space
    pub name: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,

    pub sales_count: u64,

    /// Up to ten best-selling products, quantity descending
    pub top_products: Vec<TopProduct>,

    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
}
