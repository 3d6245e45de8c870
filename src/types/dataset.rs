//! The complete input dataset

use super::catalog::{Product, Seller};
use super::purchase::PurchaseRecord;
use serde::{Deserialize, Serialize};

/// Sellers, products and purchase records for one analysis run
///
/// All three collections are required and must be non-empty; see
/// [`crate::core::validator`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}
