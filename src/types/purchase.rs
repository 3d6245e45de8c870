//! Purchase records and their line items

use super::catalog::{deserialize_key, SellerId, Sku};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line within a purchase record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Product this line refers to
    #[serde(deserialize_with = "deserialize_key")]
    pub sku: Sku,

    /// Unit price the product was sold at
    pub sale_price: Decimal,

    /// Number of units sold, possibly fractional for goods sold by weight
    pub quantity: Decimal,

    /// Discount applied to the line, in percent (0-100)
    #[serde(default)]
    pub discount: Decimal,
}

/// One completed transaction made by one seller
///
/// `total_amount` is taken as reported by the point of sale. It is not
/// recomputed from the items, so a record still counts towards revenue
/// even when some of its items refer to unknown products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(deserialize_with = "deserialize_key")]
    pub seller_id: SellerId,
    pub total_amount: Decimal,
    #[serde(default)]
    pub items: Vec<Item>,
}
