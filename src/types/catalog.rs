//! Seller and product reference data
//!
//! Sellers and products are read once per run and never mutated. Both are
//! keyed by string identifiers that the purchase records refer back to.
//! Identifiers may be written as JSON numbers in the input; they are kept in
//! their textual form, so `1` and `"1"` name the same seller.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Seller identifier as it appears in the input data
pub type SellerId = String;

/// Stock keeping unit, the product identifier
pub type Sku = String;

/// Deserialize an identifier given as a JSON string or number
pub(crate) fn deserialize_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Key {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    Ok(match Key::deserialize(deserializer)? {
        Key::Text(text) => text,
        Key::Unsigned(n) => n.to_string(),
        Key::Signed(n) => n.to_string(),
        Key::Float(n) => n.to_string(),
    })
}

/// A seller whose performance is being analysed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    #[serde(deserialize_with = "deserialize_key")]
    pub id: SellerId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: String,
}

/// A catalog product
///
/// Only the purchase (cost) price takes part in the analysis. Any other
/// catalog fields in the input (name, category, list price) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "deserialize_key")]
    pub sku: Sku,

    /// Cost of one unit to the shop
    pub purchase_price: Decimal,
}
