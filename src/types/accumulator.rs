//! Per-seller running totals
//!
//! A `SellerAccumulator` is created with zero-valued totals when sellers are
//! indexed, updated by the aggregator for every matching purchase record and
//! item, and finalized by the ranker (bonus and top products) before being
//! projected into a [`super::SellerReport`].

use super::catalog::{Seller, SellerId, Sku};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// SKU and cumulative quantity sold by one seller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: Sku,
    #[serde(serialize_with = "serialize_quantity")]
    pub quantity: Decimal,
}

// Whole quantities are written as JSON integers, fractional ones as floats.
fn serialize_quantity<S>(quantity: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match quantity.fract().is_zero().then(|| quantity.to_u64()).flatten() {
        Some(whole) => serializer.serialize_u64(whole),
        None => rust_decimal::serde::float::serialize(quantity, serializer),
    }
}

/// Insertion-ordered SKU -> quantity mapping
///
/// The first time a SKU is seen fixes its position. Iteration follows that
/// order, which is what makes the top-products tie-break deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductsSold {
    entries: Vec<TopProduct>,
    positions: HashMap<Sku, usize>,
}

impl ProductsSold {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units to `sku`, registering the SKU if it is new
    ///
    /// Returns the new cumulative quantity, or `None` without changing
    /// anything if the sum overflows.
    pub fn add(&mut self, sku: &str, quantity: Decimal) -> Option<Decimal> {
        match self.positions.get(sku) {
            Some(&pos) => {
                let entry = &mut self.entries[pos];
                entry.quantity = entry.quantity.checked_add(quantity)?;
                Some(entry.quantity)
            }
            None => {
                self.positions.insert(sku.to_string(), self.entries.len());
                self.entries.push(TopProduct {
                    sku: sku.to_string(),
                    quantity,
                });
                Some(quantity)
            }
        }
    }

    /// Cumulative quantity for a SKU, if it has been sold at all
    pub fn get(&self, sku: &str) -> Option<Decimal> {
        self.positions
            .get(sku)
            .map(|&pos| self.entries[pos].quantity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &TopProduct> {
        self.entries.iter()
    }
}

/// Mutable per-seller statistics built during a single analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct SellerAccumulator {
    pub seller_id: SellerId,
    pub first_name: String,
    pub last_name: String,
    pub position: String,

    /// Sum of `total_amount` over the seller's purchase records
    pub revenue: Decimal,

    /// Sum of per-item profit as computed by the revenue strategy
    pub profit: Decimal,

    /// Number of purchase records attributed to the seller
    pub sales_count: u64,

    pub products_sold: ProductsSold,

    /// Set by the ranker
    pub bonus: Decimal,

    /// Set by the ranker
    pub top_products: Vec<TopProduct>,
}

impl SellerAccumulator {
    /// Create a zero-valued accumulator for a seller
    pub fn new(seller: &Seller) -> Self {
        SellerAccumulator {
            seller_id: seller.id.clone(),
            first_name: seller.first_name.clone(),
            last_name: seller.last_name.clone(),
            position: seller.position.clone(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: ProductsSold::new(),
            bonus: Decimal::ZERO,
            top_products: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_new_accumulator_is_zeroed() {
        let seller = Seller {
            id: "s1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            position: "Senior".to_string(),
        };

        let acc = SellerAccumulator::new(&seller);

        assert_eq!(acc.seller_id, "s1");
        assert_eq!(acc.position, "Senior");
        assert_eq!(acc.revenue, Decimal::ZERO);
        assert_eq!(acc.profit, Decimal::ZERO);
        assert_eq!(acc.sales_count, 0);
        assert!(acc.products_sold.is_empty());
        assert!(acc.top_products.is_empty());
    }

    #[test]
    fn test_products_sold_accumulates_per_sku() {
        let mut sold = ProductsSold::new();
        sold.add("p1", Decimal::from(3));
        sold.add("p2", Decimal::ONE);
        assert_eq!(sold.add("p1", Decimal::from(4)), Some(Decimal::from(7)));

        assert_eq!(sold.len(), 2);
        assert_eq!(sold.get("p1"), Some(Decimal::from(7)));
        assert_eq!(sold.get("p2"), Some(Decimal::ONE));
        assert_eq!(sold.get("p3"), None);
    }

    #[test]
    fn test_products_sold_overflow_leaves_total_unchanged() {
        let mut sold = ProductsSold::new();
        sold.add("p1", Decimal::MAX);

        assert_eq!(sold.add("p1", Decimal::ONE), None);
        assert_eq!(sold.get("p1"), Some(Decimal::MAX));
    }

    #[test]
    fn test_products_sold_keeps_first_seen_order() {
        let mut sold = ProductsSold::new();
        for sku in ["c", "a", "b", "c"] {
            sold.add(sku, Decimal::ONE);
        }

        let order: Vec<&str> = sold.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[rstest]
    #[case::whole(Decimal::from(5), "{\"sku\":\"p1\",\"quantity\":5}")]
    #[case::whole_with_scale(Decimal::new(30, 1), "{\"sku\":\"p1\",\"quantity\":3}")]
    #[case::fractional(Decimal::new(15, 1), "{\"sku\":\"p1\",\"quantity\":1.5}")]
    fn test_top_product_quantity_json(#[case] quantity: Decimal, #[case] expected: &str) {
        let product = TopProduct {
            sku: "p1".to_string(),
            quantity,
        };
        assert_eq!(serde_json::to_string(&product).unwrap(), expected);
    }
}
