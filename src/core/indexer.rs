//! Lookup tables for the aggregation pass
//!
//! Two indexes are built, one pass each:
//! - `ProductIndex`: SKU -> product, borrowed from the dataset
//! - `SellerIndex`: seller id -> zero-valued `SellerAccumulator`
//!
//! Both are owned by a single analysis run. Duplicate keys follow
//! last-write-wins: the later product or seller is the one found by lookups.

use crate::types::{Product, Seller, SellerAccumulator, SellerId};
use std::collections::HashMap;
use tracing::warn;

/// SKU -> product lookup
#[derive(Debug)]
pub struct ProductIndex<'a> {
    products: HashMap<&'a str, &'a Product>,
}

impl<'a> ProductIndex<'a> {
    /// Index products by SKU
    pub fn build(products: &'a [Product]) -> Self {
        let mut index = HashMap::with_capacity(products.len());

        for product in products {
            if index.insert(product.sku.as_str(), product).is_some() {
                warn!(sku = %product.sku, "duplicate SKU, later product wins");
            }
        }

        ProductIndex { products: index }
    }

    pub fn get(&self, sku: &str) -> Option<&'a Product> {
        self.products.get(sku).copied()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Seller id -> accumulator lookup
///
/// Keeps one accumulator per input seller, in input order, so a duplicated
/// seller id still produces one output record per occurrence. Lookups by id
/// resolve to the last occurrence.
#[derive(Debug)]
pub struct SellerIndex {
    accumulators: Vec<SellerAccumulator>,
    positions: HashMap<SellerId, usize>,
}

impl SellerIndex {
    /// Create a zero-valued accumulator for every seller
    pub fn build(sellers: &[Seller]) -> Self {
        let mut accumulators = Vec::with_capacity(sellers.len());
        let mut positions = HashMap::with_capacity(sellers.len());

        for seller in sellers {
            if positions
                .insert(seller.id.clone(), accumulators.len())
                .is_some()
            {
                warn!(seller_id = %seller.id, "duplicate seller id, later seller wins");
            }
            accumulators.push(SellerAccumulator::new(seller));
        }

        SellerIndex {
            accumulators,
            positions,
        }
    }

    /// Accumulator for a seller id, if the seller is known
    pub fn get_mut(&mut self, seller_id: &str) -> Option<&mut SellerAccumulator> {
        let pos = *self.positions.get(seller_id)?;
        self.accumulators.get_mut(pos)
    }

    pub fn get(&self, seller_id: &str) -> Option<&SellerAccumulator> {
        let pos = *self.positions.get(seller_id)?;
        self.accumulators.get(pos)
    }

    /// Number of accumulators, one per input seller
    pub fn len(&self) -> usize {
        self.accumulators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accumulators.is_empty()
    }

    /// Release the accumulators in input order
    pub fn into_accumulators(self) -> Vec<SellerAccumulator> {
        self.accumulators
    }
}
