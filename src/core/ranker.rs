//! Seller ranking and bonus assignment
//!
//! Sellers are ordered by profit, highest first. The sort is stable, so
//! sellers with equal profit keep their input order. Ranks are 0-based and
//! assigned after sorting; the bonus strategy sees each seller's rank along
//! with the total number of sellers.

use crate::strategy::BonusStrategy;
use crate::types::{ProductsSold, SellerAccumulator, TopProduct};

/// Maximum number of entries in a seller's top products
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Sort sellers by profit and finalize bonus and top products
///
/// Consumes the accumulators in input order and returns them in rank order.
pub fn rank(
    mut sellers: Vec<SellerAccumulator>,
    calculate_bonus: &BonusStrategy,
) -> Vec<SellerAccumulator> {
    sellers.sort_by(|a, b| b.profit.cmp(&a.profit));

    let total = sellers.len();
    for (index, seller) in sellers.iter_mut().enumerate() {
        seller.bonus = calculate_bonus(index, total, &*seller);
        seller.top_products = top_products(&seller.products_sold, TOP_PRODUCTS_LIMIT);
    }

    sellers
}

/// Best-selling products, quantity descending, at most `limit` entries
///
/// Equal quantities keep the order in which the SKUs were first sold.
pub fn top_products(products_sold: &ProductsSold, limit: usize) -> Vec<TopProduct> {
    let mut products: Vec<TopProduct> = products_sold.iter().cloned().collect();
    products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    products.truncate(limit);
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::calculate_bonus_by_profit;
    use crate::types::Seller;
    use rust_decimal::Decimal;

    fn accumulator(id: &str, profit: i64) -> SellerAccumulator {
        let mut acc = SellerAccumulator::new(&Seller {
            id: id.to_string(),
            first_name: "F".to_string(),
            last_name: "L".to_string(),
            position: "P".to_string(),
        });
        acc.profit = Decimal::new(profit, 0);
        acc
    }

    fn default_bonus() -> BonusStrategy {
        Box::new(calculate_bonus_by_profit)
    }

    fn ids(sellers: &[SellerAccumulator]) -> Vec<&str> {
        sellers.iter().map(|s| s.seller_id.as_str()).collect()
    }

    #[test]
    fn test_rank_sorts_by_profit_descending() {
        let ranked = rank(
            vec![accumulator("a", 10), accumulator("b", 30), accumulator("c", 20)],
            &default_bonus(),
        );

        assert_eq!(ids(&ranked), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_rank_is_stable_for_equal_profit() {
        let ranked = rank(
            vec![
                accumulator("a", 5),
                accumulator("b", 10),
                accumulator("c", 5),
                accumulator("d", 10),
            ],
            &default_bonus(),
        );

        assert_eq!(ids(&ranked), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_rank_assigns_default_bonus_by_position() {
        let ranked = rank(
            vec![
                accumulator("a", 100),
                accumulator("b", 200),
                accumulator("c", 300),
                accumulator("d", 400),
                accumulator("e", 500),
            ],
            &default_bonus(),
        );

        let bonuses: Vec<Decimal> = ranked.iter().map(|s| s.bonus).collect();
        assert_eq!(
            bonuses,
            vec![
                Decimal::new(75, 0), // 15% of 500
                Decimal::new(40, 0), // 10% of 400
                Decimal::new(30, 0), // 10% of 300
                Decimal::new(10, 0), // 5% of 200
                Decimal::ZERO,       // last
            ]
        );
    }

    #[test]
    fn test_rank_passes_index_and_total_to_strategy() {
        let strategy: BonusStrategy = Box::new(|index: usize, total: usize, _: &SellerAccumulator| {
            Decimal::from(index * 100 + total)
        });
        let ranked = rank(vec![accumulator("a", 1), accumulator("b", 2)], &strategy);

        assert_eq!(ranked[0].bonus, Decimal::from(2));
        assert_eq!(ranked[1].bonus, Decimal::from(102));
    }

    #[test]
    fn test_top_products_sorted_and_stable() {
        let mut sold = ProductsSold::new();
        for (sku, quantity) in [("x", 2), ("y", 5), ("z", 2), ("w", 5)] {
            sold.add(sku, Decimal::from(quantity));
        }

        let top = top_products(&sold, TOP_PRODUCTS_LIMIT);
        let skus: Vec<&str> = top.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["y", "w", "x", "z"]);
    }

    #[test]
    fn test_top_products_truncated_to_limit() {
        let mut sold = ProductsSold::new();
        for i in 0..15 {
            sold.add(&format!("p{i}"), Decimal::from(i));
        }

        let top = top_products(&sold, TOP_PRODUCTS_LIMIT);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].sku, "p14");
        assert_eq!(top[9].sku, "p5");
    }

    #[test]
    fn test_top_products_compares_fractional_quantities() {
        let mut sold = ProductsSold::new();
        sold.add("a", Decimal::new(25, 1));
        sold.add("b", Decimal::from(3));
        sold.add("c", Decimal::new(250, 2));

        let top = top_products(&sold, TOP_PRODUCTS_LIMIT);
        let skus: Vec<&str> = top.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rank_fills_top_products() {
        let mut acc = accumulator("a", 1);
        acc.products_sold.add("p1", Decimal::from(3));
        acc.products_sold.add("p2", Decimal::from(7));

        let ranked = rank(vec![acc], &default_bonus());
        assert_eq!(
            ranked[0].top_products,
            vec![
                TopProduct { sku: "p2".to_string(), quantity: Decimal::from(7) },
                TopProduct { sku: "p1".to_string(), quantity: Decimal::from(3) },
            ]
        );
    }

    #[test]
    fn test_rank_empty_list() {
        assert!(rank(Vec::new(), &default_bonus()).is_empty());
    }
}
