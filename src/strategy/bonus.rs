//! Default rank-based bonus strategy

use crate::types::SellerAccumulator;
use rust_decimal::Decimal;

/// Bonus for the seller at `index` (0-based, profit descending) of `total`
///
/// | rank                      | share of profit |
/// |---------------------------|-----------------|
/// | first                     | 15%             |
/// | second and third          | 10%             |
/// | any other except the last | 5%              |
/// | last                      | 0%              |
///
/// The rules are checked top to bottom, so in lists of three or fewer
/// sellers the last one still gets the 15% or 10% of its position.
pub fn calculate_bonus_by_profit(index: usize, total: usize, seller: &SellerAccumulator) -> Decimal {
    let percent = if index == 0 {
        15
    } else if index == 1 || index == 2 {
        10
    } else if index + 1 < total {
        5
    } else {
        0
    };

    seller.profit * Decimal::new(percent, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Seller;
    use rstest::rstest;

    fn seller_with_profit(profit: Decimal) -> SellerAccumulator {
        let mut acc = SellerAccumulator::new(&Seller {
            id: "s1".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            position: "x".to_string(),
        });
        acc.profit = profit;
        acc
    }

    #[rstest]
    #[case::first_of_many(0, 10, Decimal::new(150, 0))]
    #[case::second(1, 10, Decimal::new(100, 0))]
    #[case::third(2, 10, Decimal::new(100, 0))]
    #[case::middle(3, 10, Decimal::new(50, 0))]
    #[case::second_to_last(8, 10, Decimal::new(50, 0))]
    #[case::last(9, 10, Decimal::ZERO)]
    #[case::single_seller_gets_first_place(0, 1, Decimal::new(150, 0))]
    #[case::last_of_two_is_second_place(1, 2, Decimal::new(100, 0))]
    #[case::last_of_three_is_third_place(2, 3, Decimal::new(100, 0))]
    #[case::last_of_four(3, 4, Decimal::ZERO)]
    fn test_bonus_by_rank(#[case] index: usize, #[case] total: usize, #[case] expected: Decimal) {
        let seller = seller_with_profit(Decimal::new(1000, 0));
        assert_eq!(calculate_bonus_by_profit(index, total, &seller), expected);
    }

    #[test]
    fn test_bonus_scales_fractional_profit() {
        let seller = seller_with_profit(Decimal::new(50, 0));
        assert_eq!(calculate_bonus_by_profit(0, 1, &seller), Decimal::new(75, 1));
    }

    #[test]
    fn test_negative_profit_gives_negative_bonus() {
        let seller = seller_with_profit(Decimal::new(-200, 0));
        assert_eq!(calculate_bonus_by_profit(3, 5, &seller), Decimal::new(-10, 0));
    }
}
