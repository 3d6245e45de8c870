//! Projection of finalized accumulators into report records

use crate::types::{SellerAccumulator, SellerReport};
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for money values in reports
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Round a money value for reporting
///
/// Uses half-away-from-zero at 2 decimal places: `10.005` becomes `10.01`
/// and `-10.005` becomes `-10.01`. A result of zero is always positive, so
/// reports never show `-0.00`.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// Build the report record for one finalized seller
pub fn to_report(seller: &SellerAccumulator) -> SellerReport {
    SellerReport {
        seller_id: seller.seller_id.clone(),
        name: format!("{} {}", seller.first_name, seller.last_name),
        revenue: round_money(seller.revenue),
        profit: round_money(seller.profit),
        sales_count: seller.sales_count,
        top_products: seller.top_products.clone(),
        bonus: round_money(seller.bonus),
    }
}

/// Build report records, keeping the ranked order
pub fn format_reports(sellers: &[SellerAccumulator]) -> Vec<SellerReport> {
    sellers.iter().map(to_report).collect()
}
