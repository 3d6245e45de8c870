//! Default per-item profit strategy

use crate::types::{Item, Product};
use rust_decimal::Decimal;

/// Net profit of one purchase line
///
/// `sale_price * quantity`, minus the percentage discount on that amount,
/// minus `purchase_price * quantity`. The result may be negative when an
/// item is sold below cost.
///
/// Returns `None` if any intermediate amount overflows `Decimal`.
pub fn calculate_simple_revenue(item: &Item, product: &Product) -> Option<Decimal> {
    let total_sale = item.sale_price.checked_mul(item.quantity)?;
    let total_cost = product.purchase_price.checked_mul(item.quantity)?;
    let discount_rate = item.discount.checked_div(Decimal::ONE_HUNDRED)?;
    let discount = total_sale.checked_mul(discount_rate)?;

    total_sale.checked_sub(discount)?.checked_sub(total_cost)
}
