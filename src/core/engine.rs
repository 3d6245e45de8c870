//! Sales analysis pipeline
//!
//! This module chains the pipeline stages into the `analyze` entry point:
//!
//! 1. `validator` - reject unusable data or options
//! 2. `indexer` - build SKU and seller lookups
//! 3. `aggregator` - fold purchase records into per-seller totals
//! 4. `ranker` - sort by profit, assign bonuses and top products
//! 5. `formatter` - round and project into `SellerReport`s
//!
//! Every call owns its lookups and accumulators, so calls are independent
//! and produce identical output for identical input.

use crate::core::aggregator::Aggregator;
use crate::core::formatter::format_reports;
use crate::core::indexer::{ProductIndex, SellerIndex};
use crate::core::ranker::rank;
use crate::core::validator;
use crate::strategy::AnalysisOptions;
use crate::types::{AnalysisError, SalesData, SellerReport};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Compute per-seller sales statistics
///
/// Returns one report per input seller, ordered by profit descending.
///
/// # Errors
///
/// - `InvalidInput` if any of the dataset's collections is empty
/// - `InvalidConfig` if either strategy is missing from `options`
/// - `ArithmeticOverflow` if a seller's totals do not fit in a `Decimal`
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use sales_analytics::{analyze, AnalysisOptions, Item, Product, PurchaseRecord, SalesData, Seller};
///
/// let data = SalesData {
///     sellers: vec![Seller {
///         id: "s1".to_string(),
///         first_name: "A".to_string(),
///         last_name: "B".to_string(),
///         position: "x".to_string(),
///     }],
///     products: vec![Product { sku: "p1".to_string(), purchase_price: Decimal::from(10) }],
///     purchase_records: vec![PurchaseRecord {
///         seller_id: "s1".to_string(),
///         total_amount: Decimal::from(100),
///         items: vec![Item {
///             sku: "p1".to_string(),
///             sale_price: Decimal::from(20),
///             quantity: Decimal::from(5),
///             discount: Decimal::ZERO,
///         }],
///     }],
/// };
///
/// let reports = analyze(&data, &AnalysisOptions::default()).unwrap();
/// assert_eq!(reports[0].profit, Decimal::from(50));
/// assert_eq!(reports[0].bonus, Decimal::new(75, 1));
/// ```
pub fn analyze(
    data: &SalesData,
    options: &AnalysisOptions,
) -> Result<Vec<SellerReport>, AnalysisError> {
    validator::validate(data)?;
    let (calculate_revenue, calculate_bonus) = validator::validate_options(Some(options))?;

    let products = ProductIndex::build(&data.products);
    let sellers = SellerIndex::build(&data.sellers);
    debug!(
        products = products.len(),
        sellers = sellers.len(),
        "indexes built"
    );

    let mut aggregator = Aggregator::new(&products, sellers, calculate_revenue);
    aggregator.process_all(&data.purchase_records)?;
    let (accumulators, _) = aggregator.finish();

    let ranked = rank(accumulators, calculate_bonus);
    Ok(format_reports(&ranked))
}

/// Compute per-seller sales statistics from untyped JSON data
///
/// `None` for either argument stands for an absent dataset or absent
/// options. The raw shape of the dataset is validated before it is
/// deserialized; a record whose fields have the wrong type is reported as
/// `InvalidInput`.
pub fn analyze_value(
    data: Option<&Value>,
    options: Option<&AnalysisOptions>,
) -> Result<Vec<SellerReport>, AnalysisError> {
    validator::validate_raw(data)?;
    let options = options.ok_or_else(|| AnalysisError::invalid_config("options are missing"))?;

    let data = match data {
        Some(value) => SalesData::deserialize(value)?,
        None => return Err(AnalysisError::invalid_input("dataset is missing")),
    };

    analyze(&data, options)
}
