//! Input validation
//!
//! Pass/fail checks run before any computation. Validation only looks at the
//! overall shape of the dataset and the options: individual records are not
//! inspected here, since records that reference unknown sellers or products
//! are skipped later during aggregation.

use crate::strategy::{AnalysisOptions, BonusStrategy, RevenueStrategy};
use crate::types::{AnalysisError, SalesData};
use serde_json::Value;

const COLLECTIONS: [&str; 3] = ["sellers", "products", "purchase_records"];

/// Validate an untyped dataset before it is deserialized
///
/// # Errors
///
/// Returns `InvalidInput` if the dataset is absent or not an object, if any
/// of `sellers`, `products`, `purchase_records` is missing or not an array,
/// or if any of them is empty.
pub fn validate_raw(data: Option<&Value>) -> Result<(), AnalysisError> {
    let object = match data {
        None | Some(Value::Null) => return Err(AnalysisError::invalid_input("dataset is missing")),
        Some(Value::Object(object)) => object,
        Some(_) => return Err(AnalysisError::invalid_input("dataset must be an object")),
    };

    for name in COLLECTIONS {
        match object.get(name) {
            Some(Value::Array(items)) if items.is_empty() => {
                return Err(AnalysisError::invalid_input(&format!(
                    "{name} must not be empty"
                )))
            }
            Some(Value::Array(_)) => {}
            _ => {
                return Err(AnalysisError::invalid_input(&format!(
                    "{name} must be an array"
                )))
            }
        }
    }

    Ok(())
}

/// Validate a typed dataset
///
/// # Errors
///
/// Returns `InvalidInput` if `sellers`, `products` or `purchase_records` is
/// empty.
pub fn validate(data: &SalesData) -> Result<(), AnalysisError> {
    let lengths = [
        data.sellers.len(),
        data.products.len(),
        data.purchase_records.len(),
    ];

    for (name, len) in COLLECTIONS.iter().zip(lengths) {
        if len == 0 {
            return Err(AnalysisError::invalid_input(&format!(
                "{name} must not be empty"
            )));
        }
    }

    Ok(())
}

/// Validate the analysis options and return both strategies
///
/// # Errors
///
/// Returns `InvalidConfig` if the options are absent or either strategy is
/// not set.
pub fn validate_options(
    options: Option<&AnalysisOptions>,
) -> Result<(&RevenueStrategy, &BonusStrategy), AnalysisError> {
    let options = options.ok_or_else(|| AnalysisError::invalid_config("options are missing"))?;

    let revenue = options
        .calculate_revenue
        .as_ref()
        .ok_or_else(|| AnalysisError::invalid_config("calculateRevenue strategy is missing"))?;

    let bonus = options
        .calculate_bonus
        .as_ref()
        .ok_or_else(|| AnalysisError::invalid_config("calculateBonus strategy is missing"))?;

    Ok((revenue, bonus))
}
