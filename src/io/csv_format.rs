//! CSV report output
//!
//! One row per seller in ranked order. Money columns are written with
//! exactly two decimals; top products are flattened into a single column of
//! `sku:quantity` pairs separated by `;`.
//!
//! All functions are pure apart from writing to the given writer.

use crate::types::{AnalysisError, SellerReport, TopProduct};
use std::io::Write;

const HEADER: [&str; 7] = [
    "seller_id",
    "name",
    "revenue",
    "profit",
    "sales_count",
    "bonus",
    "top_products",
];

/// Render top products as `sku:quantity;sku:quantity`
///
/// Quantities are written without trailing zeros, so `3.0` renders as `3`.
pub fn format_top_products(products: &[TopProduct]) -> String {
    products
        .iter()
        .map(|p| format!("{}:{}", p.sku, p.quantity.normalize()))
        .collect::<Vec<_>>()
        .join(";")
}

/// Write seller reports to CSV format
///
/// Rows keep the order of `reports`, which is the profit ranking.
///
/// # Errors
///
/// Returns `OutputError` if a row cannot be written or the writer cannot be
/// flushed.
pub fn write_reports_csv(
    reports: &[SellerReport],
    output: &mut dyn Write,
) -> Result<(), AnalysisError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(HEADER)?;

    for report in reports {
        writer.write_record(&[
            report.seller_id.clone(),
            report.name.clone(),
            format!("{:.2}", report.revenue),
            format!("{:.2}", report.profit),
            report.sales_count.to_string(),
            format!("{:.2}", report.bonus),
            format_top_products(&report.top_products),
        ])?;
    }

    writer
        .flush()
        .map_err(|e| AnalysisError::output_error(&e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn report(id: &str, name: &str, revenue: Decimal, top: Vec<(&str, i64)>) -> SellerReport {
        SellerReport {
            seller_id: id.to_string(),
            name: name.to_string(),
            revenue,
            profit: Decimal::new(5000, 2),
            sales_count: 3,
            top_products: top
                .into_iter()
                .map(|(sku, quantity)| TopProduct {
                    sku: sku.to_string(),
                    quantity: Decimal::from(quantity),
                })
                .collect(),
            bonus: Decimal::new(75, 1),
        }
    }

    #[rstest]
    #[case::empty(vec![], "")]
    #[case::single(vec![("p1", Decimal::from(5))], "p1:5")]
    #[case::several(
        vec![("p2", Decimal::from(9)), ("p1", Decimal::from(5)), ("p3", Decimal::from(5))],
        "p2:9;p1:5;p3:5"
    )]
    #[case::fractional(vec![("p1", Decimal::new(25, 1)), ("p2", Decimal::new(30, 1))], "p1:2.5;p2:3")]
    fn test_format_top_products(#[case] top: Vec<(&str, Decimal)>, #[case] expected: &str) {
        let products: Vec<TopProduct> = top
            .into_iter()
            .map(|(sku, quantity)| TopProduct {
                sku: sku.to_string(),
                quantity,
            })
            .collect();
        assert_eq!(format_top_products(&products), expected);
    }

    #[rstest]
    #[case::single_seller(
        vec![report("s1", "A B", Decimal::from(100), vec![("p1", 5)])],
        "seller_id,name,revenue,profit,sales_count,bonus,top_products\n\
         s1,A B,100.00,50.00,3,7.50,p1:5\n"
    )]
    #[case::keeps_given_order(
        vec![
            report("s2", "C D", Decimal::new(12345, 2), vec![]),
            report("s1", "A B", Decimal::new(5, 1), vec![("p1", 1), ("p2", 1)]),
        ],
        "seller_id,name,revenue,profit,sales_count,bonus,top_products\n\
         s2,C D,123.45,50.00,3,7.50,\n\
         s1,A B,0.50,50.00,3,7.50,p1:1;p2:1\n"
    )]
    #[case::quotes_names_with_commas(
        vec![report("s1", "Smith, Jr. Bob", Decimal::ZERO, vec![])],
        "seller_id,name,revenue,profit,sales_count,bonus,top_products\n\
         s1,\"Smith, Jr. Bob\",0.00,50.00,3,7.50,\n"
    )]
    #[case::empty_reports(
        vec![],
        "seller_id,name,revenue,profit,sales_count,bonus,top_products\n"
    )]
    fn test_write_reports_csv(#[case] reports: Vec<SellerReport>, #[case] expected_output: &str) {
        let mut output = Vec::new();
        let result = write_reports_csv(&reports, &mut output);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, expected_output);
    }
}
