//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `catalog`: Sellers and products
//! - `purchase`: Purchase records and line items
//! - `dataset`: The complete input dataset
//! - `accumulator`: Per-seller running totals
//! - `report`: Final per-seller output record
//! - `error`: Error types for the analysis pipeline

pub mod accumulator;
pub mod catalog;
pub mod dataset;
pub mod error;
pub mod purchase;
pub mod report;

pub use accumulator::{ProductsSold, SellerAccumulator, TopProduct};
pub use catalog::{Product, Seller, SellerId, Sku};
pub use dataset::SalesData;
pub use error::AnalysisError;
pub use purchase::{Item, PurchaseRecord};
pub use report::SellerReport;
