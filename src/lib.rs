//! Sales Analytics Library
//! # Overview
//!
//! This library computes per-seller sales performance statistics (revenue,
//! profit, bonus and top products) from sellers, products and purchase
//! records held in memory.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Seller, Product, PurchaseRecord, etc.)
//! - [`strategy`] - Pluggable profit and bonus calculations
//! - [`core`] - The analysis pipeline:
//!   - [`core::validator`] - Rejects unusable datasets and options
//!   - [`core::indexer`] - SKU and seller lookup tables
//!   - [`core::aggregator`] - Per-seller accumulation over purchase records
//!   - [`core::ranker`] - Profit ranking, bonuses and top products
//!   - [`core::formatter`] - Rounding and projection into reports
//! - [`io`] - JSON input, JSON and CSV report output
//! - [`cli`] - CLI arguments parsing
//! - [`report`] - Load, analyze and write in one call
//!
//! # Report Fields
//!
//! Each seller yields exactly one report, ordered by profit descending:
//!
//! - `revenue`: Sum of the seller's purchase record totals
//! - `profit`: Sum of per-item profit from the revenue strategy
//! - `sales_count`: Number of purchase records attributed to the seller
//! - `top_products`: Up to ten SKUs by quantity sold
//! - `bonus`: Result of the bonus strategy for the seller's rank
//!
//! Money values are rounded half away from zero to 2 decimal places.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod report;
pub mod strategy;
pub mod types;

pub use crate::core::{analyze, analyze_value};
pub use strategy::{
    calculate_bonus_by_profit, calculate_simple_revenue, AnalysisOptions, BonusStrategy,
    RevenueStrategy,
};
pub use types::{
    AnalysisError, Item, Product, PurchaseRecord, SalesData, Seller, SellerAccumulator,
    SellerReport, TopProduct,
};
