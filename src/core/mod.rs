//! Core business logic module
//!
//! This module contains the sales analysis pipeline, one submodule per stage:
//! - `validator` - Dataset and options validation
//! - `indexer` - Product and seller lookup tables
//! - `aggregator` - Per-seller accumulation over purchase records
//! - `ranker` - Profit ranking, bonus assignment and top products
//! - `formatter` - Rounding and projection into report records
//! - `engine` - The `analyze` entry point chaining the stages

pub mod aggregator;
pub mod engine;
pub mod formatter;
pub mod indexer;
pub mod ranker;
pub mod validator;

pub use aggregator::{AggregationStats, Aggregator};
pub use engine::{analyze, analyze_value};
pub use indexer::{ProductIndex, SellerIndex};
pub use ranker::TOP_PRODUCTS_LIMIT;
