pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod generate;
pub mod intersect;
pub mod logging;
pub mod reporting;
pub mod store;
pub mod table;
pub mod types;

pub use aggregate::{aggregate, Aggregator, DedupMode};
pub use error::{Result, TallyError};
pub use intersect::intersect_counts;
pub use store::CategorySet;
pub use table::render;
pub use types::{AggregatedRow, Category, CategoryPair, Field, GroupValue, IntersectionResult, Record};
