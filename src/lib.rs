//! A Rust library for reading IMDb TSV datasets with typed records,
//! batched scanning, filtering, and SQLite persistence.

pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod query;
pub mod reader;
pub mod schema;
pub mod storage;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::TsvReaderConfig;
pub use error::{Result, TsvReaderError};
pub use models::{NameRecord, PrincipalRecord};
pub use reader::{TsvBatches, TsvReader, TsvScan};
pub use schema::{name_basics_schema, title_principals_schema};
pub use storage::PrincipalsStore;

// Arrow types
pub use arrow::datatypes::Schema as ArrowSchema;
pub use arrow::record_batch::RecordBatch;

// Filtering capabilities
pub use filter::{Expr, LiteralValue};
pub use filter::{ExpressionFilter, filter_record_batch, read_tsv_with_filter};

// Utility functions
pub use utils::{DEFAULT_BATCH_SIZE, read_tsv};
