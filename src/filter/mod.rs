//! Expression-based filtering for TSV record batches

pub mod core;
pub mod expr;

pub use self::core::{BatchFilter, filter_record_batch};
pub use self::expr::{Expr, ExpressionFilter, LiteralValue};

use std::path::Path;
use std::sync::Arc;

use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;

use crate::config::TsvReaderConfig;
use crate::error::Result;
use crate::reader::TsvReader;
use crate::utils::DEFAULT_BATCH_SIZE;

/// Reads a TSV file in batches, keeping only rows the filter selects
///
/// Each batch is filtered as it is read, so peak memory is bounded by the
/// batch size plus the matches. Empty batches are dropped from the result.
///
/// # Arguments
/// * `path` - The file to read
/// * `schema` - The declared Arrow schema for the file's columns
/// * `batch_size` - Rows per batch, or `None` for [`DEFAULT_BATCH_SIZE`]
/// * `filter` - The filter applied to every batch
pub fn read_tsv_with_filter(
    path: &Path,
    schema: Arc<Schema>,
    batch_size: Option<usize>,
    filter: &dyn BatchFilter,
) -> Result<Vec<RecordBatch>> {
    let config = TsvReaderConfig::with_batch_size(batch_size.unwrap_or(DEFAULT_BATCH_SIZE));
    let reader = TsvReader::with_config(config);

    let mut filtered = Vec::new();
    for batch in reader.batches(path, schema)? {
        let batch = filter.filter(&batch?)?;
        if batch.num_rows() > 0 {
            filtered.push(batch);
        }
    }
    Ok(filtered)
}
