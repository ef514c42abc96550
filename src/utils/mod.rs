//! Utility functions for working with TSV record batches

use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;

use crate::config::TsvReaderConfig;
use crate::error::{Result, TsvReaderError};
use crate::reader::TsvReader;

/// Default batch size for batched TSV reading
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// Reads a TSV file into record batches with the given schema
///
/// # Arguments
/// * `path` - The file to read
/// * `schema` - The declared Arrow schema for the file's columns
/// * `batch_size` - Rows per batch, or `None` for [`DEFAULT_BATCH_SIZE`]
///
/// # Returns
/// All record batches in input order
pub fn read_tsv(
    path: &Path,
    schema: Arc<Schema>,
    batch_size: Option<usize>,
) -> Result<Vec<RecordBatch>> {
    let config = TsvReaderConfig::with_batch_size(batch_size.unwrap_or(DEFAULT_BATCH_SIZE));
    let reader = TsvReader::with_config(config);
    reader.batches(path, schema)?.collect()
}

/// Get a string column from a record batch by name
pub fn string_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a StringArray> {
    downcast_column(batch, name, "String")
}

/// Get an `Int32` column from a record batch by name
pub fn int32_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Int32Array> {
    downcast_column(batch, name, "Int32")
}

/// Get an `Int64` column from a record batch by name
pub fn int64_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Int64Array> {
    downcast_column(batch, name, "Int64")
}

fn downcast_column<'a, T: Array + 'static>(
    batch: &'a RecordBatch,
    name: &str,
    type_label: &str,
) -> Result<&'a T> {
    let column = batch.column_by_name(name).ok_or_else(|| {
        TsvReaderError::SchemaError(format!("Column '{name}' not found in record batch"))
    })?;

    column.as_any().downcast_ref::<T>().ok_or_else(|| {
        TsvReaderError::SchemaError(format!("Column '{name}' is not a {type_label} array"))
    })
}
