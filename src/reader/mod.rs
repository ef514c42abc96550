//! Module for reading TSV datasets, eagerly or in bounded batches.
//!
//! Two access styles over the same file: `scan` decodes typed records one
//! line at a time through the `csv` crate, `batches` reads fixed-size Arrow
//! record batches with a declared schema. Batch boundaries never split a
//! record. File handles are scoped to the returned iterator and released
//! when it drops.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::csv::ReaderBuilder;
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::config::TsvReaderConfig;
use crate::error::util::safe_open_file;
use crate::error::{Result, TsvReaderError};

/// A reader for TSV dataset files
#[derive(Debug, Clone)]
pub struct TsvReader {
    config: TsvReaderConfig,
}

impl Default for TsvReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TsvReader {
    /// Creates a new reader with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: TsvReaderConfig::default(),
        }
    }

    /// Creates a new reader with the given configuration
    #[must_use]
    pub fn with_config(config: TsvReaderConfig) -> Self {
        Self { config }
    }

    /// Scans the file line by line, decoding each row into a typed record
    ///
    /// The header row is consumed to map columns by name. A row with the
    /// wrong field count or a field that fails to decode is a fatal error
    /// surfaced by the iterator.
    pub fn scan<T>(&self, path: &Path) -> Result<TsvScan<T>>
    where
        T: DeserializeOwned,
    {
        let file = safe_open_file(path, "TSV scan")?;
        log::debug!("Scanning {}", path.display());

        // IMDb dumps are unquoted; a stray quote character is data.
        let reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(self.config.has_header)
            .flexible(false)
            .quoting(false)
            .from_reader(file);

        Ok(TsvScan {
            inner: reader.into_deserialize(),
        })
    }

    /// Reads the file as fixed-size record batches with a declared schema
    ///
    /// The sentinel token decodes to an Arrow null; any other text that does
    /// not parse under the declared column type is a fatal error.
    pub fn batches(&self, path: &Path, schema: Arc<Schema>) -> Result<TsvBatches> {
        let file = safe_open_file(path, "batched TSV read")?;
        log::debug!(
            "Reading {} in batches of {}",
            path.display(),
            self.config.batch_size
        );

        let null_regex = Regex::new(&format!("^{}$", regex::escape(&self.config.null_token)))
            .map_err(|e| {
                TsvReaderError::FormatError(format!("invalid missing-value token: {e}"))
            })?;

        let reader = ReaderBuilder::new(schema)
            .with_header(self.config.has_header)
            .with_delimiter(self.config.delimiter)
            .with_null_regex(null_regex)
            .with_batch_size(self.config.batch_size)
            .build(file)?;

        Ok(TsvBatches { inner: reader })
    }
}

/// Iterator over typed records from an eager line-by-line scan
pub struct TsvScan<T> {
    inner: csv::DeserializeRecordsIntoIter<File, T>,
}

impl<T> std::fmt::Debug for TsvScan<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TsvScan").finish_non_exhaustive()
    }
}

impl<T> Iterator for TsvScan<T>
where
    T: DeserializeOwned,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|record| record.map_err(TsvReaderError::from))
    }
}

/// Iterator over fixed-size record batches
#[derive(Debug)]
pub struct TsvBatches {
    inner: arrow::csv::Reader<File>,
}

impl Iterator for TsvBatches {
    type Item = Result<RecordBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|batch| batch.map_err(TsvReaderError::from))
    }
}
