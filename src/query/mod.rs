//! Dataset queries: filtering entity records and collecting categories
//!
//! Each operation exists in two interchangeable forms: an eager typed scan
//! and a bounded-batch read. For the same input the two forms produce the
//! same results; the batched form bounds peak memory by the batch size.

use std::path::Path;

use log::info;
use rustc_hash::FxHashSet;

use crate::config::TsvReaderConfig;
use crate::error::Result;
use crate::filter::{Expr, ExpressionFilter, LiteralValue, read_tsv_with_filter};
use crate::models::{NameRecord, PrincipalRecord};
use crate::reader::TsvReader;
use crate::schema::{name_basics, name_basics_schema, title_principals, title_principals_schema};
use crate::utils::{DEFAULT_BATCH_SIZE, string_column};

/// Collects records of deceased people born strictly after `threshold`
///
/// Eager line-by-line scan. A record matches when its death year is
/// recorded and its birth year is a concrete integer greater than
/// `threshold`; matches are returned in input order.
pub fn collect_deceased_born_after(path: &Path, threshold: i32) -> Result<Vec<NameRecord>> {
    let reader = TsvReader::new();

    let mut matches = Vec::new();
    for record in reader.scan::<NameRecord>(path)? {
        let record = record?;
        if record.death_year.is_some() && record.born_after(threshold) {
            matches.push(record);
        }
    }

    info!(
        "Scan of {} found {} deceased people born after {threshold}",
        path.display(),
        matches.len()
    );
    Ok(matches)
}

/// Collects records of deceased people born strictly after `threshold`
///
/// Bounded-batch form of [`collect_deceased_born_after`]: reads fixed-size
/// record batches, filters each batch, and concatenates the per-batch
/// matches in input order.
pub fn collect_deceased_born_after_batched(
    path: &Path,
    threshold: i32,
    batch_size: Option<usize>,
) -> Result<Vec<NameRecord>> {
    let filter = ExpressionFilter::new(Expr::And(vec![
        Expr::IsNotNull(name_basics::DEATH_YEAR.to_string()),
        Expr::Gt(
            name_basics::BIRTH_YEAR.to_string(),
            LiteralValue::Int(i64::from(threshold)),
        ),
    ]));

    let batches = read_tsv_with_filter(path, name_basics_schema(), batch_size, &filter)?;

    let mut matches = Vec::new();
    for batch in &batches {
        matches.extend(NameRecord::from_record_batch(batch)?);
    }

    info!(
        "Batched read of {} found {} deceased people born after {threshold}",
        path.display(),
        matches.len()
    );
    Ok(matches)
}

/// Collects the distinct set of category values across all role assignments
///
/// Eager line-by-line scan.
pub fn collect_categories(path: &Path) -> Result<FxHashSet<String>> {
    let reader = TsvReader::new();

    let mut categories = FxHashSet::default();
    for record in reader.scan::<PrincipalRecord>(path)? {
        categories.insert(record?.category);
    }

    info!(
        "Scan of {} found {} distinct categories",
        path.display(),
        categories.len()
    );
    Ok(categories)
}

/// Collects the distinct set of category values across all role assignments
///
/// Bounded-batch form of [`collect_categories`]; only the category column
/// is touched.
pub fn collect_categories_batched(
    path: &Path,
    batch_size: Option<usize>,
) -> Result<FxHashSet<String>> {
    let config = TsvReaderConfig::with_batch_size(batch_size.unwrap_or(DEFAULT_BATCH_SIZE));
    let reader = TsvReader::with_config(config);

    let mut categories = FxHashSet::default();
    for batch in reader.batches(path, title_principals_schema())? {
        let batch = batch?;
        let column = string_column(&batch, title_principals::CATEGORY)?;
        for value in column.iter().flatten() {
            categories.insert(value.to_string());
        }
    }

    info!(
        "Batched read of {} found {} distinct categories",
        path.display(),
        categories.len()
    );
    Ok(categories)
}
