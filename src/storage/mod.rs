//! SQLite persistence for role-assignment records.
//!
//! Streams a title.principals file into a `principals` table in fixed-size
//! batches and answers distinct-category queries from the table alone,
//! independent of the source file. The connection is an explicit handle
//! owned by the store and closed when the store drops; there is no ambient
//! or shared connection.

use std::path::Path;

use arrow::array::{Array, ArrayRef, Int32Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Schema};
use arrow::record_batch::RecordBatch;
use log::info;
use rusqlite::types::Value;
use rusqlite::{Connection, params_from_iter};
use rustc_hash::FxHashSet;

use crate::config::TsvReaderConfig;
use crate::error::{Result, TsvReaderError};
use crate::reader::TsvReader;
use crate::schema::{NULL_TOKEN, title_principals, title_principals_schema};
use crate::utils::DEFAULT_BATCH_SIZE;

/// Name of the persisted role-assignment table
pub const PRINCIPALS_TABLE: &str = "principals";

/// SQLite-backed store for role-assignment records
#[derive(Debug)]
pub struct PrincipalsStore {
    conn: Connection,
}

impl PrincipalsStore {
    /// Opens (or creates) the database file at the given path
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }

    /// Opens an in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Returns the underlying connection for ad-hoc queries over the table
    #[must_use]
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Loads a title.principals file into the `principals` table
    ///
    /// Reads the file in fixed-size batches and appends each batch in its
    /// own transaction. The table is created from the first batch's column
    /// set if absent; repeated loads append rather than replace, so loading
    /// the same file twice doubles the row count. Sentinel-valued fields
    /// are stored as SQL NULL.
    ///
    /// # Returns
    /// The number of rows inserted by this call
    pub fn load_tsv(&mut self, path: &Path, batch_size: Option<usize>) -> Result<usize> {
        let config = TsvReaderConfig::with_batch_size(batch_size.unwrap_or(DEFAULT_BATCH_SIZE));
        let reader = TsvReader::with_config(config);

        let mut table_ready = false;
        let mut inserted = 0usize;
        for batch in reader.batches(path, title_principals_schema())? {
            let batch = batch?;
            if !table_ready {
                self.create_table_if_absent(batch.schema().as_ref())?;
                table_ready = true;
            }
            inserted += self.append_batch(&batch)?;
        }

        info!(
            "Loaded {inserted} rows from {} into '{PRINCIPALS_TABLE}'",
            path.display()
        );
        Ok(inserted)
    }

    /// Returns the distinct category values in the persisted table
    pub fn distinct_categories(&self) -> Result<FxHashSet<String>> {
        let sql = format!(
            "SELECT DISTINCT {} FROM {PRINCIPALS_TABLE}",
            title_principals::CATEGORY
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut categories = FxHashSet::default();
        for category in rows {
            categories.insert(category?);
        }
        Ok(categories)
    }

    /// Returns the number of rows in the persisted table
    pub fn row_count(&self) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {PRINCIPALS_TABLE}");
        Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
    }

    fn create_table_if_absent(&self, schema: &Schema) -> Result<()> {
        let mut columns = Vec::with_capacity(schema.fields().len());
        for field in schema.fields() {
            columns.push(format!(
                "{} {}",
                field.name(),
                sql_column_type(field.data_type())?
            ));
        }

        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {PRINCIPALS_TABLE} ({})",
            columns.join(", ")
        );
        self.conn.execute_batch(&sql)?;
        Ok(())
    }

    fn append_batch(&mut self, batch: &RecordBatch) -> Result<usize> {
        let schema = batch.schema();
        let column_names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        let placeholders: Vec<String> = (1..=column_names.len()).map(|i| format!("?{i}")).collect();
        let sql = format!(
            "INSERT INTO {PRINCIPALS_TABLE} ({}) VALUES ({})",
            column_names.join(", "),
            placeholders.join(", ")
        );

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(&sql)?;
            for row in 0..batch.num_rows() {
                let mut values = Vec::with_capacity(batch.num_columns());
                for column in batch.columns() {
                    values.push(sql_value(column, row)?);
                }
                stmt.execute(params_from_iter(values))?;
            }
        }
        tx.commit()?;

        Ok(batch.num_rows())
    }
}

fn sql_column_type(data_type: &DataType) -> Result<&'static str> {
    match data_type {
        DataType::Utf8 => Ok("TEXT"),
        DataType::Int32 | DataType::Int64 => Ok("INTEGER"),
        other => Err(TsvReaderError::SchemaError(format!(
            "No SQLite column type for Arrow type {other}"
        ))),
    }
}

fn sql_value(column: &ArrayRef, row: usize) -> Result<Value> {
    if column.is_null(row) {
        return Ok(Value::Null);
    }

    match column.data_type() {
        DataType::Utf8 => {
            let array = downcast_value_array::<StringArray>(column, "String")?;
            let text = array.value(row);
            // The sentinel may survive as literal token text in string columns.
            if text == NULL_TOKEN {
                Ok(Value::Null)
            } else {
                Ok(Value::Text(text.to_string()))
            }
        }
        DataType::Int32 => {
            let array = downcast_value_array::<Int32Array>(column, "Int32")?;
            Ok(Value::Integer(i64::from(array.value(row))))
        }
        DataType::Int64 => {
            let array = downcast_value_array::<Int64Array>(column, "Int64")?;
            Ok(Value::Integer(array.value(row)))
        }
        other => Err(TsvReaderError::SchemaError(format!(
            "No SQLite value mapping for Arrow type {other}"
        ))),
    }
}

fn downcast_value_array<'a, T: Array + 'static>(
    column: &'a ArrayRef,
    type_label: &str,
) -> Result<&'a T> {
    column.as_any().downcast_ref::<T>().ok_or_else(|| {
        TsvReaderError::SchemaError(format!("Column is not a {type_label} array"))
    })
}
