//! Entity records from the name.basics dataset

use arrow::array::{Array, Int32Array, StringArray};
use arrow::record_batch::RecordBatch;
use serde::Deserialize;

use crate::error::{Result, TsvReaderError};
use crate::schema::{NULL_TOKEN, name_basics};
use crate::utils::{int32_column, string_column};

/// A person record from the name.basics dataset
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameRecord {
    /// Person identifier
    #[serde(rename = "nconst")]
    pub nconst: String,
    /// Display name
    #[serde(rename = "primaryName")]
    pub primary_name: String,
    /// Birth year, if recorded
    #[serde(rename = "birthYear", deserialize_with = "crate::models::de_year")]
    pub birth_year: Option<i32>,
    /// Death year, if recorded
    #[serde(rename = "deathYear", deserialize_with = "crate::models::de_year")]
    pub death_year: Option<i32>,
    /// Profession tags
    #[serde(rename = "primaryProfession", deserialize_with = "crate::models::de_list")]
    pub professions: Option<Vec<String>>,
    /// Titles the person is known for
    #[serde(rename = "knownForTitles", deserialize_with = "crate::models::de_list")]
    pub known_for_titles: Option<Vec<String>>,
}

impl NameRecord {
    /// Whether the record carries a concrete birth year strictly after `year`.
    #[must_use]
    pub fn born_after(&self, year: i32) -> bool {
        matches!(self.birth_year, Some(birth) if birth > year)
    }

    /// Decode every row of a record batch into typed records
    ///
    /// The batch must carry the name.basics column set. The sentinel is
    /// accepted both as an Arrow null and as literal token text.
    pub fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        let nconst = string_column(batch, name_basics::NCONST)?;
        let primary_name = string_column(batch, name_basics::PRIMARY_NAME)?;
        let birth_year = int32_column(batch, name_basics::BIRTH_YEAR)?;
        let death_year = int32_column(batch, name_basics::DEATH_YEAR)?;
        let professions = string_column(batch, name_basics::PRIMARY_PROFESSION)?;
        let known_for_titles = string_column(batch, name_basics::KNOWN_FOR_TITLES)?;

        let mut records = Vec::with_capacity(batch.num_rows());
        for row in 0..batch.num_rows() {
            records.push(Self {
                nconst: required_text(nconst, row, name_basics::NCONST)?,
                primary_name: required_text(primary_name, row, name_basics::PRIMARY_NAME)?,
                birth_year: opt_year(birth_year, row),
                death_year: opt_year(death_year, row),
                professions: opt_list(professions, row),
                known_for_titles: opt_list(known_for_titles, row),
            });
        }
        Ok(records)
    }
}

fn required_text(array: &StringArray, row: usize, column: &str) -> Result<String> {
    if array.is_null(row) {
        return Err(TsvReaderError::FormatError(format!(
            "missing value in required column '{column}'"
        )));
    }
    Ok(array.value(row).to_string())
}

fn opt_year(array: &Int32Array, row: usize) -> Option<i32> {
    if array.is_null(row) {
        None
    } else {
        Some(array.value(row))
    }
}

fn opt_list(array: &StringArray, row: usize) -> Option<Vec<String>> {
    if array.is_null(row) {
        return None;
    }
    let raw = array.value(row);
    if raw == NULL_TOKEN {
        return None;
    }
    Some(raw.split(',').map(str::to_string).collect())
}
