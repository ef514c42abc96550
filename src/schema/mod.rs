//! Arrow schema definitions for the supported IMDb datasets.

use arrow::datatypes::{DataType, Field, Schema};
use std::sync::Arc;

/// Token marking an absent field value in the TSV dumps.
///
/// The two-character literal `\N`, distinct from an empty string or zero.
pub const NULL_TOKEN: &str = r"\N";

/// Column names of the name.basics dataset
pub mod name_basics {
    pub const NCONST: &str = "nconst";
    pub const PRIMARY_NAME: &str = "primaryName";
    pub const BIRTH_YEAR: &str = "birthYear";
    pub const DEATH_YEAR: &str = "deathYear";
    pub const PRIMARY_PROFESSION: &str = "primaryProfession";
    pub const KNOWN_FOR_TITLES: &str = "knownForTitles";
}

/// Column names of the title.principals dataset
pub mod title_principals {
    pub const TCONST: &str = "tconst";
    pub const ORDERING: &str = "ordering";
    pub const NCONST: &str = "nconst";
    pub const CATEGORY: &str = "category";
    pub const JOB: &str = "job";
    pub const CHARACTERS: &str = "characters";
}

/// Get the Arrow schema for name.basics data
///
/// Per-person metadata: name, birth/death year, professions, known titles.
#[must_use]
pub fn name_basics_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new(name_basics::NCONST, DataType::Utf8, false),
        Field::new(name_basics::PRIMARY_NAME, DataType::Utf8, false),
        Field::new(name_basics::BIRTH_YEAR, DataType::Int32, true),
        Field::new(name_basics::DEATH_YEAR, DataType::Int32, true),
        Field::new(name_basics::PRIMARY_PROFESSION, DataType::Utf8, true),
        Field::new(name_basics::KNOWN_FOR_TITLES, DataType::Utf8, true),
    ]))
}

/// Get the Arrow schema for title.principals data
///
/// Role assignments linking a title, a person, and their category of
/// involvement.
#[must_use]
pub fn title_principals_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new(title_principals::TCONST, DataType::Utf8, false),
        Field::new(title_principals::ORDERING, DataType::Int64, false),
        Field::new(title_principals::NCONST, DataType::Utf8, false),
        Field::new(title_principals::CATEGORY, DataType::Utf8, false),
        Field::new(title_principals::JOB, DataType::Utf8, true),
        Field::new(title_principals::CHARACTERS, DataType::Utf8, true),
    ]))
}
