//! Typed record models for the supported datasets
//!
//! Each dataset decodes into a declared record struct once at the input
//! boundary. Sentinel-bearing fields become `Option`s here so consumer
//! logic never has to compare raw field text against the sentinel token.

pub mod name;
pub mod principal;

pub use name::NameRecord;
pub use principal::PrincipalRecord;

use serde::{Deserialize, Deserializer};

use crate::schema::NULL_TOKEN;

/// Decode a year field: the sentinel is missing, anything else must parse
/// as an integer.
pub(crate) fn de_year<'de, D>(deserializer: D) -> std::result::Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw == NULL_TOKEN {
        return Ok(None);
    }
    raw.parse::<i32>().map(Some).map_err(|_| {
        serde::de::Error::custom(format!(
            "expected an integer year or `{NULL_TOKEN}`, got `{raw}`"
        ))
    })
}

/// Decode an optional text field, mapping the sentinel to `None`.
pub(crate) fn de_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw == NULL_TOKEN {
        return Ok(None);
    }
    Ok(Some(raw))
}

/// Decode an optional comma-separated list field.
pub(crate) fn de_list<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw == NULL_TOKEN {
        return Ok(None);
    }
    Ok(Some(raw.split(',').map(str::to_string).collect()))
}
