//! Role-assignment records from the title.principals dataset

use serde::Deserialize;

/// A role assignment linking a title, a person, and a category of involvement
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PrincipalRecord {
    /// Title identifier
    #[serde(rename = "tconst")]
    pub tconst: String,
    /// Ordering of the assignment within the title
    #[serde(rename = "ordering")]
    pub ordering: i64,
    /// Person identifier
    #[serde(rename = "nconst")]
    pub nconst: String,
    /// Category of involvement, e.g. "actor" or "director"
    #[serde(rename = "category")]
    pub category: String,
    /// Job detail, if recorded
    #[serde(rename = "job", deserialize_with = "crate::models::de_text")]
    pub job: Option<String>,
    /// Character detail, if recorded
    #[serde(rename = "characters", deserialize_with = "crate::models::de_text")]
    pub characters: Option<String>,
}
