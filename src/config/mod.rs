//! Configuration for the `TsvReader`.

use crate::schema::NULL_TOKEN;
use crate::utils::DEFAULT_BATCH_SIZE;

/// Configuration for the `TsvReader`
#[derive(Debug, Clone)]
pub struct TsvReaderConfig {
    /// Field delimiter (tab for the IMDb dumps)
    pub delimiter: u8,
    /// Whether the first line is a header row naming columns
    pub has_header: bool,
    /// Number of rows per record batch in batched reads
    pub batch_size: usize,
    /// Token marking an absent field value, distinct from empty text
    pub null_token: String,
}

impl Default for TsvReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            has_header: true,
            batch_size: DEFAULT_BATCH_SIZE,
            null_token: NULL_TOKEN.to_string(),
        }
    }
}

impl TsvReaderConfig {
    /// Config with an explicit batch size, defaults otherwise.
    #[must_use]
    pub fn with_batch_size(batch_size: usize) -> Self {
        Self {
            batch_size,
            ..Self::default()
        }
    }
}
