//! CSV export options.

use serde::{Deserialize, Serialize};

/// A closed-open `min..max` row range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRange {
    pub min: isize,
    pub max: isize,
}

impl RowRange {
    pub fn new(min: isize, max: isize) -> Self {
        Self { min, max }
    }
}

/// Options for writing CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field delimiter (default: `;`).
    pub delimiter: u8,
    /// End records with `\r\n` instead of `\n` (default: false).
    pub use_crlf: bool,
    /// Columns to write, in output order (default: all, in table order).
    pub columns: Option<Vec<String>>,
    /// Rows to write (default: all).
    pub range: Option<RowRange>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            use_crlf: false,
            columns: None,
            range: None,
        }
    }
}

impl CsvOptions {
    /// Create options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Use `\r\n` record terminators.
    #[must_use]
    pub fn with_crlf(mut self, use_crlf: bool) -> Self {
        self.use_crlf = use_crlf;
        self
    }

    /// Select and order the exported columns.
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict the export to rows `min..max`.
    #[must_use]
    pub fn with_range(mut self, min: isize, max: isize) -> Self {
        self.range = Some(RowRange::new(min, max));
        self
    }
}
