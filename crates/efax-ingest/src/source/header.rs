//! CSV header parsing and normalization.

/// Column names from the header row, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Trimmed column names; blank names are replaced by `Unnamed: <index>`.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    /// Builds headers from raw header fields.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns = fields
            .into_iter()
            .enumerate()
            .map(|(idx, field)| normalize_header(idx, field.as_ref()))
            .collect();
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns true if a column with exactly this name exists.
    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

/// Normalizes a header value: strips a leading BOM, trims whitespace, and
/// names blank headers after their position (the way an exported index
/// column usually arrives).
fn normalize_header(idx: usize, value: &str) -> String {
    let value = value.strip_prefix('\u{feff}').unwrap_or(value).trim();
    if value.is_empty() {
        format!("Unnamed: {idx}")
    } else {
        value.to_string()
    }
}

/// True when the raw header row carries no usable name at all.
pub(super) fn is_blank_row<S: AsRef<str>>(fields: &[S]) -> bool {
    fields.iter().all(|f| {
        let value = f.as_ref();
        value.strip_prefix('\u{feff}').unwrap_or(value).trim().is_empty()
    })
}
