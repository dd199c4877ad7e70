//! Ingestion of the efax analysis export.
//!
//! Loads the CSV into a Polars `DataFrame` with every cell read as text, then
//! restores numeric types for the columns that are not free text.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use efax_ingest::read_analysis_csv;
//!
//! let (df, headers) = read_analysis_csv(Path::new("efax_analysis.csv"))?;
//! assert!(headers.contains("status_code"));
//! ```

mod error;
mod inference;
mod polars_utils;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use source::{
    CsvHeaders, MISSING_VALUE_MARKERS, read_analysis_csv, read_csv_schema, validate_encoding,
};

// === Column Typing ===
pub use inference::{ColumnKind, infer_column_kind, infer_numeric_columns};

// === Value Helpers ===
pub use polars_utils::{any_to_f64, parse_f64, parse_i64, string_values};
