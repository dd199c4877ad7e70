//! Reading the analysis export from disk.

mod header;
mod reader;

pub use header::CsvHeaders;
pub use reader::{MISSING_VALUE_MARKERS, read_analysis_csv, read_csv_schema, validate_encoding};
