//! Shared definitions for the efax analysis cleaner.
//!
//! Column names, sentinel values and per-column defaults are kept here so the
//! ingest, transform and output crates agree on a single set of rules.

pub mod columns;
pub mod options;
pub mod report;

pub use columns::{
    CATEGORICAL_RULES, CategoricalRule, DEFAULT_FILLS, LIST_SEPARATOR, MISSING_REQUIRED_PROPERTIES,
    PAGE_TYPE, PRIMARY_SCHEMA_TYPE, RECOMMENDATION_PRIORITY, RECOMMENDED_SCHEMAS,
    SCHEMA_TYPES_FOUND, SENTINEL_VALUES, STATUS_CODE, STATUS_OK, TEXT_COLUMNS, UNCATEGORIZED,
    UNKNOWN_TOKEN, UNSPECIFIED, VALIDATION_ERRORS, is_text_column,
};
pub use options::{CleanOptions, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
pub use report::{CleanReport, StageCounts};
