//! Cleaning transforms for the efax analysis export.
//!
//! Each operation takes the loaded `DataFrame` by mutable reference, rewrites
//! whole columns, and returns how many rows or cells it changed:
//!
//! 1. [`filter_status`] keeps rows whose `status_code` is exactly 200
//! 2. [`normalize_schema_types`] cleans the `schema_types_found` list
//! 3. [`normalize_categoricals`] replaces sentinel values
//! 4. [`fill_defaults`] fills per-column defaults
//! 5. [`normalize_missing`] turns non-finite floats into nulls
//!
//! [`clean_frame`] runs them in that order.
//!
//! # Example
//!
//! ```ignore
//! use efax_transform::clean_frame;
//!
//! let (mut df, _) = efax_ingest::read_analysis_csv(path)?;
//! let counts = clean_frame(&mut df)?;
//! println!("dropped {} rows", counts.rows_dropped);
//! ```

mod error;
mod frame;
mod pipeline;
mod status;

pub mod normalization;

pub use error::{Result, TransformError};
pub use normalization::{
    clean_schema_list, fill_defaults, normalize_categoricals, normalize_missing,
    normalize_schema_types,
};
pub use pipeline::clean_frame;
pub use status::{filter_status, parse_status};
