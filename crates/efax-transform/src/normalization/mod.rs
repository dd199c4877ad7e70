//! Field normalization applied after the status filter.

pub mod categorical;
pub mod defaults;
pub mod list;
pub mod missing;

pub use categorical::normalize_categoricals;
pub use defaults::fill_defaults;
pub use list::{clean_schema_list, normalize_schema_types};
pub use missing::normalize_missing;
