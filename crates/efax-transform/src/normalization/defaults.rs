//! Per-column defaults for cells that are still missing.

use polars::prelude::DataFrame;

use efax_ingest::string_values;
use efax_model::DEFAULT_FILLS;

use crate::error::Result;
use crate::frame::{has_column, set_string_column};

/// Fills missing cells in the default-carrying columns.
///
/// Present values, including ones already rewritten by earlier stages, are
/// never touched. Columns absent from the frame are not created. Returns the
/// number of filled cells.
pub fn fill_defaults(df: &mut DataFrame) -> Result<usize> {
    let mut filled = 0;
    for (column, default) in DEFAULT_FILLS {
        if !has_column(df, column) {
            continue;
        }
        let values = string_values(df, column)?;
        let missing = values.iter().filter(|value| value.is_none()).count();
        if missing == 0 {
            continue;
        }
        let values = values
            .into_iter()
            .map(|value| Some(value.unwrap_or_else(|| default.to_string())))
            .collect();
        set_string_column(df, column, values)?;
        filled += missing;
    }
    Ok(filled)
}
