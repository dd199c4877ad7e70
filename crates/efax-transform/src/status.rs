//! Status code coercion and row filtering.

use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use efax_ingest::any_to_f64;
use efax_model::{STATUS_CODE, STATUS_OK};

use crate::error::{Result, TransformError};
use crate::frame::{filter_rows, set_i64_column};

/// Interprets a cell as an integral status code.
///
/// Text is parsed as a number first, so `"200.0"` and `"2e2"` both give 200.
/// Values that are not numbers, or not whole numbers, give `None`.
pub fn parse_status(value: AnyValue<'_>) -> Option<i64> {
    let number = any_to_f64(value)?;
    if !number.is_finite() || number.fract() != 0.0 {
        return None;
    }
    if number < i64::MIN as f64 || number > i64::MAX as f64 {
        return None;
    }
    Some(number as i64)
}

/// Keeps only rows whose `status_code` is exactly 200.
///
/// The column is rewritten as `Int64`. Returns the number of dropped rows.
pub fn filter_status(df: &mut DataFrame) -> Result<usize> {
    let column = df
        .column(STATUS_CODE)
        .map_err(|_| TransformError::MissingColumn {
            column: STATUS_CODE.to_string(),
        })?;

    let mut codes = Vec::with_capacity(df.height());
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let code = parse_status(column.get(idx).unwrap_or(AnyValue::Null));
        keep.push(code == Some(STATUS_OK));
        codes.push(code);
    }
    let dropped = keep.iter().filter(|kept| !**kept).count();

    set_i64_column(df, STATUS_CODE, codes)?;
    filter_rows(df, &keep)?;

    debug!(dropped, retained = df.height(), "status filter applied");
    Ok(dropped)
}
