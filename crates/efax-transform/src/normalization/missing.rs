//! Explicit nulls for every value still missing after defaults.

use polars::prelude::{Column, DataFrame, DataType};
use tracing::debug;

use crate::error::Result;
use crate::frame::set_f64_column;

/// Settles the remaining missing cells as explicit nulls.
///
/// NaN and infinite floats are turned into nulls first, since JSON has no
/// representation for them. Returns the number of null cells left in the
/// frame, which is the number of `null` values the output will carry.
pub fn normalize_missing(df: &mut DataFrame) -> Result<usize> {
    let non_finite = null_non_finite_floats(df)?;
    let nulls: usize = df.get_columns().iter().map(Column::null_count).sum();
    debug!(nulls, non_finite, "missing values normalized");
    Ok(nulls)
}

fn null_non_finite_floats(df: &mut DataFrame) -> Result<usize> {
    let float_columns: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|column| column.dtype().is_float())
        .map(|column| column.name().to_string())
        .collect();

    let mut converted = 0;
    for name in float_columns {
        let column = df.column(&name)?.cast(&DataType::Float64)?;
        let values: Vec<Option<f64>> = column.f64()?.iter().collect();
        let non_finite = values
            .iter()
            .filter(|value| value.is_some_and(|v| !v.is_finite()))
            .count();
        if non_finite == 0 {
            continue;
        }
        let values = values
            .into_iter()
            .map(|value| value.filter(|v| v.is_finite()))
            .collect();
        set_f64_column(df, &name, values)?;
        converted += non_finite;
    }
    Ok(converted)
}
