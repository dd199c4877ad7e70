//! Numeric typing for columns loaded as text.

use polars::prelude::{DataFrame, DataType, NamedFrom, Series};

use crate::error::Result;
use crate::polars_utils::{parse_f64, parse_i64, string_values};

/// Storage type chosen for a text column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every present value is an integer.
    Integer,
    /// Every present value is a finite number, at least one non-integral.
    Float,
    /// Anything else, including columns with no present values.
    Text,
}

/// Classifies a column from its present (non-null) values.
pub fn infer_column_kind<'a, I>(values: I) -> ColumnKind
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut present = 0usize;
    let mut integral = true;

    for value in values.into_iter().flatten() {
        present += 1;
        if parse_i64(value).is_some() {
            continue;
        }
        integral = false;
        if !parse_f64(value).is_some_and(f64::is_finite) {
            return ColumnKind::Text;
        }
    }

    match (present, integral) {
        (0, _) => ColumnKind::Text,
        (_, true) => ColumnKind::Integer,
        (_, false) => ColumnKind::Float,
    }
}

/// Converts string columns whose values are all numeric to `Int64`/`Float64`.
///
/// Columns for which `skip` returns true are left untouched. Returns the
/// number of converted columns.
pub fn infer_numeric_columns<F>(df: &mut DataFrame, skip: F) -> Result<usize>
where
    F: Fn(&str) -> bool,
{
    let candidates: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|column| column.dtype() == &DataType::String)
        .map(|column| column.name().to_string())
        .filter(|name| !skip(name.as_str()))
        .collect();

    let mut converted = 0;
    for name in candidates {
        let values = string_values(df, &name)?;
        let series = match infer_column_kind(values.iter().map(Option::as_deref)) {
            ColumnKind::Integer => {
                let parsed: Vec<Option<i64>> = values
                    .iter()
                    .map(|value| value.as_deref().and_then(parse_i64))
                    .collect();
                Series::new(name.as_str().into(), parsed)
            }
            ColumnKind::Float => {
                let parsed: Vec<Option<f64>> = values
                    .iter()
                    .map(|value| value.as_deref().and_then(parse_f64))
                    .collect();
                Series::new(name.as_str().into(), parsed)
            }
            ColumnKind::Text => continue,
        };
        df.with_column(series)?;
        converted += 1;
    }

    Ok(converted)
}
