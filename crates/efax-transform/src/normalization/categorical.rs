//! Sentinel replacement for `primary_schema_type` and `page_type`.

use polars::prelude::DataFrame;

use efax_ingest::string_values;
use efax_model::{CATEGORICAL_RULES, CategoricalRule};

use crate::error::Result;
use crate::frame::{has_column, set_string_column};

/// Applies every categorical rule whose column exists.
///
/// Returns the number of replaced cells. Missing cells are left for
/// [`fill_defaults`](crate::fill_defaults).
pub fn normalize_categoricals(df: &mut DataFrame) -> Result<usize> {
    let mut replaced = 0;
    for rule in &CATEGORICAL_RULES {
        replaced += apply_rule(df, rule)?;
    }
    Ok(replaced)
}

fn apply_rule(df: &mut DataFrame, rule: &CategoricalRule) -> Result<usize> {
    if !has_column(df, rule.column) {
        return Ok(0);
    }

    let values = string_values(df, rule.column)?;
    let mut replaced = 0;
    let normalized: Vec<Option<String>> = values
        .into_iter()
        .map(|value| {
            value.map(|text| match rule.resolve(&text) {
                Some(replacement) => {
                    replaced += 1;
                    replacement.to_string()
                }
                None => text,
            })
        })
        .collect();

    if replaced > 0 {
        set_string_column(df, rule.column, normalized)?;
    }
    Ok(replaced)
}
