//! Ordered execution of the cleaning operations.

use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use efax_model::StageCounts;

use crate::error::Result;
use crate::normalization::{
    fill_defaults, normalize_categoricals, normalize_missing, normalize_schema_types,
};
use crate::status::filter_status;

/// Runs every cleaning operation on `df` in order and collects their counts.
pub fn clean_frame(df: &mut DataFrame) -> Result<StageCounts> {
    let mut counts = StageCounts {
        rows_loaded: df.height(),
        ..StageCounts::default()
    };

    counts.rows_dropped = run_stage("status_filter", df, filter_status)?;
    counts.tokens_removed = run_stage("schema_types", df, normalize_schema_types)?;
    counts.sentinels_replaced = run_stage("categoricals", df, normalize_categoricals)?;
    counts.defaults_filled = run_stage("defaults", df, fill_defaults)?;
    counts.nulls_normalized = run_stage("missing_values", df, normalize_missing)?;

    Ok(counts)
}

fn run_stage(
    stage: &'static str,
    df: &mut DataFrame,
    operation: fn(&mut DataFrame) -> Result<usize>,
) -> Result<usize> {
    let span = info_span!("transform", stage);
    span.in_scope(|| -> Result<usize> {
        let start = Instant::now();
        let count = operation(df)?;
        info!(
            stage,
            count,
            rows = df.height(),
            duration_ms = start.elapsed().as_millis(),
            "stage complete"
        );
        Ok(count)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn test_clean_frame_counts() {
        let mut df = DataFrame::new(vec![
            Series::new("status_code".into(), vec![Some("200"), Some("500"), Some("200")])
                .into_column(),
            Series::new(
                "schema_types_found".into(),
                vec![Some("Unknown, Product"), Some("Unknown"), None],
            )
            .into_column(),
            Series::new(
                "primary_schema_type".into(),
                vec![Some("Unknown"), Some("Unknown"), None],
            )
            .into_column(),
        ])
        .unwrap();

        let counts = clean_frame(&mut df).unwrap();

        assert_eq!(counts.rows_loaded, 3);
        assert_eq!(counts.rows_dropped, 1);
        assert_eq!(counts.tokens_removed, 1);
        assert_eq!(counts.sentinels_replaced, 1);
        assert_eq!(counts.defaults_filled, 1);
        assert_eq!(counts.nulls_normalized, 0);
        assert_eq!(df.height(), 2);
    }
}
