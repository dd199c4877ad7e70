//! Comma separated `schema_types_found` lists.

use polars::prelude::DataFrame;

use efax_ingest::string_values;
use efax_model::{LIST_SEPARATOR, SCHEMA_TYPES_FOUND, UNKNOWN_TOKEN};

use crate::error::Result;
use crate::frame::{has_column, set_string_column};

/// Cleans one list value.
///
/// Splits on commas, trims each token, drops empty tokens and any token equal
/// to `unknown` ignoring case, then joins the rest with `", "`. A missing
/// value becomes an empty string.
///
/// # Examples
///
/// ```
/// use efax_transform::clean_schema_list;
///
/// assert_eq!(clean_schema_list(Some("Unknown, Product, ")), "Product");
/// assert_eq!(clean_schema_list(Some("WebPage,BreadcrumbList")), "WebPage, BreadcrumbList");
/// assert_eq!(clean_schema_list(None), "");
/// ```
pub fn clean_schema_list(value: Option<&str>) -> String {
    split_schema_list(value).0.join(LIST_SEPARATOR)
}

/// Returns the surviving tokens and how many were removed.
fn split_schema_list(value: Option<&str>) -> (Vec<&str>, usize) {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return (Vec::new(), 0);
    };
    let mut kept = Vec::new();
    let mut removed = 0;
    for token in value.split(',').map(str::trim) {
        if token.is_empty() || token.to_lowercase() == UNKNOWN_TOKEN {
            removed += 1;
        } else {
            kept.push(token);
        }
    }
    (kept, removed)
}

/// Rewrites `schema_types_found` in place, if the column exists.
///
/// Every cell ends up as a (possibly empty) string. Returns the number of
/// tokens removed across the column.
pub fn normalize_schema_types(df: &mut DataFrame) -> Result<usize> {
    if !has_column(df, SCHEMA_TYPES_FOUND) {
        return Ok(0);
    }

    let values = string_values(df, SCHEMA_TYPES_FOUND)?;
    let mut removed = 0;
    let cleaned: Vec<Option<String>> = values
        .iter()
        .map(|value| {
            let (kept, dropped) = split_schema_list(value.as_deref());
            removed += dropped;
            Some(kept.join(LIST_SEPARATOR))
        })
        .collect();

    set_string_column(df, SCHEMA_TYPES_FOUND, cleaned)?;
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn test_clean_drops_unknown_any_case() {
        assert_eq!(clean_schema_list(Some("UNKNOWN,unknown,Unknown")), "");
        assert_eq!(clean_schema_list(Some("Product, uNkNoWn, Offer")), "Product, Offer");
    }

    #[test]
    fn test_clean_keeps_order_and_trims() {
        assert_eq!(
            clean_schema_list(Some("  FAQPage ,Organization,WebSite  ")),
            "FAQPage, Organization, WebSite"
        );
    }

    #[test]
    fn test_clean_empty_inputs() {
        assert_eq!(clean_schema_list(Some("")), "");
        assert_eq!(clean_schema_list(Some(" , ,")), "");
        assert_eq!(clean_schema_list(None), "");
    }

    #[test]
    fn test_clean_keeps_partial_matches() {
        assert_eq!(
            clean_schema_list(Some("UnknownType, Unknown Thing")),
            "UnknownType, Unknown Thing"
        );
    }

    #[test]
    fn test_split_counts_removed_tokens() {
        let (kept, removed) = split_schema_list(Some("Unknown, Product, "));
        assert_eq!(kept, vec!["Product"]);
        assert_eq!(removed, 2);
    }

    #[test]
    fn test_normalize_column() {
        let mut df = DataFrame::new(vec![
            Series::new(
                "schema_types_found".into(),
                vec![Some("Unknown, Product, "), None, Some("WebPage")],
            )
            .into_column(),
        ])
        .unwrap();

        let removed = normalize_schema_types(&mut df).unwrap();

        assert_eq!(removed, 2);
        let col = df.column("schema_types_found").unwrap().str().unwrap();
        assert_eq!(col.get(0), Some("Product"));
        assert_eq!(col.get(1), Some(""));
        assert_eq!(col.get(2), Some("WebPage"));
    }

    #[test]
    fn test_normalize_absent_column() {
        let mut df = DataFrame::new(vec![
            Series::new("url".into(), vec!["https://a"]).into_column(),
        ])
        .unwrap();

        assert_eq!(normalize_schema_types(&mut df).unwrap(), 0);
        assert!(df.column("schema_types_found").is_err());
    }
}
