//! Column names and normalization rules for the analysis export.

/// HTTP status column used to filter rows.
pub const STATUS_CODE: &str = "status_code";
/// Comma separated list of schema types detected on the page.
pub const SCHEMA_TYPES_FOUND: &str = "schema_types_found";
/// Main schema type reported for the page.
pub const PRIMARY_SCHEMA_TYPE: &str = "primary_schema_type";
/// Page classification.
pub const PAGE_TYPE: &str = "page_type";
pub const MISSING_REQUIRED_PROPERTIES: &str = "missing_required_properties";
pub const VALIDATION_ERRORS: &str = "validation_errors";
pub const RECOMMENDED_SCHEMAS: &str = "recommended_schemas";
pub const RECOMMENDATION_PRIORITY: &str = "recommendation_priority";

/// The only status value that survives filtering.
pub const STATUS_OK: i64 = 200;

/// Separator used when re-joining `schema_types_found` tokens.
pub const LIST_SEPARATOR: &str = ", ";

/// List token dropped from `schema_types_found` (compared lowercase).
pub const UNKNOWN_TOKEN: &str = "unknown";

/// Placeholder strings that mean "unset" in the categorical columns.
pub const SENTINEL_VALUES: [&str; 3] = ["Unknown", "None", "nan"];

/// Replacement for an unset `primary_schema_type`.
pub const UNSPECIFIED: &str = "Unspecified";

/// Replacement for an unset `page_type`.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Columns that always stay strings, regardless of their content.
pub const TEXT_COLUMNS: [&str; 7] = [
    SCHEMA_TYPES_FOUND,
    PRIMARY_SCHEMA_TYPE,
    PAGE_TYPE,
    MISSING_REQUIRED_PROPERTIES,
    VALIDATION_ERRORS,
    RECOMMENDED_SCHEMAS,
    RECOMMENDATION_PRIORITY,
];

/// Literal fill value for each column that still holds missing cells after
/// list and categorical normalization.
pub const DEFAULT_FILLS: [(&str, &str); 6] = [
    (MISSING_REQUIRED_PROPERTIES, ""),
    (VALIDATION_ERRORS, ""),
    (RECOMMENDED_SCHEMAS, ""),
    (RECOMMENDATION_PRIORITY, ""),
    (PRIMARY_SCHEMA_TYPE, UNSPECIFIED),
    (PAGE_TYPE, UNCATEGORIZED),
];

/// Sentinel replacement applied to a single categorical column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoricalRule {
    pub column: &'static str,
    pub replacement: &'static str,
}

impl CategoricalRule {
    /// Returns the replacement when `value` is exactly one of the sentinels.
    pub fn resolve(&self, value: &str) -> Option<&'static str> {
        SENTINEL_VALUES
            .contains(&value)
            .then_some(self.replacement)
    }
}

pub const CATEGORICAL_RULES: [CategoricalRule; 2] = [
    CategoricalRule {
        column: PRIMARY_SCHEMA_TYPE,
        replacement: UNSPECIFIED,
    },
    CategoricalRule {
        column: PAGE_TYPE,
        replacement: UNCATEGORIZED,
    },
];

/// Returns true for the columns the loader must never convert to numbers.
pub fn is_text_column(name: &str) -> bool {
    TEXT_COLUMNS.contains(&name)
}
