//! DataFrame rows as JSON objects.

use polars::prelude::{AnyValue, DataFrame, PolarsResult};
use serde_json::{Map, Number, Value};

use crate::error::Result;

/// One output row: column name to value, in source column order.
pub type Record = Map<String, Value>;

/// Converts a single cell to JSON.
///
/// Nulls and non-finite floats become `null`; integers and floats become
/// numbers; everything else is written as text.
pub fn any_to_json(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Int8(v) => Value::from(v),
        AnyValue::Int16(v) => Value::from(v),
        AnyValue::Int32(v) => Value::from(v),
        AnyValue::Int64(v) => Value::from(v),
        AnyValue::UInt8(v) => Value::from(v),
        AnyValue::UInt16(v) => Value::from(v),
        AnyValue::UInt32(v) => Value::from(v),
        AnyValue::UInt64(v) => Value::from(v),
        AnyValue::Float32(v) => float_to_json(f64::from(v)),
        AnyValue::Float64(v) => float_to_json(v),
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::String(s) => Value::String(s.to_string()),
        AnyValue::StringOwned(s) => Value::String(s.to_string()),
        other => Value::String(other.to_string()),
    }
}

fn float_to_json(value: f64) -> Value {
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

/// Builds one record per row, preserving row order and column order.
pub fn frame_to_records(df: &DataFrame) -> Result<Vec<Record>> {
    let height = df.height();
    let mut columns = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let values = (0..height)
            .map(|idx| column.get(idx).map(any_to_json))
            .collect::<PolarsResult<Vec<Value>>>()?;
        columns.push((column.name().to_string(), values.into_iter()));
    }

    let mut records = Vec::with_capacity(height);
    for _ in 0..height {
        let mut record = Record::new();
        for (name, values) in &mut columns {
            record.insert(name.clone(), values.next().unwrap_or(Value::Null));
        }
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};
    use serde_json::json;

    #[test]
    fn test_any_to_json() {
        assert_eq!(any_to_json(AnyValue::Null), Value::Null);
        assert_eq!(any_to_json(AnyValue::Int64(200)), json!(200));
        assert_eq!(any_to_json(AnyValue::Float64(0.5)), json!(0.5));
        assert_eq!(any_to_json(AnyValue::Float64(f64::NAN)), Value::Null);
        assert_eq!(any_to_json(AnyValue::String("")), json!(""));
        assert_eq!(any_to_json(AnyValue::Boolean(true)), json!(true));
        assert_eq!(any_to_json(AnyValue::UInt32(7)), json!(7));
    }

    #[test]
    fn test_records_keep_column_order() {
        let df = DataFrame::new(vec![
            Series::new("url".into(), vec!["https://a", "https://b"]).into_column(),
            Series::new("status_code".into(), vec![200i64, 200]).into_column(),
            Series::new("page_type".into(), vec![Some("Home"), None]).into_column(),
        ])
        .unwrap();

        let records = frame_to_records(&df).unwrap();

        assert_eq!(records.len(), 2);
        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["url", "status_code", "page_type"]);
        assert_eq!(
            Value::Object(records[1].clone()),
            json!({"url": "https://b", "status_code": 200, "page_type": null})
        );
    }

    #[test]
    fn test_empty_frame_gives_no_records() {
        let df = DataFrame::new(vec![
            Series::new("status_code".into(), Vec::<i64>::new()).into_column(),
        ])
        .unwrap();

        assert!(frame_to_records(&df).unwrap().is_empty());
    }
}
