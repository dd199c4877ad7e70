use std::fs;

use efax_cli::pipeline::run_clean;
use efax_model::{CleanOptions, DEFAULT_INPUT_PATH};
use serde_json::{Value, json};
use tempfile::TempDir;

const EXPORT: &str = "\
url,status_code,schema_types_found,primary_schema_type,page_type,missing_required_properties,validation_errors,recommended_schemas,recommendation_priority,word_count
https://www.efax.com/,200,\"Unknown, Product, \",Unknown,,,,,,120
https://www.efax.com/missing,404,Product,Product,product,,,,,80
https://www.efax.com/pricing,200.0,Organization,None,nan,name,,Offer,High,
https://www.efax.com/broken,abc,WebPage,WebPage,home,,,,,15
";

fn workspace(contents: &str) -> (TempDir, CleanOptions) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(DEFAULT_INPUT_PATH), contents).unwrap();
    let options = CleanOptions::rooted_at(dir.path());
    (dir, options)
}

fn read_output(options: &CleanOptions) -> Value {
    serde_json::from_str(&fs::read_to_string(&options.output_path).unwrap()).unwrap()
}

#[test]
fn cleans_export_end_to_end() {
    let (_dir, options) = workspace(EXPORT);

    let report = run_clean(&options).unwrap();

    assert_eq!(report.records, 2);
    assert_eq!(report.counts.rows_loaded, 4);
    assert_eq!(report.counts.rows_dropped, 2);
    assert_eq!(report.rows_retained(), 2);
    assert_eq!(report.counts.nulls_normalized, 1);

    let output = read_output(&options);
    assert_eq!(
        output[0],
        json!({
            "url": "https://www.efax.com/",
            "status_code": 200,
            "schema_types_found": "Product",
            "primary_schema_type": "Unspecified",
            "page_type": "Uncategorized",
            "missing_required_properties": "",
            "validation_errors": "",
            "recommended_schemas": "",
            "recommendation_priority": "",
            "word_count": 120
        })
    );
    assert_eq!(output[1]["url"], "https://www.efax.com/pricing");
    assert_eq!(output[1]["status_code"], 200);
    assert_eq!(output[1]["primary_schema_type"], "Unspecified");
    assert_eq!(output[1]["page_type"], "Uncategorized");
    assert_eq!(output[1]["recommendation_priority"], "High");
    assert!(output[1]["word_count"].is_null());
}

#[test]
fn output_keys_follow_source_columns() {
    let (_dir, options) = workspace(EXPORT);
    run_clean(&options).unwrap();

    let output = read_output(&options);
    let keys: Vec<&str> = output[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys.first(), Some(&"url"));
    assert_eq!(keys.last(), Some(&"word_count"));
    assert_eq!(keys.len(), 10);
}

#[test]
fn rerun_is_byte_identical() {
    let (_dir, options) = workspace(EXPORT);

    run_clean(&options).unwrap();
    let first = fs::read(&options.output_path).unwrap();
    run_clean(&options).unwrap();
    let second = fs::read(&options.output_path).unwrap();

    assert_eq!(first, second);
    let text = String::from_utf8(first).unwrap();
    assert!(text.starts_with("[\n  {\n    \"url\""));
}

#[test]
fn missing_page_type_column_is_not_fabricated() {
    let (_dir, options) = workspace(
        "status_code,schema_types_found,primary_schema_type\n200,\"Article, unknown\",nan\n",
    );

    run_clean(&options).unwrap();

    let output = read_output(&options);
    let record = output[0].as_object().unwrap();
    assert!(!record.contains_key("page_type"));
    assert!(!record.contains_key("recommendation_priority"));
    assert_eq!(record["schema_types_found"], "Article");
    assert_eq!(record["primary_schema_type"], "Unspecified");
}

#[test]
fn non_ascii_text_is_written_literally() {
    let (_dir, options) = workspace("status_code,page_type\n200,Accueil équipe\n");

    run_clean(&options).unwrap();

    let text = fs::read_to_string(&options.output_path).unwrap();
    assert!(text.contains("Accueil équipe"));
}

#[test]
fn no_retained_rows_writes_empty_array() {
    let (_dir, options) = workspace("status_code,page_type\n500,home\n");

    let report = run_clean(&options).unwrap();

    assert_eq!(report.records, 0);
    assert_eq!(fs::read_to_string(&options.output_path).unwrap(), "[]");
}

#[test]
fn missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let options = CleanOptions::rooted_at(dir.path());

    let error = run_clean(&options).unwrap_err();

    assert!(format!("{error:#}").contains(DEFAULT_INPUT_PATH));
    assert!(!options.output_path.exists());
    assert!(!options.output_path.parent().unwrap().exists());
}

#[test]
fn missing_status_column_is_fatal() {
    let (_dir, options) = workspace("url,page_type\nhttps://www.efax.com/,home\n");

    assert!(run_clean(&options).is_err());
    assert!(!options.output_path.exists());
}

#[test]
fn quoted_empty_page_type_becomes_uncategorized() {
    let (_dir, options) = workspace(
        "status_code,schema_types_found,primary_schema_type,page_type\n\
         \"200\",\"Unknown, Product, \",\"Unknown\",\"\"\n",
    );

    run_clean(&options).unwrap();

    let output = read_output(&options);
    assert_eq!(output[0]["schema_types_found"], "Product");
    assert_eq!(output[0]["primary_schema_type"], "Unspecified");
    assert_eq!(output[0]["page_type"], "Uncategorized");
}
