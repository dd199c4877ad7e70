//! CSV file reading with every column loaded as text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{
    CsvReadOptions, DataFrame, DataType, NamedFrom, NullValues, PlSmallStr, SerReader, Series,
};
use tracing::debug;

use efax_model::{STATUS_CODE, is_text_column};

use crate::error::{IngestError, Result};
use crate::inference::infer_numeric_columns;
use crate::polars_utils::string_values;

use super::header::{CsvHeaders, is_blank_row};

/// Cell contents that load as missing rather than as text.
///
/// Matches the markers spreadsheet and dataframe tools write for empty
/// values, so `nan` or `None` in an exported cell is treated like a blank.
pub const MISSING_VALUE_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the first header)
    Ok(())
}

/// Reads the header row of a CSV file.
pub fn read_csv_schema(path: &Path) -> Result<CsvHeaders> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;
    let record = reader.headers().map_err(|e| csv_error(path, e))?;

    if record.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let fields: Vec<&str> = record.iter().collect();
    if is_blank_row(&fields) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    Ok(CsvHeaders::from_fields(fields))
}

/// Reads the analysis export into a DataFrame.
///
/// Every column is read as text with the [`MISSING_VALUE_MARKERS`] loaded as
/// nulls. Columns other than `status_code` and the free-text columns are then
/// converted to numbers when all of their values allow it.
///
/// Fails if the file is missing, not UTF-8, has no header, lacks a
/// `status_code` column, or cannot be parsed.
pub fn read_analysis_csv(path: &Path) -> Result<(DataFrame, CsvHeaders)> {
    validate_encoding(path)?;
    let headers = read_csv_schema(path)?;

    if !headers.contains(STATUS_CODE) {
        return Err(IngestError::MissingColumn {
            column: STATUS_CODE.to_string(),
            path: path.to_path_buf(),
        });
    }

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|options| {
            options.with_null_values(Some(NullValues::AllColumns(missing_markers())))
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.width() != headers.len() {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            message: format!(
                "header has {} columns but {} were loaded",
                headers.len(),
                df.width()
            ),
        });
    }
    df.set_column_names(headers.columns.iter().map(String::as_str))?;
    let marked = null_missing_markers(&mut df)?;

    let numeric = infer_numeric_columns(&mut df, |name| {
        name == STATUS_CODE || is_text_column(name)
    })?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        numeric_columns = numeric,
        marker_cells = marked,
        "loaded analysis export"
    );

    Ok((df, headers))
}

fn missing_markers() -> Vec<PlSmallStr> {
    MISSING_VALUE_MARKERS
        .into_iter()
        .map(PlSmallStr::from_static)
        .collect()
}

/// Nulls string cells that hold a missing-value marker.
///
/// Quoted fields such as `""` or `"None"` reach the frame as text, so the
/// markers are matched again after quotes are removed.
fn null_missing_markers(df: &mut DataFrame) -> Result<usize> {
    let string_columns: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|column| column.dtype() == &DataType::String)
        .map(|column| column.name().to_string())
        .collect();

    let mut marked = 0;
    for name in string_columns {
        let values = string_values(df, &name)?;
        let hits = values
            .iter()
            .flatten()
            .filter(|value| MISSING_VALUE_MARKERS.contains(&value.as_str()))
            .count();
        if hits == 0 {
            continue;
        }
        let values: Vec<Option<String>> = values
            .into_iter()
            .map(|value| value.filter(|text| !MISSING_VALUE_MARKERS.contains(&text.as_str())))
            .collect();
        df.with_column(Series::new(name.as_str().into(), values))?;
        marked += hits;
    }
    Ok(marked)
}

fn csv_error(path: &Path, err: csv::Error) -> IngestError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::open(path, source),
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_schema() {
        let file = create_temp_csv("url,status_code,page_type\nhttps://a,200,Home\n");
        let headers = read_csv_schema(file.path()).unwrap();

        assert_eq!(headers.columns, vec!["url", "status_code", "page_type"]);
    }

    #[test]
    fn test_read_csv_schema_empty_file() {
        let file = create_temp_csv("");
        let result = read_csv_schema(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_csv_schema_with_bom() {
        let file = create_temp_csv("\u{feff}status_code,url\n200,https://a\n");
        let headers = read_csv_schema(file.path()).unwrap();

        assert_eq!(headers.columns, vec!["status_code", "url"]);
    }

    #[test]
    fn test_validate_encoding_rejects_utf16() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b's', 0x00]).unwrap();

        let result = validate_encoding(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_read_analysis_csv_requires_status_column() {
        let file = create_temp_csv("url,page_type\nhttps://a,Home\n");
        let result = read_analysis_csv(file.path());

        assert!(matches!(result, Err(IngestError::MissingColumn { .. })));
    }

    #[test]
    fn test_read_analysis_csv_types() {
        let file = create_temp_csv(
            "url,status_code,word_count,load_time,recommendation_priority\n\
             https://a,200,120,0.5,1\n\
             https://b,abc,80,1.25,2\n",
        );
        let (df, headers) = read_analysis_csv(file.path()).unwrap();

        assert_eq!(headers.len(), 5);
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("url").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("status_code").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("word_count").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("load_time").unwrap().dtype(), &DataType::Float64);
        assert_eq!(
            df.column("recommendation_priority").unwrap().dtype(),
            &DataType::String
        );
    }

    #[test]
    fn test_read_analysis_csv_missing_markers() {
        let file = create_temp_csv(
            "status_code,primary_schema_type,page_type\n200,nan,\n200,Product,None\n",
        );
        let (df, _) = read_analysis_csv(file.path()).unwrap();

        let primary = df.column("primary_schema_type").unwrap().str().unwrap();
        assert_eq!(primary.get(0), None);
        assert_eq!(primary.get(1), Some("Product"));

        let page = df.column("page_type").unwrap().str().unwrap();
        assert_eq!(page.get(0), None);
        assert_eq!(page.get(1), None);
    }

    #[test]
    fn test_read_analysis_csv_header_only() {
        let file = create_temp_csv("status_code,url\n");
        let (df, headers) = read_analysis_csv(file.path()).unwrap();

        assert_eq!(df.height(), 0);
        assert_eq!(headers.columns, vec!["status_code", "url"]);
    }
}
