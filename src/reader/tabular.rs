//! Row/column summaries for CSV and Parquet files.

use std::fs::File;

use parquet::file::reader::{FileReader, SerializedFileReader};

use super::{DataDir, ReaderError};

/// Prefix pandas uses for index columns it stores alongside the data.
const PANDAS_INDEX_PREFIX: &str = "__index_level_";

/// Summarize a CSV file by its row and column counts.
///
/// The first row is the header and is not counted as a data row. Rows
/// shorter than the header are counted as-is; a row longer than the header
/// is a parse error.
pub fn read_csv_summary(data_dir: &DataDir, filename: &str) -> Result<String, ReaderError> {
    let path = data_dir.resolve(filename)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(&path)?;

    let columns = reader.headers()?.len();
    if columns == 0 {
        return Err(ReaderError::EmptyData);
    }

    let mut rows = 0usize;
    for record in reader.records() {
        let record = record?;
        if record.len() > columns {
            return Err(ReaderError::TooManyFields {
                line: record.position().map_or(0, |pos| pos.line()),
                expected: columns,
                found: record.len(),
            });
        }
        rows += 1;
    }

    Ok(format!(
        "CSV file '{}' has {} rows and {} columns.",
        filename, rows, columns
    ))
}

/// Summarize a Parquet file by its row and column counts.
///
/// Counts come from the file footer, so no column data is decoded.
pub fn read_parquet_summary(data_dir: &DataDir, filename: &str) -> Result<String, ReaderError> {
    let path = data_dir.resolve(filename)?;
    let file = File::open(&path)?;
    let reader = SerializedFileReader::new(file)?;

    let file_metadata = reader.metadata().file_metadata();
    let rows = file_metadata.num_rows();
    let columns = file_metadata
        .schema()
        .get_fields()
        .iter()
        .filter(|field| !field.name().starts_with(PANDAS_INDEX_PREFIX))
        .count();

    Ok(format!(
        "Parquet file '{}' has {} rows and {} columns.",
        filename, rows, columns
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parquet::data_type::Int64Type;
    use parquet::file::properties::WriterProperties;
    use parquet::file::writer::SerializedFileWriter;
    use parquet::schema::parser::parse_message_type;
    use std::path::Path;
    use std::sync::Arc;

    fn write_parquet(path: &Path, schema: &str, rows: i64) {
        let schema = Arc::new(parse_message_type(schema).unwrap());
        let props = Arc::new(WriterProperties::builder().build());
        let file = File::create(path).unwrap();
        let mut writer = SerializedFileWriter::new(file, schema, props).unwrap();

        let values: Vec<i64> = (0..rows).collect();
        let mut row_group = writer.next_row_group().unwrap();
        while let Some(mut column) = row_group.next_column().unwrap() {
            column
                .typed::<Int64Type>()
                .write_batch(&values, None, None)
                .unwrap();
            column.close().unwrap();
        }
        row_group.close().unwrap();
        writer.close().unwrap();
    }

    #[test]
    fn test_csv_summary_counts_rows_and_columns() {
        let tmp = tempfile::tempdir().unwrap();
        let mut body = String::from("id,name,score,active\n");
        for i in 0..10 {
            body.push_str(&format!("{},user{},{},true\n", i, i, i * 10));
        }
        std::fs::write(tmp.path().join("x.csv"), body).unwrap();

        let summary = read_csv_summary(&DataDir::new(tmp.path()), "x.csv").unwrap();
        assert_eq!(summary, "CSV file 'x.csv' has 10 rows and 4 columns.");
    }

    #[test]
    fn test_csv_summary_header_only() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("empty.csv"), "a,b,c\n").unwrap();

        let summary = read_csv_summary(&DataDir::new(tmp.path()), "empty.csv").unwrap();
        assert_eq!(summary, "CSV file 'empty.csv' has 0 rows and 3 columns.");
    }

    #[test]
    fn test_csv_summary_empty_file() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("blank.csv"), "").unwrap();

        let err = read_csv_summary(&DataDir::new(tmp.path()), "blank.csv").unwrap_err();
        assert!(matches!(err, ReaderError::EmptyData));
    }

    #[test]
    fn test_csv_summary_counts_short_rows() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("short.csv"), "a,b,c\n1,2\n4,5,6\n").unwrap();

        let summary = read_csv_summary(&DataDir::new(tmp.path()), "short.csv").unwrap();
        assert_eq!(summary, "CSV file 'short.csv' has 2 rows and 3 columns.");
    }

    #[test]
    fn test_csv_summary_long_row_fails() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("bad.csv"), "a,b\n1,2\n3,4,5\n").unwrap();

        let err = read_csv_summary(&DataDir::new(tmp.path()), "bad.csv").unwrap_err();
        assert!(matches!(
            err,
            ReaderError::TooManyFields { line: 3, expected: 2, found: 3 }
        ));
        assert_eq!(
            err.to_string(),
            "Error tokenizing data. Expected 2 fields in line 3, saw 3"
        );
    }

    #[test]
    fn test_csv_summary_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = read_csv_summary(&DataDir::new(tmp.path()), "nope.csv").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_parquet_summary_counts_rows_and_columns() {
        let tmp = tempfile::tempdir().unwrap();
        write_parquet(
            &tmp.path().join("sample.parquet"),
            "message schema { REQUIRED INT64 id; REQUIRED INT64 amount; REQUIRED INT64 year; }",
            25,
        );

        let summary = read_parquet_summary(&DataDir::new(tmp.path()), "sample.parquet").unwrap();
        assert_eq!(summary, "Parquet file 'sample.parquet' has 25 rows and 3 columns.");
    }

    #[test]
    fn test_parquet_summary_skips_pandas_index() {
        let tmp = tempfile::tempdir().unwrap();
        write_parquet(
            &tmp.path().join("indexed.parquet"),
            "message schema { REQUIRED INT64 value; REQUIRED INT64 __index_level_0__; }",
            4,
        );

        let summary = read_parquet_summary(&DataDir::new(tmp.path()), "indexed.parquet").unwrap();
        assert_eq!(summary, "Parquet file 'indexed.parquet' has 4 rows and 1 columns.");
    }

    #[test]
    fn test_parquet_summary_rejects_non_parquet() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("fake.parquet"), "not a parquet file").unwrap();

        let err = read_parquet_summary(&DataDir::new(tmp.path()), "fake.parquet").unwrap_err();
        assert!(matches!(err, ReaderError::Parquet(_)));
    }

    #[test]
    fn test_parquet_summary_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = read_parquet_summary(&DataDir::new(tmp.path()), "nope.parquet").unwrap_err();
        assert!(err.is_not_found());
    }
}
