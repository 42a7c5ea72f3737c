//! Integration tests for CSV export.

use std::fs;

use tabular_core::{Column, ColumnType, Complex64, OrderColumn, Schema, Table, Value};
use tabular_output::{
    CsvExporter, CsvOptions, ExportError, export_csv_file, export_csv_file_default, write_csv,
};

/// A table covering every column type.
fn sample_table() -> Table {
    let schema = Schema::new(vec![
        Column::new("i", ColumnType::Int, 0, true),
        Column::new("u", ColumnType::Uint, 1, true),
        Column::new("f", ColumnType::Float, 2, true),
        Column::new("c", ColumnType::Complex, 3, true),
        Column::new("s", ColumnType::String, 4, true),
    ])
    .unwrap();
    let rows = vec![
        vec![
            Value::from(-1_i64),
            Value::from(10_u64),
            Value::from(1.5_f64),
            Value::from(Complex64::new(1.0, -1.0)),
            Value::from("one"),
        ],
        vec![
            Value::from(-2_i64),
            Value::from(20_u64),
            Value::from(1e6_f64),
            Value::from(Complex64::new(0.5, 2.0)),
            Value::from("two"),
        ],
        vec![
            Value::from(-3_i64),
            Value::from(30_u64),
            Value::from(0.00001_f64),
            Value::from(Complex64::new(0.0, 0.0)),
            Value::from("three"),
        ],
    ];
    Table::new(schema, rows).unwrap()
}

fn render(table: &Table, options: &CsvOptions) -> String {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, table, options).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_default_export() {
    let text = render(&sample_table(), &CsvOptions::default());
    insta::assert_snapshot!(text, @r"
    i;u;f;c;s
    -1;10;1.5;1-1i;one
    -2;20;1e+06;0.5+2i;two
    -3;30;1e-05;0+0i;three
    ");
}

#[test]
fn test_column_subset_and_range() {
    let options = CsvOptions::new()
        .with_delimiter(b',')
        .with_columns(["s", "i"])
        .with_range(1, 3);
    let text = render(&sample_table(), &options);
    assert_eq!(text, "s,i\ntwo,-2\nthree,-3\n");
}

#[test]
fn test_export_follows_table_order() {
    let mut table = sample_table();
    table.set_order(&[OrderColumn::desc("u")]).unwrap();
    let text = render(&table, &CsvOptions::new().with_columns(["u"]));
    assert_eq!(text, "u\n30\n20\n10\n");
}

#[test]
fn test_empty_range_writes_only_headers() {
    let text = render(
        &sample_table(),
        &CsvOptions::new().with_columns(["i", "u"]).with_range(3, 3),
    );
    assert_eq!(text, "i;u\n");
}

#[test]
fn test_configuration_errors() {
    let table = sample_table();
    let mut sink = Vec::new();

    let err = write_csv(&mut sink, &table, &CsvOptions::new().with_columns(["i", "zz"]))
        .unwrap_err();
    assert_eq!(err.to_string(), "in csv config, column zz not found");

    let err = write_csv(&mut sink, &table, &CsvOptions::new().with_range(2, 1)).unwrap_err();
    assert!(matches!(err, ExportError::Frame(_)));
    assert_eq!(err.to_string(), "max index < min index");
}

#[test]
fn test_file_export_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.csv");

    let rows = export_csv_file_default(&path, &sample_table()).unwrap();
    assert_eq!(rows, 3);
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("i;u;f;c;s\n-1;10;1.5;1-1i;one\n"));
    assert_eq!(contents.lines().count(), 4);
}

#[test]
fn test_file_export_errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    let options = CsvOptions::new().with_columns(Vec::<String>::new());
    let err = export_csv_file(&path, &sample_table(), &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "error exporting the {} file: in csv config, the columns list is empty",
            path.display()
        )
    );
    assert!(!path.exists());

    let missing = dir.path().join("no-such-dir").join("out.csv");
    let err = export_csv_file_default(&missing, &sample_table()).unwrap_err();
    assert!(matches!(err.export_error(), ExportError::Io(_)));
}

#[test]
fn test_exporter_with_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crlf.csv");

    let options = CsvOptions::new().with_crlf(true).with_columns(["s"]).with_range(0, 1);
    let rows = CsvExporter::create_with_options(&path, options)
        .unwrap()
        .write_table(&sample_table())
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "s\r\none\r\n");
}
