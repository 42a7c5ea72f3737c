//! CSV writer for tables.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tabular_core::Table;

use crate::error::{ExportError, OutputError, Result};
use crate::options::{CsvOptions, RowRange};

/// Writes tables as CSV: one header record, then one record per row.
pub struct CsvExporter<W: Write> {
    writer: csv::Writer<W>,
    options: CsvOptions,
}

impl<W: Write> CsvExporter<W> {
    /// Create an exporter with default options.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, CsvOptions::default())
    }

    /// Create an exporter with options.
    pub fn with_options(writer: W, options: CsvOptions) -> Self {
        let mut builder = csv::WriterBuilder::new();
        builder.delimiter(options.delimiter);
        if options.use_crlf {
            builder.terminator(csv::Terminator::CRLF);
        }
        Self {
            writer: builder.from_writer(writer),
            options,
        }
    }

    /// Write the selected columns and rows of `table`.
    ///
    /// Returns the number of data rows written.
    pub fn write_table(mut self, table: &Table) -> Result<usize> {
        let (headers, positions) = select_columns(table, self.options.columns.as_deref())?;
        let range = self.options.range.unwrap_or_else(|| whole_table(table));
        let rows = table.iterator_range(range.min, range.max)?;

        tracing::debug!(
            columns = headers.len(),
            min = range.min,
            max = range.max,
            delimiter = %char::from(self.options.delimiter),
            "Writing CSV"
        );

        self.writer.write_record(&headers)?;
        let mut written = 0;
        for row in rows {
            let values = row.values();
            self.writer
                .write_record(positions.iter().map(|&position| values[position].to_string()))?;
            written += 1;
        }
        self.writer.flush()?;
        Ok(written)
    }
}

impl CsvExporter<File> {
    /// Create a CSV file for writing.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }

    /// Create a CSV file with options.
    pub fn create_with_options(path: &Path, options: CsvOptions) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::with_options(file, options))
    }
}

/// Resolves the exported headers and their storage positions.
fn select_columns(
    table: &Table,
    columns: Option<&[String]>,
) -> Result<(Vec<String>, Vec<usize>)> {
    let headers = match columns {
        None => table.headers(),
        Some([]) => return Err(ExportError::EmptyColumns),
        Some(columns) => columns.to_vec(),
    };
    let positions = headers
        .iter()
        .map(|name| {
            table
                .schema()
                .position(name)
                .ok_or_else(|| ExportError::column_not_found(name))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((headers, positions))
}

fn whole_table(table: &Table) -> RowRange {
    RowRange::new(0, isize::try_from(table.number_of_rows()).unwrap_or(isize::MAX))
}

/// Write a table as CSV to `writer`.
pub fn write_csv<W: Write>(writer: W, table: &Table, options: &CsvOptions) -> Result<usize> {
    CsvExporter::with_options(writer, options.clone()).write_table(table)
}

/// Write a table to a CSV file.
///
/// The column selection is checked before the file is created, so a bad
/// configuration leaves no file behind. Errors carry the file path.
pub fn export_csv_file(
    path: &Path,
    table: &Table,
    options: &CsvOptions,
) -> std::result::Result<usize, OutputError> {
    let annotate = |source: ExportError| OutputError::file(path, source);

    select_columns(table, options.columns.as_deref()).map_err(annotate)?;
    let rows = CsvExporter::create_with_options(path, options.clone())
        .and_then(|exporter| exporter.write_table(table))
        .map_err(annotate)?;

    tracing::info!(path = %path.display(), rows, "Exported CSV file");
    Ok(rows)
}

/// Write a whole table to a CSV file with default options.
pub fn export_csv_file_default(
    path: &Path,
    table: &Table,
) -> std::result::Result<usize, OutputError> {
    export_csv_file(path, table, &CsvOptions::default())
}
