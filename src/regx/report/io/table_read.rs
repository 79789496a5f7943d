use std::path::Path;

use calamine::{DataType, Reader, open_workbook_auto};
use tracing::debug;

use crate::regx::report::error::{Result, ToolError};
use crate::regx::report::model::{CellValue, InputTable};

/// Source formats understood by the loader, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Delimited text with a header row.
    Csv,
    /// `.xls` or `.xlsx` workbook; only the first sheet is read.
    Spreadsheet,
}

impl InputFormat {
    /// Picks the parser from the extension, ignoring case. No content
    /// sniffing is attempted.
    pub fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(InputFormat::Csv),
            Some("xls") | Some("xlsx") => Ok(InputFormat::Spreadsheet),
            Some(other) => Err(ToolError::UnsupportedFormat(format!(".{other}"))),
            None => Err(ToolError::UnsupportedFormat("(none)".to_string())),
        }
    }
}

/// Reads the metrics export at `path` into an [`InputTable`], keeping the
/// header order of the source.
pub fn read_table(path: &Path) -> Result<InputTable> {
    let format = InputFormat::detect(path)?;
    if !path.exists() {
        return Err(ToolError::MissingInput(path.to_path_buf()));
    }

    let table = match format {
        InputFormat::Csv => read_csv(path)?,
        InputFormat::Spreadsheet => read_first_sheet(path)?,
    };
    debug!(
        ?format,
        column_count = table.columns.len(),
        row_count = table.rows.len(),
        "input table loaded"
    );
    Ok(table)
}

fn read_csv(path: &Path) -> Result<InputTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<CellValue> = record.iter().map(CellValue::parse).collect();
        row.resize(columns.len(), CellValue::Empty);
        rows.push(row);
    }

    Ok(InputTable::new(columns, rows))
}

fn read_first_sheet(path: &Path) -> Result<InputTable> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ToolError::InvalidWorkbook("workbook contains no sheets".into()))??;

    let mut sheet_rows = range.rows();
    let columns: Vec<String> = match sheet_rows.next() {
        Some(header) => header.iter().map(|cell| cell_to_string(Some(cell))).collect(),
        None => Vec::new(),
    };

    let rows = sheet_rows
        .map(|row| {
            let mut cells: Vec<CellValue> = row.iter().map(cell_to_value).collect();
            cells.resize(columns.len(), CellValue::Empty);
            cells
        })
        .collect();

    Ok(InputTable::new(columns, rows))
}

fn cell_to_value(cell: &DataType) -> CellValue {
    match cell {
        DataType::Float(value) => CellValue::Number(*value),
        DataType::Int(value) => CellValue::Number(*value as f64),
        DataType::String(value) => CellValue::parse(value),
        DataType::Empty => CellValue::Empty,
        other => CellValue::Text(other.to_string()),
    }
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
