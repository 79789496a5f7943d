use std::path::Path;

use rust_xlsxwriter::{ColNum, Format, FormatAlign, RowNum, Workbook, Worksheet};

use crate::regx::report::error::Result;
use crate::regx::report::highlight::Highlight;
use crate::regx::report::model::{CellValue, LABEL_COLUMN, OutputTable, ValueKind};

/// Name of the single sheet in the report workbook.
pub const SHEET_NAME: &str = "Sheet1";
/// First worksheet row holding report data, below the two header rows.
pub const FIRST_DATA_ROW: RowNum = 2;

const LABEL_COLUMN_WIDTH: f64 = 15.0;
const DATA_COLUMN_WIDTH: f64 = 12.0;

const HEADER_FILL: u32 = 0xD9E1F2;
const SUBHEADER_FILL: u32 = 0xB4C6E7;
const BEFORE_FILL: u32 = 0xFFC7CE;
const AFTER_FILL: u32 = 0xC6EFCE;
const REGX_FILL: u32 = 0xADD8E6;
const FONT_NAME: &str = "Aptos";

/// A run of consecutive header columns sharing the same group label.
/// `start` and `end` are inclusive worksheet column indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSpan {
    pub start: ColNum,
    pub end: ColNum,
    pub label: String,
}

/// Run-length encodes an ordered sequence of group labels into spans,
/// numbering columns from `first_col`.
pub fn header_spans(labels: &[&str], first_col: ColNum) -> Vec<HeaderSpan> {
    let mut spans: Vec<HeaderSpan> = Vec::new();

    for (offset, label) in labels.iter().enumerate() {
        let col = first_col + offset as ColNum;
        match spans.last_mut() {
            Some(span) if span.label == *label => span.end = col,
            _ => spans.push(HeaderSpan {
                start: col,
                end: col,
                label: (*label).to_string(),
            }),
        }
    }

    spans
}

struct ReportFormats {
    header: Format,
    subheader: Format,
    data: Format,
    before: Format,
    after: Format,
    regx: Format,
}

impl ReportFormats {
    fn new() -> Self {
        let header = Format::new()
            .set_bold()
            .set_background_color(HEADER_FILL)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_font_size(12.5)
            .set_font_name(FONT_NAME);
        let subheader = header.clone().set_background_color(SUBHEADER_FILL);

        let data = Format::new()
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::VerticalCenter)
            .set_font_size(11)
            .set_font_name(FONT_NAME);

        Self {
            header,
            subheader,
            before: data.clone().set_background_color(BEFORE_FILL),
            after: data.clone().set_background_color(AFTER_FILL),
            regx: data.clone().set_background_color(REGX_FILL),
            data,
        }
    }

    fn for_cell(&self, kind: ValueKind, highlight: Highlight) -> &Format {
        if !highlight.is_set(kind) {
            return &self.data;
        }
        match kind {
            ValueKind::Before => &self.before,
            ValueKind::After => &self.after,
            ValueKind::RegX => &self.regx,
        }
    }
}

/// Writes the report to `path` as a single-sheet workbook, replacing any
/// existing file.
pub fn write_report(path: &Path, table: &OutputTable) -> Result<()> {
    let formats = ReportFormats::new();
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    write_header(worksheet, &formats)?;

    for (offset, row) in table.rows.iter().enumerate() {
        let row_idx = FIRST_DATA_ROW + offset as RowNum;
        if row.label.is_empty() {
            worksheet.write_blank(row_idx, 0, &formats.data)?;
        } else {
            worksheet.write_string_with_format(row_idx, 0, &row.label, &formats.data)?;
        }

        let mut col: ColNum = 1;
        for values in &row.metrics {
            let highlight = Highlight::evaluate(values);
            for kind in ValueKind::ALL {
                let format = formats.for_cell(kind, highlight);
                write_cell(worksheet, row_idx, col, values.get(kind), format)?;
                col += 1;
            }
        }
    }

    let data_columns = OutputTable::header().len() as ColNum;
    worksheet.set_column_width(0, LABEL_COLUMN_WIDTH)?;
    for col in 1..=data_columns {
        worksheet.set_column_width(col, DATA_COLUMN_WIDTH)?;
    }

    workbook.save(path)?;
    Ok(())
}

fn write_header(worksheet: &mut Worksheet, formats: &ReportFormats) -> Result<()> {
    worksheet.write_string_with_format(0, 0, LABEL_COLUMN, &formats.header)?;
    worksheet.write_blank(1, 0, &formats.subheader)?;

    let header = OutputTable::header();
    let groups: Vec<&str> = header.iter().map(|(group, _)| *group).collect();

    for span in header_spans(&groups, 1) {
        if span.start == span.end {
            worksheet.write_string_with_format(0, span.start, &span.label, &formats.header)?;
        } else {
            worksheet.merge_range(0, span.start, 0, span.end, &span.label, &formats.header)?;
        }
    }

    for (offset, (_, sub)) in header.iter().enumerate() {
        worksheet.write_string_with_format(1, 1 + offset as ColNum, *sub, &formats.subheader)?;
    }

    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    value: &CellValue,
    format: &Format,
) -> Result<()> {
    match value {
        CellValue::Empty => worksheet.write_blank(row, col, format)?,
        CellValue::Number(number) => worksheet.write_number_with_format(row, col, *number, format)?,
        CellValue::Text(text) => worksheet.write_string_with_format(row, col, text, format)?,
    };
    Ok(())
}
