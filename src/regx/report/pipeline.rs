use std::path::Path;

use tracing::{debug, info, instrument};

use crate::regx::report::error::Result;
use crate::regx::report::io::{excel_write, table_read};
use crate::regx::report::model::OutputTable;
use crate::regx::report::reshape;

/// Loads the metrics export, reshapes it, and writes the annotated report.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn generate_report(input: &Path, output: &Path) -> Result<OutputTable> {
    let table = table_read::read_table(input)?;
    info!(column_count = table.columns.len(), "read metrics export");

    let report = reshape::reshape(&table);
    debug!(
        row_count = report.rows.len(),
        labels = ?report.labels(),
        "report reshaped"
    );

    excel_write::write_report(output, &report)?;
    info!("report written");
    Ok(report)
}
