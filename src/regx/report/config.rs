use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

/// Input used when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "excel_files/input_file.csv";
/// Directory receiving the dated report when no explicit output is given.
pub const DEFAULT_OUTPUT_DIR: &str = "excel_files";

const OUTPUT_PREFIX: &str = "file_output_";
const OUTPUT_SUFFIX: &str = "_with_regx_value.xlsx";

/// Resolved locations for a single report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ReportConfig {
    /// Builds a configuration whose output is named after today's local date.
    pub fn for_today(input: impl Into<PathBuf>, output_dir: &Path) -> Self {
        Self {
            input: input.into(),
            output: Self::dated_output(output_dir, Local::now().date_naive()),
        }
    }

    /// `<dir>/file_output_<DD-MM-YYYY>_with_regx_value.xlsx`
    pub fn dated_output(output_dir: &Path, date: NaiveDate) -> PathBuf {
        output_dir.join(format!(
            "{OUTPUT_PREFIX}{}{OUTPUT_SUFFIX}",
            date.format("%d-%m-%Y")
        ))
    }
}
