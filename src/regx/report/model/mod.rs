/// A single cell value as read from the metrics export or produced for the
/// report. Absent values are represented explicitly rather than as zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value available.
    #[default]
    Empty,
    /// Numeric literal.
    Number(f64),
    /// Any non-numeric text.
    Text(String),
}

impl CellValue {
    /// Classifies raw text: blank becomes [`CellValue::Empty`], finite floats
    /// become [`CellValue::Number`], and everything else is kept as text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => CellValue::Number(value),
            Ok(_) => CellValue::Empty,
            Err(_) => CellValue::Text(raw.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Numeric view used by comparisons. Empty cells compare as zero the way
    /// a spreadsheet treats blanks; text has no numeric view.
    pub fn as_comparable(&self) -> Option<f64> {
        match self {
            CellValue::Empty => Some(0.0),
            CellValue::Number(value) => Some(*value),
            CellValue::Text(_) => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(CellValue::Empty, CellValue::Number)
    }
}

/// Tabular metrics export: named columns in source order and the data rows
/// below the header. Row 0 holds the "Before" snapshot and row 1 the "After"
/// snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl InputTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { columns, rows }
    }

    /// Position of the first column whose header equals `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Position of the first column whose header satisfies `predicate`.
    pub fn find_column(&self, predicate: impl Fn(&str) -> bool) -> Option<usize> {
        self.columns.iter().position(|column| predicate(column.as_str()))
    }

    /// Value at the given row and column, empty when either is out of range.
    pub fn value(&self, row: usize, column: usize) -> CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .cloned()
            .unwrap_or_default()
    }
}

/// Metrics reported per tag, in output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Precision,
    Recall,
    F1,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Precision, Metric::Recall, Metric::F1];

    /// Group label used in the report header.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Precision => "Precision",
            Metric::Recall => "Recall",
            Metric::F1 => "F1",
        }
    }

    /// Lower-case form used in source column headers.
    pub fn key(self) -> &'static str {
        match self {
            Metric::Precision => "precision",
            Metric::Recall => "recall",
            Metric::F1 => "f1",
        }
    }

    fn index(self) -> usize {
        match self {
            Metric::Precision => 0,
            Metric::Recall => 1,
            Metric::F1 => 2,
        }
    }
}

/// Sub-columns shown under each metric group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Before,
    After,
    RegX,
}

impl ValueKind {
    pub const ALL: [ValueKind; 3] = [ValueKind::Before, ValueKind::After, ValueKind::RegX];

    pub fn label(self) -> &'static str {
        match self {
            ValueKind::Before => "Before",
            ValueKind::After => "After",
            ValueKind::RegX => "RegX",
        }
    }
}

/// Before, After and reference values for one metric of one row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricValues {
    pub before: CellValue,
    pub after: CellValue,
    pub regx: CellValue,
}

impl MetricValues {
    pub fn get(&self, kind: ValueKind) -> &CellValue {
        match kind {
            ValueKind::Before => &self.before,
            ValueKind::After => &self.after,
            ValueKind::RegX => &self.regx,
        }
    }
}

/// One report row keyed by a tag or aggregate label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputRow {
    pub label: String,
    pub metrics: [MetricValues; 3],
}

impl OutputRow {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            metrics: Default::default(),
        }
    }

    /// Separator row with every cell empty.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn metric(&self, metric: Metric) -> &MetricValues {
        &self.metrics[metric.index()]
    }

    pub fn metric_mut(&mut self, metric: Metric) -> &mut MetricValues {
        &mut self.metrics[metric.index()]
    }

    pub fn is_blank(&self) -> bool {
        self.label.is_empty()
            && self.metrics.iter().all(|values| {
                values.before.is_empty() && values.after.is_empty() && values.regx.is_empty()
            })
    }
}

/// Label of the leading column in the report.
pub const LABEL_COLUMN: &str = "Tag";

/// Reshaped report: tag rows, one blank separator, then aggregate rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputTable {
    pub rows: Vec<OutputRow>,
}

impl OutputTable {
    /// Two-level header of the data columns as `(group, sub-column)` pairs,
    /// excluding the leading label column.
    pub fn header() -> Vec<(&'static str, &'static str)> {
        Metric::ALL
            .into_iter()
            .flat_map(|metric| {
                ValueKind::ALL
                    .into_iter()
                    .map(move |kind| (metric.label(), kind.label()))
            })
            .collect()
    }

    /// Labels of the non-blank rows in output order.
    pub fn labels(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| !row.is_blank())
            .map(|row| row.label.as_str())
            .collect()
    }

    pub fn row(&self, label: &str) -> Option<&OutputRow> {
        self.rows
            .iter()
            .find(|row| !row.label.is_empty() && row.label == label)
    }
}
