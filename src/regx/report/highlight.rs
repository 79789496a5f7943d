//! Per-metric highlighting rules for the report.

use crate::regx::report::model::{MetricValues, ValueKind};

/// Which cells of a Before/After/RegX triple should be shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlight {
    /// Before is strictly greater than After.
    pub before: bool,
    /// After is strictly greater than Before.
    pub after: bool,
    /// RegX is positive and strictly greater than both Before and After.
    pub regx: bool,
}

impl Highlight {
    pub fn evaluate(values: &MetricValues) -> Self {
        let before = values.before.as_comparable();
        let after = values.after.as_comparable();
        let regx = values.regx.as_comparable();

        let greater = |lhs: Option<f64>, rhs: Option<f64>| match (lhs, rhs) {
            (Some(lhs), Some(rhs)) => lhs > rhs,
            _ => false,
        };

        Self {
            before: greater(before, after),
            after: greater(after, before),
            regx: greater(regx, Some(0.0)) && greater(regx, before) && greater(regx, after),
        }
    }

    pub fn is_set(&self, kind: ValueKind) -> bool {
        match kind {
            ValueKind::Before => self.before,
            ValueKind::After => self.after,
            ValueKind::RegX => self.regx,
        }
    }
}
