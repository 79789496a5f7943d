//! Fixed RegX reference scores per metric, keyed by tag or aggregate label.

use crate::regx::report::model::{CellValue, Metric};

const PRECISION: &[(&str, f64)] = &[
    ("boulders", 0.0),
    ("dheqfailure", 0.0),
    ("dircontrol", 0.0),
    ("harddrilling", 0.5),
    ("highrop", 0.0),
    ("holecleaning", 1.0),
    ("lostcirculation", 0.778),
    ("lowrop", 0.727),
    ("packoff", 0.8),
    ("shallowgas", 1.0),
    ("shallowwater", 1.0),
    ("stuckpipe", 0.75),
    ("surfeqfailure", 0.6),
    ("tighthole", 0.385),
    ("wait", 1.0),
    ("wellborebreathing", 1.0),
    ("wellborestability", 1.0),
    ("wellcontrol", 1.0),
    ("avg_precision_per_tag", 0.64),
    ("avg_precision_per_ddr", 0.824),
];

const RECALL: &[(&str, f64)] = &[
    ("boulders", 1.0),
    ("dheqfailure", 0.0),
    ("dircontrol", 1.0),
    ("harddrilling", 1.0),
    ("highrop", 1.0),
    ("holecleaning", 0.0),
    ("lostcirculation", 0.93),
    ("lowrop", 0.8),
    ("packoff", 1.0),
    ("shallowgas", 1.0),
    ("shallowwater", 1.0),
    ("stuckpipe", 0.75),
    ("surfeqfailure", 0.643),
    ("tighthole", 0.769),
    ("wait", 1.0),
    ("wellborebreathing", 1.0),
    ("wellborestability", 1.0),
    ("wellcontrol", 0.857),
    ("avg_recall_per_tag", 0.82),
    ("avg_recall_per_ddr", 0.82),
];

const F1: &[(&str, f64)] = &[
    ("boulders", 0.0),
    ("dheqfailure", 0.0),
    ("dircontrol", 0.0),
    ("harddrilling", 0.667),
    ("highrop", 0.0),
    ("holecleaning", 0.0),
    ("lostcirculation", 0.848),
    ("lowrop", 0.762),
    ("packoff", 0.889),
    ("shallowgas", 1.0),
    ("shallowwater", 1.0),
    ("stuckpipe", 0.75),
    ("surfeqfailure", 0.621),
    ("tighthole", 0.513),
    ("wait", 1.0),
    ("wellborebreathing", 1.0),
    ("wellborestability", 1.0),
    ("wellcontrol", 0.923),
    ("avg_f1_per_tag", 0.609),
    ("avg_f1_per_ddr", 0.819),
];

fn table(metric: Metric) -> &'static [(&'static str, f64)] {
    match metric {
        Metric::Precision => PRECISION,
        Metric::Recall => RECALL,
        Metric::F1 => F1,
    }
}

/// Reference score for `label` under `metric`. Matching is exact and
/// case-sensitive.
pub fn lookup(metric: Metric, label: &str) -> Option<f64> {
    table(metric)
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, score)| *score)
}

/// Reference score as a report cell; a miss yields an empty cell, not zero.
pub fn regx_cell(metric: Metric, label: &str) -> CellValue {
    lookup(metric, label).into()
}
