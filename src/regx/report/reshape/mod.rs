use std::collections::BTreeSet;

use crate::regx::report::model::{InputTable, Metric, MetricValues, OutputRow, OutputTable};
use crate::regx::report::reference;

/// Substring marking aggregate columns such as `avg_precision_per_tag`.
pub const AGGREGATE_MARKER: &str = "avg";

/// Row index of the "Before" snapshot in the input table.
pub const BEFORE_ROW: usize = 0;
/// Row index of the "After" snapshot in the input table.
pub const AFTER_ROW: usize = 1;

/// Pivots the metrics export into one row per tag followed by a blank
/// separator and one row per aggregate label.
pub fn reshape(table: &InputTable) -> OutputTable {
    let tags = discover_tags(table);
    let aggregates = discover_aggregates(table);

    let mut rows = Vec::with_capacity(tags.len() + aggregates.len() + 1);

    for tag in &tags {
        let mut row = OutputRow::new(tag.clone());
        for metric in Metric::ALL {
            let column = table.column_index(&tag_column_name(tag, metric));
            *row.metric_mut(metric) = metric_values(table, column, metric, tag);
        }
        rows.push(row);
    }

    rows.push(OutputRow::blank());

    for label in &aggregates {
        let mut row = OutputRow::new(label.clone());
        for metric in Metric::ALL {
            let column = aggregate_column(table, label, metric);
            *row.metric_mut(metric) = metric_values(table, column, metric, label);
        }
        rows.push(row);
    }

    OutputTable { rows }
}

/// Sorted, de-duplicated tags taken from headers that name a metric and are
/// not aggregates.
pub fn discover_tags(table: &InputTable) -> Vec<String> {
    table
        .columns
        .iter()
        .filter(|header| names_metric(header) && !is_aggregate(header))
        .filter_map(|header| first_token(header))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted, de-duplicated aggregate labels taken from headers containing
/// `avg`. Labels already discovered as tags are left out.
pub fn discover_aggregates(table: &InputTable) -> Vec<String> {
    let tags: BTreeSet<String> = discover_tags(table).into_iter().collect();
    table
        .columns
        .iter()
        .filter(|header| is_aggregate(header))
        .filter_map(|header| first_token(header))
        .filter(|label| !tags.contains(*label))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Header under which a tag's metric is exported, e.g. `stuckpipe recall`.
pub fn tag_column_name(tag: &str, metric: Metric) -> String {
    format!("{tag} {}", metric.key())
}

/// First column containing the label verbatim and the metric name in any case.
fn aggregate_column(table: &InputTable, label: &str, metric: Metric) -> Option<usize> {
    table.find_column(|header| {
        header.contains(label) && header.to_lowercase().contains(metric.key())
    })
}

fn metric_values(
    table: &InputTable,
    column: Option<usize>,
    metric: Metric,
    label: &str,
) -> MetricValues {
    let (before, after) = match column {
        Some(index) => (
            table.value(BEFORE_ROW, index),
            table.value(AFTER_ROW, index),
        ),
        None => Default::default(),
    };

    MetricValues {
        before,
        after,
        regx: reference::regx_cell(metric, label),
    }
}

fn names_metric(header: &str) -> bool {
    let lowered = header.to_lowercase();
    Metric::ALL
        .iter()
        .any(|metric| lowered.contains(metric.key()))
}

fn is_aggregate(header: &str) -> bool {
    header.to_lowercase().contains(AGGREGATE_MARKER)
}

fn first_token(header: &str) -> Option<&str> {
    header.split_whitespace().next()
}
