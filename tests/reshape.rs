use std::path::Path;

use chrono::NaiveDate;
use regx_report::config::ReportConfig;
use regx_report::highlight::Highlight;
use regx_report::io::excel_write::{HeaderSpan, header_spans};
use regx_report::model::{CellValue, InputTable, Metric, MetricValues, OutputTable};
use regx_report::reference;
use regx_report::reshape::{discover_aggregates, discover_tags, reshape};

fn table(columns: &[&str], rows: Vec<Vec<f64>>) -> InputTable {
    InputTable::new(
        columns.iter().map(|column| column.to_string()).collect(),
        rows.into_iter()
            .map(|row| row.into_iter().map(CellValue::Number).collect())
            .collect(),
    )
}

fn triple(before: CellValue, after: CellValue, regx: CellValue) -> MetricValues {
    MetricValues {
        before,
        after,
        regx,
    }
}

#[test]
fn tags_are_sorted_and_case_sensitive() {
    let input = table(
        &[
            "tighthole precision",
            "stuckpipe recall",
            "Stuckpipe F1",
            "stuckpipe f1",
            "avg_recall_per_ddr",
            "notes",
            "",
        ],
        vec![],
    );

    assert_eq!(
        discover_tags(&input),
        vec!["Stuckpipe", "stuckpipe", "tighthole"]
    );
    assert_eq!(discover_aggregates(&input), vec!["avg_recall_per_ddr"]);
}

#[test]
fn aggregate_headers_never_produce_tags() {
    let input = table(
        &[
            "avg_precision_per_tag",
            "AVG_F1_per_ddr",
            "lowrop precision",
        ],
        vec![],
    );

    assert_eq!(discover_tags(&input), vec!["lowrop"]);
    assert_eq!(
        discover_aggregates(&input),
        vec!["AVG_F1_per_ddr", "avg_precision_per_tag"]
    );
}

#[test]
fn tag_and_aggregate_sets_stay_disjoint() {
    let input = table(&["packoff precision", "packoff avg recall"], vec![]);

    let tags = discover_tags(&input);
    let aggregates = discover_aggregates(&input);
    assert_eq!(tags, vec!["packoff"]);
    assert!(aggregates.iter().all(|label| !tags.contains(label)));
}

#[test]
fn reshape_is_repeatable() {
    let input = table(
        &["wait recall", "boulders precision", "avg_f1_per_tag"],
        vec![vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]],
    );

    let first = reshape(&input);
    let second = reshape(&input);
    assert_eq!(first, second);
    assert_eq!(
        first.labels(),
        vec!["boulders", "wait", "avg_f1_per_tag"]
    );
}

#[test]
fn rows_follow_tags_then_separator_then_aggregates() {
    let input = table(
        &["avg_precision_per_ddr", "wellcontrol f1", "holecleaning recall"],
        vec![vec![0.8, 0.9, 1.0], vec![0.85, 0.95, 0.5]],
    );

    let report = reshape(&input);
    let labels: Vec<&str> = report.rows.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["holecleaning", "wellcontrol", "", "avg_precision_per_ddr"]
    );
    assert!(report.rows[2].is_blank());
}

#[test]
fn missing_columns_resolve_to_empty_cells() {
    let input = table(&["stuckpipe precision"], vec![vec![0.5], vec![0.9]]);

    let report = reshape(&input);
    let row = report.row("stuckpipe").expect("tag row");

    assert_eq!(
        row.metric(Metric::Precision),
        &triple(
            CellValue::Number(0.5),
            CellValue::Number(0.9),
            CellValue::Number(0.75)
        )
    );
    assert_eq!(
        row.metric(Metric::Recall),
        &triple(CellValue::Empty, CellValue::Empty, CellValue::Number(0.75))
    );
}

#[test]
fn single_data_row_leaves_after_empty() {
    let input = table(&["lowrop recall"], vec![vec![0.3]]);

    let report = reshape(&input);
    let recall = report.row("lowrop").expect("tag row").metric(Metric::Recall);
    assert_eq!(recall.before, CellValue::Number(0.3));
    assert_eq!(recall.after, CellValue::Empty);
}

#[test]
fn unknown_labels_have_no_reference() {
    let input = table(&["newtag precision"], vec![vec![0.2], vec![0.3]]);

    let report = reshape(&input);
    let row = report.row("newtag").expect("tag row");
    for metric in Metric::ALL {
        assert_eq!(row.metric(metric).regx, CellValue::Empty);
    }
    assert_eq!(reference::lookup(Metric::F1, "newtag"), None);
    assert_eq!(reference::lookup(Metric::F1, "Stuckpipe"), None);
}

#[test]
fn reference_values_are_exact_per_metric() {
    assert_eq!(reference::lookup(Metric::Precision, "stuckpipe"), Some(0.75));
    assert_eq!(reference::lookup(Metric::Recall, "wellcontrol"), Some(0.857));
    assert_eq!(reference::lookup(Metric::F1, "avg_f1_per_ddr"), Some(0.819));
    assert_eq!(reference::lookup(Metric::Precision, "boulders"), Some(0.0));
    assert_eq!(
        reference::regx_cell(Metric::Recall, "avg_precision_per_tag"),
        CellValue::Empty
    );
}

#[test]
fn aggregate_lookup_uses_first_matching_column() {
    let input = table(
        &[
            "avg_recall_per_tag (old)",
            "avg_recall_per_tag",
            "avg_precision_per_tag",
        ],
        vec![vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]],
    );

    let report = reshape(&input);
    let row = report.row("avg_recall_per_tag").expect("aggregate row");
    assert_eq!(row.metric(Metric::Recall).before, CellValue::Number(0.1));
    assert_eq!(row.metric(Metric::Recall).after, CellValue::Number(0.4));
    assert_eq!(row.metric(Metric::Recall).regx, CellValue::Number(0.82));
    assert_eq!(row.metric(Metric::Precision).before, CellValue::Empty);
}

#[test]
fn before_and_after_highlights_are_exclusive() {
    let worse = Highlight::evaluate(&triple(5.0.into(), 3.0.into(), CellValue::Empty));
    assert!(worse.before);
    assert!(!worse.after);

    let better = Highlight::evaluate(&triple(3.0.into(), 5.0.into(), CellValue::Empty));
    assert!(!better.before);
    assert!(better.after);

    let equal = Highlight::evaluate(&triple(4.0.into(), 4.0.into(), CellValue::Empty));
    assert_eq!(equal, Highlight::default());
}

#[test]
fn regx_highlight_requires_positive_leading_value() {
    let ahead = Highlight::evaluate(&triple(2.0.into(), 3.0.into(), 5.0.into()));
    assert!(ahead.regx);

    let zero = Highlight::evaluate(&triple((-2.0).into(), (-1.0).into(), 0.0.into()));
    assert!(!zero.regx);

    let behind = Highlight::evaluate(&triple(2.0.into(), 6.0.into(), 5.0.into()));
    assert!(!behind.regx);
}

#[test]
fn empty_cells_compare_as_zero_and_text_never_matches() {
    let missing_after = Highlight::evaluate(&triple(0.5.into(), CellValue::Empty, 0.75.into()));
    assert!(missing_after.before);
    assert!(missing_after.regx);

    let text = Highlight::evaluate(&triple(
        CellValue::Text("n/a".to_string()),
        0.2.into(),
        0.1.into(),
    ));
    assert_eq!(text, Highlight::default());

    let blank = Highlight::evaluate(&MetricValues::default());
    assert_eq!(blank, Highlight::default());
}

#[test]
fn header_groups_cover_three_columns_each() {
    let header = OutputTable::header();
    let groups: Vec<&str> = header.iter().map(|(group, _)| *group).collect();

    assert_eq!(
        header_spans(&groups, 1),
        vec![
            HeaderSpan {
                start: 1,
                end: 3,
                label: "Precision".to_string()
            },
            HeaderSpan {
                start: 4,
                end: 6,
                label: "Recall".to_string()
            },
            HeaderSpan {
                start: 7,
                end: 9,
                label: "F1".to_string()
            },
        ]
    );
}

#[test]
fn header_spans_split_on_label_change() {
    let spans = header_spans(&["a", "b", "b", "a"], 0);
    let bounds: Vec<(u16, u16)> = spans.iter().map(|span| (span.start, span.end)).collect();
    assert_eq!(bounds, vec![(0, 0), (1, 2), (3, 3)]);
    assert!(header_spans(&[], 1).is_empty());
}

#[test]
fn cell_values_are_classified_from_text() {
    assert_eq!(CellValue::parse("  "), CellValue::Empty);
    assert_eq!(CellValue::parse("0.25"), CellValue::Number(0.25));
    assert_eq!(CellValue::parse("NaN"), CellValue::Empty);
    assert_eq!(
        CellValue::parse("pending"),
        CellValue::Text("pending".to_string())
    );
}

#[test]
fn dated_output_uses_day_month_year() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date");
    let output = ReportConfig::dated_output(Path::new("excel_files"), date);
    assert_eq!(
        output,
        Path::new("excel_files").join("file_output_07-03-2024_with_regx_value.xlsx")
    );
}
