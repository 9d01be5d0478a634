use std::fs;

use cetnik::{options::OutputFormat, presentation};
use cetnik_infra::{CzechCollator, FileReportSink, FsTextSource};
use cetnik_ports::report_sink::ReportSink;
use cetnik_usecase::{AnalysisReport, ReportOptions, RunAnalysis};

fn sample_report() -> AnalysisReport {
    RunAnalysis::new(&FsTextSource::new(), &CzechCollator::new()).report(
        "Čaj 2x, káva 1x!",
        Some("x"),
        ReportOptions::default(),
    )
}

#[test]
fn every_format_renders() {
    let report = sample_report();
    for format in [OutputFormat::Table, OutputFormat::Csv, OutputFormat::Tsv, OutputFormat::Md, OutputFormat::Json] {
        let out = presentation::render(&report, format).unwrap();
        assert!(!out.is_empty(), "{format} output empty");
    }
}

#[test]
fn csv_rows_follow_sorted_entries() {
    let report = sample_report();
    let out = presentation::render(&report, OutputFormat::Csv).unwrap();
    let first_column: Vec<&str> = out.lines().skip(1).map(|l| l.split(',').next().unwrap_or("")).collect();
    // letters, then diacritics, symbols, digits
    assert_eq!(first_column.first(), Some(&"A"));
    assert_eq!(first_column.last(), Some(&"2"));
    assert_eq!(first_column.len(), report.entries.len());
}

#[test]
fn json_report_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    let rendered = presentation::render(&sample_report(), OutputFormat::Json).unwrap();

    FileReportSink::new(&path).write_report(&rendered).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["stats"]["numbers"], 2);
    assert_eq!(value["stats"]["letters"], 8);
}
