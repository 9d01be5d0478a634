// src/presentation.rs
use std::borrow::Cow;

use cetnik_domain::Category;
use cetnik_shared_kernel::Result;
use cetnik_usecase::{AnalysisReport, ReportEntry};
use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};

use crate::options::OutputFormat;

pub fn render(report: &AnalysisReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Csv => Ok(render_sv(report, ',')),
        OutputFormat::Tsv => Ok(render_sv(report, '\t')),
        OutputFormat::Md => Ok(render_markdown(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => render_yaml(report),
    }
}

/// Glyph plus the Czech case label, e.g. `ˇ (velké)`.
fn char_label(entry: &ReportEntry) -> String {
    match entry.case_label() {
        Some(label) => format!("{} ({label})", entry.glyph),
        None => entry.glyph.clone(),
    }
}

fn summary_line(report: &AnalysisReport) -> String {
    let parts: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{}: {}", c.label(), report.stats.get(*c)))
        .collect();
    format!("Celkem: {} · {}", report.stats.total, parts.join(" · "))
}

fn render_table(report: &AnalysisReport) -> String {
    let with_discount = report.has_discount();
    let mut lines = vec![
        format!("cetnik v{} · {} znaků", crate::VERSION, report.input_length),
        String::new(),
    ];

    if report.entries.is_empty() {
        lines.push("(žádné znaky)".to_string());
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        let mut header = vec!["Znak", "Počet"];
        if with_discount {
            header.extend(["Původně", "Odečteno"]);
        }
        table.set_header(header);

        for entry in &report.entries {
            let mut row = vec![
                Cell::new(char_label(entry)),
                Cell::new(entry.count).set_alignment(CellAlignment::Right),
            ];
            if with_discount {
                row.push(Cell::new(entry.original).set_alignment(CellAlignment::Right));
                row.push(
                    Cell::new(entry.discounted.map(|d| d.to_string()).unwrap_or_default())
                        .set_alignment(CellAlignment::Right),
                );
            }
            table.add_row(row);
        }
        lines.push(table.to_string());
    }

    lines.push(String::new());
    lines.push(summary_line(report));
    lines.join("\n")
}

fn escape_sv(field: &str, delimiter: char) -> Cow<'_, str> {
    if field.contains([delimiter, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn render_sv(report: &AnalysisReport, delimiter: char) -> String {
    let sep = delimiter.to_string();
    let mut lines = vec![["key", "glyph", "case", "count", "original", "discounted"].join(&sep)];
    for entry in &report.entries {
        let fields = [
            escape_sv(entry.key.as_str(), delimiter).into_owned(),
            escape_sv(&entry.glyph, delimiter).into_owned(),
            entry.case.map(|c| c.to_string()).unwrap_or_default(),
            entry.count.to_string(),
            entry.original.to_string(),
            entry.discounted.map(|d| d.to_string()).unwrap_or_default(),
        ];
        lines.push(fields.join(&sep));
    }
    lines.join("\n")
}

fn render_markdown(report: &AnalysisReport) -> String {
    let mut lines = vec![
        "### Četnost znaků".to_string(),
        String::new(),
        "| Znak | Počet | Původně | Odečteno |".to_string(),
        "|:---|---:|---:|---:|".to_string(),
    ];
    for entry in &report.entries {
        lines.push(format!(
            "| {} | {} | {} | {} |",
            char_label(entry).replace('|', "\\|"),
            entry.count,
            entry.original,
            entry.discounted.map(|d| d.to_string()).unwrap_or_default()
        ));
    }
    lines.push(String::new());
    lines.push(format!("{} · {} znaků", summary_line(report), report.input_length));
    lines.join("\n")
}

#[cfg(feature = "yaml")]
fn render_yaml(report: &AnalysisReport) -> Result<String> {
    Ok(serde_yaml::to_string(report)?)
}

#[cfg(not(feature = "yaml"))]
fn render_yaml(_report: &AnalysisReport) -> Result<String> {
    Err(cetnik_shared_kernel::PresentationError::UnsupportedFormat { format: "yaml".to_string() }.into())
}
