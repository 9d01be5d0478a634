// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use cetnik::{args::Args, config::Config, logging, presentation};
use cetnik_infra::{CzechCollator, FileReportSink, FsTextSource, WriterSink};
use cetnik_ports::report_sink::ReportSink;
use cetnik_usecase::RunAnalysis;
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::try_from(args)?;
    log::debug!("config: {config:?}");

    let source = FsTextSource::new();
    let collator = CzechCollator::new();
    let report = RunAnalysis::new(&source, &collator).run(&config.request())?;
    let rendered = presentation::render(&report, config.format)?;

    match &config.output_path {
        Some(path) => FileReportSink::new(path).write_report(&rendered)?,
        None => WriterSink::stdout().write_report(&rendered)?,
    }
    Ok(())
}
