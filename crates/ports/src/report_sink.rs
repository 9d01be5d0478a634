// crates/ports/src/report_sink.rs
use cetnik_shared_kernel::Result;

/// Port for delivering a rendered report (stdout, file, ...).
pub trait ReportSink {
    fn write_report(&mut self, rendered: &str) -> Result<()>;
}
