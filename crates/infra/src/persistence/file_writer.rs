// crates/infra/src/persistence/file_writer.rs
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use cetnik_ports::report_sink::ReportSink;
use cetnik_shared_kernel::{InfrastructureError, Result};
use tempfile::NamedTempFile;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file in the same directory
    /// and a rename.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> io::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(data)?;
        tmp.flush()?;
        let _ = tmp.as_file().sync_all();
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Writes the report to a file, replacing it atomically.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    path: PathBuf,
}

impl FileReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileReportSink {
    fn write_report(&mut self, rendered: &str) -> Result<()> {
        FileWriter::atomic_write(&self.path, rendered.as_bytes()).map_err(|source| InfrastructureError::FileWrite {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("wrote report to {}", self.path.display());
        Ok(())
    }
}

/// Writes the report to any [`Write`] (usually stdout).
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn write_report(&mut self, rendered: &str) -> Result<()> {
        self.inner.write_all(rendered.as_bytes())?;
        if !rendered.ends_with('\n') {
            self.inner.write_all(b"\n")?;
        }
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn atomic_write_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        fs::write(&path, "old").unwrap();

        FileWriter::atomic_write(&path, "nový".as_bytes()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "nový");
    }

    #[test]
    fn file_sink_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileReportSink::new(dir.path().join("out.json"));
        sink.write_report("{}").unwrap();
        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "{}");
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileReportSink::new(dir.path().join("nope").join("out.txt"));
        assert!(sink.write_report("x").is_err());
    }

    #[test]
    fn writer_sink_terminates_with_newline() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_report("a").unwrap();
        sink.write_report("b\n").unwrap();
        assert_eq!(sink.into_inner(), b"a\nb\n");
    }
}
