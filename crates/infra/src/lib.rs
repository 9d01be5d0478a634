// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod collation;
pub mod persistence;

pub use collation::CzechCollator;
pub use persistence::{FileReportSink, FsTextSource, WriterSink};
