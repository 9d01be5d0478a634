pub mod file_reader;
pub mod file_writer;

pub use file_reader::FsTextSource;
pub use file_writer::{FileReportSink, FileWriter, WriterSink};
