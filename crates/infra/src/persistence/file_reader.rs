// crates/infra/src/persistence/file_reader.rs
use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use cetnik_ports::text_source::{TextOrigin, TextSource};
use cetnik_shared_kernel::{InfrastructureError, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Reads text from the filesystem or standard input.
///
/// Input must be UTF-8; a leading byte order mark is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTextSource;

impl FsTextSource {
    pub const fn new() -> Self {
        Self
    }

    /// Read the entire file into memory.
    pub fn read_file(path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|source| InfrastructureError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());
        decode(bytes, &path.display().to_string())
    }

    fn read_stdin() -> Result<String> {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .map_err(|source| InfrastructureError::FileRead { path: "<stdin>".into(), source })?;
        log::debug!("read {} bytes from stdin", bytes.len());
        decode(bytes, "<stdin>")
    }
}

impl TextSource for FsTextSource {
    fn read(&self, origin: &TextOrigin) -> Result<String> {
        match origin {
            TextOrigin::Inline(text) => Ok(text.clone()),
            TextOrigin::File(path) => Self::read_file(path),
            TextOrigin::Stdin => Self::read_stdin(),
        }
    }
}

fn decode(mut bytes: Vec<u8>, origin: &str) -> Result<String> {
    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }
    String::from_utf8(bytes).map_err(|source| {
        InfrastructureError::InvalidEncoding {
            origin: origin.to_string(),
            source,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use cetnik_shared_kernel::CetnikError;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn inline_text_is_returned_as_is() {
        let text = FsTextSource::new().read(&TextOrigin::Inline("Ahoj ".into())).unwrap();
        assert_eq!(text, "Ahoj ");
    }

    #[test]
    fn file_is_read_and_bom_stripped() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFk\xC5\xAF\xC5\x88").unwrap();

        let text = FsTextSource::new().read(&TextOrigin::File(file.path().to_path_buf())).unwrap();
        assert_eq!(text, "kůň");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsTextSource::new()
            .read(&TextOrigin::File(dir.path().join("missing.txt")))
            .unwrap_err();
        assert!(matches!(err, CetnikError::Infrastructure(InfrastructureError::FileRead { .. })));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x61, 0xFF, 0x62]).unwrap();

        let err = FsTextSource::new()
            .read(&TextOrigin::File(file.path().to_path_buf()))
            .unwrap_err();
        assert!(matches!(
            err,
            CetnikError::Infrastructure(InfrastructureError::InvalidEncoding { .. })
        ));
    }
}
