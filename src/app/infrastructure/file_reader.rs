use std::fs;
use std::path::Path;

use super::error::{AppError, Result};

/// Reads raw file contents for the editor.
pub trait FileReader {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;

    /// Read `path` and decode it as UTF-8, replacing invalid sequences.
    fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = self.read(path).map_err(|source| AppError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(decode_utf8(bytes))
    }
}

/// Reads straight from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFileReader;

impl FileReader for FsFileReader {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// Decode file bytes as UTF-8, dropping a leading BOM.
pub fn decode_utf8(bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    };
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "line one\nline two\n").unwrap();

        let text = FsFileReader.read_text(&path).unwrap();
        assert_eq!(text, "line one\nline two\n");
    }

    #[test]
    fn test_missing_file_is_file_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = FsFileReader.read_text(&path).unwrap_err();
        assert!(matches!(err, AppError::FileOpen { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_directory_is_not_readable_as_text() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FsFileReader.read_text(dir.path()).is_err());
    }

    #[test]
    fn test_decode_strips_bom_and_replaces_invalid_bytes() {
        assert_eq!(decode_utf8(b"\xef\xbb\xbfhi".to_vec()), "hi");
        assert_eq!(decode_utf8(vec![b'a', 0xff, b'b']), "a\u{fffd}b");
        assert_eq!(decode_utf8("中文".as_bytes().to_vec()), "中文");
    }
}
