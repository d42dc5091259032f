use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Convert CRLF and lone CR line endings to LF, as text-mode reads do.
pub fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename(Path::new("/home/user/test.txt")), "test.txt");
        assert_eq!(extract_filename(Path::new("test.txt")), "test.txt");
        assert_eq!(extract_filename(Path::new("/path/with/many/levels/file.rs")), "file.rs");
    }

    #[test]
    fn test_extract_filename_edge_cases() {
        assert_eq!(extract_filename(Path::new("/home/user/")), "user");
        assert_eq!(extract_filename(Path::new("")), "Unknown");
        assert_eq!(extract_filename(Path::new("/")), "Unknown");
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\r\n"), "a\nb\n");
        assert_eq!(normalize_line_endings("a\rb"), "a\nb");
        assert_eq!(normalize_line_endings("plain\n"), "plain\n");
    }
}
