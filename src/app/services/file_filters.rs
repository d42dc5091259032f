/// Extensions the open dialog offers under "Text Files".
pub const TEXT_FILE_EXTENSIONS: &[&str] = &["txt", "log", "md", "cpp", "h"];

/// Build an FLTK file chooser pattern for the given extensions.
///
/// FLTK accepts these filter formats:
/// - Simple wildcard: "*.txt"
/// - Multiple wildcards: "*.{txt,md,rst}"
/// - With description: "Text Files (*.txt)"
/// - Multiple filters separated by tabs: "Text Files (*.txt)\tAll Files (*)"
pub fn pattern_for(extensions: &[&str]) -> String {
    match extensions {
        [] => "*".to_string(),
        [single] => format!("*.{}", single),
        many => format!("*.{{{}}}", many.join(",")),
    }
}

/// Filter used by the "open text file" dialog.
pub fn text_files_filter() -> String {
    format!(
        "Text Files ({})\tAll Files (*)",
        pattern_for(TEXT_FILE_EXTENSIONS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_single_extension() {
        assert_eq!(pattern_for(&["txt"]), "*.txt");
    }

    #[test]
    fn test_pattern_multiple_extensions() {
        assert_eq!(pattern_for(&["txt", "md", "rst"]), "*.{txt,md,rst}");
    }

    #[test]
    fn test_pattern_no_extensions_matches_everything() {
        assert_eq!(pattern_for(&[]), "*");
    }

    #[test]
    fn test_text_files_filter_format() {
        let filter = text_files_filter();
        assert_eq!(filter, "Text Files (*.{txt,log,md,cpp,h})\tAll Files (*)");
        assert!(filter.contains('\t'));
    }
}
