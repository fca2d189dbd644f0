//! Line storage: read and write plain text files one record per line.

use std::fs;
use std::path::Path;

use itertools::Itertools;
use tracing::debug;

use crate::error::CalendarError;

/// Read the non-empty lines of a file, trimmed of surrounding whitespace, in file order.
///
/// # Errors
///
/// Returns [`CalendarError::Io`] if the file does not exist or cannot be read.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CalendarError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let lines: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    debug!(path = %path.display(), count = lines.len(), "read lines");
    Ok(lines)
}

/// Write lines to a file joined by newlines, without a trailing newline, replacing any
/// existing content.
///
/// # Errors
///
/// Returns [`CalendarError::Io`] if the file cannot be written.
pub fn write_lines<S: AsRef<str>, P: AsRef<Path>>(
    lines: &[S],
    path: P,
) -> Result<(), CalendarError> {
    let path = path.as_ref();
    let content = lines.iter().map(AsRef::<str>::as_ref).join("\n");
    fs::write(path, content)?;
    debug!(path = %path.display(), count = lines.len(), "wrote lines");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_lines_skips_blank_and_trims() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("holidays.txt");
        fs::write(&path, "  20210126\n\n\t\n20210311  \r\n20210329").unwrap();
        assert_eq!(
            read_lines(&path).unwrap(),
            vec!["20210126", "20210311", "20210329"]
        );
    }

    #[test]
    fn test_read_lines_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let result = read_lines(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(CalendarError::Io(_))));
    }

    #[test]
    fn test_write_lines_no_trailing_newline() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("out.txt");
        write_lines(&["20210128", "20210225"], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "20210128\n20210225");
    }

    #[test]
    fn test_write_lines_overwrites() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("out.txt");
        fs::write(&path, "old content that is longer").unwrap();
        write_lines(&vec!["new".to_string()], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_lines_empty() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("out.txt");
        let lines: Vec<String> = vec![];
        write_lines(&lines, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_lines_unwritable() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("no_such_dir").join("out.txt");
        assert!(matches!(write_lines(&["x"], &path), Err(CalendarError::Io(_))));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("out.txt");
        write_lines(&["a", "", " b "], &path).unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["a", "b"]);
    }
}
