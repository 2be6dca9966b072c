//! Stdin and filesystem helpers shared by the commands.

use std::io::BufRead;
use std::path::Path;

/// Reads one trimmed line; `None` on EOF or a read error.
///
/// ```rust
/// use std::io::Cursor;
/// # use holdem_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("call\n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("call"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Creates the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn blank_line_is_not_eof() {
        let mut input = Cursor::new("   \n");
        assert_eq!(read_stdin_line(&mut input).as_deref(), Some(""));
    }

    #[test]
    fn creates_nested_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/hands.jsonl");
        ensure_parent_dir(&path).unwrap();
        assert!(dir.path().join("a/b").is_dir());
    }

    #[test]
    fn bare_file_name_needs_no_dir() {
        assert!(ensure_parent_dir(Path::new("hands.jsonl")).is_ok());
    }
}
