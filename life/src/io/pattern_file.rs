//! Reading pattern files from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::pattern::{Placement, load_centered};

/// Read a pattern file as text lines (`\n` or `\r\n` terminated).
pub fn read_pattern_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read pattern {}", path.display()))?;
    let lines: Vec<String> = contents.lines().map(str::to_string).collect();
    debug!(path = %path.display(), lines = lines.len(), "pattern file read");
    Ok(lines)
}

/// Read `path` and center its pattern in a `rows x columns` grid.
pub fn load_pattern_file(
    path: &Path,
    markers: &[char],
    rows: usize,
    columns: usize,
) -> Result<Placement> {
    let lines = read_pattern_lines(path)?;
    let placement = load_centered(&lines, markers, rows, columns)
        .with_context(|| format!("load pattern {}", path.display()))?;
    Ok(placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CoreError;
    use crate::core::pattern::DEFAULT_ALIVE_MARKERS;
    use crate::test_support::{PatternFile, alive_cells};

    #[test]
    fn crlf_lines_are_stripped() {
        let file = PatternFile::new("xx\r\nox\r\n").expect("pattern file");
        let lines = read_pattern_lines(file.path()).expect("read");
        assert_eq!(lines, vec!["xx".to_string(), "ox".to_string()]);
    }

    #[test]
    fn missing_file_names_the_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = read_pattern_lines(&temp.path().join("nope.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("read pattern"));
        assert!(format!("{err:#}").contains("nope.txt"));
    }

    #[test]
    fn load_pattern_file_centers_contents() {
        let file = PatternFile::new("xxx\n").expect("pattern file");
        let placement =
            load_pattern_file(file.path(), &DEFAULT_ALIVE_MARKERS, 5, 5).expect("placement");
        assert_eq!(alive_cells(&placement.grid), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn empty_pattern_error_is_downcastable() {
        let file = PatternFile::new("....\n").expect("pattern file");
        let err = load_pattern_file(file.path(), &DEFAULT_ALIVE_MARKERS, 5, 5).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoreError>(),
            Some(&CoreError::EmptyPattern)
        );
    }
}
