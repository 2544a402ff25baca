use std::io::BufRead;
use std::path::Path;

use crate::error::{AutosuggestError, Result};

/// Read candidates from a line-oriented source.
///
/// Trailing whitespace is trimmed and blank lines are skipped. Order is kept,
/// since it decides which matches win the limited suggestion slots.
pub fn read_candidates<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();
        if !line.trim().is_empty() {
            candidates.push(line.to_string());
        }
    }
    Ok(candidates)
}

/// Load candidates from a file, one per line.
pub fn load_candidates(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(AutosuggestError::CandidatesNotFound(
            path.display().to_string(),
        ));
    }

    let file = std::fs::File::open(path)?;
    let candidates = read_candidates(std::io::BufReader::new(file))?;
    if candidates.is_empty() {
        return Err(AutosuggestError::EmptyCandidates(
            path.display().to_string(),
        ));
    }

    tracing::debug!(path = %path.display(), count = candidates.len(), "loaded candidates");
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_skips_blank_lines() {
        let input = "Apple\n\n  \nBanana  \r\nGrape\n";
        let candidates = read_candidates(input.as_bytes()).unwrap();
        assert_eq!(candidates, ["Apple", "Banana", "Grape"]);
    }

    #[test]
    fn test_leading_whitespace_is_kept() {
        let candidates = read_candidates("  indented\n".as_bytes()).unwrap();
        assert_eq!(candidates, ["  indented"]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fruit.txt");
        std::fs::write(&path, "Apple\nPineapple\n").unwrap();

        let candidates = load_candidates(&path).unwrap();
        assert_eq!(candidates, ["Apple", "Pineapple"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_candidates(Path::new("/tmp/nonexistent_autosuggest_candidates.txt"))
            .unwrap_err();
        assert!(matches!(err, AutosuggestError::CandidatesNotFound(_)));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "\n\n").unwrap();

        let err = load_candidates(&path).unwrap_err();
        assert!(matches!(err, AutosuggestError::EmptyCandidates(_)));
    }
}
