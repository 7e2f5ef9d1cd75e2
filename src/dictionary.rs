//! This module loads word lists. A dictionary is plain text with one word per
//! line.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Splits dictionary text into words. Lines are trimmed, which also drops
/// `\r` from files with windows line endings, and blank lines are skipped
pub fn parse_dictionary(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Reads a whole dictionary file into memory
pub fn read_dictionary<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DictionaryError::Read {
        path: path.to_owned(),
        source,
    })?;

    let words = parse_dictionary(&text);
    log::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Ensures blank lines and surrounding whitespace are removed
    fn test_parse_dictionary() {
        let words = parse_dictionary("car\r\n  roar \n\n\narco\n");
        assert!(words == ["car", "roar", "arco"], "Got {words:?}");
    }

    #[test]
    /// Entries are kept as is, filtering them is up to the candidate filter
    fn test_parse_keeps_raw_entries() {
        let words = parse_dictionary("it's\nO'Brien\n3d");
        assert!(words == ["it's", "O'Brien", "3d"]);
    }

    #[test]
    /// Reads the bundled test dictionary from disk
    fn test_read_dictionary() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/words.txt");
        let words = read_dictionary(&path).expect("Test dictionary should be readable");

        assert!(words.len() == 144, "Got {} words", words.len());
        assert!(words.first().is_some_and(|word| word == "a"));
        assert!(words.contains(&"x-ray".to_owned()));
    }

    #[test]
    /// A missing file is reported with its path
    fn test_read_missing_dictionary() {
        let result = read_dictionary("INVALIDFILE");
        match result {
            Err(err @ DictionaryError::Read { .. }) => {
                assert!(err.to_string().contains("INVALIDFILE"), "Got {err}")
            }
            Ok(words) => panic!("Expected an error, got {} words", words.len()),
        }
    }
}
