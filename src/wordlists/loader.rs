//! Word list loading utilities
//!
//! Builds a [`WordList`] from a file or from text, keeping only entries that
//! are valid words.

use super::WordList;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines, `#` comments and entries that are not valid words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use clidle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/allowed.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);

    log::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a newline-separated word list
#[must_use]
pub fn parse_words(content: &str) -> WordList {
    let mut skipped = 0usize;

    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|e| {
                    skipped += 1;
                    log::debug!("Skipping '{line}': {e}");
                })
                .ok()
        })
        .collect();

    if skipped > 0 {
        log::warn!("Skipped {skipped} invalid entries in word list");
    }

    WordList::new(words.iter().map(Word::text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;

    #[test]
    fn parse_words_keeps_valid_words() {
        let words = parse_words("crane\nslate\nirate\n");
        assert_eq!(words.len(), 3);
        assert!(words.is_word("IRATE"));
    }

    #[test]
    fn parse_words_skips_invalid_and_blank() {
        let words = parse_words("crane\n\ntoolong\nabc\n# comment\ncr4ne\n  slate  \n");
        assert_eq!(words.len(), 2);
        assert!(words.is_word("crane"));
        assert!(words.is_word("slate"));
        assert!(!words.is_word("toolong"));
    }

    #[test]
    fn parse_words_empty() {
        assert!(parse_words("").is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("clidle-words-{}.txt", std::process::id()));
        fs::write(&path, "crane\nSLATE\nnope\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert!(words.is_word("slate"));
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }
}
