//! Dictionary loading utilities
//!
//! Dictionaries are whitespace-delimited tokens, one word per token. Content is
//! kept exactly as written.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a dictionary file
///
/// Every whitespace-delimited token becomes a word, in file order. Duplicates
/// are kept here; they collapse when the adjacency map is built.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path.as_ref())?;
    let words = words_from_str(&content);
    log::debug!(
        "loaded {} words from {}",
        words.len(),
        path.as_ref().display()
    );
    Ok(words)
}

/// Split text into dictionary words
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_str;
///
/// let words = words_from_str("cat cot\ncog\n\n  dog\tdot\n");
/// assert_eq!(words.len(), 5);
/// assert_eq!(words[3].text(), "dog");
/// ```
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    // Tokens from split_whitespace are never empty or whitespace-bearing
    content
        .split_whitespace()
        .filter_map(|token| Word::new(token).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_slice;
/// use word_ladder::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["cat", "cot", "cog"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "cot");
        assert_eq!(words[2].text(), "cog");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["cat", "", "two words", "dog"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "dog");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn words_from_str_splits_on_any_whitespace() {
        let words = words_from_str("cat  cot\r\ncog\t dog\n\ndot");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["cat", "cot", "cog", "dog", "dot"]);
    }

    #[test]
    fn words_from_str_keeps_case_and_duplicates() {
        let words = words_from_str("Cat cat cat");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["Cat", "cat", "cat"]);
    }

    #[test]
    fn load_from_file_reads_tokens() {
        let path = std::env::temp_dir().join(format!(
            "word_ladder_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "cat cot\ncog dog\ndot\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 5);
        assert_eq!(words[4].text(), "dot");
    }

    #[test]
    fn load_from_missing_file_fails() {
        let path = std::env::temp_dir().join("word_ladder_definitely_missing.txt");
        assert!(load_from_file(path).is_err());
    }
}
