//! Dictionaries for word ladders
//!
//! Provides the bundled dictionary compiled into the binary, plus loading of
//! whitespace-delimited dictionary files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_entries_are_tokens() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                !word.chars().any(char::is_whitespace),
                "Word '{word}' contains whitespace"
            );
        }
    }

    #[test]
    fn dictionary_has_no_duplicates() {
        let unique: FxHashSet<&str> = DICTIONARY.iter().copied().collect();
        assert_eq!(unique.len(), DICTIONARY.len());
    }

    #[test]
    fn dictionary_contains_classic_ladder() {
        for word in ["cat", "cot", "cog", "dog"] {
            assert!(DICTIONARY.contains(&word), "missing '{word}'");
        }
    }
}
