//! Dictionary word representation
//!
//! A Word is an immutable token from the dictionary. Comparison and hashing are
//! by exact content: no case folding or other normalization is applied.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// A dictionary word
///
/// Stores the original text along with its length in characters, which is what
/// the neighbor predicate compares.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Word {
    text: String,
    len: usize,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must not contain whitespace: {0:?}")]
    ContainsWhitespace(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - The text contains whitespace (dictionary tokens are whitespace-delimited)
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    /// assert_eq!(word.len(), 3);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace(text));
        }

        let len = text.chars().count();
        Ok(Self { text, len })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false; empty words are rejected at construction
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check whether `other` is one substitution away from this word
    #[inline]
    #[must_use]
    pub fn is_neighbor_of(&self, other: &Self) -> bool {
        self.len == other.len && differs_by_one(&self.text, &other.text)
    }

    /// Index of the first character position where the two words differ
    ///
    /// Returns `None` if the words are equal or have different lengths.
    #[must_use]
    pub fn first_difference(&self, other: &Self) -> Option<usize> {
        if self.len != other.len {
            return None;
        }
        self.text
            .chars()
            .zip(other.text.chars())
            .position(|(a, b)| a != b)
    }
}

/// Check whether two words are neighbors
///
/// Neighbors have the same length and differ at exactly one character position.
/// A word is never its own neighbor.
///
/// # Examples
/// ```
/// use word_ladder::core::is_neighbor;
///
/// assert!(is_neighbor("cat", "cot"));
/// assert!(!is_neighbor("cat", "cat"));
/// assert!(!is_neighbor("cat", "dog"));
/// assert!(!is_neighbor("cat", "cats"));
/// ```
#[must_use]
pub fn is_neighbor(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count() && differs_by_one(a, b)
}

/// Counts mismatched positions, stopping at the second one.
/// Callers guarantee equal character lengths.
fn differs_by_one(a: &str, b: &str) -> bool {
    let mut mismatches = 0;
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            mismatches += 1;
            if mismatches > 1 {
                return false;
            }
        }
    }
    mismatches == 1
}

// `len` is derived from `text`, so hashing the text alone keeps Hash
// consistent with Eq and with `str` for `Borrow` lookups.
impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
