//! Word pair solving command
//!
//! Validates both words against the dictionary, then searches for a ladder.

use crate::core::Word;
use crate::graph::{AdjacencyMap, Ladder, shortest_path};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors reported before a search is attempted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    #[error("{0} is not in the dictionary")]
    NotInDictionary(String),
}

/// Result of solving a word pair
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub from: String,
    pub to: String,
    /// `None` when no ladder connects the words
    pub ladder: Option<Ladder>,
    pub duration: Duration,
}

impl SolveResult {
    /// Hop distance, if a ladder exists
    #[must_use]
    pub fn distance(&self) -> Option<usize> {
        self.ladder.as_ref().map(|ladder| ladder.distance)
    }
}

/// Look up a word, reporting it as missing from the dictionary if absent
///
/// # Errors
///
/// Returns `LadderError::NotInDictionary` if `word` is not a key of `graph`.
pub fn require_word<'a>(word: &str, graph: &'a AdjacencyMap) -> Result<&'a Word, LadderError> {
    graph
        .get(word)
        .ok_or_else(|| LadderError::NotInDictionary(word.to_string()))
}

/// Find a shortest ladder between two dictionary words
///
/// # Errors
///
/// Returns `LadderError::NotInDictionary` for the first of `from`, `to` that is
/// not in the dictionary. An unreachable goal is not an error; it yields a
/// result without a ladder.
///
/// # Examples
/// ```
/// use word_ladder::commands::solve_pair;
/// use word_ladder::graph::AdjacencyMap;
/// use word_ladder::wordlists::loader::words_from_str;
///
/// let graph = AdjacencyMap::build(words_from_str("cat cot cog dog dot"));
///
/// let result = solve_pair("cat", "dog", &graph).unwrap();
/// assert_eq!(result.distance(), Some(3));
///
/// assert!(solve_pair("cat", "cow", &graph).is_err());
/// ```
pub fn solve_pair(from: &str, to: &str, graph: &AdjacencyMap) -> Result<SolveResult, LadderError> {
    require_word(from, graph)?;
    require_word(to, graph)?;

    let start = Instant::now();
    let ladder = shortest_path(from, to, graph);
    let duration = start.elapsed();

    match &ladder {
        Some(found) => log::debug!("{from} -> {to}: distance {}", found.distance),
        None => log::debug!("{from} -> {to}: no ladder"),
    }

    Ok(SolveResult {
        from: from.to_string(),
        to: to.to_string(),
        ladder,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_str;

    fn scenario() -> AdjacencyMap {
        AdjacencyMap::build(words_from_str("cat cot cog dog dot"))
    }

    #[test]
    fn solve_connected_pair() {
        let graph = scenario();
        let result = solve_pair("cat", "dog", &graph).unwrap();

        assert_eq!(result.from, "cat");
        assert_eq!(result.to, "dog");
        assert_eq!(result.distance(), Some(3));
        assert_eq!(result.ladder.unwrap().path.len(), 4);
    }

    #[test]
    fn solve_same_word() {
        let graph = scenario();
        let result = solve_pair("cog", "cog", &graph).unwrap();
        assert_eq!(result.distance(), Some(0));
    }

    #[test]
    fn solve_disconnected_pair_is_not_an_error() {
        let graph = AdjacencyMap::build(words_from_str("cat dog"));
        let result = solve_pair("cat", "dog", &graph).unwrap();
        assert!(result.ladder.is_none());
        assert_eq!(result.distance(), None);
    }

    #[test]
    fn missing_first_word_reported() {
        let graph = scenario();
        assert_eq!(
            solve_pair("cow", "dog", &graph).unwrap_err(),
            LadderError::NotInDictionary("cow".to_string())
        );
    }

    #[test]
    fn missing_second_word_reported() {
        let graph = scenario();
        assert_eq!(
            solve_pair("cat", "cow", &graph).unwrap_err(),
            LadderError::NotInDictionary("cow".to_string())
        );
    }

    #[test]
    fn missing_word_message() {
        let err = LadderError::NotInDictionary("cow".to_string());
        assert_eq!(err.to_string(), "cow is not in the dictionary");
    }

    #[test]
    fn empty_dictionary_rejects_everything() {
        let graph = AdjacencyMap::build(Vec::new());
        assert!(solve_pair("cat", "cat", &graph).is_err());
    }
}
