//! Word analysis command
//!
//! Reports where a single word sits in the adjacency graph.

use super::solve::{LadderError, require_word};
use crate::graph::AdjacencyMap;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub length: usize,
    pub neighbors: Vec<String>,
    /// Words reachable from this one, itself included
    pub component_size: usize,
    pub dictionary_size: usize,
}

impl AnalysisResult {
    #[must_use]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Fraction of the dictionary reachable from this word
    #[must_use]
    pub fn reach(&self) -> f64 {
        if self.dictionary_size == 0 {
            0.0
        } else {
            self.component_size as f64 / self.dictionary_size as f64
        }
    }
}

/// Analyze a word's neighbors and connectivity
///
/// # Errors
///
/// Returns `LadderError::NotInDictionary` if the word is not in the dictionary.
pub fn analyze_word(word: &str, graph: &AdjacencyMap) -> Result<AnalysisResult, LadderError> {
    let found = require_word(word, graph)?;

    let neighbors = graph
        .neighbors(word)
        .unwrap_or_default()
        .into_iter()
        .map(|w| w.text().to_string())
        .collect();
    let component_size = graph.component_of(word).map_or(0, |c| c.len());

    Ok(AnalysisResult {
        word: found.text().to_string(),
        length: found.len(),
        neighbors,
        component_size,
        dictionary_size: graph.len(),
    })
}
