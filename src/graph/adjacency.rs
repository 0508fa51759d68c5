//! Adjacency map construction
//!
//! Connects every pair of dictionary words that differ by a single substitution.

use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Mapping from each dictionary word to its single-substitution neighbors
///
/// Words are stored once, in dictionary order (order of first occurrence), and
/// neighbor lists refer to them by index. Neighbor lists follow dictionary
/// order too, which makes path search deterministic.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMap {
    words: Vec<Word>,
    index: FxHashMap<Word, usize>,
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyMap {
    /// Build the adjacency map for a dictionary
    ///
    /// Duplicate words collapse to their first occurrence. Only words of equal
    /// length are compared, and each word's scan runs in parallel.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    /// use word_ladder::graph::AdjacencyMap;
    ///
    /// let words = ["cat", "cot", "cog", "dog", "dot"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap());
    /// let graph = AdjacencyMap::build(words);
    ///
    /// let neighbors: Vec<&str> = graph
    ///     .neighbors("cot")
    ///     .unwrap()
    ///     .iter()
    ///     .map(|w| w.text())
    ///     .collect();
    /// assert_eq!(neighbors, ["cat", "cog", "dot"]);
    /// ```
    #[must_use]
    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let mut unique: Vec<Word> = Vec::new();
        let mut index: FxHashMap<Word, usize> = FxHashMap::default();
        for word in words {
            if !index.contains_key(&word) {
                index.insert(word.clone(), unique.len());
                unique.push(word);
            }
        }

        // Only equal-length words can be neighbors
        let mut buckets: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for (i, word) in unique.iter().enumerate() {
            buckets.entry(word.len()).or_default().push(i);
        }

        let neighbors: Vec<Vec<usize>> = unique
            .par_iter()
            .enumerate()
            .map(|(i, word)| {
                buckets.get(&word.len()).map_or_else(Vec::new, |bucket| {
                    bucket
                        .iter()
                        .copied()
                        .filter(|&j| j != i && word.is_neighbor_of(&unique[j]))
                        .collect()
                })
            })
            .collect();

        let graph = Self {
            words: unique,
            index,
            neighbors,
        };
        log::debug!(
            "built adjacency map: {} words, {} length buckets, {} edges",
            graph.len(),
            buckets.len(),
            graph.edge_count()
        );
        graph
    }

    /// Number of words in the dictionary
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is a key of the map
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Get the stored word equal to `word`
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        self.index.get(word).map(|&i| &self.words[i])
    }

    /// Neighbors of `word` in dictionary order, or `None` if it is not a key
    #[must_use]
    pub fn neighbors(&self, word: &str) -> Option<Vec<&Word>> {
        let i = self.index_of(word)?;
        Some(self.neighbors[i].iter().map(|&j| &self.words[j]).collect())
    }

    /// Number of neighbors of `word`, or `None` if it is not a key
    #[must_use]
    pub fn degree(&self, word: &str) -> Option<usize> {
        self.index_of(word).map(|i| self.neighbors[i].len())
    }

    /// All words in dictionary order
    pub fn words(&self) -> impl ExactSizeIterator<Item = &Word> {
        self.words.iter()
    }

    /// Number of undirected edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Connected components, each listed in breadth-first discovery order
    ///
    /// Components are ordered by the dictionary position of their first word.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<&Word>> {
        let mut seen = vec![false; self.len()];
        let mut components = Vec::new();

        for start in 0..self.len() {
            if seen[start] {
                continue;
            }
            components.push(
                self.flood(start, &mut seen)
                    .into_iter()
                    .map(|i| &self.words[i])
                    .collect(),
            );
        }

        components
    }

    /// Words reachable from `word`, including itself
    #[must_use]
    pub fn component_of(&self, word: &str) -> Option<Vec<&Word>> {
        let start = self.index_of(word)?;
        let mut seen = vec![false; self.len()];
        Some(
            self.flood(start, &mut seen)
                .into_iter()
                .map(|i| &self.words[i])
                .collect(),
        )
    }

    /// Distinct word lengths present, in ascending order
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let set: FxHashSet<usize> = self.words.iter().map(Word::len).collect();
        let mut lengths: Vec<usize> = set.into_iter().collect();
        lengths.sort_unstable();
        lengths
    }

    pub(crate) fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub(crate) fn word_at(&self, index: usize) -> &Word {
        &self.words[index]
    }

    pub(crate) fn neighbor_indices(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }

    fn flood(&self, start: usize, seen: &mut [bool]) -> Vec<usize> {
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);
        seen[start] = true;

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for &next in &self.neighbors[current] {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }

        order
    }
}

impl FromIterator<Word> for AdjacencyMap {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::build(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(words: &[&str]) -> AdjacencyMap {
        words.iter().map(|&w| Word::new(w).unwrap()).collect()
    }

    fn neighbor_texts<'a>(graph: &'a AdjacencyMap, word: &str) -> Vec<&'a str> {
        graph
            .neighbors(word)
            .unwrap()
            .into_iter()
            .map(Word::text)
            .collect()
    }

    #[test]
    fn cat_dog_scenario_neighbors() {
        let graph = graph_of(&["cat", "cot", "cog", "dog", "dot"]);

        assert_eq!(neighbor_texts(&graph, "cat"), ["cot"]);
        assert_eq!(neighbor_texts(&graph, "cot"), ["cat", "cog", "dot"]);
        assert_eq!(neighbor_texts(&graph, "cog"), ["cot", "dog"]);
        assert_eq!(neighbor_texts(&graph, "dog"), ["cog", "dot"]);
        assert_eq!(neighbor_texts(&graph, "dot"), ["cot", "dog"]);
    }

    #[test]
    fn empty_dictionary_builds_empty_map() {
        let graph = AdjacencyMap::build(Vec::new());
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.components().is_empty());
        assert!(graph.neighbors("cat").is_none());
    }

    #[test]
    fn duplicates_collapse() {
        let graph = graph_of(&["cat", "cot", "cat", "cot", "cat"]);
        assert_eq!(graph.len(), 2);
        assert_eq!(neighbor_texts(&graph, "cat"), ["cot"]);
        assert_eq!(neighbor_texts(&graph, "cot"), ["cat"]);
    }

    #[test]
    fn keys_are_exactly_the_dictionary() {
        let words = ["cat", "dog", "a", "stork"];
        let graph = graph_of(&words);
        for w in words {
            assert!(graph.contains(w));
        }
        assert!(!graph.contains("cot"));
        assert_eq!(graph.len(), words.len());
    }

    #[test]
    fn no_word_neighbors_itself() {
        let graph = graph_of(&["cat", "cot", "cog", "dog", "dot", "bat", "bot", "a", "b"]);
        for word in graph.words() {
            let neighbors = graph.neighbors(word.text()).unwrap();
            assert!(!neighbors.contains(&word), "{word} lists itself");
        }
    }

    #[test]
    fn neighbor_relation_is_symmetric() {
        let graph = graph_of(&["cat", "cot", "cog", "dog", "dot", "bat", "bot", "cats", "cots"]);
        for word in graph.words() {
            for neighbor in graph.neighbors(word.text()).unwrap() {
                let back = graph.neighbors(neighbor.text()).unwrap();
                assert!(back.contains(&word), "{neighbor} missing back-edge to {word}");
            }
        }
    }

    #[test]
    fn different_lengths_never_connect() {
        let graph = graph_of(&["cat", "cats", "at"]);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree("cat"), Some(0));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let graph = graph_of(&["Cat", "cat", "cot"]);
        // "Cat" and "cat" differ only in the first letter, so they are neighbors
        assert_eq!(neighbor_texts(&graph, "Cat"), ["cat"]);
        assert_eq!(neighbor_texts(&graph, "cot"), ["cat"]);
    }

    #[test]
    fn edge_count_counts_each_pair_once() {
        let graph = graph_of(&["cat", "cot", "cog", "dog", "dot"]);
        // cat-cot, cot-cog, cot-dot, cog-dog, dog-dot
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn components_split_disconnected_words() {
        let graph = graph_of(&["cat", "cot", "dog", "dig", "zebra"]);
        let components: Vec<Vec<&str>> = graph
            .components()
            .into_iter()
            .map(|c| c.into_iter().map(Word::text).collect())
            .collect();
        assert_eq!(components, vec![vec!["cat", "cot"], vec!["dog", "dig"], vec!["zebra"]]);
    }

    #[test]
    fn component_of_includes_start() {
        let graph = graph_of(&["cat", "cot", "cog", "dog", "dot", "zebra"]);
        assert_eq!(graph.component_of("cat").unwrap().len(), 5);
        assert_eq!(graph.component_of("zebra").unwrap().len(), 1);
        assert!(graph.component_of("missing").is_none());
    }

    #[test]
    fn get_returns_canonical_word() {
        let graph = graph_of(&["cat"]);
        assert_eq!(graph.get("cat").map(Word::text), Some("cat"));
        assert!(graph.get("dog").is_none());
    }

    #[test]
    fn lengths_are_sorted_and_distinct() {
        let graph = graph_of(&["stork", "cat", "a", "dog", "cats"]);
        assert_eq!(graph.lengths(), vec![1, 3, 4, 5]);
    }
}
