//! Dictionary statistics command
//!
//! Summarizes the shape of the adjacency graph.

use crate::graph::AdjacencyMap;
use std::time::Duration;

/// Summary of an adjacency graph
#[derive(Debug)]
pub struct GraphStatistics {
    pub total_words: usize,
    pub total_edges: usize,
    /// (word length, number of words), ascending by length
    pub words_by_length: Vec<(usize, usize)>,
    pub isolated_words: usize,
    pub component_count: usize,
    pub largest_component: usize,
    pub average_degree: f64,
    pub max_degree: Option<(String, usize)>,
    pub build_time: Option<Duration>,
}

/// Compute statistics for a built graph
///
/// `build_time` is carried through for display when the caller measured it.
#[must_use]
pub fn graph_statistics(graph: &AdjacencyMap, build_time: Option<Duration>) -> GraphStatistics {
    let total_words = graph.len();
    let total_edges = graph.edge_count();

    let words_by_length = graph
        .lengths()
        .into_iter()
        .map(|length| (length, graph.words().filter(|w| w.len() == length).count()))
        .collect();

    let mut isolated_words = 0;
    let mut max_degree: Option<(String, usize)> = None;
    for word in graph.words() {
        let degree = graph.degree(word.text()).unwrap_or(0);
        if degree == 0 {
            isolated_words += 1;
        }
        if max_degree.as_ref().is_none_or(|(_, best)| degree > *best) {
            max_degree = Some((word.text().to_string(), degree));
        }
    }

    let components = graph.components();
    let largest_component = components.iter().map(Vec::len).max().unwrap_or(0);

    let average_degree = if total_words == 0 {
        0.0
    } else {
        (2 * total_edges) as f64 / total_words as f64
    };

    GraphStatistics {
        total_words,
        total_edges,
        words_by_length,
        isolated_words,
        component_count: components.len(),
        largest_component,
        average_degree,
        max_degree,
        build_time,
    }
}
