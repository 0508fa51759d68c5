//! Breadth-first ladder search
//!
//! Finds the minimum number of single-substitution hops between two dictionary
//! words and reconstructs one shortest ladder.

use super::AdjacencyMap;
use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::fmt;

/// A shortest ladder between two words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    /// Number of substitutions (hops)
    pub distance: usize,
    /// Words from start to goal inclusive; always `distance + 1` long
    pub path: Vec<Word>,
}

impl Ladder {
    /// First word of the ladder
    #[must_use]
    pub fn start(&self) -> &Word {
        &self.path[0]
    }

    /// Last word of the ladder
    #[must_use]
    pub fn goal(&self) -> &Word {
        &self.path[self.path.len() - 1]
    }

    /// Consecutive word pairs, one per hop
    pub fn steps(&self) -> impl Iterator<Item = (&Word, &Word)> {
        self.path.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Per-query breadth-first search state
///
/// Owns the frontier, the explored set and the parent back-pointers for a
/// single query. Distance is counted level by level: `remaining_at_level`
/// words are dequeued before the distance increments, and the words they
/// discover become the next level.
#[derive(Debug)]
pub struct SearchState {
    frontier: VecDeque<usize>,
    in_frontier: FxHashSet<usize>,
    explored: FxHashSet<usize>,
    parent: FxHashMap<usize, usize>,
    distance: usize,
    remaining_at_level: usize,
    processed_at_level: usize,
    discovered_at_next_level: usize,
}

impl SearchState {
    fn new(start: usize) -> Self {
        let mut in_frontier = FxHashSet::default();
        in_frontier.insert(start);
        Self {
            frontier: VecDeque::from([start]),
            in_frontier,
            explored: FxHashSet::default(),
            parent: FxHashMap::default(),
            distance: 0,
            remaining_at_level: 1,
            processed_at_level: 0,
            discovered_at_next_level: 0,
        }
    }

    /// Number of words fully explored so far
    #[must_use]
    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }

    /// Number of words discovered but not yet processed
    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    fn pop(&mut self) -> Option<usize> {
        let current = self.frontier.pop_front()?;
        self.in_frontier.remove(&current);
        Some(current)
    }

    fn push(&mut self, next: usize, from: usize) {
        self.frontier.push_back(next);
        self.in_frontier.insert(next);
        self.parent.insert(next, from);
        self.discovered_at_next_level += 1;
    }

    /// Run until `goal` is dequeued, returning its hop distance
    fn run(&mut self, goal: usize, graph: &AdjacencyMap) -> Option<usize> {
        while let Some(current) = self.pop() {
            self.processed_at_level += 1;

            if current == goal {
                return Some(self.distance);
            }
            self.explored.insert(current);

            for &next in graph.neighbor_indices(current) {
                if !self.explored.contains(&next) && !self.in_frontier.contains(&next) {
                    self.push(next, current);
                }
            }

            if self.processed_at_level == self.remaining_at_level {
                self.processed_at_level = 0;
                self.remaining_at_level = self.discovered_at_next_level;
                self.discovered_at_next_level = 0;
                self.distance += 1;
            }
        }

        None
    }

    /// Walk parent pointers back from `goal` to the start
    fn path_to(&self, goal: usize, graph: &AdjacencyMap) -> Vec<Word> {
        let mut path = vec![graph.word_at(goal).clone()];
        let mut current = goal;
        while let Some(&previous) = self.parent.get(&current) {
            path.push(graph.word_at(previous).clone());
            current = previous;
        }
        path.reverse();
        path
    }
}

/// Find one shortest ladder from `start` to `goal`
///
/// Both words are expected to be keys of `graph`; callers report missing words
/// themselves. A missing word yields `None`, the same as an unreachable goal.
///
/// When several shortest ladders exist, the one found first in dictionary
/// order is returned.
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::graph::{AdjacencyMap, shortest_path};
///
/// let graph: AdjacencyMap = ["cat", "cot", "cog", "dog", "dot"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let ladder = shortest_path("cat", "dog", &graph).unwrap();
/// assert_eq!(ladder.distance, 3);
/// assert_eq!(ladder.to_string(), "cat, cot, cog, dog");
/// ```
#[must_use]
pub fn shortest_path(start: &str, goal: &str, graph: &AdjacencyMap) -> Option<Ladder> {
    let start_ix = graph.index_of(start)?;
    let goal_ix = graph.index_of(goal)?;

    if start_ix == goal_ix {
        return Some(Ladder {
            distance: 0,
            path: vec![graph.word_at(start_ix).clone()],
        });
    }

    let mut state = SearchState::new(start_ix);
    let found = state.run(goal_ix, graph);
    log::trace!(
        "search {start} -> {goal}: explored {} words, {} left in frontier",
        state.explored_count(),
        state.frontier_len()
    );

    found.map(|distance| Ladder {
        distance,
        path: state.path_to(goal_ix, graph),
    })
}
