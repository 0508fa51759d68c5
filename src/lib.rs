//! Word Ladder
//!
//! Finds the fewest single-letter substitutions that turn one word into another,
//! where every intermediate step must itself be a dictionary word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::graph::{AdjacencyMap, shortest_path};
//! use word_ladder::wordlists::loader::words_from_str;
//!
//! // Build the graph once per dictionary
//! let graph = AdjacencyMap::build(words_from_str("cat cot cog dog dot"));
//!
//! // Then query it as often as needed
//! let ladder = shortest_path("cat", "dog", &graph).unwrap();
//! println!("{ladder} ({} steps)", ladder.distance);
//! ```

// Core domain types
pub mod core;

// Adjacency graph and ladder search
pub mod graph;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
