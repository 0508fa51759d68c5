//! Core domain types for word ladders
//!
//! This module contains the dictionary word type and the single-substitution
//! neighbor predicate. Everything here is pure and independent of any graph.

mod word;

pub use word::{Word, WordError, is_neighbor};
