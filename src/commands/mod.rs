//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod interactive;
pub mod solve;
pub mod stats;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use interactive::{run_interactive, run_interactive_stdio};
pub use solve::{LadderError, SolveResult, require_word, solve_pair};
pub use stats::{GraphStatistics, graph_statistics};
