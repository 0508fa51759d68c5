//! Word Ladder - CLI
//!
//! Builds the adjacency graph for a dictionary and answers ladder queries,
//! interactively or one pair at a time.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::time::Instant;
use word_ladder::{
    commands::{
        BenchmarkConfig, analyze_word, graph_statistics, run_benchmark, run_interactive_stdio,
        solve_pair,
    },
    core::Word,
    graph::AdjacencyMap,
    output::{print_analysis_result, print_benchmark_result, print_solve_result, print_statistics},
    wordlists::{DICTIONARY, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Shortest single-substitution ladders between dictionary words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'builtin' (default) or path to a whitespace-delimited word file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt mode (default)
    Play,

    /// Find a shortest ladder between two words
    Solve {
        /// Starting word
        from: String,

        /// Goal word
        to: String,

        /// Show each step and timing
        #[arg(short, long)]
        steps: bool,
    },

    /// Show a word's neighbors and reachability
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Summarize the dictionary's adjacency graph
    Stats,

    /// Benchmark searches over random word pairs
    Benchmark {
        /// Number of random pairs to search
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Seed for reproducible pair selection
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Vec<Word>> {
    use word_ladder::wordlists::loader::load_from_file;

    match wordlist {
        "builtin" => Ok(words_from_slice(DICTIONARY)),
        path => load_from_file(path).with_context(|| format!("failed to read dictionary {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_dictionary(&cli.wordlist)?;

    let build_start = Instant::now();
    let graph = AdjacencyMap::build(words);
    let build_time = build_start.elapsed();
    log::info!(
        "dictionary ready: {} words in {:.2}ms",
        graph.len(),
        build_time.as_secs_f64() * 1000.0
    );

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            run_interactive_stdio(&graph).context("interactive session failed")?;
            Ok(())
        }
        Commands::Solve { from, to, steps } => {
            let result = solve_pair(&from, &to, &graph)?;
            print_solve_result(&result, steps);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &graph)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Stats => {
            print_statistics(&graph_statistics(&graph, Some(build_time)));
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&graph, count, seed);
            Ok(())
        }
    }
}

fn run_benchmark_command(graph: &AdjacencyMap, count: usize, seed: Option<u64>) {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    println!("Running benchmark on {count} random word pairs...");

    let config = BenchmarkConfig::new(count);
    let result = match seed {
        Some(seed) => run_benchmark(graph, &config, &mut StdRng::seed_from_u64(seed)),
        None => run_benchmark(graph, &config, &mut rand::rng()),
    };
    print_benchmark_result(&result);
}
