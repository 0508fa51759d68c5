//! Display functions for command results

use super::formatters::{create_progress_bar, describe_step};
use crate::commands::{AnalysisResult, BenchmarkResult, GraphStatistics, SolveResult};
use colored::Colorize;

/// Print the result of solving a word pair
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.from.bright_yellow().bold(),
        result.to.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let Some(ladder) = &result.ladder else {
        println!("\n{}", "❌ No solution".red().bold());
        return;
    };

    println!("\n{ladder}");

    if verbose {
        println!();
        for (i, (from, to)) in ladder.steps().enumerate() {
            println!("  {:>2}. {}", i + 1, describe_step(from, to));
        }
        println!("\n  Search time: {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }

    println!();
    println!(
        "{}",
        format!("✅ Edit distance = {}", ladder.distance).green().bold()
    );
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Length:      {}", result.length);
    println!("   Neighbors:   {}", result.degree());
    if !result.neighbors.is_empty() {
        println!("                {}", result.neighbors.join(", "));
    }

    let bar = create_progress_bar(result.reach(), 1.0, 30);
    println!(
        "   Reachable:   [{}] {} of {} words",
        bar.green(),
        result.component_size.to_string().bright_yellow(),
        result.dictionary_size
    );
}

/// Print dictionary statistics
pub fn print_statistics(stats: &GraphStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Graph:".bright_cyan().bold());
    println!("   Words:              {}", stats.total_words);
    println!("   Edges:              {}", stats.total_edges);
    println!("   Average neighbors:  {:.2}", stats.average_degree);
    if let Some((word, degree)) = &stats.max_degree {
        println!("   Most neighbors:     {} ({degree})", word.bright_yellow());
    }
    println!("   Isolated words:     {}", stats.isolated_words);
    println!("   Components:         {}", stats.component_count);
    println!("   Largest component:  {}", stats.largest_component);
    if let Some(build_time) = stats.build_time {
        println!("   Build time:         {:.2}ms", build_time.as_secs_f64() * 1000.0);
    }

    let widest = stats
        .words_by_length
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(0);

    println!("\n📈 {}", "Words by length:".bright_cyan().bold());
    for &(length, count) in &stats.words_by_length {
        let bar = create_progress_bar(count as f64, widest as f64, 40);
        println!("   {length:>2}: {} {count:5}", bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries:          {}", result.total_queries);
    println!(
        "   Ladders found:    {}",
        result.found.to_string().green()
    );
    println!(
        "   No solution:      {}",
        result.no_path.to_string().yellow()
    );
    println!(
        "   Average distance: {}",
        format!("{:.2}", result.average_distance)
            .bright_yellow()
            .bold()
    );
    println!("   Longest ladder:   {}", result.max_distance);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    if let Some(ladder) = &result.longest {
        println!("\n   {ladder}");
    }

    if result.found == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for distance in 0..=result.max_distance {
        if let Some(&count) = result.distribution.get(&distance) {
            let pct = (count as f64 / result.found as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {distance:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
