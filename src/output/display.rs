//! Display functions for command results

use super::formatters::{create_progress_bar, format_grid, format_suggestions};
use crate::commands::{BenchmarkResult, CheckResult, SimilarResult};
use colored::Colorize;

/// Print the board as a grid
pub fn print_board(faces: &[String]) {
    println!("\n{}", "─".repeat(24).cyan());
    for line in format_grid(faces).lines() {
        println!("  {}", line.bright_white().bold());
    }
    println!("{}", "─".repeat(24).cyan());
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    if result.legal {
        println!(
            "{}",
            format!("✅ {} is a word", result.word.to_uppercase())
                .green()
                .bold()
        );
        println!(
            "   Similar: {}",
            format_suggestions(&result.suggestions).bright_yellow()
        );
    } else {
        println!(
            "{}",
            format!("❌ {} is not a word", result.word.to_uppercase())
                .red()
                .bold()
        );
    }
}

/// Print the result of a similarity query
pub fn print_similar_result(result: &SimilarResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SIMILAR WORDS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   In dictionary: {}",
        if result.in_dictionary {
            "yes".green()
        } else {
            "no".red()
        }
    );
    println!("   Searched:      {} words", result.dictionary_size);
    println!("   Found:         {}", result.suggestions.len());

    for word in &result.suggestions {
        println!("     • {}", word.to_uppercase());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Dictionary size:  {}", result.dictionary_size);
    println!("   Queries:          {}", result.total_queries);
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!(
        "   Queries/second:   {}",
        format!("{:.0}", result.queries_per_second)
            .bright_yellow()
            .bold()
    );

    println!("\n📈 {}", "Suggestions:".bright_cyan().bold());
    let bar = create_progress_bar(
        result.average_suggestions,
        result.max_suggestions.max(1) as f64,
        30,
    );
    println!(
        "   Average:          [{}] {:.2}",
        bar.green(),
        result.average_suggestions
    );
    println!("   Most for a word:  {}", result.max_suggestions);

    if result.mismatches.is_empty() {
        println!("\n{}", "✅ Matches a full scan for every query".green().bold());
    } else {
        println!(
            "\n{}",
            format!(
                "❌ {} queries disagree with a full scan",
                result.mismatches.len()
            )
            .red()
            .bold()
        );
        for word in result.mismatches.iter().take(10) {
            println!("     • {word}");
        }
    }
}
