// Colored terminal output for sequences, similarity tables, and word sets.
//
// This module handles all terminal-specific formatting: colors, tables,
// alignment. The main.rs display calls delegate here. Reports go to
// stdout; anything diagnostic goes through tracing to stderr instead.

use colored::Colorize;

use crate::similarity::matrix::SimilarityMatrix;
use crate::slips::Corpus;
use crate::tour::Tour;
use crate::words::WordSet;

/// Display the recommended print order with per-leg similarity.
pub fn display_sequence(corpus: &Corpus, tour: &Tour, matrix: &SimilarityMatrix) {
    println!(
        "\n{}",
        format!(
            "=== Recommended print order ({} slips) ===",
            tour.sequence.len()
        )
        .bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<40} {:>11}",
        "Pos".dimmed(),
        "Route slip".dimmed(),
        "Vs previous".dimmed(),
    );
    println!("  {}", "-".repeat(59).dimmed());

    for (pos, &slip) in tour.sequence.iter().enumerate() {
        let vs_previous = if pos == 0 {
            format!("{:>11}", "-").dimmed()
        } else {
            let score = matrix.get(tour.sequence[pos - 1], slip);
            let cell = format!("{:>11}", format!("{:.1}%", score * 100.0));
            colorize_score(score, &cell)
        };
        println!(
            "  {:>4}. {:<40} {}",
            pos + 1,
            corpus.slips[slip].name,
            vs_previous,
        );
    }

    println!();
    println!(
        "  Path similarity sum: {:.3} {}",
        tour.similarity_sum,
        "(lower is better)".dimmed()
    );
    println!();
}

/// Display the full pairwise similarity table with a numbered legend.
pub fn display_matrix(corpus: &Corpus, matrix: &SimilarityMatrix) {
    if corpus.is_empty() {
        println!("No route slips to compare. Add rides to the routes list first.");
        return;
    }

    let n = corpus.len();
    println!(
        "\n{}",
        format!("=== Pairwise similarity ({n} slips) ===").bold()
    );
    println!();

    // Column header
    print!("  {:>4}", "");
    for col in 1..=n {
        print!(" {}", format!("{col:>7}").dimmed());
    }
    println!();

    for row in 0..n {
        print!("  {}", format!("{:>4}", row + 1).dimmed());
        for col in 0..n {
            if row == col {
                print!(" {}", format!("{:>7}", "-").dimmed());
            } else {
                let score = matrix.get(row, col);
                let cell = format!("{:>7}", format!("{:.1}%", score * 100.0));
                print!(" {}", colorize_score(score, &cell));
            }
        }
        println!();
    }

    println!();
    for (i, slip) in corpus.slips.iter().enumerate() {
        println!("  {:>4}. {}", i + 1, slip.name);
    }
    println!();
}

/// Display the simplified word set of a single slip, sorted, in columns.
pub fn display_words(name: &str, words: &WordSet) {
    println!(
        "\n{}",
        format!("=== Words for {} ({} kept) ===", name, words.len()).bold()
    );
    println!();

    if words.is_empty() {
        println!("  {}", "(no words survived simplification)".dimmed());
        println!();
        return;
    }

    let mut sorted: Vec<&String> = words.iter().collect();
    sorted.sort();
    for chunk in sorted.chunks(6) {
        print!(" ");
        for word in chunk {
            print!(" {word:<12}");
        }
        println!();
    }
    println!();
}

/// Colorize a similarity cell: high overlap is the thing worth noticing.
fn colorize_score(score: f64, text: &str) -> colored::ColoredString {
    if score >= 0.5 {
        text.red()
    } else if score >= 0.25 {
        text.yellow()
    } else {
        text.green()
    }
}
