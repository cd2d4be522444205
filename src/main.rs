use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

mod config;

/// Slipstream: print-order planning for club route slips.
///
/// Orders the active route slips so consecutive print sheets read as
/// differently as possible, and reformats single slips into multi-copy
/// CSV print sheets.
#[derive(Parser)]
#[command(name = "slipstream", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the recommended print order for the active route slips
    Order {
        /// Route slip files to order (overrides the routes list)
        slips: Vec<String>,

        /// Routes list naming the slips, one file per line
        #[arg(long)]
        list: Option<String>,

        /// Emit the sequence as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the pairwise similarity table for the active route slips
    Matrix {
        /// Route slip files to compare (overrides the routes list)
        slips: Vec<String>,

        /// Routes list naming the slips, one file per line
        #[arg(long)]
        list: Option<String>,
    },

    /// Show the simplified word set of a single route slip
    Words {
        /// The route slip file to read
        slip: String,
    },

    /// Reformat a route slip into a multi-copy CSV print sheet
    Sheet {
        /// The route slip file to reformat (stdin when omitted)
        input: Option<String>,

        /// Copies per sheet (default from SLIPSTREAM_COPIES, normally 3)
        #[arg(long)]
        copies: Option<u32>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging on stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("slipstream=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Order { slips, list, json } => {
            let corpus = load_corpus(slips, list)?;
            let matrix = slipstream::similarity::matrix::SimilarityMatrix::build(&corpus);

            info!(slips = corpus.len(), "Computing the best print order");

            match slipstream::tour::best_tour(&matrix) {
                Some(tour) if json => {
                    let report = slipstream::report::OrderReport::new(&corpus, &tour, &matrix);
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                Some(tour) => {
                    slipstream::output::terminal::display_sequence(&corpus, &tour, &matrix);
                }
                None => {
                    println!("No best path found!? The routes list names no slips.");
                }
            }
        }

        Commands::Matrix { slips, list } => {
            let corpus = load_corpus(slips, list)?;
            let matrix = slipstream::similarity::matrix::SimilarityMatrix::build(&corpus);
            slipstream::output::terminal::display_matrix(&corpus, &matrix);
        }

        Commands::Words { slip } => {
            let words = slipstream::slips::read_words(&slip)?;
            slipstream::output::terminal::display_words(&slip, &words);
        }

        Commands::Sheet { input, copies } => {
            let config = config::Config::load()?;
            let copies = copies.unwrap_or(config.copies);
            let stdout = io::stdout().lock();
            match input {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("could not open route slip {path}"))?;
                    slipstream::sheet::write_sheet(BufReader::new(file), stdout, copies)?;
                }
                None => {
                    slipstream::sheet::write_sheet(io::stdin().lock(), stdout, copies)?;
                }
            }
        }
    }

    Ok(())
}

/// Resolve which slips to order: files named on the command line win;
/// otherwise the routes list (--list, then SLIPSTREAM_ACTIVE_LIST, then the
/// default Active_Rides.txt) says what is currently in rotation.
fn load_corpus(slips: Vec<String>, list: Option<String>) -> Result<slipstream::slips::Corpus> {
    let names = if slips.is_empty() {
        let config = config::Config::load()?;
        let list = list.unwrap_or(config.active_list);
        info!(list = %list, "Reading the routes list");
        slipstream::slips::read_active_list(&list)?
    } else {
        slips
    };
    slipstream::slips::Corpus::load(&names)
}
