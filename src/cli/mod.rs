//! Command-line interface for clause-locator.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **locate**: Locate a sentence's longest clause inside a text
//! - **serve**: Start the HTTP API
//!
//! ## Usage
//!
//! ```text
//! # Locate a clause given inline strings
//! clause-locator locate --text "The quick brown fox" --sentence "quick brown"
//!
//! # Search a contract file, JSON output
//! clause-locator --format json locate --text-file contract.txt --sentence "for the term"
//!
//! # Replay a request body exactly as the HTTP endpoint would see it
//! clause-locator locate --request body.json
//!
//! # Start the API
//! clause-locator serve --port 8080
//! ```

use clap::{Parser, Subcommand};

use crate::matching::DEFAULT_MIN_CLAUSE_WORDS;

pub mod locate;

#[derive(Parser)]
#[command(name = "clause-locator")]
#[command(version)]
#[command(about = "Locate the longest contiguous clause of a sentence inside a text")]
#[command(
    long_about = "clause-locator finds where a quoted sentence occurs inside a longer document.\n\nThe sentence is matched word by word against the text; the longest contiguous run of at least two words that appears verbatim is reported together with its character offsets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Locate a sentence's clause inside a text
    Locate(locate::LocateArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Minimum number of contiguous words a clause must have
    #[arg(long, default_value_t = DEFAULT_MIN_CLAUSE_WORDS, value_parser = parse_min_words)]
    pub min_words: usize,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Parse a `--min-words` value, which may raise but never lower the default threshold.
pub(crate) fn parse_min_words(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a whole number"))?;
    if value < DEFAULT_MIN_CLAUSE_WORDS {
        return Err(format!(
            "must be at least {DEFAULT_MIN_CLAUSE_WORDS} (single words are never reported as clauses)"
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_min_words() {
        assert_eq!(parse_min_words("2"), Ok(2));
        assert_eq!(parse_min_words("5"), Ok(5));
        assert!(parse_min_words("1").is_err());
        assert!(parse_min_words("0").is_err());
        assert!(parse_min_words("two").is_err());
    }

    #[test]
    fn test_cli_parses_serve_defaults() {
        let cli = Cli::try_parse_from(["clause-locator", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, 8080);
        assert_eq!(args.address, "127.0.0.1");
        assert_eq!(args.min_words, DEFAULT_MIN_CLAUSE_WORDS);
    }
}
