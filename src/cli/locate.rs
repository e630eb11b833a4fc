use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::{parse_min_words, OutputFormat};
use crate::core::request::MatchRequest;
use crate::core::result::MatchResult;
use crate::matching::{ClauseLocator, LocatorConfig, DEFAULT_MIN_CLAUSE_WORDS};
use crate::utils::validation::validate_body;

#[derive(Args)]
pub struct LocateArgs {
    /// Text to search
    #[arg(
        long,
        conflicts_with_all = ["text_file", "request"],
        required_unless_present_any = ["text_file", "request"]
    )]
    pub text: Option<String>,

    /// File containing the text to search ('-' for stdin)
    #[arg(long, conflicts_with = "request")]
    pub text_file: Option<PathBuf>,

    /// Sentence whose words are matched against the text
    #[arg(long, conflicts_with = "request", required_unless_present = "request")]
    pub sentence: Option<String>,

    /// JSON request body with "text" and "sentence" keys ('-' for stdin),
    /// validated exactly as the HTTP endpoint validates it
    #[arg(long)]
    pub request: Option<PathBuf>,

    /// Minimum number of contiguous words a clause must have
    #[arg(long, default_value_t = DEFAULT_MIN_CLAUSE_WORDS, value_parser = parse_min_words)]
    pub min_words: usize,
}

/// Execute locate subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be read, or if a `--request` body
/// fails validation.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LocateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let request = load_request(&args)?;

    if verbose {
        eprintln!(
            "Searching {} characters of text for {} sentence words",
            request.text.chars().count(),
            request.sentence.split_whitespace().count()
        );
    }

    let locator = ClauseLocator::new(LocatorConfig::with_min_clause_words(args.min_words));
    let result = locator.locate(&request.text, &request.sentence);

    match format {
        OutputFormat::Text => print_text_result(&result, locator.config()),
        OutputFormat::Json => print_json_result(&result)?,
        OutputFormat::Tsv => print_tsv_result(&result),
    }

    Ok(())
}

fn load_request(args: &LocateArgs) -> anyhow::Result<MatchRequest> {
    if let Some(path) = &args.request {
        let body = read_input(path)?;
        return Ok(validate_body(body.as_bytes())?);
    }

    let text = match (&args.text, &args.text_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_input(path)?,
        (None, None) => anyhow::bail!("One of --text, --text-file or --request is required"),
    };
    let sentence = args
        .sentence
        .clone()
        .ok_or_else(|| anyhow::anyhow!("--sentence is required unless --request is given"))?;

    Ok(MatchRequest::new(text, sentence))
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))
}

fn print_text_result(result: &MatchResult<'_>, config: &LocatorConfig) {
    match result {
        MatchResult::Found {
            start_index,
            end_index,
            resulting_match,
            ..
        } => {
            println!("Clause found");
            println!("{}", "=".repeat(60));
            println!("  Match:      \"{resulting_match}\"");
            println!("  Words:      {}", resulting_match.split_whitespace().count());
            println!("  Characters: {start_index}-{end_index} (inclusive)");
        }
        MatchResult::NotFound { .. } => {
            println!(
                "No clause of at least {} contiguous words found",
                config.min_clause_words
            );
        }
    }
}

fn print_json_result(result: &MatchResult<'_>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn print_tsv_result(result: &MatchResult<'_>) {
    println!("result_found\tstart_index\tend_index\tresulting_match");
    match result {
        MatchResult::Found {
            start_index,
            end_index,
            resulting_match,
            ..
        } => println!("true\t{start_index}\t{end_index}\t{resulting_match}"),
        MatchResult::NotFound { .. } => println!("false\t\t\t"),
    }
}
