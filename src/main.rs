//! wordfinder CLI
//!
//! Validates user-supplied search criteria for a word lookup and serves the
//! word list of a chosen dictionary, loading each dictionary at most once.
//!
//! Implements two commands:
//! - `check` - validate search criteria and report every problem at once
//! - `words` - print the (cached) word list for a dictionary

mod cli;
mod criteria;
mod dictionary;
mod error;
mod validator;


use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use cli::{CheckArgs, Cli, Commands, WordsArgs};
use criteria::SearchCriteria;
use dictionary::{DictionaryCache, DictionaryName, FileWordSource};
use validator::Validator;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Words(args) => run_words(args),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(get_exit_code(&e));
        }
    }
}

/// Result of a criteria check, also emitted as JSON with `--json`
#[derive(Serialize)]
struct CheckReport {
    dictionary: DictionaryName,
    valid: bool,
    errors: Vec<String>,
}

/// Execute the check command
fn run_check(args: CheckArgs) -> Result<String> {
    let criteria = criteria_from_args(&args);
    let errors = Validator::new(&criteria).validate();
    let report = CheckReport {
        dictionary: criteria.dictionary(),
        valid: errors.is_empty(),
        errors,
    };

    if args.json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    if report.valid {
        Ok("Search criteria are valid".to_string())
    } else {
        Err(anyhow::anyhow!(
            "Invalid search criteria:\n{}",
            report.errors.join("\n")
        ))
    }
}

/// Execute the words command
fn run_words(args: WordsArgs) -> Result<String> {
    let source = match args.dict_dir {
        Some(dir) => FileWordSource::with_dir(dir),
        None => FileWordSource::new(),
    };
    let cache = DictionaryCache::new(source);

    let words = cache.get_words(args.dictionary);
    if args.count {
        Ok(words.len().to_string())
    } else {
        Ok(words.join("\n"))
    }
}

/// Build search criteria from the parsed check arguments
fn criteria_from_args(args: &CheckArgs) -> SearchCriteria {
    SearchCriteria::new(args.letters.clone())
        .with_contains(args.contains.clone())
        .with_starts_with(args.starts_with.clone())
        .with_ends_with(args.ends_with.clone())
        .with_crossword_mode(args.crossword)
        .with_num_of_letters(args.num_letters.clone())
        .with_dictionary(args.dictionary)
}

/// Map an error to an exit code
fn get_exit_code(err: &anyhow::Error) -> i32 {
    let err_str = err.to_string().to_lowercase();

    if err_str.contains("invalid") {
        1 // Invalid arguments or user input
    } else if err_str.contains("not found") {
        3 // Not found error
    } else {
        5 // Other application errors
    }
}
