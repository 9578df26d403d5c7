//! CLI definition
//!
//! Command-line surface for checking search criteria and listing
//! dictionary words

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::dictionary::DictionaryName;

/// Wordfinder CLI
#[derive(Parser)]
#[command(name = "wordfinder")]
#[command(about = "Word lookup criteria checker and dictionary word lists", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a set of search criteria
    Check(CheckArgs),
    /// Print the word list for a dictionary
    Words(WordsArgs),
}

/// Check command arguments
#[derive(Parser, Clone, Debug)]
pub struct CheckArgs {
    /// Tile letters, "a" thru "z" with `.` as a wildcard
    #[arg(short, long, default_value = "")]
    pub letters: String,

    /// Regex fragment the word must contain
    #[arg(short, long, default_value = "")]
    pub contains: String,

    /// Letters the word must start with
    #[arg(long, default_value = "")]
    pub starts_with: String,

    /// Letters the word must end with
    #[arg(long, default_value = "")]
    pub ends_with: String,

    /// Crossword mode: unlimited wildcards, fixed word length
    #[arg(short = 'x', long)]
    pub crossword: bool,

    /// Requested word length (used in crossword mode)
    #[arg(short, long, default_value = "")]
    pub num_letters: String,

    /// Dictionary to search
    #[arg(short, long, value_enum, default_value_t = DictionaryName::Twl)]
    pub dictionary: DictionaryName,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Words command arguments
#[derive(Parser, Clone, Debug)]
pub struct WordsArgs {
    /// Dictionary to print
    #[arg(short, long, value_enum, default_value_t = DictionaryName::Twl)]
    pub dictionary: DictionaryName,

    /// Directory containing the dictionary text files
    #[arg(long, env = "WORDFINDER_DICT_DIR")]
    pub dict_dir: Option<PathBuf>,

    /// Print only the word count
    #[arg(long)]
    pub count: bool,
}
