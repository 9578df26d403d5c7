//! Dictionary word lists
//!
//! A dictionary is a named, static list of valid words used as the search
//! universe. The known dictionaries form a closed enum, so an unknown
//! dictionary cannot be represented at all.

pub mod cache;
pub mod source;

pub use cache::DictionaryCache;
pub use source::{FileWordSource, WordSource};

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

/// The names of the known word dictionaries.
///
/// Adding a dictionary means adding a variant here and shipping a matching
/// `<name>.txt` word file; nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryName {
    /// Official Scrabble Players Dictionary
    Ospd,
    /// Tournament Word List (North America)
    Twl,
    /// Combined international tournament list
    Sowpods,
}

impl DictionaryName {
    /// File stem of the word source for this dictionary
    pub fn file_stem(&self) -> &'static str {
        match self {
            DictionaryName::Ospd => "ospd",
            DictionaryName::Twl => "twl",
            DictionaryName::Sowpods => "sowpods",
        }
    }
}

impl fmt::Display for DictionaryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}
