//! Search criteria model
//!
//! Holds the fields a user supplies for a word lookup. Built once with
//! defaults, then never mutated; components that keep a copy clone it.

use crate::dictionary::DictionaryName;

/// User-supplied search criteria for a word lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Tile letters, lowercase a-z plus the `.` wildcard
    letters: String,
    /// Regex fragment the word must contain
    contains: String,
    /// Letters the word must start with
    starts_with: String,
    /// Letters the word must end with
    ends_with: String,
    /// Crossword mode relaxes the dot limit and activates the length rule
    crossword_mode: bool,
    /// Requested word length, free text until validated
    num_of_letters: String,
    /// Which dictionary to search
    dictionary: DictionaryName,
}

impl SearchCriteria {
    /// Create criteria with the given letters and defaults everywhere else
    pub fn new(letters: impl Into<String>) -> Self {
        Self {
            letters: letters.into(),
            contains: String::new(),
            starts_with: String::new(),
            ends_with: String::new(),
            crossword_mode: false,
            num_of_letters: String::new(),
            dictionary: DictionaryName::Twl,
        }
    }

    /// Set the contains pattern
    pub fn with_contains(mut self, contains: impl Into<String>) -> Self {
        self.contains = contains.into();
        self
    }

    /// Set the starts-with filter
    pub fn with_starts_with(mut self, starts_with: impl Into<String>) -> Self {
        self.starts_with = starts_with.into();
        self
    }

    /// Set the ends-with filter
    pub fn with_ends_with(mut self, ends_with: impl Into<String>) -> Self {
        self.ends_with = ends_with.into();
        self
    }

    /// Toggle crossword mode
    pub fn with_crossword_mode(mut self, crossword_mode: bool) -> Self {
        self.crossword_mode = crossword_mode;
        self
    }

    /// Set the requested number of letters (kept as entered)
    pub fn with_num_of_letters(mut self, num_of_letters: impl Into<String>) -> Self {
        self.num_of_letters = num_of_letters.into();
        self
    }

    /// Set the dictionary to search
    pub fn with_dictionary(mut self, dictionary: DictionaryName) -> Self {
        self.dictionary = dictionary;
        self
    }

    pub fn letters(&self) -> &str {
        &self.letters
    }

    pub fn contains(&self) -> &str {
        &self.contains
    }

    pub fn starts_with(&self) -> &str {
        &self.starts_with
    }

    pub fn ends_with(&self) -> &str {
        &self.ends_with
    }

    pub fn crossword_mode(&self) -> bool {
        self.crossword_mode
    }

    pub fn num_of_letters(&self) -> &str {
        &self.num_of_letters
    }

    pub fn dictionary(&self) -> DictionaryName {
        self.dictionary
    }
}
