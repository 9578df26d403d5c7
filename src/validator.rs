//! Search criteria validation
//!
//! Checks every rule independently and accumulates the failures, so the
//! caller gets all problems in one pass instead of one per submission.
//! Message text is displayed verbatim to the user and matched by tests,
//! so it is part of the contract.

use regex::Regex;
use tracing::debug;

use crate::criteria::SearchCriteria;

pub const TOO_FEW_LETTERS: &str = "You must have at least one letter";
pub const LETTERS_OR_DOTS: &str = "Letters can only be \"a\" thru \"z\" and one or two dots";
pub const NO_MORE_THAN_TWO_DOTS: &str = "Letters can have no more than two dots";
pub const CONTAINS_TOO_LONG: &str = "Contains cannot have more than twenty letters";
pub const STARTSWITH_NONLETTERS: &str = "StartsWith must only be letters";
pub const ENDSWITH_NONLETTERS: &str = "EndsWith must only be letters";
pub const INVALID_REGEX: &str = "The regex is invalid";
pub const INVALID_NUMBER: &str = "Number of letters must be a valid number";
pub const TOO_MANY_NUM_OF_LETTERS: &str = "Number of letters cannot be more than twenty";

const LETTERS_DOT_RE: &str = "^[a-z.]*$";
const LETTERS_RE: &str = "^[a-zA-Z]*$";

/// Maximum length of the contains pattern, and the largest word length
/// a crossword search may request
const MAX_LETTERS: usize = 20;

/// Validates a [`SearchCriteria`], returning a list of errors, if any
pub struct Validator {
    criteria: SearchCriteria,
}

impl Validator {
    /// Create a validator over its own copy of the criteria
    pub fn new(criteria: &SearchCriteria) -> Self {
        Self {
            criteria: criteria.clone(),
        }
    }

    /// Run every rule and collect the failures in rule order.
    /// An empty list means the criteria are acceptable.
    pub fn validate(&self) -> Vec<String> {
        debug!("Validating search criteria");

        let mut errors = Vec::new();

        let letters_dot_re = Regex::new(LETTERS_DOT_RE).unwrap();
        let letters_re = Regex::new(LETTERS_RE).unwrap();

        if self.criteria.letters().is_empty() {
            errors.push(TOO_FEW_LETTERS.to_string());
        }

        if !letters_dot_re.is_match(self.criteria.letters()) {
            errors.push(LETTERS_OR_DOTS.to_string());
        }

        if !self.criteria.crossword_mode() && !no_more_than_two_dots(self.criteria.letters()) {
            errors.push(NO_MORE_THAN_TWO_DOTS.to_string());
        }

        if self.criteria.contains().len() > MAX_LETTERS {
            errors.push(CONTAINS_TOO_LONG.to_string());
        }

        if !letters_re.is_match(self.criteria.starts_with()) {
            errors.push(STARTSWITH_NONLETTERS.to_string());
        }

        if !letters_re.is_match(self.criteria.ends_with()) {
            errors.push(ENDSWITH_NONLETTERS.to_string());
        }

        if let Err(err) = Regex::new(self.criteria.contains()) {
            errors.push(INVALID_REGEX.to_string());
            errors.push(err.to_string());
        }

        if self.criteria.crossword_mode() {
            let num_of_letters = self.criteria.num_of_letters().trim();
            if !num_of_letters.is_empty() {
                match num_of_letters.parse::<i32>() {
                    Ok(number) if number > MAX_LETTERS as i32 => {
                        errors.push(TOO_MANY_NUM_OF_LETTERS.to_string());
                    }
                    Ok(_) => {}
                    Err(_) => {
                        errors.push(INVALID_NUMBER.to_string());
                    }
                }
            }
        }

        errors
    }
}

/// True if letters has no more than two dot wildcards
fn no_more_than_two_dots(letters: &str) -> bool {
    letters.chars().filter(|c| *c == '.').count() <= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_no_dot() {
        let criteria = SearchCriteria::new("abc");
        let errors = Validator::new(&criteria).validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_one_dot() {
        let criteria = SearchCriteria::new("ab.c");
        let errors = Validator::new(&criteria).validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_two_dots() {
        let criteria = SearchCriteria::new("a.b.c");
        let errors = Validator::new(&criteria).validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_more_than_two_dots() {
        let criteria = SearchCriteria::new("a.b.c.");
        let errors = Validator::new(&criteria).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], NO_MORE_THAN_TWO_DOTS);
    }

    #[test]
    fn test_crossword_mode_allows_any_dots() {
        let criteria = SearchCriteria::new("a.b.c.d.").with_crossword_mode(true);
        let errors = Validator::new(&criteria).validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_too_few_letters() {
        let criteria = SearchCriteria::new("");
        let errors = Validator::new(&criteria).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], TOO_FEW_LETTERS);
    }

    #[test]
    fn test_not_letters_or_dots() {
        let criteria = SearchCriteria::new("abc5e");
        let errors = Validator::new(&criteria).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], LETTERS_OR_DOTS);
    }

    #[test]
    fn test_bad_letters_still_checked_for_dots() {
        // Rule 2 failing must not short-circuit rule 3
        let criteria = SearchCriteria::new("a.b.c.X");
        let errors = Validator::new(&criteria).validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], LETTERS_OR_DOTS);
        assert_eq!(errors[1], NO_MORE_THAN_TWO_DOTS);
    }

    #[test]
    fn test_contains_too_long() {
        let criteria = SearchCriteria::new("abc").with_contains("abcdefghijklmnopqrstuvwxyz");
        let errors = Validator::new(&criteria).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], CONTAINS_TOO_LONG);
    }

    #[test]
    fn test_contains_at_limit_is_ok() {
        let criteria = SearchCriteria::new("abc").with_contains("abcdefghijklmnopqrst");
        let errors = Validator::new(&criteria).validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_starts_with_nonletters() {
        let criteria = SearchCriteria::new("abc").with_starts_with("a5");
        let errors = Validator::new(&criteria).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], STARTSWITH_NONLETTERS);
    }

    #[test]
    fn test_ends_with_nonletters() {
        let criteria = SearchCriteria::new("abc").with_ends_with("a5");
        let errors = Validator::new(&criteria).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], ENDSWITH_NONLETTERS);
    }

    #[test]
    fn test_mixed_case_prefix_suffix_allowed() {
        let criteria = SearchCriteria::new("abc")
            .with_starts_with("Qi")
            .with_ends_with("ZA");
        let errors = Validator::new(&criteria).validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_invalid_regex_reports_two_errors() {
        let criteria = SearchCriteria::new("abc").with_contains("a(b");
        let errors = Validator::new(&criteria).validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], INVALID_REGEX);
        assert!(!errors[1].is_empty());
    }

    #[test]
    fn test_num_of_letters_can_be_blank() {
        let criteria = SearchCriteria::new("abc")
            .with_crossword_mode(true)
            .with_num_of_letters(" ");
        let errors = Validator::new(&criteria).validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_num_of_letters_ignored_outside_crossword_mode() {
        let criteria = SearchCriteria::new("abc").with_num_of_letters("X");
        let errors = Validator::new(&criteria).validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_num_of_letters_must_be_numeric() {
        let criteria = SearchCriteria::new("abc")
            .with_crossword_mode(true)
            .with_num_of_letters("X");
        let errors = Validator::new(&criteria).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], INVALID_NUMBER);
    }

    #[test]
    fn test_num_of_letters_at_most_twenty() {
        let criteria = SearchCriteria::new("abc")
            .with_crossword_mode(true)
            .with_num_of_letters("21");
        let errors = Validator::new(&criteria).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], TOO_MANY_NUM_OF_LETTERS);
    }

    #[test]
    fn test_num_of_letters_twenty_is_ok() {
        let criteria = SearchCriteria::new("abc")
            .with_crossword_mode(true)
            .with_num_of_letters("20");
        let errors = Validator::new(&criteria).validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_errors_accumulate_in_rule_order() {
        let criteria = SearchCriteria::new("")
            .with_contains("a(b")
            .with_starts_with("1")
            .with_ends_with("2");
        let errors = Validator::new(&criteria).validate();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors[0], TOO_FEW_LETTERS);
        assert_eq!(errors[1], STARTSWITH_NONLETTERS);
        assert_eq!(errors[2], ENDSWITH_NONLETTERS);
        assert_eq!(errors[3], INVALID_REGEX);
        assert!(!errors[4].is_empty());
    }
}
