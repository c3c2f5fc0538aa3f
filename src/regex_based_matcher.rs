use log::trace;
use regex::Regex;

use super::regex_util::RegexFullMatch;
use crate::interfaces::GrammarMatcher;

pub struct RegexBasedMatcher;

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl GrammarMatcher for RegexBasedMatcher {
    fn matches_grammar(&self, number: &str, grammar: Option<&Regex>) -> bool {
        // We don't want to consider it a match when matching input against
        // a class the country defines no grammar for.
        let Some(grammar) = grammar else {
            return false;
        };
        let matched = grammar.full_match(number);
        trace!("{:?} against {}: {}", number, grammar.as_str(), matched);
        matched
    }
}
