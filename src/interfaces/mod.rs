use regex::Regex;

/// Internal grammar matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait GrammarMatcher {
    /// Returns whether the given cleaned number (digits plus any retained
    /// punctuation) fully matches the grammar. An absent grammar means the
    /// class can never validate, so it must never match.
    fn matches_grammar(&self, number: &str, grammar: Option<&Regex>) -> bool;
}
