use regex::Regex;

/// Whole-string match semantics on top of `regex::Regex`.
///
/// Every phone grammar in the registry must cover the complete cleaned
/// input; a grammar that matches only a substring (a shorter number
/// embedded in a longer one) must not count as acceptance.
pub trait RegexFullMatch {
    fn full_match(&self, s: &str) -> bool;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        let found = self.find(s);
        if let Some(matched) = found {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::RegexFullMatch;

    #[test]
    fn rejects_partial_matches() {
        let mobile = Regex::new(r"[6-9]\d{9}").unwrap();
        assert!(mobile.full_match("9876543210"));
        assert!(!mobile.full_match("98765432100"));
        assert!(!mobile.full_match("09876543210"));
        assert!(!mobile.full_match(""));
    }
}
