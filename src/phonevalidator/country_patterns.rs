use regex::Regex;

use super::enums::CountryCode;

// Grammars run against cleaned input (unicode digits folded to ASCII,
// spaces and hyphens removed), and must cover the whole string. Parentheses
// and dots survive cleaning, so the grammars that tolerate them say so.

/// 10 digits, first digit 6-9.
const IN_MOBILE: &'static str = r"[6-9]\d{9}";
/// 8-9 digits, first digit 2-9.
const IN_LANDLINE: &'static str = r"[2-9]\d{7,8}";
const IN_WITH_COUNTRY_CODE: &'static str = r"\+91[6-9]\d{9}";

/// NANP triplet/triplet/quad; area code and exchange start with 2-9,
/// optional parentheses and separators.
const US_MOBILE: &'static str = r"\(?[2-9]\d{2}\)?[-. ]?[2-9]\d{2}[-. ]?\d{4}";
const US_WITH_COUNTRY_CODE: &'static str = r"\+1[2-9]\d{2}[2-9]\d{2}\d{4}";

/// `07` or `+44 7` followed by 9 digits.
const UK_MOBILE: &'static str = r"(?:07|\+44 ?7)\d{3} ?\d{6}";
/// Trunk `0` or `+44`, a 2-3 digit non-zero-starting area code (optionally
/// parenthesized), and the remaining digits.
const UK_LANDLINE: &'static str = r"(?:\(?0|\+44 ?\(?)[1-9]\d{1,2}\)? ?\d{6,8}";

/// Generic `+` followed by 2-15 digits, leading digit non-zero. A
/// registry-level fallback concept: compiled and kept here, but not
/// consulted by per-country validation.
const INTERNATIONAL: &'static str = r"\+[1-9]\d{1,14}";

/// Grammar triple for one country. An absent grammar means that class can
/// never validate for the country (the US defines no landline grammar; the
/// UK class grammars already cover dial-code-prefixed input).
pub struct PatternSet {
    pub mobile: Option<Regex>,
    pub landline: Option<Regex>,
    pub with_country_code: Option<Regex>,
}

pub(super) struct CountryPatternRegistry {
    in_patterns: PatternSet,
    us_patterns: PatternSet,
    uk_patterns: PatternSet,
    pub international: Regex,
}

impl CountryPatternRegistry {
    pub fn new() -> Self {
        // All patterns are compile-time constants; the cfg(test) module
        // below keeps them compiling.
        Self {
            in_patterns: PatternSet {
                mobile: Some(Regex::new(IN_MOBILE).unwrap()),
                landline: Some(Regex::new(IN_LANDLINE).unwrap()),
                with_country_code: Some(Regex::new(IN_WITH_COUNTRY_CODE).unwrap()),
            },
            us_patterns: PatternSet {
                mobile: Some(Regex::new(US_MOBILE).unwrap()),
                landline: None,
                with_country_code: Some(Regex::new(US_WITH_COUNTRY_CODE).unwrap()),
            },
            uk_patterns: PatternSet {
                mobile: Some(Regex::new(UK_MOBILE).unwrap()),
                landline: Some(Regex::new(UK_LANDLINE).unwrap()),
                with_country_code: None,
            },
            international: Regex::new(INTERNATIONAL).unwrap(),
        }
    }

    pub fn set_for(&self, country: CountryCode) -> &PatternSet {
        match country {
            CountryCode::In => &self.in_patterns,
            CountryCode::Us => &self.us_patterns,
            CountryCode::Uk => &self.uk_patterns,
        }
    }
}
