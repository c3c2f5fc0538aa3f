use std::borrow::Cow;
use std::str::FromStr;

use log::{trace, warn};
use regex::Regex;
use strum::IntoEnumIterator;

use crate::interfaces::GrammarMatcher;
use crate::regex_based_matcher::RegexBasedMatcher;
use crate::string_util::remove_chars;

use super::country_patterns::{CountryPatternRegistry, PatternSet};
use super::enums::{CountryCode, FormatMode, PhoneClass};
use super::errors::{FormatError, PhoneFieldError, Rejection};
use super::format_metadata::{self, CountryFormatInfo};
use super::helper_constants::FORMATTING_CHARS;
use super::helper_functions::{auto_layout, canonicalize, clean_input, extract_national_number};
use super::options::PhoneOptions;

/// Signature of a caller-supplied formatter for
/// [`FormatMode::Custom`](super::enums::FormatMode::Custom). Invoked once
/// with the number and the country code exactly as given; its result is
/// returned verbatim.
pub type CustomFormatFn = dyn Fn(&str, &str) -> String;

pub struct PhoneValidator {
    /// An API for grammar match checking.
    matcher: Box<dyn GrammarMatcher + Send + Sync>,

    /// Compiled per-country grammars.
    patterns: CountryPatternRegistry,
}

impl PhoneValidator {
    pub(super) fn new() -> Self {
        Self {
            matcher: Box::new(RegexBasedMatcher::new()),
            patterns: CountryPatternRegistry::new(),
        }
    }

    /// Validates a raw value against a country's grammar for the given
    /// class, returning the canonical international form on acceptance.
    ///
    /// Total for any input: missing values, unknown countries and
    /// mismatches all come back as [`Rejection`] values, never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use phonevalidator::{PhoneClass, PHONE_VALIDATOR};
    ///
    /// let canonical = PHONE_VALIDATOR
    ///     .validate(Some("9876543210"), "IN", PhoneClass::Mobile)
    ///     .unwrap();
    /// assert_eq!(canonical, "+919876543210");
    /// ```
    pub fn validate(
        &self,
        raw: Option<&str>,
        country: &str,
        class: PhoneClass,
    ) -> Result<String, Rejection> {
        let Some(raw) = raw.filter(|value| !value.is_empty()) else {
            return Err(Rejection::Required);
        };
        let Ok(code) = CountryCode::from_str(country) else {
            warn!("unknown country code provided: {}", country);
            return Err(Rejection::UnsupportedCountry(country.to_owned()));
        };

        let cleaned = clean_input(raw);
        let set = self.patterns.set_for(code);
        let accepted = match class {
            PhoneClass::Mobile => {
                self.matcher.matches_grammar(&cleaned, set.mobile.as_ref())
                    || self
                        .matcher
                        .matches_grammar(&cleaned, set.with_country_code.as_ref())
            }
            PhoneClass::Landline => self.matcher.matches_grammar(&cleaned, set.landline.as_ref()),
            PhoneClass::Any => {
                self.matcher.matches_grammar(&cleaned, set.mobile.as_ref())
                    || self
                        .matcher
                        .matches_grammar(&cleaned, set.landline.as_ref())
                    || self
                        .matcher
                        .matches_grammar(&cleaned, set.with_country_code.as_ref())
            }
        };
        if !accepted {
            trace!("rejected {:?} as {} number for {}", raw, class, code);
            return Err(Rejection::InvalidFormat {
                class,
                country: code,
            });
        }
        Ok(canonicalize(cleaned, Some(code)).into_owned())
    }

    /// Renders a number into the requested display shape. The number is
    /// assumed canonical where the mode needs it to be; inputs the mode
    /// leaves untouched are returned without copying.
    ///
    /// # Examples
    ///
    /// ```
    /// use phonevalidator::{FormatMode, PHONE_VALIDATOR};
    ///
    /// let display = PHONE_VALIDATOR
    ///     .render("+447123456789", "UK", FormatMode::Auto, None)
    ///     .unwrap();
    /// assert_eq!(display, "+44 7123 456 789");
    /// ```
    pub fn render<'a>(
        &self,
        number: impl Into<Cow<'a, str>>,
        country: &str,
        mode: FormatMode,
        custom_format: Option<&CustomFormatFn>,
    ) -> Result<Cow<'a, str>, FormatError> {
        let number = number.into();
        if number.is_empty() {
            return Ok(number);
        }
        match mode {
            FormatMode::Custom => {
                let formatter = custom_format.ok_or(FormatError::MissingCustomFormatter)?;
                Ok(Cow::Owned(formatter(&number, country)))
            }
            FormatMode::International => Ok(number),
            FormatMode::National => Ok(extract_national_number(
                number,
                CountryCode::from_str(country).ok(),
            )),
            FormatMode::Raw => Ok(remove_chars(number, FORMATTING_CHARS)),
            FormatMode::Auto => {
                let Ok(code) = CountryCode::from_str(country) else {
                    return Ok(number);
                };
                match auto_layout(&number, code) {
                    Some(formatted) => Ok(Cow::Owned(formatted)),
                    None => Ok(number),
                }
            }
        }
    }

    /// Validate-then-render convenience: the raw value is validated
    /// against class `any` and its canonical form rendered per `mode`.
    /// Invalid input comes back unchanged — callers wanting the rejection
    /// detail use [`validate`](Self::validate) directly.
    pub fn format_phone<'a>(
        &self,
        raw: &'a str,
        country: &str,
        mode: FormatMode,
        custom_format: Option<&CustomFormatFn>,
    ) -> Result<Cow<'a, str>, FormatError> {
        match self.validate(Some(raw), country, PhoneClass::Any) {
            Ok(canonical) => self.render(canonical, country, mode, custom_format),
            Err(rejection) => {
                trace!("passing invalid input through unformatted: {}", rejection);
                Ok(Cow::Borrowed(raw))
            }
        }
    }

    /// The per-field entry a request-validation layer calls: honours
    /// `required`, validates with the configured class and renders with
    /// the configured mode. `Ok(None)` means an absent optional value that
    /// must be left untouched.
    pub fn process(
        &self,
        raw: Option<&str>,
        options: &PhoneOptions,
    ) -> Result<Option<String>, PhoneFieldError> {
        let value = raw.filter(|v| !v.is_empty());
        if value.is_none() && !options.required {
            return Ok(None);
        }
        let canonical = self.validate(value, options.country, options.class)?;
        let rendered = self.render(canonical, options.country, options.mode, options.custom_format)?;
        Ok(Some(rendered.into_owned()))
    }

    /// Placeholder string for the country and class, `None` when either is
    /// absent from the metadata table.
    pub fn placeholder(&self, country: &str, class: PhoneClass) -> Option<&'static str> {
        self.country_format_info(country)?.placeholder(class)
    }

    /// Example inputs for the country and class, `None` when either is
    /// absent from the metadata table.
    pub fn examples(&self, country: &str, class: PhoneClass) -> Option<&'static [&'static str]> {
        self.country_format_info(country)?.examples(class)
    }

    /// The whole per-country metadata record.
    pub fn country_format_info(&self, country: &str) -> Option<&'static CountryFormatInfo> {
        match CountryCode::from_str(country) {
            Ok(code) => Some(format_metadata::info_for(code)),
            Err(_) => {
                warn!("unknown country code provided: {}", country);
                None
            }
        }
    }

    pub fn supported_countries(&self) -> Vec<CountryCode> {
        CountryCode::iter().collect()
    }

    /// The compiled grammar triple for a country, `None` for a country
    /// outside the registry.
    pub fn patterns_for(&self, country: &str) -> Option<&PatternSet> {
        CountryCode::from_str(country)
            .ok()
            .map(|code| self.patterns.set_for(code))
    }

    /// The generic international grammar (`+` followed by 2-15 digits,
    /// leading digit non-zero). A registry-level fallback that per-country
    /// validation deliberately does not consult.
    pub fn international_pattern(&self) -> &Regex {
        &self.patterns.international
    }
}
