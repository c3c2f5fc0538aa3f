use strum::{Display, EnumIter, EnumString};

use super::helper_constants::{IN_DIAL_CODE, UK_DIAL_CODE, US_DIAL_CODE};

/// Countries with a registered pattern set.
///
/// Public entry points take region codes as strings (`"IN"`, `"US"`,
/// `"UK"`), so a code outside this set is reported as an unsupported
/// country instead of silently falling back to a default.
#[derive(Debug, Display, EnumIter, EnumString, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "UPPERCASE")]
pub enum CountryCode {
    /// India, dial code `+91`.
    In,
    /// United States, dial code `+1`.
    Us,
    /// United Kingdom, dial code `+44`.
    Uk,
}

impl CountryCode {
    /// The international dialing prefix for this country.
    pub fn dial_code(&self) -> &'static str {
        match self {
            CountryCode::In => IN_DIAL_CODE,
            CountryCode::Us => US_DIAL_CODE,
            CountryCode::Uk => UK_DIAL_CODE,
        }
    }
}

/// Structural category a number is validated against.
#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[strum(serialize_all = "lowercase")]
pub enum PhoneClass {
    /// **Mobile numbers.**
    /// Accepted when the country's mobile grammar matches, or when the
    /// number already carries the country's dial code and matches the
    /// with-country-code grammar.
    #[default]
    Mobile,
    /// **Landline numbers.**
    /// Some countries define no landline grammar (the US, where mobile and
    /// fixed-line numbers are indistinguishable); for those this class can
    /// never validate.
    Landline,
    /// **Any class.**
    /// Accepted when the mobile, landline or with-country-code grammar
    /// matches.
    Any,
}

/// Display shapes a validated number can be rendered into.
///
/// For the US office number of a fictional company this would be:
/// - **Auto**: `+1 (555) 234-5678`
/// - **International**: `+15552345678` (the canonical form, unchanged)
/// - **National**: `5552345678`
/// - **Raw**: `+15552345678` with every space, hyphen and parenthesis
///   removed
#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[strum(serialize_all = "lowercase")]
pub enum FormatMode {
    /// **Country-specific human-readable layout.** The default. Falls back
    /// to the unchanged input for countries without a layout or for
    /// nationals of unexpected length.
    #[default]
    Auto,
    /// **Canonical international form**, returned unchanged.
    International,
    /// **National form**: the dial-code prefix removed.
    National,
    /// **Depunctuated form**: digits and the plus sign only.
    Raw,
    /// **Caller-supplied formatter.** Requires a formatter function;
    /// requesting this mode without one is a configuration error, never a
    /// silent fallback to another mode.
    Custom,
}

/// Wire-level kind of a validation rejection. Field-error message tables in
/// consuming request pipelines key on these names.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// The value was missing or empty.
    #[strum(serialize = "required")]
    Required,
    /// The value did not match any applicable grammar, or named an
    /// unsupported country.
    #[strum(serialize = "invalidFormat")]
    InvalidFormat,
}
