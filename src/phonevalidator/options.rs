use super::enums::{FormatMode, PhoneClass};
use super::errors::FormatError;
use super::phonevalidator::CustomFormatFn;

/// Per-field configuration for the validate-then-render path, the typed
/// counterpart of a loosely-typed options record. Build with struct update
/// over [`Default`] and run [`checked`](Self::checked) where fail-fast
/// configuration errors are preferred.
///
/// ```
/// use phonevalidator::{FormatMode, PhoneClass, PhoneOptions};
///
/// let options = PhoneOptions {
///     country: "US",
///     class: PhoneClass::Any,
///     mode: FormatMode::National,
///     ..PhoneOptions::default()
/// };
/// assert!(options.checked().is_ok());
/// ```
#[derive(Clone, Copy)]
pub struct PhoneOptions<'a> {
    /// Region code the field is validated against.
    pub country: &'a str,
    pub class: PhoneClass,
    /// When set, empty values are rejected; otherwise they pass through
    /// unvalidated and unformatted.
    pub required: bool,
    pub mode: FormatMode,
    pub custom_format: Option<&'a CustomFormatFn>,
}

impl Default for PhoneOptions<'_> {
    fn default() -> Self {
        Self {
            country: "IN",
            class: PhoneClass::default(),
            required: true,
            mode: FormatMode::default(),
            custom_format: None,
        }
    }
}

impl<'a> PhoneOptions<'a> {
    /// Rejects `custom` mode without a formatter at configuration time
    /// rather than on first use; the misconfiguration is a programming
    /// error at the call site, not a data error.
    pub fn checked(self) -> Result<Self, FormatError> {
        if matches!(self.mode, FormatMode::Custom) && self.custom_format.is_none() {
            return Err(FormatError::MissingCustomFormatter);
        }
        Ok(self)
    }
}
