use thiserror::Error;

use super::enums::{CountryCode, PhoneClass, RejectionKind};

// The source design returned a single {isValid, error, formatted,
// errorType} record; it is separated here into Result<canonical, Rejection>
// so callers use the usual Result combinators.

/// Why a value failed validation. Data-level outcomes only: every variant
/// is a returned value, never a panic, whatever the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The value was missing or empty.
    #[error("Phone number is required")]
    Required,
    /// The requested country has no registry entry.
    #[error("Unsupported country code: {0}")]
    UnsupportedCountry(String),
    /// The value matched no grammar applicable to the requested class.
    #[error("Invalid {class} phone number for {country}")]
    InvalidFormat {
        class: PhoneClass,
        country: CountryCode,
    },
}

impl Rejection {
    /// The wire-level kind consuming pipelines select messages by:
    /// [`Required`](RejectionKind::Required) for missing input, and
    /// [`InvalidFormat`](RejectionKind::InvalidFormat) for everything else,
    /// unsupported countries included.
    pub fn kind(&self) -> RejectionKind {
        match self {
            Rejection::Required => RejectionKind::Required,
            Rejection::UnsupportedCountry(_) | Rejection::InvalidFormat { .. } => {
                RejectionKind::InvalidFormat
            }
        }
    }
}

/// Caller configuration errors, as opposed to bad input data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// `custom` mode was requested without a formatter function. Signalled
    /// distinctly because silently rendering another mode would discard the
    /// caller's explicit intent.
    #[error("`custom` format mode requires a custom formatter function")]
    MissingCustomFormatter,
}

/// Combined error for the per-field validate-then-render path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneFieldError {
    #[error("{0}")]
    Rejected(#[from] Rejection),
    #[error("{0}")]
    Misconfigured(#[from] FormatError),
}
