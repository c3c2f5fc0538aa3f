mod country_patterns;
mod format_metadata;
mod helper_constants;
mod helper_functions;
pub mod enums;
pub mod errors;
pub mod options;
pub mod phonevalidator;

use std::sync::LazyLock;

pub use country_patterns::PatternSet;
pub use enums::{CountryCode, FormatMode, PhoneClass, RejectionKind};
pub use errors::{FormatError, PhoneFieldError, Rejection};
pub use format_metadata::{ClassExamples, CountryFormatInfo};
pub use options::PhoneOptions;
pub use phonevalidator::{CustomFormatFn, PhoneValidator};

/// Shared validator instance. All registries are immutable after
/// construction, so the instance is safe to use from any number of threads.
pub static PHONE_VALIDATOR: LazyLock<PhoneValidator> = LazyLock::new(|| {
    PhoneValidator::new()
});
