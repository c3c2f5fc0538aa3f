mod interfaces;
mod phonevalidator;
mod regex_based_matcher;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use phonevalidator::{
    ClassExamples, CountryCode, CountryFormatInfo, CustomFormatFn, FormatError, FormatMode,
    PatternSet, PhoneClass, PhoneFieldError, PhoneOptions, PhoneValidator, Rejection,
    RejectionKind, PHONE_VALIDATOR,
};
