use super::enums::{CountryCode, PhoneClass};

/// Ordered example inputs per class, spanning the input shapes the country
/// accepts. Purely descriptive: used for error-message suffixes and
/// documentation lookups, never consulted by validation. Every example
/// does, however, validate for its (country, class) pair.
pub struct ClassExamples {
    pub mobile: Option<&'static [&'static str]>,
    pub landline: Option<&'static [&'static str]>,
}

/// Per-country placeholder and example strings.
pub struct CountryFormatInfo {
    /// Canonical mobile example, as a field placeholder.
    pub mobile: Option<&'static str>,
    /// Canonical landline example. Descriptive only; the IN entry carries
    /// the trunk-and-STD-code shape users recognize, which the IN landline
    /// grammar itself does not accept.
    pub landline: Option<&'static str>,
    pub examples: ClassExamples,
}

impl CountryFormatInfo {
    pub fn placeholder(&self, class: PhoneClass) -> Option<&'static str> {
        match class {
            PhoneClass::Mobile => self.mobile,
            PhoneClass::Landline => self.landline,
            PhoneClass::Any => None,
        }
    }

    pub fn examples(&self, class: PhoneClass) -> Option<&'static [&'static str]> {
        match class {
            PhoneClass::Mobile => self.examples.mobile,
            PhoneClass::Landline => self.examples.landline,
            PhoneClass::Any => None,
        }
    }
}

static IN_FORMAT_INFO: CountryFormatInfo = CountryFormatInfo {
    mobile: Some("9876543210"),
    landline: Some("02212345678"),
    examples: ClassExamples {
        mobile: Some(&["9876543210", "98765 43210", "+919876543210"]),
        landline: Some(&["22123456", "221234567"]),
    },
};

static US_FORMAT_INFO: CountryFormatInfo = CountryFormatInfo {
    mobile: Some("(555) 234-5678"),
    landline: None,
    examples: ClassExamples {
        mobile: Some(&[
            "(555) 234-5678",
            "555-234-5678",
            "5552345678",
            "+15552345678",
        ]),
        landline: None,
    },
};

static UK_FORMAT_INFO: CountryFormatInfo = CountryFormatInfo {
    mobile: Some("07123 456789"),
    landline: Some("020 1234 5678"),
    examples: ClassExamples {
        mobile: Some(&["07123456789", "07123 456789", "+447123456789"]),
        landline: Some(&["02012345678", "(020) 1234 5678", "+442012345678"]),
    },
};

pub(super) fn info_for(country: CountryCode) -> &'static CountryFormatInfo {
    match country {
        CountryCode::In => &IN_FORMAT_INFO,
        CountryCode::Us => &US_FORMAT_INFO,
        CountryCode::Uk => &UK_FORMAT_INFO,
    }
}
