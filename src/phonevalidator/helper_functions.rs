use std::borrow::Cow;

use crate::string_util::{remove_chars, strip_cow_prefix};

use super::enums::CountryCode;
use super::helper_constants::{
    BARE_NSN_LENGTH, FORMATTING_CHARS, IN_DIAL_CODE, NON_SIGNIFICANT_CHARS, PLUS_SIGN,
    UK_DIAL_CODE, US_DIAL_CODE,
};

/// Folds unicode decimal digits to ASCII and removes spaces and hyphens.
/// Parentheses, dots and the plus sign survive; the US grammar inspects
/// parentheses, so cleaning must not eat them.
pub(super) fn clean_input(raw: &str) -> Cow<'_, str> {
    let normalized = dec_from_char::normalize_decimals(raw);
    remove_chars(normalized.into(), NON_SIGNIFICANT_CHARS)
}

/// True for a bare 10-digit national significant number, the shape the US
/// canonicalizer and the US/UK display layouts expect.
pub(super) fn is_bare_nsn(s: &str) -> bool {
    s.len() == BARE_NSN_LENGTH && s.bytes().all(|b| b.is_ascii_digit())
}

/// Rewrites an accepted (already cleaned) number into canonical
/// international form. `None` stands for a country outside the registry
/// and gets the generic plus-prefix treatment.
pub(super) fn canonicalize<'a>(number: Cow<'a, str>, country: Option<CountryCode>) -> Cow<'a, str> {
    let Some(country) = country else {
        if number.starts_with(PLUS_SIGN) {
            return number;
        }
        return Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, number.as_ref()));
    };
    if number.starts_with(country.dial_code()) {
        return number;
    }
    match country {
        CountryCode::In => Cow::Owned(fast_cat::concat_str!(IN_DIAL_CODE, number.as_ref())),
        CountryCode::Us => {
            if number.contains('(') || number.contains(')') {
                let digits = remove_chars(number, FORMATTING_CHARS);
                return Cow::Owned(fast_cat::concat_str!(US_DIAL_CODE, digits.as_ref()));
            }
            let bare = remove_chars(number, NON_SIGNIFICANT_CHARS);
            if is_bare_nsn(&bare) {
                Cow::Owned(fast_cat::concat_str!(US_DIAL_CODE, bare.as_ref()))
            } else {
                // Last resort: input that passed validation always takes
                // one of the branches above, anything else is handed back
                // untouched.
                bare
            }
        }
        CountryCode::Uk => {
            // National format carries a leading trunk zero that the
            // international form drops.
            let national = number.strip_prefix('0').unwrap_or(&number);
            Cow::Owned(fast_cat::concat_str!(UK_DIAL_CODE, national))
        }
    }
}

/// Strips the country's dial-code prefix, leaving the national number. A
/// parenthesized US number without the prefix is depunctuated to bare
/// digits instead. Anything else comes back unchanged.
pub(super) fn extract_national_number<'a>(
    number: Cow<'a, str>,
    country: Option<CountryCode>,
) -> Cow<'a, str> {
    let Some(country) = country else {
        return number;
    };
    if number.starts_with(country.dial_code()) {
        return strip_cow_prefix(number, country.dial_code())
            .expect("prefix presence was just checked");
    }
    if country == CountryCode::Us && (number.contains('(') || number.contains(')')) {
        return remove_chars(number, FORMATTING_CHARS);
    }
    number
}

/// Country-specific human-readable layout. `None` means the national
/// number has an unexpected shape and the caller should fall back to the
/// input as-is.
pub(super) fn auto_layout(number: &str, country: CountryCode) -> Option<String> {
    let national = extract_national_number(Cow::Borrowed(number), Some(country));
    match country {
        CountryCode::In => Some(fast_cat::concat_str!(IN_DIAL_CODE, " ", national.as_ref())),
        CountryCode::Us => is_bare_nsn(&national).then(|| {
            let nsn = national.as_ref();
            fast_cat::concat_str!(
                US_DIAL_CODE,
                " (",
                &nsn[..3],
                ") ",
                &nsn[3..6],
                "-",
                &nsn[6..]
            )
        }),
        CountryCode::Uk => is_bare_nsn(&national).then(|| {
            let nsn = national.as_ref();
            fast_cat::concat_str!(
                UK_DIAL_CODE,
                " ",
                &nsn[..4],
                " ",
                &nsn[4..7],
                " ",
                &nsn[7..]
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{canonicalize, clean_input, extract_national_number};
    use crate::phonevalidator::enums::CountryCode;

    #[test]
    fn cleaning_keeps_significant_punctuation() {
        assert_eq!(clean_input("(555) 234-5678"), "(555)2345678");
        assert_eq!(clean_input("555.234.5678"), "555.234.5678");
        assert_eq!(clean_input("９８７６５４３２１０"), "9876543210");
    }

    #[test]
    fn canonicalize_without_registry_entry_prepends_plus() {
        let canonical = canonicalize(Cow::Borrowed("491711234567"), None);
        assert_eq!(canonical, "+491711234567");
        let canonical = canonicalize(Cow::Borrowed("+491711234567"), None);
        assert_eq!(canonical, "+491711234567");
    }

    #[test]
    fn extract_depunctuates_parenthesized_us_numbers() {
        let national =
            extract_national_number(Cow::Borrowed("(555) 234-5678"), Some(CountryCode::Us));
        assert_eq!(national, "5552345678");
        // Without parentheses and without the prefix the number is
        // already national.
        let national = extract_national_number(Cow::Borrowed("5552345678"), Some(CountryCode::Us));
        assert_eq!(national, "5552345678");
    }
}
