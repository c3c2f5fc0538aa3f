use std::borrow::Cow;

/// Strips prefix of given string Cow. Returns option with `Some` if
/// prefix found and stripped.
///
/// Calls `drain` if string is owned and returns slice if string is borrowed,
/// so stripping a dial code from an already-owned number never reallocates.
pub fn strip_cow_prefix<'a>(cow: Cow<'a, str>, prefix: &str) -> Option<Cow<'a, str>> {
    match cow {
        Cow::Borrowed(s) => s.strip_prefix(prefix).map(|s| Cow::Borrowed(s)),
        Cow::Owned(mut s) => {
            if s.starts_with(prefix) {
                s.drain(0..prefix.len());
                return Some(Cow::Owned(s));
            }
            None
        }
    }
}

/// Removes every occurrence of the given characters. Borrowed input that
/// contains none of them is returned as-is.
pub fn remove_chars<'a>(cow: Cow<'a, str>, chars: &[char]) -> Cow<'a, str> {
    if !cow.contains(chars) {
        return cow;
    }
    Cow::Owned(cow.chars().filter(|c| !chars.contains(c)).collect())
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::string_util::{remove_chars, strip_cow_prefix};

    #[test]
    fn strip_prefix_usage() {
        let number = Cow::Owned("+919876543210".to_owned());
        let stripped = strip_cow_prefix(number, "+91");
        assert_eq!(stripped, Some(Cow::Owned("9876543210".to_owned())));

        let number = Cow::Borrowed("+15552345678");
        let stripped = strip_cow_prefix(number, "+44");
        assert_eq!(stripped, None);
    }

    #[test]
    fn remove_chars_borrows_when_untouched() {
        let clean = remove_chars(Cow::Borrowed("5552345678"), &[' ', '-']);
        assert!(matches!(clean, Cow::Borrowed(_)));

        let stripped = remove_chars(Cow::Borrowed("(555) 234-5678"), &[' ', '-', '(', ')']);
        assert_eq!(stripped, "5552345678");
    }
}
