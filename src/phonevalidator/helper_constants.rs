pub const PLUS_SIGN: &'static str = "+";

pub const IN_DIAL_CODE: &'static str = "+91";
pub const US_DIAL_CODE: &'static str = "+1";
pub const UK_DIAL_CODE: &'static str = "+44";

// Characters removed from input before grammar matching. Parentheses, dots,
// the plus sign and digits all survive cleaning; the US grammar inspects
// parentheses, so they must still be there when it runs.
pub const NON_SIGNIFICANT_CHARS: &'static [char] = &[' ', '-'];

// Characters stripped for `raw` output and when de-punctuating a
// parenthesized US number.
pub const FORMATTING_CHARS: &'static [char] = &[' ', '-', '(', ')'];

/// Length of a bare national significant number expected by the US and UK
/// display layouts and by the US canonicalizer.
pub const BARE_NSN_LENGTH: usize = 10;
