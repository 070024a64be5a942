//! Best-effort parsing of the count argument.
//!
//! Follows C `atoi`: leading whitespace is skipped, one sign is accepted, and
//! parsing stops at the first non-digit. Text with no leading digits counts as
//! zero, and so does any negative value, since nothing can be printed a
//! negative number of times.

/// Largest count accepted; larger values saturate to it.
pub const MAX_COUNT: usize = i32::MAX as usize;

/// Parse `text` the way `atoi` would, clamped to `0..=MAX_COUNT`.
pub fn parse_count(text: &str) -> usize {
    let bytes = text.trim_start_matches(is_c_space).as_bytes();

    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let mut value: usize = 0;
    for &b in digits.iter().take_while(|b| b.is_ascii_digit()) {
        value = value
            .saturating_mul(10)
            .saturating_add(usize::from(b - b'0'))
            .min(MAX_COUNT);
    }

    if negative {
        0
    } else {
        value
    }
}

/// Whether `text` is nothing but decimal digits, so parsing loses nothing.
pub fn is_plain_count(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

// isspace() in the C locale, which includes vertical tab
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}
