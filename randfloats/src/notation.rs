//! Text rendering of sampled values.
//!
//! Both renderers show six digits of precision, like C's `%f` and the default
//! `ostream` float output (`%g`). Digits past the precision are truncated
//! rather than rounded, so a value below 1 is never printed as `1`. The cut is
//! made on the exact binary value, which means a literal such as `0.123456`
//! (stored as 0.1234559999...) renders as `0.123455`.

/// Digits shown after the point (`Fixed`) or in total (`General`).
pub const PRECISION: usize = 6;

// Every k / 2^31 sample has a finite decimal expansion that fits in this many
// digits, so formatting at this precision and cutting the string truncates
// the exact value.
const EXACT_DIGITS: usize = 40;

/// How each value is written out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Notation {
    /// Fixed-point with exactly six decimals: `0.840187`
    #[default]
    Fixed,
    /// Six significant digits without trailing zeros, switching to
    /// scientific notation for small values: `0.79844`, `4.2e-05`
    General,
}

impl Notation {
    /// Render a non-negative finite value.
    pub fn render(self, value: f64) -> String {
        match self {
            Notation::Fixed => render_fixed(value),
            Notation::General => render_general(value),
        }
    }
}

fn render_fixed(value: f64) -> String {
    let exact = format!("{:.*}", EXACT_DIGITS, value);
    match exact.split_once('.') {
        Some((int_part, frac_part)) => format!("{int_part}.{}", &frac_part[..PRECISION]),
        None => exact,
    }
}

fn render_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let (sign, value) = if value < 0.0 { ("-", -value) } else { ("", value) };

    let sci = format!("{:.*e}", EXACT_DIGITS, value);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return format!("{sign}{sci}");
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let digits: String = mantissa
        .chars()
        .filter(char::is_ascii_digit)
        .take(PRECISION)
        .collect();

    if exponent < -4 || exponent >= PRECISION as i32 {
        let significant = digits.trim_end_matches('0');
        let (lead, rest) = significant.split_at(1);
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let point = if rest.is_empty() { "" } else { "." };
        format!("{sign}{lead}{point}{rest}e{exp_sign}{:02}", exponent.abs())
    } else if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        format!("{sign}0.{zeros}{}", digits.trim_end_matches('0'))
    } else {
        let (int_part, frac_part) = digits.split_at(exponent as usize + 1);
        let frac_part = frac_part.trim_end_matches('0');
        if frac_part.is_empty() {
            format!("{sign}{int_part}")
        } else {
            format!("{sign}{int_part}.{frac_part}")
        }
    }
}
