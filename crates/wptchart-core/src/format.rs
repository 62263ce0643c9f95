//! Display formatting for raw measurements
//!
//! Locale-invariant on purpose: reports generated on different machines must
//! not disagree about grouping characters.

use crate::error::{Error, Result};

const CARDINALS: [&str; 16] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen",
];

/// Group the decimal digits of `value` in threes with a comma
///
/// No rounding is performed; callers are expected to pass integer-valued
/// numbers. A fractional input keeps its fraction unformatted, and non-finite
/// values fall back to their plain `f64` rendering (`NaN`, `inf`, `-inf`), the
/// documented degenerate output of zero-division derivatives.
pub fn format_integer(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = value.to_string();
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(rendered.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (position, digit) in integer.chars().enumerate() {
        if position > 0 && (integer.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    grouped
}

/// Spell out an operator count as a cardinal word
///
/// The report only ever phrases counts up to fifteen; anything larger is a
/// caller contract violation and fails rather than producing an undefined
/// lookup.
pub fn cardinal(count: u8) -> Result<&'static str> {
    CARDINALS
        .get(usize::from(count))
        .copied()
        .ok_or(Error::UnsupportedCount { count })
}
