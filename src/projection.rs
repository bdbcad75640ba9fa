//! Yearly projection from the weekly action frequency
//!
//! Pure function of the frequency text and the unit; recomputed on every
//! render.

use std::fmt;

use crate::consts::WEEKS_PER_YEAR;
use crate::labels;
use crate::record::ActionUnit;

/// Result of projecting a weekly frequency over a year
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Frequency parsed; `total` is frequency * 52
    Yearly { total: f64, unit: ActionUnit },
    /// Frequency empty or not a number
    Unavailable,
}

impl Projection {
    pub fn total(&self) -> Option<f64> {
        match self {
            Projection::Yearly { total, .. } => Some(*total),
            Projection::Unavailable => None,
        }
    }

    /// Total followed by the unit, e.g. `156 回`
    pub fn amount_text(&self) -> Option<String> {
        match self {
            Projection::Yearly { total, unit } => {
                Some(format!("{} {}", format_grouped(*total), unit.as_str()))
            }
            Projection::Unavailable => None,
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.amount_text() {
            Some(amount) => write!(f, "{}{}", labels::PROJECTION_PREFIX, amount),
            None => f.write_str(labels::PROJECTION_PLACEHOLDER),
        }
    }
}

/// Project a weekly frequency over a year
pub fn project(action_frequency: &str, unit: ActionUnit) -> Projection {
    match parse_decimal_prefix(action_frequency) {
        Some(frequency) => Projection::Yearly {
            total: frequency * WEEKS_PER_YEAR,
            unit,
        },
        None => Projection::Unavailable,
    }
}

/// Parse the leading decimal number of `input`
///
/// Accepts what a lenient float parser would: leading whitespace, optional
/// sign, digits with an optional fraction, an optional exponent and
/// `Infinity`. Trailing garbage after a valid prefix is ignored.
pub fn parse_decimal_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Format a number with thousands separators and at most 3 fraction digits
pub fn format_grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let fixed = format!("{:.3}", round_half_away(value.abs()));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Round to 3 fraction digits with ties away from zero
///
/// `{:.3}` alone rounds exact ties to even (0.8125 -> 0.812).
fn round_half_away(value: f64) -> f64 {
    // Beyond 2^52 there are no fraction bits left to round
    if value >= 4_503_599_627_370_496.0 {
        return value;
    }
    (value * 1000.0).round() / 1000.0
}
