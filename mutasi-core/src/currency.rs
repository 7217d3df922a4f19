//! Amount normalizer for Indonesian (`1.234.567,89`) and US (`1,234,567.89`)
//! number formats.
//!
//! When both separators appear, the one occurring last is the decimal point.
//! A literal with only one kind of separator is ambiguous and resolved by a
//! [`SeparatorPolicy`]. Anything that still does not look like a plain decimal
//! number normalizes to `0.0`; callers never see a parse error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownNameError;

/// How to read a literal that contains only `.` or only `,`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeparatorPolicy {
    /// A single separator followed by exactly three digits is a thousands
    /// separator (`1.000`, `12,345`); any other single separator is the
    /// decimal point (`1234567.89`, `500,00`). Repeated separators are
    /// always thousands separators.
    #[default]
    #[serde(rename = "digit-count")]
    DigitCount,
    /// `.` is the decimal point when it occurs once; `,` is always a
    /// thousands separator.
    #[serde(rename = "dot-decimal")]
    DotDecimal,
    /// `,` is the decimal point when it occurs once; `.` is always a
    /// thousands separator.
    #[serde(rename = "comma-decimal")]
    CommaDecimal,
}

impl SeparatorPolicy {
    pub const ALL: [SeparatorPolicy; 3] = [
        SeparatorPolicy::DigitCount,
        SeparatorPolicy::DotDecimal,
        SeparatorPolicy::CommaDecimal,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SeparatorPolicy::DigitCount => "digit-count",
            SeparatorPolicy::DotDecimal => "dot-decimal",
            SeparatorPolicy::CommaDecimal => "comma-decimal",
        }
    }
}

impl fmt::Display for SeparatorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SeparatorPolicy {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeparatorPolicy::ALL
            .into_iter()
            .find(|p| p.key() == s.trim())
            .ok_or_else(|| {
                let keys: Vec<&str> = SeparatorPolicy::ALL.iter().map(|p| p.key()).collect();
                UnknownNameError::new("number policy", s, &keys)
            })
    }
}

/// Normalize with the default [`SeparatorPolicy::DigitCount`] policy.
pub fn normalize(raw: &str) -> f64 {
    normalize_with(raw, SeparatorPolicy::default())
}

/// Parse a locale-formatted amount. Returns `0.0` for empty or unparseable input.
pub fn normalize_with(raw: &str, policy: SeparatorPolicy) -> f64 {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let (negative, digits) = match compact.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, compact.strip_prefix('+').unwrap_or(&compact)),
    };

    let cleaned = match (digits.rfind('.'), digits.rfind(',')) {
        (Some(dot), Some(comma)) if comma > dot => digits.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => digits.replace(',', ""),
        (Some(_), None) => single_separator(digits, '.', policy),
        (None, Some(_)) => single_separator(digits, ',', policy),
        (None, None) => digits.to_string(),
    };

    if !is_plain_decimal(&cleaned) {
        return 0.0;
    }

    match cleaned.parse::<f64>() {
        Ok(v) if negative => -v,
        Ok(v) => v,
        Err(_) => 0.0,
    }
}

fn single_separator(s: &str, sep: char, policy: SeparatorPolicy) -> String {
    let occurrences = s.matches(sep).count();
    let trailing = s.rsplit(sep).next().map_or(0, str::len);

    let decimal = occurrences == 1
        && match policy {
            SeparatorPolicy::DigitCount => trailing != 3,
            SeparatorPolicy::DotDecimal => sep == '.',
            SeparatorPolicy::CommaDecimal => sep == ',',
        };

    if decimal {
        s.replacen(sep, ".", 1)
    } else {
        s.replace(sep, "")
    }
}

// Rejects what f64::from_str would otherwise accept: "inf", "NaN", "1e5".
fn is_plain_decimal(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_digit() || c == '.')
        && s.matches('.').count() <= 1
}
