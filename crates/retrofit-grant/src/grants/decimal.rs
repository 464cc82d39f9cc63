use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Parses user-entered numeric text into a decimal, accepting `,` or `.` as the separator.
///
/// Only the leading numeric prefix is read (`"12zł"` is 12). Missing, empty, or unparseable
/// text yields zero rather than an error, so partially filled forms always compute.
pub fn parse_decimal(raw: &str) -> Decimal {
    let normalized = raw.trim().replacen(',', ".", 1);
    numeric_prefix(&normalized)
        .and_then(|(mantissa, exponent)| match exponent {
            Some(exponent) => Decimal::from_scientific(&format!("{mantissa}e{exponent}")).ok(),
            None => Decimal::from_str(&mantissa).ok(),
        })
        .unwrap_or(Decimal::ZERO)
}

/// Parses the household size, falling back to a single person when the text is unusable.
pub fn parse_household_size(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let size = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
        });

    if negative || size < 1 {
        1
    } else {
        size
    }
}

/// Splits `text` into a canonical mantissa and optional exponent, or `None` when no digits lead.
fn numeric_prefix(text: &str) -> Option<(String, Option<i64>)> {
    let bytes = text.as_bytes();
    let mut pos = 0;
    let mut mantissa = String::new();

    if let Some(&sign) = bytes.first() {
        if sign == b'-' || sign == b'+' {
            if sign == b'-' {
                mantissa.push('-');
            }
            pos += 1;
        }
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &text[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &text[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    mantissa.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        mantissa.push('.');
        mantissa.push_str(frac_digits);
    }

    Some((mantissa, exponent_suffix(&text[pos..])))
}

fn exponent_suffix(rest: &str) -> Option<i64> {
    let tail = rest.strip_prefix(['e', 'E'])?;
    let (negative, digits) = match tail.as_bytes().first() {
        Some(b'-') => (true, &tail[1..]),
        Some(b'+') => (false, &tail[1..]),
        _ => (false, tail),
    };
    let end = digits
        .bytes()
        .position(|byte| !byte.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

/// Accepts strings, numbers, booleans, or null for a raw form field and keeps it as text.
///
/// Form clients are inconsistent about quoting numbers, and the calculator re-parses the
/// text anyway, so every shape is folded into the string the parser expects.
pub(crate) fn raw_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<RawField>::deserialize(deserializer)?;
    Ok(match value {
        Some(RawField::Text(text)) => text,
        Some(RawField::Number(number)) => number.to_string(),
        Some(RawField::Flag(true)) => "yes".to_string(),
        Some(RawField::Flag(false)) => "no".to_string(),
        None => String::new(),
    })
}
