//! Numeric literal parsing for netlist values.
//!
//! Three forms are accepted: a plain decimal, a decimal with an SI suffix,
//! and scientific notation. The scientific-notation form reproduces a known
//! quirk of the source material rather than the textbook `base * 10^exp`
//! (see DESIGN.md, "scientific notation bug").

use crate::error::{Error, Result};

/// Parses a numeric literal as it appears in a netlist value field.
///
/// `line` is only used to annotate a `ParseError` if parsing fails.
pub fn parse_value(token: &str, line: usize) -> Result<f64> {
    let t = token.trim();
    if t.is_empty() {
        return Err(Error::ParseError {
            line,
            message: "empty numeric literal".to_string(),
        });
    }

    if let Some((base, exp)) = split_scientific(t) {
        let base: f64 = base.parse().map_err(|_| Error::ParseError {
            line,
            message: format!("invalid numeric literal '{token}'"),
        })?;
        let exp: f64 = exp.parse().map_err(|_| Error::ParseError {
            line,
            message: format!("invalid exponent in '{token}'"),
        })?;
        // Preserved quirk: computes base^exp, not base * 10^exp.
        return Ok(base.powf(exp));
    }

    if let Some((mantissa, multiplier)) = split_si_suffix(t) {
        let base: f64 = mantissa.parse().map_err(|_| Error::ParseError {
            line,
            message: format!("invalid numeric literal '{token}'"),
        })?;
        return Ok(base * multiplier);
    }

    t.parse().map_err(|_| Error::ParseError {
        line,
        message: format!("invalid numeric literal '{token}'"),
    })
}

fn split_scientific(t: &str) -> Option<(&str, &str)> {
    let idx = t.find(['e', 'E'])?;
    // Don't confuse the SI suffix "meg" with an exponent marker; scientific
    // notation requires digits (or a sign) directly after the e/E.
    let (base, rest) = t.split_at(idx);
    let exp = &rest[1..];
    if exp.is_empty() {
        return None;
    }
    let first = exp.as_bytes()[0];
    if first == b'+' || first == b'-' || first.is_ascii_digit() {
        if base.is_empty() {
            return None;
        }
        Some((base, exp))
    } else {
        None
    }
}

fn split_si_suffix(t: &str) -> Option<(&str, f64)> {
    let lower = t.to_ascii_lowercase();
    if lower.ends_with("meg") {
        let mantissa_len = t.len() - 3;
        if mantissa_len == 0 {
            return None;
        }
        return Some((&t[..mantissa_len], 1.0e6));
    }
    let last = lower.chars().last()?;
    let multiplier = match last {
        'f' => 1.0e-15,
        'p' => 1.0e-12,
        'n' => 1.0e-9,
        'u' => 1.0e-6,
        'm' => 1.0e-3,
        'k' => 1.0e3,
        'g' => 1.0e9,
        't' => 1.0e12,
        _ => return None,
    };
    let mantissa_len = t.len() - 1;
    if mantissa_len == 0 {
        return None;
    }
    Some((&t[..mantissa_len], multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_decimal() {
        assert_eq!(parse_value("10", 1).unwrap(), 10.0);
        assert_eq!(parse_value("-2.5", 1).unwrap(), -2.5);
    }

    #[test]
    fn si_suffixes() {
        assert_eq!(parse_value("1k", 1).unwrap(), 1000.0);
        assert_eq!(parse_value("1u", 1).unwrap(), 1.0e-6);
        assert_eq!(parse_value("2meg", 1).unwrap(), 2.0e6);
        assert_eq!(parse_value("1g", 1).unwrap(), 1.0e9);
    }

    #[test]
    fn scientific_notation_preserves_pow_quirk() {
        // 1e3 is 1.0^3 == 1.0, not 1000.0, under the preserved bug.
        assert_eq!(parse_value("1e3", 1).unwrap(), 1.0);
        assert_eq!(parse_value("2e3", 1).unwrap(), 8.0);
    }
}
