//! Lenient number parsing for form inputs.
//!
//! Bad numbers never block a submission: each field has a fallback that is
//! used when the input has no leading number, or when the number parsed is
//! zero.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Length of the leading `[+-]digits` run after whitespace.
fn int_prefix(input: &str) -> &str {
    let bytes = input.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return "";
    }
    &input[..end]
}

/// Leading `[+-]digits[.digits][e[+-]digits]` run. A lone `.` without digits
/// on either side is not a number.
fn float_prefix(input: &str) -> &str {
    let bytes = input.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut saw_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        saw_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
            saw_digit = true;
        }
        if saw_digit {
            end = frac_end;
        }
    }
    if !saw_digit {
        return "";
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    &input[..end]
}

/// Parse the leading integer of `input`, or return `fallback`.
///
/// `"12 rooms"` parses as 12, `"3.7"` as 3.
pub fn int_or(input: &str, fallback: i32) -> i32 {
    match int_prefix(input.trim_start()).parse::<i32>() {
        Ok(0) | Err(_) => fallback,
        Ok(n) => n,
    }
}

/// Parse the leading decimal number of `input`, or return `fallback`.
pub fn float_or(input: &str, fallback: f64) -> f64 {
    match float_prefix(input.trim_start()).parse::<f64>() {
        Ok(n) if n != 0.0 && n.is_finite() => n,
        _ => fallback,
    }
}

/// Like [`float_or`] but keeps the exact decimal digits, for money.
pub fn decimal_or(input: &str, fallback: Decimal) -> Decimal {
    let prefix = float_prefix(input.trim_start());
    let parsed = if prefix.contains(['e', 'E']) {
        Decimal::from_scientific(prefix)
    } else {
        Decimal::from_str(prefix.trim_start_matches('+'))
    };
    match parsed {
        Ok(n) if !n.is_zero() => n,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn integers() {
        assert_eq!(int_or("", 1), 1);
        assert_eq!(int_or("abc", 1), 1);
        assert_eq!(int_or("4", 1), 4);
        assert_eq!(int_or("  7 bedrooms", 1), 7);
        assert_eq!(int_or("3.9", 1), 3);
        assert_eq!(int_or("-2", 1), -2);
        assert_eq!(int_or("0", 2), 2);
        assert_eq!(int_or("+", 2), 2);
        assert_eq!(int_or("99999999999", 1), 1);
    }

    #[test]
    fn floats() {
        assert_eq!(float_or("", -8.5), -8.5);
        assert_eq!(float_or("-8.5069", -8.5), -8.5069);
        assert_eq!(float_or("115.2625abc", 115.2), 115.2625);
        assert_eq!(float_or(".5", 0.0), 0.5);
        assert_eq!(float_or("5.", 0.0), 5.0);
        assert_eq!(float_or("1e3", 0.0), 1000.0);
        assert_eq!(float_or("2e", 0.0), 2.0);
        assert_eq!(float_or(".", 1.0), 1.0);
        assert_eq!(float_or("0", 115.2), 115.2);
    }

    #[test]
    fn decimals() {
        assert_eq!(decimal_or("", Decimal::ZERO), Decimal::ZERO);
        assert_eq!(decimal_or("3500000", Decimal::ZERO), dec!(3500000));
        assert_eq!(decimal_or("1250.50 IDR", Decimal::ZERO), dec!(1250.50));
        assert_eq!(decimal_or("+12", Decimal::ZERO), dec!(12));
        assert_eq!(decimal_or("1.5e6", Decimal::ZERO), dec!(1500000));
        assert_eq!(decimal_or("free", dec!(1)), dec!(1));
    }
}
