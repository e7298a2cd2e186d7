//! Canonical rendering of evaluation results.
//!
//! Results are always written in plain fixed-point notation, with the
//! fractional part trimmed to its significant digits.
//!
//! # Rules
//!
//! - **No trailing zeros** after the decimal point (`2.50` becomes `2.5`)
//! - **No dangling point** (`2.00` becomes `2`)
//! - **No scientific notation**, however large or small the value
//! - **No negative zero** (`-0.0` becomes `0`)
//!
//! # Examples
//!
//! ```
//! use decicalc::Decimal;
//! use decicalc::output::format_decimal;
//!
//! let value: Decimal = "2.50".parse().unwrap();
//! assert_eq!(format_decimal(&value), "2.5");
//!
//! let value: Decimal = "1.5e3".parse().unwrap();
//! assert_eq!(format_decimal(&value), "1500");
//! ```

use crate::decimal::Decimal;

/// Renders a decimal in canonical fixed-point form.
pub fn format_decimal(value: &Decimal) -> String {
    value.normalized().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(s: &str) -> String {
        format_decimal(&s.parse().unwrap())
    }

    #[test]
    fn strips_trailing_zeros() {
        assert_eq!(fmt("2.50"), "2.5");
        assert_eq!(fmt("2.00"), "2");
        assert_eq!(fmt("0.000"), "0");
        assert_eq!(fmt("-0.0"), "0");
        assert_eq!(fmt("100"), "100");
        assert_eq!(fmt("-12.340"), "-12.34");
    }

    #[test]
    fn never_uses_exponents() {
        assert_eq!(fmt("1e25"), "10000000000000000000000000");
        assert_eq!(fmt("1e-12"), "0.000000000001");
        assert_eq!(fmt("-4.2E3"), "-4200");
    }

    #[test]
    fn output_has_no_dangling_point_or_zero() {
        for input in ["0.10", "3.0", "5.005000", "70", "0.5e1"] {
            let out = fmt(input);
            assert!(!out.ends_with('.'), "{}", out);
            if out.contains('.') {
                assert!(!out.ends_with('0'), "{}", out);
            }
            assert!(!out.contains('e') && !out.contains('E'), "{}", out);
        }
    }
}
