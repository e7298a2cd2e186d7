//! Arbitrary-precision signed decimal numbers.
//!
//! A [`Decimal`] is a big-integer coefficient scaled by a power of ten:
//! `value = coefficient * 10^-scale`. Addition, subtraction, multiplication
//! and remainder are exact. Division rounds the quotient to
//! [`WORKING_PRECISION`] significant digits, half to even.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::str::FromStr;

/// Significant digits kept by division.
pub const WORKING_PRECISION: u32 = 40;

/// Largest exponent magnitude accepted when parsing `1e...` literals.
const MAX_EXPONENT: i64 = 4096;

/// Error returned when a string is not a decimal literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDecimalError {
    input: String,
}

impl std::fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid decimal literal '{}'", self.input)
    }
}

impl std::error::Error for ParseDecimalError {}

#[derive(Debug, Clone)]
pub struct Decimal {
    coefficient: BigInt,
    scale: i64,
}

fn pow10(exp: u64) -> BigInt {
    let exp = u32::try_from(exp).unwrap_or(u32::MAX);
    BigInt::from(10u32).pow(exp)
}

/// Number of decimal digits in `|n|`; zero has one digit.
fn digit_count(n: &BigInt) -> u64 {
    if n.is_zero() {
        1
    } else {
        n.magnitude().to_str_radix(10).len() as u64
    }
}

impl Decimal {
    pub fn new(coefficient: impl Into<BigInt>, scale: i64) -> Self {
        Decimal {
            coefficient: coefficient.into(),
            scale,
        }
    }

    pub fn zero() -> Self {
        Decimal::new(0, 0)
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    /// Same value with trailing zeros removed from the coefficient.
    ///
    /// Zero normalizes to scale 0. The scale may become negative for values
    /// such as `1200`, which normalizes to `12 * 10^2`.
    pub fn normalized(&self) -> Decimal {
        if self.coefficient.is_zero() {
            return Decimal::zero();
        }

        let ten = BigInt::from(10u32);
        let mut coefficient = self.coefficient.clone();
        let mut scale = self.scale;
        while (&coefficient % &ten).is_zero() {
            coefficient /= &ten;
            scale -= 1;
        }
        Decimal { coefficient, scale }
    }

    /// Coefficient rescaled to `scale`, which must not be below `self.scale`.
    fn coefficient_at(&self, scale: i64) -> BigInt {
        let shift = (scale - self.scale) as u64;
        &self.coefficient * pow10(shift)
    }

    /// Both coefficients brought to the larger of the two scales.
    fn aligned(&self, other: &Decimal) -> (BigInt, BigInt, i64) {
        let scale = self.scale.max(other.scale);
        (self.coefficient_at(scale), other.coefficient_at(scale), scale)
    }

    pub fn add(&self, other: &Decimal) -> Decimal {
        let (a, b, scale) = self.aligned(other);
        Decimal::new(a + b, scale)
    }

    pub fn sub(&self, other: &Decimal) -> Decimal {
        let (a, b, scale) = self.aligned(other);
        Decimal::new(a - b, scale)
    }

    pub fn mul(&self, other: &Decimal) -> Decimal {
        Decimal::new(&self.coefficient * &other.coefficient, self.scale + other.scale)
    }

    pub fn neg(&self) -> Decimal {
        Decimal::new(-&self.coefficient, self.scale)
    }

    /// Quotient rounded to [`WORKING_PRECISION`] significant digits.
    ///
    /// Returns `None` when `other` is zero.
    pub fn checked_div(&self, other: &Decimal) -> Option<Decimal> {
        self.checked_div_with_precision(other, WORKING_PRECISION)
    }

    pub fn checked_div_with_precision(&self, other: &Decimal, precision: u32) -> Option<Decimal> {
        if other.is_zero() {
            return None;
        }
        if self.is_zero() {
            return Some(Decimal::zero());
        }

        let negative = self.is_negative() != other.is_negative();
        let dividend = self.coefficient.abs();
        let divisor = other.coefficient.abs();

        // Shift the dividend so the integer quotient carries at least
        // `precision + 1` digits.
        let shift =
            precision as i64 + digit_count(&divisor) as i64 - digit_count(&dividend) as i64 + 1;
        let (quotient, remainder) = if shift >= 0 {
            let n = dividend * pow10(shift as u64);
            (&n / &divisor, &n % &divisor)
        } else {
            let d = divisor * pow10((-shift) as u64);
            (&dividend / &d, &dividend % &d)
        };
        let scale = self.scale - other.scale + shift;

        let (rounded, scale) = round_half_even(quotient, !remainder.is_zero(), scale, precision);
        let coefficient = if negative { -rounded } else { rounded };
        Some(Decimal::new(coefficient, scale).normalized())
    }

    /// Truncating remainder: `self - other * trunc(self / other)`.
    ///
    /// The result takes the sign of the dividend. Returns `None` when
    /// `other` is zero.
    pub fn checked_rem(&self, other: &Decimal) -> Option<Decimal> {
        if other.is_zero() {
            return None;
        }
        let (a, b, scale) = self.aligned(other);
        Some(Decimal::new(a % b, scale))
    }
}

/// Rounds a non-negative coefficient to `precision` digits.
///
/// `sticky` reports a non-zero remainder already discarded below the last
/// digit of `value`, which breaks exact ties upward.
fn round_half_even(value: BigInt, sticky: bool, scale: i64, precision: u32) -> (BigInt, i64) {
    let digits = digit_count(&value);
    if digits <= precision as u64 {
        return (value, scale);
    }

    let excess = digits - precision as u64;
    let divisor = pow10(excess);
    let mut kept = &value / &divisor;
    let dropped: BigInt = &value % &divisor;
    let twice = dropped * 2u32;

    let round_up = match twice.cmp(&divisor) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => sticky || (&kept % 2u32).is_one(),
    };
    if round_up {
        kept += 1u32;
    }

    (kept, scale - excess as i64)
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }
}

impl From<i64> for Decimal {
    fn from(n: i64) -> Self {
        Decimal::new(n, 0)
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    /// Accepts an optional sign, digits with an optional fraction
    /// (`12`, `12.5`, `12.`, `.5`) and an optional exponent (`1e3`,
    /// `2.5E-2`). Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDecimalError { input: s.to_string() };
        let text = s.trim();

        let (negative, rest) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let (mantissa, exponent) = match rest.find(['e', 'E']) {
            Some(idx) => {
                let exp = rest[idx + 1..].parse::<i64>().map_err(|_| err())?;
                if exp.abs() > MAX_EXPONENT {
                    return Err(err());
                }
                (&rest[..idx], exp)
            }
            None => (rest, 0),
        };

        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((i, f)) => (i, f),
            None => (mantissa, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(err());
        }
        if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(err());
        }

        let digits = format!("{}{}", int_part, frac_part);
        let mut coefficient = BigInt::from_str(&digits).map_err(|_| err())?;
        if negative {
            coefficient = -coefficient;
        }
        let scale = (frac_part.len() as i64).checked_sub(exponent).ok_or_else(err)?;

        Ok(Decimal::new(coefficient, scale))
    }
}

impl std::fmt::Display for Decimal {
    /// Plain fixed-point rendering, without normalization.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let digits = self.coefficient.magnitude().to_str_radix(10);

        if self.scale <= 0 {
            let zeros = if self.coefficient.is_zero() { 0 } else { (-self.scale) as usize };
            return write!(f, "{}{}{}", sign, digits, "0".repeat(zeros));
        }

        let scale = self.scale as usize;
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{}{}.{}", sign, int_part, frac_part)
        } else {
            write!(f, "{}0.{}{}", sign, "0".repeat(scale - digits.len()), digits)
        }
    }
}
