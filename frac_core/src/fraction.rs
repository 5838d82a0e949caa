//! # Fraction Value Type
//!
//! [`Fraction`] is an always-reduced rational number with 64-bit terms.
//! Every constructor normalizes, so a `Fraction` in hand satisfies:
//!
//! - `denominator > 0`
//! - `gcd(|numerator|, denominator) == 1`
//! - `numerator == 0` implies `denominator == 1`
//!
//! Arithmetic widens to `i128` before reducing, so the cross products of
//! two valid fractions never overflow; only a reduced result that does not
//! fit back into `i64` is reported as [`FracError::Overflow`].
//!
//! ## Example
//!
//! ```rust
//! use frac_core::fraction::Fraction;
//!
//! let half: Fraction = "2/4".parse().unwrap();
//! assert_eq!(half, Fraction::new(1, 2).unwrap());
//! assert_eq!(half.to_string(), "1/2");
//!
//! let sum = half.checked_add(Fraction::new(1, 3).unwrap()).unwrap();
//! assert_eq!(sum.to_string(), "5/6");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{FracError, FracResult};
use crate::operations::parse_decimal;
use crate::settings::DecimalPolicy;

// ============================================================================
// GCD
// ============================================================================

/// Greatest common divisor of `|a|` and `|b|` (Euclid).
///
/// `gcd(a, 0) == |a|` and `gcd(0, 0) == 0`. The result is unsigned so that
/// `gcd(i64::MIN, 0) == 2^63` is representable.
///
/// ```rust
/// use frac_core::fraction::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(-12, 18), 6);
/// assert_eq!(gcd(0, 0), 0);
/// ```
pub fn gcd(a: i64, b: i64) -> u64 {
    gcd_u128(u128::from(a.unsigned_abs()), u128::from(b.unsigned_abs())) as u64
}

fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Reduce `numerator/denominator` and move the sign onto the numerator.
///
/// `operation` names the caller in the overflow error.
pub(crate) fn reduce(numerator: i128, denominator: i128, operation: &str) -> FracResult<Fraction> {
    if denominator == 0 {
        return Err(FracError::invalid_denominator(numerator, denominator));
    }
    if numerator == 0 {
        return Ok(Fraction::ZERO);
    }

    // Both terms are at most 2^127 - 1 in magnitude here, so g fits i128
    // and negating a quotient cannot overflow.
    let g = gcd_u128(numerator.unsigned_abs(), denominator.unsigned_abs()) as i128;
    let (mut n, mut d) = (numerator / g, denominator / g);
    if d < 0 {
        n = -n;
        d = -d;
    }

    match (i64::try_from(n), i64::try_from(d)) {
        (Ok(numerator), Ok(denominator)) => Ok(Fraction {
            numerator,
            denominator,
        }),
        _ => Err(FracError::overflow(operation)),
    }
}

// ============================================================================
// Fraction
// ============================================================================

/// A reduced fraction with a positive denominator.
///
/// ## JSON Example
///
/// ```json
/// { "numerator": -3, "denominator": 4 }
/// ```
///
/// Deserializing normalizes (`{"numerator": 2, "denominator": -4}` reads
/// as `-1/2`) and rejects a zero denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFraction")]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

#[derive(Deserialize)]
struct RawFraction {
    numerator: i64,
    denominator: i64,
}

impl TryFrom<RawFraction> for Fraction {
    type Error = FracError;

    fn try_from(raw: RawFraction) -> FracResult<Self> {
        Fraction::new(raw.numerator, raw.denominator)
    }
}

impl Fraction {
    /// 0/1
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        denominator: 1,
    };

    /// 1/1
    pub const ONE: Fraction = Fraction {
        numerator: 1,
        denominator: 1,
    };

    /// Create a reduced fraction.
    ///
    /// # Errors
    ///
    /// * `FracError::InvalidDenominator` - `denominator` is zero
    /// * `FracError::Overflow` - only for `i64::MIN` terms whose sign cannot be moved
    ///
    /// # Example
    ///
    /// ```rust
    /// use frac_core::fraction::Fraction;
    ///
    /// let f = Fraction::new(3, -6).unwrap();
    /// assert_eq!((f.numerator(), f.denominator()), (-1, 2));
    /// assert!(Fraction::new(1, 0).is_err());
    /// ```
    pub fn new(numerator: i64, denominator: i64) -> FracResult<Self> {
        reduce(i128::from(numerator), i128::from(denominator), "simplification")
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Plain floating-point division of the terms, no rounding.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// `denominator/numerator`, sign normalized.
    ///
    /// Fails with `FracError::DivisionByZero` for zero.
    pub fn reciprocal(&self) -> FracResult<Fraction> {
        if self.is_zero() {
            return Err(FracError::division_by_zero(1));
        }
        reduce(
            i128::from(self.denominator),
            i128::from(self.numerator),
            "reciprocal",
        )
    }

    /// `a/b + c/d = (ad + cb) / bd`
    pub fn checked_add(self, other: Fraction) -> FracResult<Fraction> {
        let (a, b, c, d) = self.widen(other);
        reduce(a * d + c * b, b * d, "addition")
    }

    /// `a/b - c/d = (ad - cb) / bd`
    pub fn checked_sub(self, other: Fraction) -> FracResult<Fraction> {
        let (a, b, c, d) = self.widen(other);
        reduce(a * d - c * b, b * d, "subtraction")
    }

    /// `a/b * c/d = ac / bd`
    pub fn checked_mul(self, other: Fraction) -> FracResult<Fraction> {
        let (a, b, c, d) = self.widen(other);
        reduce(a * c, b * d, "multiplication")
    }

    /// `a/b ÷ c/d = ad / bc`
    ///
    /// Fails with `FracError::DivisionByZero` when `other` is zero.
    pub fn checked_div(self, other: Fraction) -> FracResult<Fraction> {
        if other.is_zero() {
            return Err(FracError::division_by_zero(self));
        }
        let (a, b, c, d) = self.widen(other);
        reduce(a * d, b * c, "division")
    }

    /// Split into whole part and proper fraction.
    ///
    /// ```rust
    /// use frac_core::fraction::Fraction;
    ///
    /// let f = Fraction::new(-7, 2).unwrap();
    /// assert_eq!(f.to_mixed().to_string(), "-3 1/2");
    /// ```
    pub fn to_mixed(&self) -> MixedNumber {
        let magnitude = self.numerator.unsigned_abs();
        let denominator = self.denominator.unsigned_abs();
        MixedNumber {
            negative: self.is_negative(),
            whole: magnitude / denominator,
            numerator: magnitude % denominator,
            denominator,
        }
    }

    fn widen(self, other: Fraction) -> (i128, i128, i128, i128) {
        (
            i128::from(self.numerator),
            i128::from(self.denominator),
            i128::from(other.numerator),
            i128::from(other.denominator),
        )
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::ZERO
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction {
            numerator: value,
            denominator: 1,
        }
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross multiplication keeps the order.
        let lhs = i128::from(self.numerator) * i128::from(other.denominator);
        let rhs = i128::from(other.numerator) * i128::from(self.denominator);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Parses `"3/4"`, `"3/-4"`, `"7"`, mixed numbers like `"-1 1/2"`, and
/// decimals like `"0.75"` (default [`DecimalPolicy`]).
impl FromStr for Fraction {
    type Err = FracError;

    fn from_str(s: &str) -> FracResult<Self> {
        let text = s.trim();
        if text.is_empty() {
            return Err(FracError::parse(s, "empty input"));
        }

        match text.split_once('/') {
            Some((left, right)) => {
                let denominator = parse_integer(s, right.trim())?;
                let left = left.trim();
                match left.split_once(char::is_whitespace) {
                    Some((whole, numerator)) => parse_mixed(s, whole, numerator.trim(), denominator),
                    None => Fraction::new(parse_integer(s, left)?, denominator),
                }
            }
            None if text.contains('.') => Ok(parse_decimal(text, &DecimalPolicy::default())?.result),
            None => Ok(Fraction::from(parse_integer(s, text)?)),
        }
    }
}

fn parse_integer(input: &str, text: &str) -> FracResult<i64> {
    text.parse::<i64>()
        .map_err(|e| FracError::parse(input, format!("'{}' is not an integer ({})", text, e)))
}

/// `whole numerator/denominator`; the sign belongs to the whole part.
fn parse_mixed(input: &str, whole: &str, numerator: &str, denominator: i64) -> FracResult<Fraction> {
    let negative = whole.starts_with('-');
    let whole = parse_integer(input, whole)?;
    let numerator = parse_integer(input, numerator)?;
    if numerator < 0 || denominator < 0 {
        return Err(FracError::parse(
            input,
            "only the whole part of a mixed number may carry a sign",
        ));
    }

    MixedNumber {
        negative,
        whole: whole.unsigned_abs(),
        numerator: numerator.unsigned_abs(),
        denominator: denominator.unsigned_abs(),
    }
    .to_fraction()
}

// ============================================================================
// Mixed numbers
// ============================================================================

/// Display form of a fraction as a whole part plus a proper fraction.
///
/// `numerator < denominator` always holds for values produced by
/// [`Fraction::to_mixed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedNumber {
    pub negative: bool,
    pub whole: u64,
    pub numerator: u64,
    pub denominator: u64,
}

impl MixedNumber {
    /// Convert back to an improper fraction.
    pub fn to_fraction(&self) -> FracResult<Fraction> {
        let denominator = i128::from(self.denominator);
        let magnitude = i128::from(self.whole)
            .checked_mul(denominator)
            .and_then(|m| m.checked_add(i128::from(self.numerator)))
            .ok_or_else(|| FracError::overflow("mixed number"))?;
        let signed = if self.negative { -magnitude } else { magnitude };
        reduce(signed, denominator, "mixed number")
    }
}

impl fmt::Display for MixedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        match (self.whole, self.numerator) {
            (whole, 0) => write!(f, "{}{}", sign, whole),
            (0, numerator) => write!(f, "{}{}/{}", sign, numerator, self.denominator),
            (whole, numerator) => write!(f, "{}{} {}/{}", sign, whole, numerator, self.denominator),
        }
    }
}
