//! # Fraction Operations
//!
//! Calculator-facing operations. Each takes plain numbers (or
//! [`Fraction`]s) and returns an [`OperationResult`]: the reduced fraction
//! plus its decimal value.
//!
//! ## Decimal conversion
//!
//! [`from_decimal`] reads the digits after the decimal point of the value's
//! shortest round-trip text (`0.75` → `75/100` → `3/4`). At most
//! [`DecimalPolicy::max_fraction_digits`] digits are kept; the rest are
//! rounded half away from zero. So `0.1 + 0.2` (text `0.30000000000000004`)
//! converts to `3/10`, and `1.0 / 3.0` converts to `333333333333333/10^15`.
//!
//! ## Example
//!
//! ```rust
//! use frac_core::fraction::Fraction;
//! use frac_core::operations::{add, from_decimal, simplify};
//!
//! let reduced = simplify(12, 18).unwrap();
//! assert_eq!(reduced.result.to_string(), "2/3");
//!
//! let quarter = from_decimal(0.25).unwrap().result;
//! let sum = add(quarter, quarter).unwrap();
//! assert_eq!(sum.result, Fraction::new(1, 2).unwrap());
//! assert_eq!(sum.decimal, 0.5);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{FracError, FracResult};
use crate::fraction::{reduce, Fraction};
use crate::settings::{DecimalPolicy, DisplaySettings, DECIMAL_PLACES_LIMIT};

/// A reduced fraction and its decimal value.
///
/// ## JSON Example
///
/// ```json
/// {
///   "result": { "numerator": 5, "denominator": 6 },
///   "decimal": 0.8333333333333334
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationResult {
    /// Fully reduced fraction
    pub result: Fraction,

    /// `numerator / denominator` as f64, not rounded
    pub decimal: f64,
}

impl OperationResult {
    pub fn new(result: Fraction) -> Self {
        OperationResult {
            result,
            decimal: result.to_f64(),
        }
    }

    /// Render as `"5/6 ≈ 0.8333"`, or `"1/2 = 0.5000"` when the rounded
    /// decimal is exact.
    pub fn format(&self, display: &DisplaySettings) -> String {
        let fraction = if display.mixed_numbers {
            self.result.to_mixed().to_string()
        } else {
            self.result.to_string()
        };
        let decimal = format_decimal(self.decimal, display.decimal_places);
        let relation = if decimal.parse::<f64>() == Ok(self.decimal) { "=" } else { "≈" };
        format!("{} {} {}", fraction, relation, decimal)
    }
}

/// Fixed-point rendering with `places` digits after the point, capped at
/// [`DECIMAL_PLACES_LIMIT`].
pub fn format_decimal(value: f64, places: usize) -> String {
    format!("{:.*}", places.min(DECIMAL_PLACES_LIMIT), value)
}

// ============================================================================
// Calculator operations
// ============================================================================

/// Reduce `numerator/denominator` and make the denominator positive.
///
/// # Errors
///
/// * `FracError::InvalidDenominator` - `denominator` is zero
pub fn simplify(numerator: i64, denominator: i64) -> FracResult<OperationResult> {
    Ok(OperationResult::new(Fraction::new(numerator, denominator)?))
}

/// `numerator / denominator` by floating-point division.
///
/// # Errors
///
/// * `FracError::InvalidDenominator` - `denominator` is zero
pub fn to_decimal(numerator: i64, denominator: i64) -> FracResult<f64> {
    if denominator == 0 {
        return Err(FracError::invalid_denominator(numerator, denominator));
    }
    Ok(numerator as f64 / denominator as f64)
}

/// Convert a finite decimal with the default [`DecimalPolicy`].
pub fn from_decimal(value: f64) -> FracResult<OperationResult> {
    from_decimal_with(value, &DecimalPolicy::default())
}

/// Convert a finite decimal, keeping at most `policy.max_fraction_digits`
/// fractional digits.
///
/// # Errors
///
/// * `FracError::InvalidInput` - `value` is NaN or infinite, or the policy is out of range
/// * `FracError::Overflow` - the scaled value does not fit 64-bit terms
pub fn from_decimal_with(value: f64, policy: &DecimalPolicy) -> FracResult<OperationResult> {
    if !value.is_finite() {
        return Err(FracError::invalid_input(
            "value",
            value.to_string(),
            "Decimal must be finite",
        ));
    }
    // f64 Display is the shortest text that round-trips and never uses
    // exponent notation.
    parse_decimal(&value.to_string(), policy)
}

/// Convert decimal text such as `"-0.125"`, `"3."`, `".5"` or `"+2"`
/// exactly, without going through f64.
///
/// # Errors
///
/// * `FracError::Parse` - not an optionally signed run of digits with at most one point
/// * `FracError::InvalidInput` - the policy is out of range
/// * `FracError::Overflow` - the scaled value does not fit 64-bit terms
pub fn parse_decimal(text: &str, policy: &DecimalPolicy) -> FracResult<OperationResult> {
    policy.validate()?;

    let input = text.trim();
    let (negative, unsigned) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    let (int_digits, frac_digits) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(FracError::parse(text, "no digits"));
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_digits) || !all_digits(frac_digits) {
        return Err(FracError::parse(text, "expected digits with an optional sign and decimal point"));
    }

    let keep = policy.max_fraction_digits as usize;
    let (kept, dropped) = if frac_digits.len() > keep {
        frac_digits.split_at(keep)
    } else {
        (frac_digits, "")
    };

    let overflow = || FracError::overflow("decimal conversion");
    let mut magnitude: i128 = 0;
    for b in int_digits.bytes().chain(kept.bytes()) {
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(i128::from(b - b'0')))
            .ok_or_else(overflow)?;
    }
    if !dropped.is_empty() {
        let round_up = matches!(dropped.as_bytes().first(), Some(b'5'..=b'9'));
        tracing::debug!(
            input,
            dropped = dropped.len(),
            round_up,
            "rounding fractional digits to policy limit"
        );
        if round_up {
            magnitude = magnitude.checked_add(1).ok_or_else(overflow)?;
        }
    }

    let denominator = 10i128.pow(kept.len() as u32);
    let numerator = if negative { -magnitude } else { magnitude };
    Ok(OperationResult::new(reduce(numerator, denominator, "decimal conversion")?))
}

/// `a + b`, reduced.
pub fn add(a: Fraction, b: Fraction) -> FracResult<OperationResult> {
    Ok(OperationResult::new(a.checked_add(b)?))
}

/// `a - b`, reduced.
pub fn subtract(a: Fraction, b: Fraction) -> FracResult<OperationResult> {
    Ok(OperationResult::new(a.checked_sub(b)?))
}

/// `a × b`, reduced.
pub fn multiply(a: Fraction, b: Fraction) -> FracResult<OperationResult> {
    Ok(OperationResult::new(a.checked_mul(b)?))
}

/// `a ÷ b`, reduced.
///
/// # Errors
///
/// * `FracError::DivisionByZero` - `b` is zero
pub fn divide(a: Fraction, b: Fraction) -> FracResult<OperationResult> {
    Ok(OperationResult::new(a.checked_div(b)?))
}

// ============================================================================
// Operation enum
// ============================================================================

/// The four binary operations, for callers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Operator symbol for display
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    pub fn apply(&self, a: Fraction, b: Fraction) -> FracResult<OperationResult> {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply(a, b),
            Operation::Divide => divide(a, b),
        }
    }
}
