//! # JSON Request API
//!
//! One JSON document in, one JSON document out. A calculator page, a
//! script, or an LLM tool call can drive the engine without linking
//! against the Rust types.
//!
//! ## Request JSON
//!
//! ```json
//! {
//!   "operation": "add",
//!   "a": { "numerator": 1, "denominator": 2 },
//!   "b": { "numerator": 1, "denominator": 3 }
//! }
//! ```
//!
//! ## Outcome JSON
//!
//! ```json
//! {
//!   "kind": "fraction",
//!   "result": { "numerator": 5, "denominator": 6 },
//!   "decimal": 0.8333333333333334,
//!   "display": "5/6 ≈ 0.8333"
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use frac_core::request::evaluate_json;
//! use frac_core::settings::Settings;
//!
//! let json = r#"{"operation": "simplify", "numerator": 12, "denominator": 18}"#;
//! let outcome = evaluate_json(json, &Settings::default()).unwrap();
//! assert!(outcome.contains("\"numerator\": 2"));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::FracResult;
use crate::fraction::Fraction;
use crate::operations::{self, format_decimal, Operation, OperationResult};
use crate::settings::Settings;

/// A fraction as typed by the user, not yet validated or reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operand {
    pub numerator: i64,
    pub denominator: i64,
}

impl Operand {
    pub fn to_fraction(&self) -> FracResult<Fraction> {
        Fraction::new(self.numerator, self.denominator)
    }
}

impl From<Fraction> for Operand {
    fn from(fraction: Fraction) -> Self {
        Operand {
            numerator: fraction.numerator(),
            denominator: fraction.denominator(),
        }
    }
}

/// A single calculator request, tagged by `"operation"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum FractionRequest {
    Simplify { numerator: i64, denominator: i64 },
    ToDecimal { numerator: i64, denominator: i64 },
    FromDecimal { value: f64 },
    /// Decimal typed as text, converted exactly
    ParseDecimal { text: String },
    Add { a: Operand, b: Operand },
    Subtract { a: Operand, b: Operand },
    Multiply { a: Operand, b: Operand },
    Divide { a: Operand, b: Operand },
}

/// Result of a request, tagged by `"kind"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestOutcome {
    Fraction {
        result: Fraction,
        decimal: f64,
        display: String,
    },
    Decimal {
        value: f64,
        display: String,
    },
}

impl RequestOutcome {
    fn from_result(result: OperationResult, settings: &Settings) -> Self {
        RequestOutcome::Fraction {
            result: result.result,
            decimal: result.decimal,
            display: result.format(&settings.display),
        }
    }

    /// The rendered string for people
    pub fn display(&self) -> &str {
        match self {
            RequestOutcome::Fraction { display, .. } | RequestOutcome::Decimal { display, .. } => display,
        }
    }
}

impl FractionRequest {
    /// Wire name of the operation
    pub fn name(&self) -> &'static str {
        match self {
            FractionRequest::Simplify { .. } => "simplify",
            FractionRequest::ToDecimal { .. } => "to_decimal",
            FractionRequest::FromDecimal { .. } => "from_decimal",
            FractionRequest::ParseDecimal { .. } => "parse_decimal",
            FractionRequest::Add { .. } => "add",
            FractionRequest::Subtract { .. } => "subtract",
            FractionRequest::Multiply { .. } => "multiply",
            FractionRequest::Divide { .. } => "divide",
        }
    }

    /// Run the request.
    ///
    /// Errors are those of the underlying operation; operands with a zero
    /// denominator fail with `FracError::InvalidDenominator`, and
    /// out-of-range settings with `FracError::InvalidInput`.
    pub fn evaluate(&self, settings: &Settings) -> FracResult<RequestOutcome> {
        settings.validate()?;
        tracing::debug!(operation = self.name(), "evaluating request");

        let result = match self {
            FractionRequest::Simplify {
                numerator,
                denominator,
            } => operations::simplify(*numerator, *denominator)?,
            FractionRequest::ToDecimal {
                numerator,
                denominator,
            } => {
                let value = operations::to_decimal(*numerator, *denominator)?;
                return Ok(RequestOutcome::Decimal {
                    value,
                    display: format_decimal(value, settings.display.decimal_places),
                });
            }
            FractionRequest::FromDecimal { value } => {
                operations::from_decimal_with(*value, &settings.decimal)?
            }
            FractionRequest::ParseDecimal { text } => {
                operations::parse_decimal(text, &settings.decimal)?
            }
            FractionRequest::Add { a, b } => binary(Operation::Add, a, b)?,
            FractionRequest::Subtract { a, b } => binary(Operation::Subtract, a, b)?,
            FractionRequest::Multiply { a, b } => binary(Operation::Multiply, a, b)?,
            FractionRequest::Divide { a, b } => binary(Operation::Divide, a, b)?,
        };
        Ok(RequestOutcome::from_result(result, settings))
    }
}

fn binary(operation: Operation, a: &Operand, b: &Operand) -> FracResult<OperationResult> {
    operation.apply(a.to_fraction()?, b.to_fraction()?)
}

/// Parse a JSON request, evaluate it, and return the outcome as pretty JSON.
///
/// # Errors
///
/// * `FracError::Serialization` - `json` is not a valid request
/// * any error of the requested operation
pub fn evaluate_json(json: &str, settings: &Settings) -> FracResult<String> {
    let request: FractionRequest = serde_json::from_str(json)?;
    let outcome = request.evaluate(settings)?;
    Ok(serde_json::to_string_pretty(&outcome)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{DisplaySettings, DECIMAL_PLACES_LIMIT};

    fn operand(numerator: i64, denominator: i64) -> Operand {
        Operand {
            numerator,
            denominator,
        }
    }

    #[test]
    fn test_request_deserialization() {
        let request: FractionRequest = serde_json::from_str(
            r#"{"operation": "divide", "a": {"numerator": 1, "denominator": 2}, "b": {"numerator": 1, "denominator": 3}}"#,
        )
        .unwrap();
        assert_eq!(
            request,
            FractionRequest::Divide {
                a: operand(1, 2),
                b: operand(1, 3)
            }
        );
        assert_eq!(request.name(), "divide");
    }

    #[test]
    fn test_evaluate_arithmetic() {
        let request = FractionRequest::Add {
            a: operand(1, 4),
            b: operand(1, 4),
        };
        let outcome = request.evaluate(&Settings::default()).unwrap();
        match outcome {
            RequestOutcome::Fraction { result, decimal, display } => {
                assert_eq!(result, Fraction::new(1, 2).unwrap());
                assert_eq!(decimal, 0.5);
                assert_eq!(display, "1/2 = 0.5000");
            }
            other => panic!("expected fraction outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_to_decimal() {
        let request = FractionRequest::ToDecimal {
            numerator: 22,
            denominator: 7,
        };
        let outcome = request.evaluate(&Settings::default()).unwrap();
        assert_eq!(outcome.display(), "3.1429");
    }

    #[test]
    fn test_evaluate_uses_display_settings() {
        let settings = Settings {
            display: DisplaySettings {
                decimal_places: 1,
                mixed_numbers: true,
            },
            ..Settings::default()
        };
        let request = FractionRequest::ParseDecimal {
            text: "2.75".to_string(),
        };
        assert_eq!(request.evaluate(&settings).unwrap().display(), "2 3/4 ≈ 2.8");
    }

    #[test]
    fn test_evaluate_errors() {
        let settings = Settings::default();

        let err = FractionRequest::Simplify {
            numerator: 4,
            denominator: 0,
        }
        .evaluate(&settings)
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DENOMINATOR");

        let err = FractionRequest::Multiply {
            a: operand(1, 0),
            b: operand(1, 2),
        }
        .evaluate(&settings)
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DENOMINATOR");

        let err = FractionRequest::Divide {
            a: operand(1, 2),
            b: operand(0, 5),
        }
        .evaluate(&settings)
        .unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_evaluate_rejects_out_of_range_settings() {
        let settings = Settings {
            display: DisplaySettings {
                decimal_places: DECIMAL_PLACES_LIMIT + 1,
                mixed_numbers: false,
            },
            ..Settings::default()
        };
        let request = FractionRequest::Simplify {
            numerator: 1,
            denominator: 3,
        };
        let err = request.evaluate(&settings).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let json = r#"{"operation": "to_decimal", "numerator": 1, "denominator": 3}"#;
        assert_eq!(evaluate_json(json, &settings).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = FractionRequest::Subtract {
            a: operand(1, 2),
            b: operand(1, 3),
        }
        .evaluate(&Settings::default())
        .unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "fraction");
        assert_eq!(json["result"]["numerator"], 1);
        assert_eq!(json["result"]["denominator"], 6);

        let roundtrip: RequestOutcome = serde_json::from_value(json).unwrap();
        assert_eq!(roundtrip, outcome);
    }

    #[test]
    fn test_operand_from_fraction() {
        let op = Operand::from(Fraction::new(6, -8).unwrap());
        assert_eq!(op, operand(-3, 4));
    }
}
