//! # frac_core - Fraction Calculator Engine
//!
//! `frac_core` is the arithmetic core behind the fraction calculator page.
//! It simplifies fractions, converts between fractions and decimals, and
//! performs the four arithmetic operations, always returning a reduced
//! fraction with a positive denominator.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions on `Copy` values
//! - **Always reduced**: every [`Fraction`] constructor normalizes
//! - **JSON-First**: requests, results and errors all serialize
//! - **Rich Errors**: structured error variants with stable codes
//!
//! ## Quick Start
//!
//! ```rust
//! use frac_core::{add, divide, simplify, Fraction};
//!
//! let r = simplify(12, 18).unwrap();
//! assert_eq!(r.result.to_string(), "2/3");
//!
//! let half = Fraction::new(1, 2).unwrap();
//! let third = Fraction::new(1, 3).unwrap();
//! assert_eq!(add(half, third).unwrap().result.to_string(), "5/6");
//!
//! let err = divide(half, Fraction::ZERO).unwrap_err();
//! assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
//! ```
//!
//! ## Modules
//!
//! - [`fraction`] - The `Fraction` value type, `gcd`, parsing, mixed numbers
//! - [`operations`] - Calculator operations returning `OperationResult`
//! - [`settings`] - Decimal policy and display settings (TOML)
//! - [`request`] - JSON request/outcome API
//! - [`errors`] - Structured error types

pub mod errors;
pub mod fraction;
pub mod operations;
pub mod request;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use errors::{FracError, FracResult};
pub use fraction::{gcd, Fraction, MixedNumber};
pub use operations::{
    add, divide, from_decimal, from_decimal_with, multiply, parse_decimal, simplify, subtract,
    to_decimal, Operation, OperationResult,
};
pub use request::{evaluate_json, FractionRequest, Operand, RequestOutcome};
pub use settings::{DecimalPolicy, DisplaySettings, Settings};
