
//! Text rendering for differentiation results.
//!
//! Every string the rules produce is built here. Operands are
//! interpolated as-is, with no precedence-aware parenthesization of
//! sub-results.

use crate::parsing::operator::BinaryOperator;
use crate::util::format_float;

pub fn zero() -> String {
  "0".to_owned()
}

pub fn one() -> String {
  "1".to_owned()
}

/// `a op b`
pub fn binary(a: &str, op: BinaryOperator, b: &str) -> String {
  format!("{a} {op} {b}")
}

/// `a' * b + a * b'`
pub fn product_rule(da: &str, b: &str, a: &str, db: &str) -> String {
  format!("{da} * {b} + {a} * {db}")
}

/// `( a' * b - a * b' ) / b ^ 2`
pub fn quotient_rule(da: &str, b: &str, a: &str, db: &str) -> String {
  format!("( {da} * {b} - {a} * {db} ) / {b} ^ 2")
}

/// Derivative of a constant `c` over an expression `b`: `- ( c * b' )
/// / b ^ 2`
pub fn reciprocal_rule(c: &str, db: &str, b: &str) -> String {
  format!("- ( {c} * {db} ) / {b} ^ 2")
}

/// Derivative of a constant `c` raised to an expression `b`: `c ^ b *
/// ln(c)`
pub fn exponential_rule(c: &str, b: &str) -> String {
  format!("{c} ^ {b} * ln({c})")
}

/// Derivative of an expression `a` raised to a constant `n`: `n * a ^
/// (n - 1)`, where `n - 1` is rendered as a float.
pub fn power_rule(n: &str, a: &str, n_minus_one: f64) -> String {
  format!("{n} * {a} ^ {}", format_float(n_minus_one))
}

/// A derivative of a named function call, marked but not computed.
pub fn deferred_call(function: &str, argument: &str) -> String {
  format!("{function}({argument})'")
}

/// The multiplicative inverse of a constant, as text.
pub fn reciprocal(value: f64) -> String {
  format_float(1.0 / value)
}
