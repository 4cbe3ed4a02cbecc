
//! Symbolic values flowing through the differentiation engine.
//!
//! Values are kept as rendered text rather than as a tree. Each value
//! is tagged with whether it still needs differentiating
//! ([`Expr::Raw`]) or already is a derivative ([`Expr::Derivative`]).
//! Only a raw value can be differentiated, so no value is ever
//! differentiated twice along an evaluation path.

pub mod calculus;
pub mod constant;
pub mod render;

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
  /// A literal from the input which has not been differentiated.
  Raw(String),
  /// The result of a differentiation rule.
  Derivative(String),
}

/// The outcome of differentiating a whole expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivativeResult {
  pub is_already_a_derivative: bool,
  pub text: String,
}

impl Expr {
  pub fn raw(text: impl Into<String>) -> Expr {
    Expr::Raw(text.into())
  }

  pub fn derivative(text: impl Into<String>) -> Expr {
    Expr::Derivative(text.into())
  }

  pub fn text(&self) -> &str {
    match self {
      Expr::Raw(text) | Expr::Derivative(text) => text,
    }
  }

  pub fn into_text(self) -> String {
    match self {
      Expr::Raw(text) | Expr::Derivative(text) => text,
    }
  }

  pub fn is_derivative(&self) -> bool {
    matches!(self, Expr::Derivative(_))
  }

  /// The numeric value of this expression, if its text is a signed
  /// decimal constant.
  pub fn constant_value(&self) -> Option<f64> {
    constant::constant_value(self.text())
  }

  pub fn is_constant(&self) -> bool {
    self.constant_value().is_some()
  }

  /// Replaces the text, keeping the tag.
  pub fn with_text(self, text: impl Into<String>) -> Expr {
    match self {
      Expr::Raw(_) => Expr::Raw(text.into()),
      Expr::Derivative(_) => Expr::Derivative(text.into()),
    }
  }

  /// Differentiates a raw value with the single-value rule. A value
  /// which is already a derivative is returned unchanged.
  pub fn differentiated(self) -> Expr {
    match self {
      Expr::Raw(text) => calculus::single_value(&text),
      Expr::Derivative(_) => self,
    }
  }
}

impl Display for Expr {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.text())
  }
}

impl DerivativeResult {
  /// The result text with all spaces removed.
  pub fn compact(&self) -> String {
    self.text.replace(' ', "")
  }
}

impl From<Expr> for DerivativeResult {
  fn from(expr: Expr) -> Self {
    DerivativeResult {
      is_already_a_derivative: expr.is_derivative(),
      text: expr.into_text(),
    }
  }
}

impl Display for DerivativeResult {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&self.text)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_raw_variable_differentiates_to_one() {
    assert_eq!(Expr::raw("X").differentiated(), Expr::derivative("1"));
  }

  #[test]
  fn test_raw_constant_differentiates_to_zero() {
    assert_eq!(Expr::raw("-3.5").differentiated(), Expr::derivative("0"));
  }

  #[test]
  fn test_derivative_is_not_differentiated_again() {
    let expr = Expr::derivative("2 * X ^ 1.0");
    assert_eq!(expr.clone().differentiated(), expr);
    let expr = Expr::derivative("X");
    assert_eq!(expr.clone().differentiated(), expr);
  }

  #[test]
  fn test_with_text_keeps_tag() {
    assert_eq!(Expr::raw("2").with_text("0.5"), Expr::raw("0.5"));
    assert_eq!(Expr::derivative("2").with_text("0.5"), Expr::derivative("0.5"));
  }

  #[test]
  fn test_constant_value() {
    assert_eq!(Expr::raw("2").constant_value(), Some(2.0));
    assert_eq!(Expr::derivative("0").constant_value(), Some(0.0));
    assert_eq!(Expr::derivative("2 * 1").constant_value(), None);
    assert!(!Expr::raw("X").is_constant());
  }

  #[test]
  fn test_result_from_expr() {
    let result = DerivativeResult::from(Expr::derivative("2 * X ^ 1.0"));
    assert!(result.is_already_a_derivative);
    assert_eq!(result.text, "2 * X ^ 1.0");
    assert_eq!(result.compact(), "2*X^1.0");
    assert_eq!(result.to_string(), "2 * X ^ 1.0");
  }

  #[test]
  fn test_result_serializes_to_json() {
    let result = DerivativeResult::from(Expr::derivative("0 + 1"));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json, serde_json::json!({ "is_already_a_derivative": true, "text": "0 + 1" }));
    let back: DerivativeResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
  }
}
