
use crate::parsing::tokenizer::TokenizerError;
use crate::parsing::shunting_yard::ShuntingYardError;

use thiserror::Error;

/// A part of the expression language that is recognized but not
/// implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Unsupported {
  #[error("Parentheses aren't supported")]
  Parentheses,
  #[error("Raising an expression to the power of another expression isn't supported")]
  ExpressionToExpressionPower,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  UnsupportedFeature(Unsupported),
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Malformed expression: {0}")]
  MalformedExpression(String),
}

impl Error {
  pub fn malformed(reason: impl Into<String>) -> Self {
    Self::MalformedExpression(reason.into())
  }
}

impl From<Unsupported> for Error {
  fn from(feature: Unsupported) -> Self {
    Self::UnsupportedFeature(feature)
  }
}

impl From<TokenizerError> for Error {
  fn from(err: TokenizerError) -> Self {
    match err {
      TokenizerError::UnsupportedParenthesis(_, _) => Self::UnsupportedFeature(Unsupported::Parentheses),
      err => Self::malformed(err.to_string()),
    }
  }
}

impl From<ShuntingYardError> for Error {
  fn from(err: ShuntingYardError) -> Self {
    Self::malformed(err.to_string())
  }
}
