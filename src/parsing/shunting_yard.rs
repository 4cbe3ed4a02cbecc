
//! Reorders an infix token stream into postfix (Reverse Polish)
//! order.

use super::operator::Operator;
use super::source::Span;
use super::tokenizer::{Token, TokenData};

use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

use std::fmt::{self, Display, Formatter};

/// A token in postfix order. Operators always follow both of their
/// operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostfixToken {
  Literal(String),
  Operator(Operator),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShuntingYardError {
  #[error("unexpected end of expression")]
  UnexpectedEOF,
  #[error("unexpected token '{0}' at position {1}")]
  UnexpectedToken(String, Span),
}

#[derive(Clone, Debug)]
struct OpStackValue {
  operator: Operator,
}

/// Converts a sequence of infix tokens into postfix order.
///
/// The input must be a literal followed by zero or more (operator,
/// literal) pairs; anything else is an error. While reordering, an
/// incoming operator pops every stacked operator it
/// [yields to](Operator::yields_to).
pub fn to_postfix<I>(input: I) -> Result<Vec<PostfixToken>, ShuntingYardError>
where I: IntoIterator<Item = Token> {
  let mut operator_stack: Vec<OpStackValue> = Vec::new();
  let mut output: Vec<PostfixToken> = Vec::new();
  let mut expecting_operand = true;
  for token in input {
    match token.data {
      TokenData::Literal(literal) => {
        if !expecting_operand {
          return Err(ShuntingYardError::UnexpectedToken(literal, token.span));
        }
        output.push(PostfixToken::Literal(literal));
        expecting_operand = false;
      }
      TokenData::Operator(op) => {
        if expecting_operand {
          return Err(ShuntingYardError::UnexpectedToken(op.to_string(), token.span));
        }
        // Pop operators until we hit one that binds less tightly.
        while let Some(stack_value) = operator_stack.pop() {
          if stack_value.operator.yields_to(&op) {
            output.push(PostfixToken::Operator(stack_value.operator));
          } else {
            operator_stack.push(stack_value);
            break;
          }
        }
        operator_stack.push(OpStackValue { operator: op });
        expecting_operand = true;
      }
    }
  }
  if expecting_operand {
    return Err(ShuntingYardError::UnexpectedEOF);
  }

  // Pop remaining operators.
  while let Some(stack_value) = operator_stack.pop() {
    output.push(PostfixToken::Operator(stack_value.operator));
  }

  debug!(postfix = %output.iter().join(" "), "reordered expression");
  Ok(output)
}

impl Display for PostfixToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      PostfixToken::Literal(s) => f.write_str(s),
      PostfixToken::Operator(op) => write!(f, "{op}"),
    }
  }
}
