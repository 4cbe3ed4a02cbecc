
use super::rules;
use crate::error::Error;
use crate::expr::{Expr, DerivativeResult};
use crate::parsing::operator::OperatorTable;
use crate::parsing::shunting_yard::{PostfixToken, to_postfix};
use crate::parsing::tokenizer::Tokenizer;

use once_cell::sync::Lazy;
use tracing::debug;

static ARITHMETIC_OPERATORS: Lazy<OperatorTable> = Lazy::new(OperatorTable::arithmetic);

/// Computes first derivatives of expression strings, using the given
/// operator table for tokenizing.
#[derive(Debug, Clone)]
pub struct DerivativeEngine<'a> {
  operator_table: &'a OperatorTable,
}

impl<'a> DerivativeEngine<'a> {
  pub fn new(operator_table: &'a OperatorTable) -> Self {
    Self { operator_table }
  }

  pub fn differentiate(&self, expression: &str) -> Result<Expr, Error> {
    let tokens = Tokenizer::new(self.operator_table).read_tokens(expression)?;
    let postfix = to_postfix(tokens)?;
    let result = evaluate_postfix(postfix)?;
    debug!(expression, result = result.text(), "differentiated expression");
    Ok(result)
  }
}

impl Default for DerivativeEngine<'static> {
  fn default() -> Self {
    DerivativeEngine::new(&ARITHMETIC_OPERATORS)
  }
}

/// Walks a postfix sequence with an explicit stack of values, applying
/// a differentiation rule for each operator.
///
/// A literal is pushed un-differentiated, unless it is the final token
/// of the sequence (the whole expression is a single literal), in
/// which case the single-value rule is applied immediately.
pub fn evaluate_postfix<I>(postfix: I) -> Result<Expr, Error>
where I: IntoIterator<Item = PostfixToken> {
  let mut pile: Vec<Expr> = Vec::new();
  let mut elements = postfix.into_iter().peekable();
  while let Some(token) = elements.next() {
    match token {
      PostfixToken::Operator(op) => {
        let (a, b) = pile.pop()
          .and_then(|b| pile.pop().map(|a| (a, b)))
          .ok_or_else(|| Error::malformed(format!("operator '{op}' is missing an operand")))?;
        pile.push(rules::apply(op.operator(), a, b)?);
      }
      PostfixToken::Literal(text) => {
        let leaf = Expr::raw(text);
        if elements.peek().is_none() {
          pile.push(leaf.differentiated());
        } else {
          pile.push(leaf);
        }
      }
    }
  }
  let result = pile.pop().ok_or_else(|| Error::malformed("expected an expression, but found nothing"))?;
  if !pile.is_empty() {
    return Err(Error::malformed(format!("{} values were left without an operator", pile.len() + 1)));
  }
  Ok(result)
}

/// Differentiates `expression` with the standard arithmetic operator
/// table.
pub fn differentiate(expression: &str) -> Result<DerivativeResult, Error> {
  DerivativeEngine::default().differentiate(expression).map(DerivativeResult::from)
}
