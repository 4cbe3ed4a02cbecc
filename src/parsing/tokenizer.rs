
//! Splits expression text into literal and operator tokens.

use super::operator::{Operator, OperatorTable};
use super::source::{SourceOffset, Span};
use crate::expr::constant::KNOWN_FUNCTIONS;
use crate::util::regex_opt_with;

use regex::Regex;
use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::trace;

use std::fmt::{self, Display, Formatter};

/// A single whitespace-delimited piece of an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub data: TokenData,
  pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenData {
  /// A number, a variable name, or a named function call such as
  /// `sin(X)`. Validity is checked later by the differentiation rules.
  Literal(String),
  Operator(Operator),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TokenizerError {
  #[error("Parentheses aren't supported, found '{0}' at {1}")]
  UnsupportedParenthesis(char, SourceOffset),
  #[error("Expected an expression, but found no tokens")]
  EmptyExpression,
}

/// Splits on whitespace and classifies each piece against an
/// [`OperatorTable`].
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
  operator_table: &'a OperatorTable,
}

static PIECE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").unwrap());

static CALL_RE: Lazy<Regex> = Lazy::new(|| {
  regex_opt_with(KNOWN_FUNCTIONS.iter().copied(), |names| format!(r"^{names}\("))
});

impl<'a> Tokenizer<'a> {
  pub fn new(operator_table: &'a OperatorTable) -> Self {
    Self { operator_table }
  }

  pub fn read_tokens(&self, input: &str) -> Result<Vec<Token>, TokenizerError> {
    let tokens = PIECE_RE.find_iter(input).map(|m| {
      let span = Span::new(SourceOffset(m.start()), SourceOffset(m.end()));
      self.read_one_token(m.as_str(), span)
    }).collect::<Result<Vec<_>, _>>()?;
    if tokens.is_empty() {
      return Err(TokenizerError::EmptyExpression);
    }
    trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
  }

  pub fn read_one_token(&self, piece: &str, span: Span) -> Result<Token, TokenizerError> {
    if let Some(op) = self.operator_table.get(piece) {
      return Ok(Token::new(TokenData::Operator(*op), span));
    }
    check_parentheses(piece, span.start)?;
    Ok(Token::new(TokenData::Literal(piece.to_owned()), span))
  }
}

/// Parentheses may only appear as the argument list of a call to one
/// of the [`KNOWN_FUNCTIONS`] which spans the whole piece, like
/// `ln(X)`. Any other use is unsupported.
fn check_parentheses(piece: &str, start: SourceOffset) -> Result<(), TokenizerError> {
  let Some(first) = piece.find(|c: char| c == '(' || c == ')') else {
    return Ok(());
  };
  let unsupported = |index: usize| {
    let ch = piece[index..].chars().next().unwrap_or('(');
    TokenizerError::UnsupportedParenthesis(ch, SourceOffset(start.0 + index))
  };
  if !CALL_RE.is_match(piece) || !piece.ends_with(')') {
    return Err(unsupported(first));
  }
  // The call's opening parenthesis must be closed by the final
  // character and by nothing earlier.
  let mut depth = 0usize;
  for (index, ch) in piece.char_indices() {
    match ch {
      '(' => depth += 1,
      ')' => {
        if depth == 0 {
          return Err(unsupported(index));
        }
        depth -= 1;
        if depth == 0 && index != piece.len() - 1 {
          return Err(unsupported(index));
        }
      }
      _ => {}
    }
  }
  if depth != 0 {
    return Err(unsupported(first));
  }
  Ok(())
}

impl Token {
  pub fn new(data: TokenData, span: Span) -> Self {
    Self { data, span }
  }
}

impl Display for TokenData {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TokenData::Literal(s) => f.write_str(s),
      TokenData::Operator(op) => write!(f, "{op}"),
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    self.data.fmt(f)
  }
}
