
//! Infix operators and their precedence and associativity.

mod associativity;
mod precedence;
mod table;

pub use associativity::Associativity;
pub use precedence::Precedence;
pub use table::OperatorTable;

use std::fmt::{self, Display, Formatter};

/// The five binary operators understood by the expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
  Add,
  Subtract,
  Multiply,
  Divide,
  Power,
}

/// An operator together with its parsing properties. Two operators
/// compare equal if they have the same symbol and the same
/// properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator {
  op: BinaryOperator,
  assoc: Associativity,
  prec: Precedence,
}

impl BinaryOperator {
  pub const ALL: [BinaryOperator; 5] = [
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    BinaryOperator::Power,
  ];

  /// The symbol used for the operator in expression text.
  pub const fn symbol(self) -> &'static str {
    match self {
      BinaryOperator::Add => "+",
      BinaryOperator::Subtract => "-",
      BinaryOperator::Multiply => "*",
      BinaryOperator::Divide => "/",
      BinaryOperator::Power => "^",
    }
  }

  pub fn from_symbol(symbol: &str) -> Option<BinaryOperator> {
    BinaryOperator::ALL.into_iter().find(|op| op.symbol() == symbol)
  }
}

impl Operator {
  pub fn new(op: BinaryOperator, assoc: Associativity, prec: Precedence) -> Operator {
    Operator { op, assoc, prec }
  }

  pub fn operator(&self) -> BinaryOperator {
    self.op
  }

  pub fn symbol(&self) -> &'static str {
    self.op.symbol()
  }

  pub fn associativity(&self) -> Associativity {
    self.assoc
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }

  /// Whether an operator `self` already sitting on the operator stack
  /// must be emitted before `incoming` is pushed.
  ///
  /// A left-associative incoming operator yields to anything of equal
  /// or higher precedence; a right-associative one only to strictly
  /// higher precedence.
  pub fn yields_to(&self, incoming: &Operator) -> bool {
    if incoming.associativity().is_left_assoc() {
      incoming.precedence() <= self.precedence()
    } else {
      incoming.precedence() < self.precedence()
    }
  }
}

impl Display for BinaryOperator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.symbol())
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    self.op.fmt(f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_symbol() {
    assert_eq!(BinaryOperator::from_symbol("+"), Some(BinaryOperator::Add));
    assert_eq!(BinaryOperator::from_symbol("^"), Some(BinaryOperator::Power));
    assert_eq!(BinaryOperator::from_symbol("%"), None);
    assert_eq!(BinaryOperator::from_symbol("**"), None);
  }

  #[test]
  fn test_symbol_roundtrips_for_all_operators() {
    for op in BinaryOperator::ALL {
      assert_eq!(BinaryOperator::from_symbol(op.symbol()), Some(op));
    }
  }

  #[test]
  fn test_left_assoc_yields_on_equal_precedence() {
    let plus = Operator::new(BinaryOperator::Add, Associativity::LEFT, Precedence::new(1));
    let minus = Operator::new(BinaryOperator::Subtract, Associativity::LEFT, Precedence::new(1));
    assert!(plus.yields_to(&minus));
    assert!(minus.yields_to(&plus));
  }

  #[test]
  fn test_right_assoc_does_not_yield_on_equal_precedence() {
    let pow = Operator::new(BinaryOperator::Power, Associativity::RIGHT, Precedence::new(3));
    assert!(!pow.yields_to(&pow));
  }

  #[test]
  fn test_lower_precedence_never_yields() {
    let plus = Operator::new(BinaryOperator::Add, Associativity::LEFT, Precedence::new(1));
    let times = Operator::new(BinaryOperator::Multiply, Associativity::LEFT, Precedence::new(2));
    assert!(!plus.yields_to(&times));
    assert!(times.yields_to(&plus));
  }
}
