
use super::{Operator, BinaryOperator};
use super::precedence::Precedence;
use super::associativity::Associativity;

use std::collections::HashMap;

/// A table of operators, indexed by their symbol.
#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
  by_symbol: HashMap<&'static str, Operator>,
}

impl OperatorTable {
  pub fn new() -> OperatorTable {
    OperatorTable::default()
  }

  pub fn with_capacity(capacity: usize) -> OperatorTable {
    OperatorTable {
      by_symbol: HashMap::with_capacity(capacity),
    }
  }

  pub fn get(&self, symbol: &str) -> Option<&Operator> {
    self.by_symbol.get(symbol)
  }

  pub fn insert(&mut self, op: Operator) -> Option<Operator> {
    self.by_symbol.insert(op.symbol(), op)
  }

  pub fn len(&self) -> usize {
    self.by_symbol.len()
  }

  pub fn is_empty(&self) -> bool {
    self.by_symbol.is_empty()
  }

  /// The fixed arithmetic table: `+` and `-` at priority 1, `*` and
  /// `/` at priority 2 (all left-associative), and right-associative
  /// `^` at priority 3.
  pub fn arithmetic() -> OperatorTable {
    vec![
      Operator::new(BinaryOperator::Power, Associativity::RIGHT, Precedence::new(3)),
      Operator::new(BinaryOperator::Multiply, Associativity::LEFT, Precedence::new(2)),
      Operator::new(BinaryOperator::Divide, Associativity::LEFT, Precedence::new(2)),
      Operator::new(BinaryOperator::Add, Associativity::LEFT, Precedence::new(1)),
      Operator::new(BinaryOperator::Subtract, Associativity::LEFT, Precedence::new(1)),
    ].into_iter().collect()
  }
}

impl FromIterator<Operator> for OperatorTable {
  fn from_iter<I>(iter: I) -> Self
  where I : IntoIterator<Item = Operator> {
    let iter = iter.into_iter();
    let (len_bound, _) = iter.size_hint();
    let mut table = OperatorTable::with_capacity(len_bound);
    for op in iter {
      table.insert(op);
    }
    table
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_arithmetic_table_contents() {
    let table = OperatorTable::arithmetic();
    assert_eq!(table.len(), 5);
    for op in BinaryOperator::ALL {
      assert_eq!(table.get(op.symbol()).unwrap().operator(), op);
    }
  }

  #[test]
  fn test_arithmetic_table_priorities() {
    let table = OperatorTable::arithmetic();
    let prec = |s: &str| table.get(s).unwrap().precedence();
    assert_eq!(prec("+"), prec("-"));
    assert_eq!(prec("*"), prec("/"));
    assert!(prec("+") < prec("*"));
    assert!(prec("*") < prec("^"));
  }

  #[test]
  fn test_arithmetic_table_associativity() {
    let table = OperatorTable::arithmetic();
    for symbol in ["+", "-", "*", "/"] {
      assert!(table.get(symbol).unwrap().associativity().is_left_assoc());
    }
    assert!(table.get("^").unwrap().associativity().is_right_assoc());
  }

  #[test]
  fn test_insert_replaces_existing() {
    let mut table = OperatorTable::arithmetic();
    let old = table.insert(Operator::new(BinaryOperator::Add, Associativity::LEFT, Precedence::new(9)));
    assert_eq!(old.unwrap().precedence(), Precedence::new(1));
    assert_eq!(table.get("+").unwrap().precedence(), Precedence::new(9));
    assert_eq!(table.len(), 5);
  }

  #[test]
  fn test_unknown_symbol() {
    let table = OperatorTable::arithmetic();
    assert!(table.get("%").is_none());
    assert!(OperatorTable::new().is_empty());
  }
}
