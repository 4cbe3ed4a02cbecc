
//! Best single buy-then-sell profit over a price history.

use num::Zero;
use thiserror::Error;
use tracing::trace;

use std::ops::Sub;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProfitError {
  #[error("Expected at least one price, but found none")]
  EmptyInput,
}

/// Tracks the lowest price seen so far and the best forward
/// difference, one price at a time.
#[derive(Clone, Copy, Debug)]
pub struct ProfitScanner<T> {
  min_price: T,
  best_profit: T,
}

impl<T> ProfitScanner<T>
where T: Copy + PartialOrd + Sub<Output = T> + Zero {
  pub fn new(first_price: T) -> Self {
    Self {
      min_price: first_price,
      best_profit: T::zero(),
    }
  }

  pub fn push(&mut self, price: T) {
    // Only subtract when the result is positive, so unsigned prices
    // never underflow.
    if price > self.min_price && price - self.min_price > self.best_profit {
      self.best_profit = price - self.min_price;
    }
    if price < self.min_price {
      self.min_price = price;
    }
  }

  pub fn min_price(&self) -> T {
    self.min_price
  }

  pub fn best_profit(&self) -> T {
    self.best_profit
  }
}

/// The largest `prices[j] - prices[i]` with `i < j`, or zero if prices
/// never rise. Fails on an empty sequence.
pub fn max_profit<T, I>(prices: I) -> Result<T, ProfitError>
where T: Copy + PartialOrd + Sub<Output = T> + Zero,
      I: IntoIterator<Item = T> {
  let mut prices = prices.into_iter();
  let first = prices.next().ok_or(ProfitError::EmptyInput)?;
  let mut scanner = ProfitScanner::new(first);
  let mut count = 1usize;
  for price in prices {
    scanner.push(price);
    count += 1;
  }
  trace!(count, "scanned prices");
  Ok(scanner.best_profit())
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_max_profit() {
    assert_eq!(max_profit([2, 3, 10, 6, 4, 8, 1]), Ok(8));
    assert_eq!(max_profit([7, 1, 5, 3, 6, 4]), Ok(5));
  }

  #[test]
  fn test_max_profit_decreasing() {
    assert_eq!(max_profit([5, 4, 3, 2, 1]), Ok(0));
    assert_eq!(max_profit([3, 3, 3]), Ok(0));
  }

  #[test]
  fn test_max_profit_single_price() {
    assert_eq!(max_profit([1]), Ok(0));
  }

  #[test]
  fn test_max_profit_empty() {
    assert_eq!(max_profit(Vec::<i64>::new()), Err(ProfitError::EmptyInput));
  }

  #[test]
  fn test_max_profit_unsigned_does_not_underflow() {
    assert_eq!(max_profit([9u32, 4, 1, 0]), Ok(0));
    assert_eq!(max_profit([9u32, 4, 7, 0, 2]), Ok(3));
  }

  #[test]
  fn test_max_profit_minimum_after_maximum() {
    // The best trade happens before the global minimum.
    assert_eq!(max_profit([1, 10, 0, 5]), Ok(9));
  }

  #[test]
  fn test_max_profit_floats() {
    let profit = max_profit([1.5, 0.2, 3.3, 2.0]).unwrap();
    assert_abs_diff_eq!(profit, 3.1, epsilon = 1e-9);
  }

  #[test]
  fn test_scanner_state() {
    let mut scanner = ProfitScanner::new(4);
    scanner.push(6);
    assert_eq!(scanner.best_profit(), 2);
    scanner.push(1);
    assert_eq!(scanner.min_price(), 1);
    assert_eq!(scanner.best_profit(), 2);
    scanner.push(5);
    assert_eq!(scanner.best_profit(), 4);
  }
}
