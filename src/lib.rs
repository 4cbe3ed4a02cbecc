
//! Symbolic first derivatives of space-separated arithmetic
//! expressions, plus a best-trade profit scanner.
//!
//! ```text
//! X ^ 3 + X ^ 5  ->  3 * X ^ 2.0 + 5 * X ^ 4.0
//! ```
//!
//! Results are not simplified, and parentheses are not supported.

pub mod error;
pub mod expr;
pub mod parsing;
pub mod profit;
pub mod util;

pub use error::Error;
pub use expr::DerivativeResult;
pub use expr::calculus::differentiate;
pub use profit::max_profit;
