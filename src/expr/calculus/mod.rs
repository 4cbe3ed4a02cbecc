
//! Symbolic first derivatives of postfix expressions.

mod derivative;
pub mod rules;

pub use derivative::{DerivativeEngine, evaluate_postfix, differentiate};
pub use rules::single_value;
