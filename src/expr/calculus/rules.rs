
//! The differentiation rules, one per binary operator plus the
//! single-value rule for a lone literal.
//!
//! Every rule receives its operands in push order (`a` was pushed
//! before `b`) and produces an [`Expr::Derivative`]. A raw operand is
//! differentiated at most once, and only when the rule needs its
//! derivative.

use crate::error::{Error, Unsupported};
use crate::expr::Expr;
use crate::expr::constant::{is_constant, function_call};
use crate::expr::render;
use crate::parsing::operator::BinaryOperator;

use tracing::trace;

/// Applies the rule for `op` to the operands `a` and `b`.
pub fn apply(op: BinaryOperator, a: Expr, b: Expr) -> Result<Expr, Error> {
  trace!(%op, a = a.text(), b = b.text(), "applying differentiation rule");
  let result = match op {
    BinaryOperator::Add | BinaryOperator::Subtract => additive(a, op, b),
    BinaryOperator::Multiply => multiply(a, b),
    BinaryOperator::Divide => divide(a, b)?,
    BinaryOperator::Power => raise_to_power(a, b)?,
  };
  trace!(result = result.text(), "rule produced");
  Ok(result)
}

/// The derivative of a literal with no enclosing operator: `0` for a
/// constant, a deferred `func(arg)'` for a known function call, and
/// `1` for anything else.
pub fn single_value(text: &str) -> Expr {
  if is_constant(text) {
    Expr::derivative(render::zero())
  } else if let Some((function, argument)) = function_call(text) {
    Expr::derivative(render::deferred_call(function, argument))
  } else {
    Expr::derivative(render::one())
  }
}

fn additive(a: Expr, op: BinaryOperator, b: Expr) -> Expr {
  if a.is_derivative() && b.is_derivative() {
    return Expr::derivative(render::binary(a.text(), op, b.text()));
  }
  if a.is_constant() && b.is_constant() {
    return Expr::derivative(render::zero());
  }
  // A raw constant term differentiates to 0, so both sides go through
  // the same path.
  let a = a.differentiated();
  let b = b.differentiated();
  Expr::derivative(render::binary(a.text(), op, b.text()))
}

fn multiply(a: Expr, b: Expr) -> Expr {
  let text = match (a.is_constant(), b.is_constant()) {
    (true, true) => {
      if a.is_derivative() || b.is_derivative() {
        // Part of an already differentiated product, such as the `2 *
        // 0` in `d/dX (2 * X ^ 0)`.
        render::binary(a.text(), BinaryOperator::Multiply, b.text())
      } else {
        render::zero()
      }
    }
    (true, false) => {
      let db = b.differentiated();
      render::binary(a.text(), BinaryOperator::Multiply, db.text())
    }
    (false, true) => {
      let da = a.differentiated();
      render::binary(da.text(), BinaryOperator::Multiply, b.text())
    }
    (false, false) => {
      let da = a.clone().differentiated();
      let db = b.clone().differentiated();
      render::product_rule(da.text(), b.text(), a.text(), db.text())
    }
  };
  Expr::derivative(text)
}

fn divide(a: Expr, b: Expr) -> Result<Expr, Error> {
  // Only a literal zero divisor is rejected. A derived `0`, such as
  // the derivative of `2 ^ 3`, says nothing about the divisor's value.
  if matches!(&b, Expr::Raw(_)) && b.constant_value() == Some(0.0) {
    return Err(Error::DivisionByZero);
  }
  let text = match (a.is_constant(), b.constant_value()) {
    (true, Some(_)) => {
      let derived = a.is_derivative() || b.is_derivative();
      if derived && !is_constant_subexpression(&a) && !is_constant_subexpression(&b) {
        render::binary(a.text(), BinaryOperator::Divide, b.text())
      } else {
        render::zero()
      }
    }
    (true, None) => {
      match &b {
        Expr::Raw(_) => {
          let db = b.clone().differentiated();
          render::reciprocal_rule(a.text(), db.text(), b.text())
        }
        Expr::Derivative(_) => render::binary(a.text(), BinaryOperator::Divide, b.text()),
      }
    }
    (false, Some(value)) => {
      match (&a, &b) {
        (Expr::Raw(_), Expr::Raw(_)) => {
          // a / c == a * (1 / c)
          let rescaled = b.with_text(render::reciprocal(value));
          return Ok(multiply(a, rescaled));
        }
        _ => {
          let da = a.differentiated();
          render::binary(da.text(), BinaryOperator::Divide, b.text())
        }
      }
    }
    (false, None) => {
      let da = a.clone().differentiated();
      let db = b.clone().differentiated();
      render::quotient_rule(da.text(), b.text(), a.text(), db.text())
    }
  };
  Ok(Expr::derivative(text))
}

/// A derived `0` stands for a sub-expression with no variable in it,
/// like `2 ^ 3` or `X ^ 0`.
fn is_constant_subexpression(expr: &Expr) -> bool {
  expr.is_derivative() && expr.constant_value() == Some(0.0)
}

fn raise_to_power(a: Expr, b: Expr) -> Result<Expr, Error> {
  let text = match (a.constant_value(), b.constant_value()) {
    (Some(_), Some(_)) => render::zero(),
    (Some(base), None) => {
      if base == 0.0 || base == 1.0 {
        render::zero()
      } else {
        render::exponential_rule(a.text(), b.text())
      }
    }
    (None, Some(exponent)) => {
      if exponent == 0.0 || exponent == 1.0 {
        // The derivative of a ^ 0 is 0 and of a ^ 1 is 1, which is
        // exactly the exponent's own text.
        b.into_text()
      } else {
        render::power_rule(b.text(), a.text(), exponent - 1.0)
      }
    }
    (None, None) => return Err(Unsupported::ExpressionToExpressionPower.into()),
  };
  Ok(Expr::derivative(text))
}
