#[allow(unused_imports)]
use super::*;
use crate::InterpreterError;
use crate::syntax::Expr;

use log::{debug, trace};

/// PolynomialQuotientRemainder[p, q, x] - {quotient, remainder}
pub fn polynomial_quotient_remainder_ast(
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  expect_args("PolynomialQuotientRemainder", args, 3)?;
  let var = single_var_arg("PolynomialQuotientRemainder", &args[2])?;
  let (q, r) = polynomial_divide(&args[0], &args[1], var);
  Ok(Expr::List(vec![q, r]))
}

/// PolynomialQuotient[p, q, x] - quotient of polynomial division
pub fn polynomial_quotient_ast(
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  expect_args("PolynomialQuotient", args, 3)?;
  let var = single_var_arg("PolynomialQuotient", &args[2])?;
  Ok(polynomial_quotient(&args[0], &args[1], var))
}

/// PolynomialRemainder[p, q, x] - remainder of polynomial division
pub fn polynomial_remainder_ast(
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  expect_args("PolynomialRemainder", args, 3)?;
  let var = single_var_arg("PolynomialRemainder", &args[2])?;
  Ok(polynomial_remainder(&args[0], &args[1], var))
}

/// Long division of `u` by `v` in `var`, returning (quotient, remainder).
///
/// A divisor of degree below one in `var` is treated as a scalar: the
/// result is `(expand(u/v), 0)`. Dividing by the zero polynomial, or by
/// anything whose degree is undefined, yields `(Undefined, Undefined)`.
///
/// When the leading coefficient of `v` is a sum, such as `1 + y` in
/// `(1 + y)*x + 1`, the quotient carries `(1 + y)^-1` factors that `expand`
/// does not cancel. `q*v + r` then equals `u` only as a rational function,
/// not structurally after expansion.
pub fn polynomial_divide(u: &Expr, v: &Expr, var: &Expr) -> (Expr, Expr) {
  let u = expand(u);
  let v = expand(v);
  if u.is_undefined() || v.is_undefined() || v.is_zero() {
    return undefined_pair();
  }

  let n = degree(&v, var);
  if n.is_undefined() {
    return undefined_pair();
  }
  if !degree_at_least(&n, &Expr::one()) {
    debug!("divisor {} is constant in {}; dividing as a scalar", v, var);
    return (expand(&(&u / &v)), Expr::zero());
  }

  let lc = leading_coefficient(&v, var);
  let tail = expand(&(&v - &lc * var.clone().pow(n.clone())));

  let mut quotient = Expr::zero();
  let mut remainder = u;
  loop {
    let m = degree(&remainder, var);
    trace!("remainder {} has degree {} in {}", remainder, m, var);
    if m.is_undefined() {
      return undefined_pair();
    }
    if !degree_at_least(&m, &n) {
      break;
    }
    let lcr = leading_coefficient(&remainder, var);
    let s = &lcr / &lc;
    let z = var.clone().pow(&m - &n);
    quotient = expand(&(quotient + &s * &z));
    remainder = expand(
      &(remainder - &lcr * var.clone().pow(m) - &tail * &s * &z),
    );
  }
  (quotient, remainder)
}

pub fn polynomial_quotient(u: &Expr, v: &Expr, var: &Expr) -> Expr {
  polynomial_divide(u, v, var).0
}

pub fn polynomial_remainder(u: &Expr, v: &Expr, var: &Expr) -> Expr {
  polynomial_divide(u, v, var).1
}
