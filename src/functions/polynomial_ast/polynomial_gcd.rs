#[allow(unused_imports)]
use super::*;
use crate::InterpreterError;
use crate::syntax::Expr;

use log::{debug, trace};

// ─── PolynomialGCD ──────────────────────────────────────────────────

/// PolynomialGCD[p, q, x] - monic greatest common divisor in x
pub fn polynomial_gcd_ast(args: &[Expr]) -> Result<Expr, InterpreterError> {
  expect_args("PolynomialGCD", args, 3)?;
  let var = single_var_arg("PolynomialGCD", &args[2])?;
  Ok(polynomial_gcd(&args[0], &args[1], var))
}

/// PolynomialExtendedGCD[p, q, x] - {gcd, {a, b}} with a*p + b*q == gcd
pub fn polynomial_extended_gcd_ast(
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  expect_args("PolynomialExtendedGCD", args, 3)?;
  let var = single_var_arg("PolynomialExtendedGCD", &args[2])?;
  let (g, a, b) = polynomial_extended_gcd(&args[0], &args[1], var);
  Ok(Expr::List(vec![g, Expr::List(vec![a, b])]))
}

/// Euclidean GCD of `u` and `v` in `var`, normalized to be monic.
pub fn polynomial_gcd(u: &Expr, v: &Expr, var: &Expr) -> Expr {
  let mut x = expand(u);
  let mut y = expand(v);
  if x.is_undefined() || y.is_undefined() {
    return Expr::Undefined;
  }
  if x.is_zero() && y.is_zero() {
    return Expr::zero();
  }

  while !y.is_zero() {
    let r = polynomial_remainder(&x, &y, var);
    trace!("gcd step: {} mod {} = {}", x, y, r);
    if r.is_undefined() {
      return Expr::Undefined;
    }
    x = std::mem::replace(&mut y, r);
  }

  let lc = leading_coefficient(&x, var);
  debug!("raw gcd {} with leading coefficient {}", x, lc);
  expand(&(x / lc))
}

/// Extended Euclidean algorithm: `(g, a, b)` with `a*u + b*v == g` after
/// expansion and `g` monic in `var`.
pub fn polynomial_extended_gcd(
  u: &Expr,
  v: &Expr,
  var: &Expr,
) -> (Expr, Expr, Expr) {
  let undefined = (Expr::Undefined, Expr::Undefined, Expr::Undefined);
  let mut x = expand(u);
  let mut y = expand(v);
  if x.is_undefined() || y.is_undefined() {
    return undefined;
  }
  if x.is_zero() && y.is_zero() {
    return (Expr::zero(), Expr::zero(), Expr::zero());
  }

  // x == a_prev*u + b_prev*v and y == a_cur*u + b_cur*v throughout
  let (mut a_prev, mut a_cur) = (Expr::one(), Expr::zero());
  let (mut b_prev, mut b_cur) = (Expr::zero(), Expr::one());

  while !y.is_zero() {
    let (q, r) = polynomial_divide(&x, &y, var);
    trace!("extended gcd step: quotient {}, remainder {}", q, r);
    if q.is_undefined() || r.is_undefined() {
      return undefined;
    }
    let a_next = expand(&(&a_prev - &q * &a_cur));
    let b_next = expand(&(&b_prev - &q * &b_cur));
    a_prev = std::mem::replace(&mut a_cur, a_next);
    b_prev = std::mem::replace(&mut b_cur, b_next);
    x = std::mem::replace(&mut y, r);
  }

  let lc = leading_coefficient(&x, var);
  debug!("raw extended gcd {} with leading coefficient {}", x, lc);
  (
    expand(&(&x / &lc)),
    expand(&(&a_prev / &lc)),
    expand(&(&b_prev / &lc)),
  )
}
