#[allow(unused_imports)]
use super::*;
use crate::InterpreterError;
use crate::syntax::Expr;

// ─── PolynomialExpansion ────────────────────────────────────────────

/// PolynomialExpansion[u, v, x, t] - rewrites u as a polynomial in t
/// whose digits are remainders modulo v
pub fn polynomial_expansion_ast(
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  expect_args("PolynomialExpansion", args, 4)?;
  let var = single_var_arg("PolynomialExpansion", &args[2])?;
  let t = single_var_arg("PolynomialExpansion", &args[3])?;
  Ok(polynomial_expansion(&args[0], &args[1], var, t))
}

/// Expansion of `u` in base `v`: each power of `t` carries the remainder
/// of one repeated division by `v`.
///
/// `v` must have degree at least one in `var`, otherwise the digit
/// recursion never shrinks; such bases and non-polynomial `u` give
/// `Undefined`.
pub fn polynomial_expansion(u: &Expr, v: &Expr, var: &Expr, t: &Expr) -> Expr {
  let base = expand(v);
  if !degree_at_least(&degree(&base, var), &Expr::one())
    || !is_polynomial(&expand(u), var)
  {
    return Expr::Undefined;
  }
  let digits = expand_digits(u, &base, var, t);
  if digits.is_undefined() {
    return Expr::Undefined;
  }
  collect_terms(&digits, t)
}

fn expand_digits(u: &Expr, v: &Expr, var: &Expr, t: &Expr) -> Expr {
  if u.is_zero() {
    return Expr::zero();
  }
  let (q, r) = polynomial_divide(u, v, var);
  if q.is_undefined() || r.is_undefined() {
    return Expr::Undefined;
  }
  expand(&(t * &expand_digits(&q, v, var, t) + r))
}
