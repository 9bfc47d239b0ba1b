#[allow(unused_imports)]
use super::*;
use crate::InterpreterError;
use crate::syntax::Expr;

// ─── MonomialQ / PolynomialQ ────────────────────────────────────────

/// MonomialQ[expr, var] or MonomialQ[expr, {vars...}]
pub fn monomial_q_ast(args: &[Expr]) -> Result<Expr, InterpreterError> {
  expect_args("MonomialQ", args, 2)?;
  Ok(bool_expr(match var_arg("MonomialQ", &args[1])? {
    VarArg::Single(var) => is_monomial(&args[0], var),
    VarArg::Set(vars) => is_monomial_mv(&args[0], &vars),
  }))
}

/// PolynomialQ[expr, var] or PolynomialQ[expr, {vars...}]
pub fn polynomial_q_ast(args: &[Expr]) -> Result<Expr, InterpreterError> {
  expect_args("PolynomialQ", args, 2)?;
  Ok(bool_expr(match var_arg("PolynomialQ", &args[1])? {
    VarArg::Single(var) => is_polynomial(&args[0], var),
    VarArg::Set(vars) => is_polynomial_mv(&args[0], &vars),
  }))
}

/// Monomial test generic over the kind of indeterminate.
pub fn is_monomial_in<V: Indeterminates + ?Sized>(
  expr: &Expr,
  vars: &V,
) -> bool {
  if vars.is_indeterminate(expr) || positive_power_of(expr, vars).is_some() {
    return true;
  }
  match expr {
    Expr::Number(_) => true,
    Expr::Product(factors) => factors.iter().all(|f| is_monomial_in(f, vars)),
    Expr::Undefined | Expr::NegativeInfinity => false,
    _ => vars.is_free(expr),
  }
}

/// Polynomial test: a monomial, or a sum of monomials.
pub fn is_polynomial_in<V: Indeterminates + ?Sized>(
  expr: &Expr,
  vars: &V,
) -> bool {
  match expr {
    Expr::Sum(terms) => terms.iter().all(|t| is_monomial_in(t, vars)),
    _ => is_monomial_in(expr, vars),
  }
}

pub fn is_monomial(expr: &Expr, var: &Expr) -> bool {
  is_monomial_in(expr, &Single(var))
}

pub fn is_polynomial(expr: &Expr, var: &Expr) -> bool {
  is_polynomial_in(expr, &Single(var))
}

pub fn is_monomial_mv(expr: &Expr, vars: &VarSet) -> bool {
  is_monomial_in(expr, vars)
}

pub fn is_polynomial_mv(expr: &Expr, vars: &VarSet) -> bool {
  is_polynomial_in(expr, vars)
}

/// Single-variable form: no free-of fallback, so `2*x*y` is not a
/// monomial in `x`.
pub fn is_monomial_sv(expr: &Expr, var: &Expr) -> bool {
  is_monomial_in(expr, &Strict(var))
}

pub fn is_polynomial_sv(expr: &Expr, var: &Expr) -> bool {
  is_polynomial_in(expr, &Strict(var))
}
