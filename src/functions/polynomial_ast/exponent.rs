#[allow(unused_imports)]
use super::*;
use crate::InterpreterError;
use crate::syntax::Expr;

// ─── Exponent ───────────────────────────────────────────────────────

/// Exponent[expr, var] or Exponent[expr, {vars...}] - the degree of expr.
/// `-Infinity` for 0, `Undefined` when expr is not a polynomial.
pub fn exponent_ast(args: &[Expr]) -> Result<Expr, InterpreterError> {
  expect_args("Exponent", args, 2)?;
  Ok(match var_arg("Exponent", &args[1])? {
    VarArg::Single(var) => degree(&args[0], var),
    VarArg::Set(vars) => degree_mv(&args[0], &vars),
  })
}

/// TotalDegree[expr] - degree in all of its variables
pub fn total_degree_ast(args: &[Expr]) -> Result<Expr, InterpreterError> {
  expect_args("TotalDegree", args, 1)?;
  Ok(total_degree(&args[0]))
}

/// Degree of a single monomial; `Undefined` if `expr` is not one.
pub fn degree_monomial_in<V: Indeterminates + ?Sized>(
  expr: &Expr,
  vars: &V,
) -> Expr {
  if expr.is_zero() {
    return Expr::NegativeInfinity;
  }
  if vars.is_indeterminate(expr) {
    return Expr::one();
  }
  if let Some(n) = positive_power_of(expr, vars) {
    return Expr::from(n.clone());
  }
  match expr {
    Expr::Number(_) => Expr::zero(),
    Expr::Product(factors) => factors
      .iter()
      .fold(Expr::zero(), |acc, f| acc + degree_monomial_in(f, vars)),
    Expr::Undefined | Expr::NegativeInfinity => Expr::Undefined,
    _ if vars.is_free(expr) => Expr::zero(),
    _ => Expr::Undefined,
  }
}

/// Degree of a monomial or of a sum of monomials. A single addend of
/// undefined degree makes the whole degree undefined.
pub fn degree_in<V: Indeterminates + ?Sized>(expr: &Expr, vars: &V) -> Expr {
  let d = degree_monomial_in(expr, vars);
  if !d.is_undefined() {
    return d;
  }
  match expr {
    Expr::Sum(terms) => terms.iter().fold(Expr::NegativeInfinity, |acc, t| {
      degree_max(acc, degree_monomial_in(t, vars))
    }),
    _ => Expr::Undefined,
  }
}

pub fn degree_monomial(expr: &Expr, var: &Expr) -> Expr {
  degree_monomial_in(expr, &Single(var))
}

pub fn degree(expr: &Expr, var: &Expr) -> Expr {
  degree_in(expr, &Single(var))
}

pub fn degree_mv(expr: &Expr, vars: &VarSet) -> Expr {
  degree_in(expr, vars)
}

pub fn degree_monomial_sv(expr: &Expr, var: &Expr) -> Expr {
  degree_monomial_in(expr, &Strict(var))
}

pub fn degree_sv(expr: &Expr, var: &Expr) -> Expr {
  degree_in(expr, &Strict(var))
}

/// Degree in the automatically discovered variables of `expr`.
pub fn total_degree(expr: &Expr) -> Expr {
  degree_mv(expr, &variables(expr))
}
