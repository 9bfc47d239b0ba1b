#[allow(unused_imports)]
use super::*;
use crate::InterpreterError;
use crate::syntax::Expr;

// ─── Collect ────────────────────────────────────────────────────────

/// Collect[expr, x] or Collect[expr, {x, y, ...}] - Collects terms by
/// their variable part
pub fn collect_ast(args: &[Expr]) -> Result<Expr, InterpreterError> {
  expect_args("Collect", args, 2)?;
  let expanded = expand(&args[0]);
  Ok(match var_arg("Collect", &args[1])? {
    VarArg::Single(var) => collect_terms(&expanded, var),
    VarArg::Set(vars) => collect_terms_mv(&expanded, &vars),
  })
}

/// Split a monomial into (coefficient, variable part).
pub fn collect_terms_monomial_in<V: Indeterminates + ?Sized>(
  expr: &Expr,
  vars: &V,
) -> (Expr, Expr) {
  if vars.is_indeterminate(expr) || positive_power_of(expr, vars).is_some() {
    return (Expr::one(), expr.clone());
  }
  match expr {
    Expr::Number(_) => (expr.clone(), Expr::one()),
    Expr::Product(factors) => {
      factors
        .iter()
        .fold((Expr::one(), Expr::one()), |(coeff, part), f| {
          let (c, p) = collect_terms_monomial_in(f, vars);
          (coeff * c, part * p)
        })
    }
    Expr::Undefined | Expr::NegativeInfinity => undefined_pair(),
    _ if vars.is_free(expr) => (expr.clone(), Expr::one()),
    _ => undefined_pair(),
  }
}

/// Group the addends of `expr` by variable part, in order of first
/// appearance, and sum the coefficients of each group.
pub fn collect_terms_in<V: Indeterminates + ?Sized>(
  expr: &Expr,
  vars: &V,
) -> Expr {
  let Expr::Sum(terms) = expr else {
    let (c, p) = collect_terms_monomial_in(expr, vars);
    return c * p;
  };

  let mut groups: Vec<(Expr, Vec<Expr>)> = Vec::new();
  for t in terms {
    let (c, p) = collect_terms_monomial_in(t, vars);
    if c.is_undefined() || p.is_undefined() {
      return Expr::Undefined;
    }
    match groups.iter_mut().find(|(part, _)| *part == p) {
      Some((_, coeffs)) => coeffs.push(c),
      None => groups.push((p, vec![c])),
    }
  }

  Expr::sum(
    groups
      .into_iter()
      .map(|(part, coeffs)| expand(&Expr::sum(coeffs)) * part),
  )
}

pub fn collect_terms_monomial(expr: &Expr, var: &Expr) -> (Expr, Expr) {
  collect_terms_monomial_in(expr, &Single(var))
}

pub fn collect_terms(expr: &Expr, var: &Expr) -> Expr {
  collect_terms_in(expr, &Single(var))
}

pub fn collect_terms_mv(expr: &Expr, vars: &VarSet) -> Expr {
  collect_terms_in(expr, vars)
}
