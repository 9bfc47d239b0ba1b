#[allow(unused_imports)]
use super::*;
use crate::InterpreterError;
use crate::syntax::Expr;

use num_traits::ToPrimitive;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolynomialError {
  #[error("the zero polynomial has no coefficient list")]
  ZeroPolynomial,
  #[error("{0} has no polynomial terms")]
  NoCoefficients(String),
}

// ─── Coefficient ────────────────────────────────────────────────────

/// Coefficient[expr, var, n] - the coefficient of var^n
pub fn coefficient_ast(args: &[Expr]) -> Result<Expr, InterpreterError> {
  expect_args("Coefficient", args, 3)?;
  let var = single_var_arg("Coefficient", &args[1])?;
  Ok(coefficient(&args[0], var, &args[2]))
}

/// LeadingCoefficient[expr, var]
pub fn leading_coefficient_ast(
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  expect_args("LeadingCoefficient", args, 2)?;
  let var = single_var_arg("LeadingCoefficient", &args[1])?;
  Ok(leading_coefficient(&args[0], var))
}

/// CoefficientList[poly, var] - list of coefficients from power 0 to degree.
pub fn coefficient_list_ast(args: &[Expr]) -> Result<Expr, InterpreterError> {
  expect_args("CoefficientList", args, 2)?;
  let var = single_var_arg("CoefficientList", &args[1])?;
  match coefficients(&args[0], var) {
    Ok(coeffs) => Ok(Expr::List(coeffs)),
    Err(PolynomialError::ZeroPolynomial) => Ok(Expr::List(Vec::new())),
    Err(e) => Err(e.into()),
  }
}

/// Split a monomial into (coefficient, degree).
pub fn coefficient_degree_monomial_in<V: Indeterminates + ?Sized>(
  expr: &Expr,
  vars: &V,
) -> (Expr, Expr) {
  if vars.is_indeterminate(expr) {
    return (Expr::one(), Expr::one());
  }
  if let Some(n) = positive_power_of(expr, vars) {
    return (Expr::one(), Expr::from(n.clone()));
  }
  match expr {
    Expr::Number(_) => (expr.clone(), Expr::zero()),
    Expr::Product(factors) => {
      factors
        .iter()
        .fold((Expr::one(), Expr::zero()), |(coeff, deg), f| {
          let (c, d) = coefficient_degree_monomial_in(f, vars);
          (coeff * c, deg + d)
        })
    }
    Expr::Undefined | Expr::NegativeInfinity => undefined_pair(),
    _ if vars.is_free(expr) => (expr.clone(), Expr::zero()),
    _ => undefined_pair(),
  }
}

/// Coefficient of the degree-`k` part of `expr`.
pub fn coefficient_in<V: Indeterminates + ?Sized>(
  expr: &Expr,
  vars: &V,
  k: &Expr,
) -> Expr {
  let pair = coefficient_degree_monomial_in(expr, vars);
  if pair.1 == *k {
    return pair.0;
  }
  match expr {
    // Addends of any other degree, undefined included, are dropped
    Expr::Sum(terms) => Expr::sum(terms.iter().filter_map(|t| {
      let (c, d) = coefficient_degree_monomial_in(t, vars);
      (d == *k).then_some(c)
    })),
    // A monomial of another degree contributes nothing
    _ if !is_undefined_pair(&pair) => Expr::zero(),
    _ => Expr::Undefined,
  }
}

/// (leading coefficient, degree); ties at the top degree are summed.
pub fn leading_coefficient_degree_in<V: Indeterminates + ?Sized>(
  expr: &Expr,
  vars: &V,
) -> (Expr, Expr) {
  let pair = coefficient_degree_monomial_in(expr, vars);
  if !is_undefined_pair(&pair) {
    return pair;
  }
  let Expr::Sum(terms) = expr else {
    return undefined_pair();
  };
  let pairs: Vec<(Expr, Expr)> = terms
    .iter()
    .map(|t| coefficient_degree_monomial_in(t, vars))
    .collect();
  if pairs.iter().any(is_undefined_pair) {
    return undefined_pair();
  }
  let top = pairs
    .iter()
    .fold(Expr::NegativeInfinity, |m, (_, d)| degree_max(m, d.clone()));
  let lc = Expr::sum(
    pairs
      .into_iter()
      .filter(|(_, d)| *d == top)
      .map(|(c, _)| c),
  );
  (lc, top)
}

/// Dense coefficient vector, index k holding the coefficient of var^k.
pub fn coefficients_in<V: Indeterminates + ?Sized>(
  expr: &Expr,
  vars: &V,
) -> Result<Vec<Expr>, PolynomialError> {
  if expr.is_zero() {
    return Err(PolynomialError::ZeroPolynomial);
  }
  let pairs = coefficient_pairs(expr, vars);
  let top = pairs
    .iter()
    .map(|(e, _)| *e)
    .max()
    .ok_or_else(|| PolynomialError::NoCoefficients(expr.to_string()))?;

  let mut buckets = vec![Expr::zero(); top + 1];
  for (e, c) in pairs {
    let slot = std::mem::replace(&mut buckets[e], Expr::zero());
    buckets[e] = slot + c;
  }
  Ok(buckets)
}

/// (exponent, coefficient factor) pairs; unmatched shapes yield nothing.
fn coefficient_pairs<V: Indeterminates + ?Sized>(
  expr: &Expr,
  vars: &V,
) -> Vec<(usize, Expr)> {
  if vars.is_indeterminate(expr) {
    return vec![(1, Expr::one())];
  }
  if let Some(n) = positive_power_of(expr, vars) {
    return n.to_usize().map(|n| vec![(n, Expr::one())]).unwrap_or_default();
  }
  match expr {
    Expr::Number(_) => vec![(0, expr.clone())],
    Expr::Sum(terms) => {
      terms.iter().flat_map(|t| coefficient_pairs(t, vars)).collect()
    }
    Expr::Product(factors) => {
      factors.iter().fold(vec![(0, Expr::one())], |acc, f| {
        convolve(&acc, &coefficient_pairs(f, vars))
      })
    }
    Expr::Undefined | Expr::NegativeInfinity => Vec::new(),
    _ if vars.is_free(expr) => vec![(0, expr.clone())],
    _ => Vec::new(),
  }
}

/// Pairwise cross-combination of two coefficient collections.
fn convolve(
  left: &[(usize, Expr)],
  right: &[(usize, Expr)],
) -> Vec<(usize, Expr)> {
  let mut out = Vec::with_capacity(left.len() * right.len());
  for (e1, c1) in left {
    for (e2, c2) in right {
      out.push((e1 + e2, c1 * c2));
    }
  }
  out
}

pub fn coefficient_degree_monomial(expr: &Expr, var: &Expr) -> (Expr, Expr) {
  coefficient_degree_monomial_in(expr, &Single(var))
}

pub fn coefficient(expr: &Expr, var: &Expr, k: &Expr) -> Expr {
  coefficient_in(expr, &Single(var), k)
}

pub fn leading_coefficient_degree(expr: &Expr, var: &Expr) -> (Expr, Expr) {
  leading_coefficient_degree_in(expr, &Single(var))
}

pub fn leading_coefficient(expr: &Expr, var: &Expr) -> Expr {
  leading_coefficient_degree(expr, var).0
}

pub fn coefficients(
  expr: &Expr,
  var: &Expr,
) -> Result<Vec<Expr>, PolynomialError> {
  coefficients_in(expr, &Single(var))
}

pub fn coefficient_degree_monomial_sv(
  expr: &Expr,
  var: &Expr,
) -> (Expr, Expr) {
  coefficient_degree_monomial_in(expr, &Strict(var))
}

pub fn coefficient_sv(expr: &Expr, var: &Expr, k: &Expr) -> Expr {
  coefficient_in(expr, &Strict(var), k)
}

pub fn leading_coefficient_degree_sv(
  expr: &Expr,
  var: &Expr,
) -> (Expr, Expr) {
  leading_coefficient_degree_in(expr, &Strict(var))
}

pub fn coefficients_sv(
  expr: &Expr,
  var: &Expr,
) -> Result<Vec<Expr>, PolynomialError> {
  coefficients_in(expr, &Strict(var))
}
