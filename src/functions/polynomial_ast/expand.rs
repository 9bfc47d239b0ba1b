#[allow(unused_imports)]
use super::*;
use crate::InterpreterError;
use crate::syntax::{Expr, canonical_order};

use std::collections::HashMap;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};

// ─── Expand ─────────────────────────────────────────────────────────

/// Expand[expr] - Expands products and integer powers, combining like terms
pub fn expand_ast(args: &[Expr]) -> Result<Expr, InterpreterError> {
  expect_args("Expand", args, 1)?;
  Ok(expand(&args[0]))
}

/// A monomial `coeff * Π base^exp`, one entry per distinct base.
/// Exponents are unbounded since merging bases may outgrow any fixed width.
#[derive(Debug, Clone)]
struct Term {
  coeff: BigRational,
  factors: Vec<(Expr, BigInt)>,
}

impl Term {
  fn constant(coeff: BigRational) -> Self {
    Term {
      coeff,
      factors: Vec::new(),
    }
  }

  fn atom(base: Expr, exp: BigInt) -> Self {
    Term {
      coeff: BigRational::one(),
      factors: vec![(base, exp)],
    }
  }

  fn mul(&self, other: &Term) -> Term {
    let mut factors = self.factors.clone();
    for (base, exp) in &other.factors {
      match factors.iter_mut().find(|(b, _)| b == base) {
        Some(slot) => slot.1 += exp,
        None => factors.push((base.clone(), exp.clone())),
      }
    }
    factors.retain(|(_, e)| !e.is_zero());
    Term {
      coeff: &self.coeff * &other.coeff,
      factors,
    }
  }

  /// `self^n`; None for a zero coefficient raised to a negative power.
  fn pow(&self, n: i32) -> Option<Term> {
    if n < 0 && self.coeff.is_zero() {
      return None;
    }
    Some(Term {
      coeff: self.coeff.pow(n),
      factors: self
        .factors
        .iter()
        .map(|(b, e)| (b.clone(), e * BigInt::from(n)))
        .collect(),
    })
  }

  fn into_expr(self) -> Expr {
    let factors = self.factors.into_iter().map(|(base, exp)| {
      if exp.is_one() {
        base
      } else {
        Expr::power(base, Expr::from(exp))
      }
    });
    Expr::product(std::iter::once(Expr::Number(self.coeff)).chain(factors))
  }
}

/// Expand an expression into canonical sum-of-products form.
///
/// Structurally equal results mean equal polynomials: bases are merged,
/// like monomials are combined and the constructors sort every operand.
pub fn expand(expr: &Expr) -> Expr {
  match expr {
    Expr::List(items) => Expr::List(items.iter().map(expand).collect()),
    _ => match expand_terms(expr) {
      Some(terms) => build_sum(combine_like_terms(terms)),
      None => Expr::Undefined,
    },
  }
}

/// Flatten `expr` into monomials; None when `Undefined` is reached.
fn expand_terms(expr: &Expr) -> Option<Vec<Term>> {
  match expr {
    Expr::Undefined => None,
    Expr::Number(n) => Some(vec![Term::constant(n.clone())]),
    Expr::Sum(terms) => {
      let mut out = Vec::new();
      for t in terms {
        out.extend(expand_terms(t)?);
      }
      Some(out)
    }
    Expr::Product(factors) => {
      let mut acc = vec![Term::constant(BigRational::one())];
      for f in factors {
        acc = combine_like_terms(distribute_product(&acc, &expand_terms(f)?));
      }
      Some(acc)
    }
    Expr::Power(base, exp) => expand_power(base, exp),
    Expr::Symbol(_)
    | Expr::FunctionCall { .. }
    | Expr::List(_)
    | Expr::NegativeInfinity => {
      Some(vec![Term::atom(expr.clone(), BigInt::one())])
    }
  }
}

/// All cross products of two expanded factors.
fn distribute_product(left: &[Term], right: &[Term]) -> Vec<Term> {
  let mut out = Vec::with_capacity(left.len() * right.len());
  for l in left {
    for r in right {
      out.push(l.mul(r));
    }
  }
  out
}

fn expand_power(base: &Expr, exp: &Expr) -> Option<Vec<Term>> {
  let n = match exp {
    Expr::Number(e) if e.is_integer() => e.to_integer().to_i32(),
    _ => None,
  };
  let Some(n) = n else {
    // Symbolic or fractional exponent: an opaque atom
    let b = expand(base);
    let e = expand(exp);
    if b.is_undefined() || e.is_undefined() {
      return None;
    }
    return match Expr::power(b, e) {
      p @ Expr::Power(..) => Some(vec![Term::atom(p, BigInt::one())]),
      other => expand_terms(&other),
    };
  };

  let base_terms = combine_like_terms(expand_terms(base)?);
  match base_terms.len() {
    0 if n <= 0 => None,
    0 => Some(Vec::new()),
    1 => base_terms[0].pow(n).map(|t| vec![t]),
    _ if n >= 0 => {
      let mut acc = vec![Term::constant(BigRational::one())];
      for _ in 0..n {
        acc = combine_like_terms(distribute_product(&acc, &base_terms));
      }
      Some(acc)
    }
    // Negative powers of sums are kept whole
    _ => Some(vec![Term::atom(build_sum(base_terms), BigInt::from(n))]),
  }
}

/// Merge monomials with identical factors, dropping zero coefficients.
fn combine_like_terms(terms: Vec<Term>) -> Vec<Term> {
  let mut index: HashMap<Vec<(Expr, BigInt)>, usize> = HashMap::new();
  let mut combined: Vec<Term> = Vec::new();
  for mut term in terms {
    term.factors.sort_by(|(a, _), (b, _)| canonical_order(a, b));
    match index.get(&term.factors) {
      Some(&i) => combined[i].coeff += term.coeff,
      None => {
        index.insert(term.factors.clone(), combined.len());
        combined.push(term);
      }
    }
  }
  combined.retain(|t| !t.coeff.is_zero());
  combined
}

fn build_sum(terms: Vec<Term>) -> Expr {
  Expr::sum(terms.into_iter().map(Term::into_expr))
}
