#[allow(unused_imports)]
use super::*;
use crate::InterpreterError;
use crate::syntax::Expr;

use std::collections::HashSet;
use std::fmt::Debug;

use num_bigint::BigInt;

// ─── Indeterminates ─────────────────────────────────────────────────

/// Unordered set of indeterminates, keyed on structural equality.
pub type VarSet = HashSet<Expr>;

/// Decides which sub-expressions act as indeterminates and which may be
/// treated as coefficients.
pub trait Indeterminates: Debug {
  /// `expr` is one of the indeterminates itself.
  fn is_indeterminate(&self, expr: &Expr) -> bool;

  /// `expr` contains no indeterminate and may act as a coefficient.
  fn is_free(&self, expr: &Expr) -> bool;
}

/// A single indeterminate with the free-of fallback.
#[derive(Debug, Clone, Copy)]
pub struct Single<'a>(pub &'a Expr);

/// A single indeterminate without the free-of fallback: only numbers
/// count as coefficients.
#[derive(Debug, Clone, Copy)]
pub struct Strict<'a>(pub &'a Expr);

impl Indeterminates for Single<'_> {
  fn is_indeterminate(&self, expr: &Expr) -> bool {
    expr == self.0
  }

  fn is_free(&self, expr: &Expr) -> bool {
    is_constant_wrt(expr, self.0)
  }
}

impl Indeterminates for Strict<'_> {
  fn is_indeterminate(&self, expr: &Expr) -> bool {
    expr == self.0
  }

  fn is_free(&self, _expr: &Expr) -> bool {
    false
  }
}

impl Indeterminates for VarSet {
  fn is_indeterminate(&self, expr: &Expr) -> bool {
    self.contains(expr)
  }

  fn is_free(&self, expr: &Expr) -> bool {
    is_constant_wrt_all(expr, self)
  }
}

/// True iff no sub-expression of `expr` equals `var`.
pub fn is_constant_wrt(expr: &Expr, var: &Expr) -> bool {
  if expr == var {
    return false;
  }
  match expr {
    Expr::Sum(items)
    | Expr::Product(items)
    | Expr::List(items)
    | Expr::FunctionCall { args: items, .. } => {
      items.iter().all(|e| is_constant_wrt(e, var))
    }
    Expr::Power(base, exp) => {
      is_constant_wrt(base, var) && is_constant_wrt(exp, var)
    }
    Expr::Number(_)
    | Expr::Symbol(_)
    | Expr::NegativeInfinity
    | Expr::Undefined => true,
  }
}

/// True iff `expr` is free of every member of `vars`.
pub fn is_constant_wrt_all(expr: &Expr, vars: &VarSet) -> bool {
  vars.iter().all(|v| is_constant_wrt(expr, v))
}

/// Exponent of `expr` when it is an indeterminate raised to a literal
/// positive integer.
pub fn positive_power_of<'e, V: Indeterminates + ?Sized>(
  expr: &'e Expr,
  vars: &V,
) -> Option<&'e BigInt> {
  expr
    .positive_integer_power()
    .filter(|(base, _)| vars.is_indeterminate(base))
    .map(|(_, n)| n)
}

// ─── Extended degree arithmetic ─────────────────────────────────────
//
// Degrees live in {nonnegative integer, NegativeInfinity, Undefined}.
// Addition is plain `Expr` addition (both sentinels absorb there).

/// Maximum under the extended order; `Undefined` is contagious.
pub fn degree_max(a: Expr, b: Expr) -> Expr {
  match (&a, &b) {
    (Expr::Undefined, _) | (_, Expr::Undefined) => Expr::Undefined,
    (Expr::NegativeInfinity, _) => b,
    (_, Expr::NegativeInfinity) => a,
    (Expr::Number(x), Expr::Number(y)) => {
      if x >= y {
        a
      } else {
        b
      }
    }
    _ => Expr::Undefined,
  }
}

/// `d >= n`; false whenever either side is `Undefined`.
pub fn degree_at_least(d: &Expr, n: &Expr) -> bool {
  match (d, n) {
    (Expr::Number(x), Expr::Number(y)) => x >= y,
    (_, Expr::NegativeInfinity) => !d.is_undefined(),
    _ => false,
  }
}

pub fn undefined_pair() -> (Expr, Expr) {
  (Expr::Undefined, Expr::Undefined)
}

/// A (coefficient, degree) pair is undefined iff either side is.
pub fn is_undefined_pair(pair: &(Expr, Expr)) -> bool {
  pair.0.is_undefined() || pair.1.is_undefined()
}

// ─── Argument handling for the dispatch wrappers ────────────────────

/// Helper to create boolean result
pub fn bool_expr(b: bool) -> Expr {
  Expr::Symbol(if b { "True" } else { "False" }.to_string())
}

pub fn expect_args(
  name: &str,
  args: &[Expr],
  count: usize,
) -> Result<(), InterpreterError> {
  if args.len() != count {
    return Err(InterpreterError::EvaluationError(format!(
      "{} expects {} argument{}",
      name,
      count,
      if count == 1 { "" } else { "s" }
    )));
  }
  Ok(())
}

/// Variable argument of a call: a bare expression or a `{list}` of them.
pub enum VarArg<'a> {
  Single(&'a Expr),
  Set(VarSet),
}

pub fn var_arg<'a>(
  name: &str,
  arg: &'a Expr,
) -> Result<VarArg<'a>, InterpreterError> {
  match arg {
    Expr::List(items) => Ok(VarArg::Set(items.iter().cloned().collect())),
    Expr::Number(_) | Expr::Undefined | Expr::NegativeInfinity => {
      Err(InterpreterError::EvaluationError(format!(
        "{}: {} is not a valid variable",
        name, arg
      )))
    }
    _ => Ok(VarArg::Single(arg)),
  }
}

/// Like `var_arg` but rejects lists.
pub fn single_var_arg<'a>(
  name: &str,
  arg: &'a Expr,
) -> Result<&'a Expr, InterpreterError> {
  match var_arg(name, arg)? {
    VarArg::Single(var) => Ok(var),
    VarArg::Set(_) => Err(InterpreterError::EvaluationError(format!(
      "{}: expected a single variable, got {}",
      name, arg
    ))),
  }
}
