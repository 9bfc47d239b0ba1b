#[allow(unused_imports)]
use super::*;
use crate::InterpreterError;
use crate::syntax::{Expr, canonical_order};

// ─── Variables ──────────────────────────────────────────────────────

/// Variables[expr] - the indeterminates of expr, in canonical order
pub fn variables_ast(args: &[Expr]) -> Result<Expr, InterpreterError> {
  expect_args("Variables", args, 1)?;
  let mut vars: Vec<Expr> = variables(&args[0]).into_iter().collect();
  vars.sort_by(canonical_order);
  Ok(Expr::List(vars))
}

/// The atomic sub-expressions of `expr` that act as indeterminates.
///
/// Positive integer powers contribute their base, other powers contribute
/// themselves, and a sum appearing as a factor of a product is an opaque
/// indeterminate of its own.
pub fn variables(expr: &Expr) -> VarSet {
  let mut vars = VarSet::new();
  collect_variables(expr, &mut vars);
  vars
}

fn collect_variables(expr: &Expr, vars: &mut VarSet) {
  match expr {
    Expr::Number(_) | Expr::Undefined | Expr::NegativeInfinity => {}
    Expr::Power(base, _) if expr.positive_integer_power().is_some() => {
      vars.insert(base.as_ref().clone());
    }
    Expr::Sum(terms) => {
      for t in terms {
        collect_variables(t, vars);
      }
    }
    Expr::Product(factors) => {
      for f in factors {
        match f {
          Expr::Sum(_) => {
            vars.insert(f.clone());
          }
          _ => collect_variables(f, vars),
        }
      }
    }
    _ => {
      vars.insert(expr.clone());
    }
  }
}
