use crate::InterpreterError;
use crate::syntax::Expr;

pub mod dispatch;

/// Evaluate an Expr AST bottom-up.
///
/// Arguments are evaluated first; heads known to the dispatch table are then
/// applied, anything else stays symbolic (e.g. `Sin[x]`).
pub fn evaluate_expr_to_expr(expr: &Expr) -> Result<Expr, InterpreterError> {
  match expr {
    Expr::FunctionCall { name, args } => {
      let args = evaluate_all(args)?;
      if let Some(result) = dispatch::dispatch_polynomial_functions(name, &args)
      {
        return result;
      }
      Ok(Expr::FunctionCall {
        name: name.clone(),
        args,
      })
    }
    Expr::Sum(terms) => Ok(Expr::sum(evaluate_all(terms)?)),
    Expr::Product(factors) => Ok(Expr::product(evaluate_all(factors)?)),
    Expr::Power(base, exp) => Ok(Expr::power(
      evaluate_expr_to_expr(base)?,
      evaluate_expr_to_expr(exp)?,
    )),
    Expr::List(items) => Ok(Expr::List(evaluate_all(items)?)),
    Expr::Number(_)
    | Expr::Symbol(_)
    | Expr::NegativeInfinity
    | Expr::Undefined => Ok(expr.clone()),
  }
}

fn evaluate_all(exprs: &[Expr]) -> Result<Vec<Expr>, InterpreterError> {
  exprs.iter().map(evaluate_expr_to_expr).collect()
}
