#[allow(unused_imports)]
use super::*;

use crate::functions::polynomial_ast;

pub fn dispatch_polynomial_functions(
  name: &str,
  args: &[Expr],
) -> Option<Result<Expr, InterpreterError>> {
  match name {
    "Expand" => Some(polynomial_ast::expand_ast(args)),
    "Variables" => Some(polynomial_ast::variables_ast(args)),
    "MonomialQ" => Some(polynomial_ast::monomial_q_ast(args)),
    "PolynomialQ" => Some(polynomial_ast::polynomial_q_ast(args)),
    "Exponent" => Some(polynomial_ast::exponent_ast(args)),
    "TotalDegree" => Some(polynomial_ast::total_degree_ast(args)),
    "Coefficient" => Some(polynomial_ast::coefficient_ast(args)),
    "LeadingCoefficient" => {
      Some(polynomial_ast::leading_coefficient_ast(args))
    }
    "CoefficientList" => Some(polynomial_ast::coefficient_list_ast(args)),
    "Collect" => Some(polynomial_ast::collect_ast(args)),
    "PolynomialQuotientRemainder" => {
      Some(polynomial_ast::polynomial_quotient_remainder_ast(args))
    }
    "PolynomialQuotient" => {
      Some(polynomial_ast::polynomial_quotient_ast(args))
    }
    "PolynomialRemainder" => {
      Some(polynomial_ast::polynomial_remainder_ast(args))
    }
    "PolynomialExpansion" => {
      Some(polynomial_ast::polynomial_expansion_ast(args))
    }
    "PolynomialGCD" => Some(polynomial_ast::polynomial_gcd_ast(args)),
    "PolynomialExtendedGCD" => {
      Some(polynomial_ast::polynomial_extended_gcd_ast(args))
    }
    _ => None,
  }
}
