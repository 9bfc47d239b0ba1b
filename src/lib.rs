use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

pub mod evaluator;
pub mod functions;
pub mod syntax;

pub use functions::polynomial_ast::PolynomialError;

#[derive(Parser)]
#[grammar = "wolfram.pest"]
pub struct WolframParser;

#[derive(Error, Debug)]
pub enum InterpreterError {
  #[error("Parse error: {0}")]
  ParseError(#[from] Box<pest::error::Error<Rule>>),
  #[error("Empty input")]
  EmptyInput,
  #[error("Evaluation error: {0}")]
  EvaluationError(String),
  #[error(transparent)]
  Polynomial(#[from] PolynomialError),
}

impl WolframParser {
  pub fn parse_wolfram(
    input: &str,
  ) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>>
  {
    Self::parse(Rule::Program, input).map_err(Box::new)
  }
}

pub fn parse(
  input: &str,
) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>> {
  WolframParser::parse_wolfram(input)
}

// Re-export evaluate_expr_to_expr from evaluator module
pub use evaluator::evaluate_expr_to_expr;

/// Parse, evaluate and print a single expression such as
/// `PolynomialGCD[x^2 - 1, x - 1, x]`.
pub fn interpret(input: &str) -> Result<String, InterpreterError> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(InterpreterError::EmptyInput);
  }

  let expr = syntax::string_to_expr(trimmed)?;
  let result = evaluator::evaluate_expr_to_expr(&expr)?;
  Ok(syntax::expr_to_string(&result))
}
