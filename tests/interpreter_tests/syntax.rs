use super::*;

#[test]
fn empty_input() {
  assert!(interpret("").is_err());
  assert!(interpret("   ").is_err());
}

#[test]
fn parse_error() {
  assert!(interpret("x +").is_err());
  assert!(interpret("f[x").is_err());
}

#[test]
fn unknown_heads_stay_symbolic() {
  assert_eq!(interpret("Sin[x]").unwrap(), "Sin[x]");
  assert_eq!(interpret("f[x + x]").unwrap(), "f[x + x]");
}

#[test]
fn sentinels() {
  assert_eq!(interpret("Undefined + x").unwrap(), "Undefined");
  assert_eq!(interpret("-Infinity + 3").unwrap(), "-Infinity");
  assert_eq!(interpret("1/0").unwrap(), "Undefined");
}

#[test]
fn wrong_arity() {
  assert!(interpret("Exponent[x]").is_err());
  assert!(interpret("PolynomialGCD[x, x]").is_err());
}

#[test]
fn invalid_variable() {
  assert!(interpret("Exponent[x^2, 2]").is_err());
  assert!(interpret("Coefficient[x^2, {x, y}, 2]").is_err());
}
