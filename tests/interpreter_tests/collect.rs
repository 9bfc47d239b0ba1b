use super::*;

#[test]
fn like_terms() {
  assert_eq!(interpret("Collect[x*y + 2*x*y, x]").unwrap(), "3*x*y");
}

#[test]
fn symbolic_coefficients() {
  assert_eq!(
    interpret("Collect[a*x + b*x + c, x]").unwrap(),
    "(a + b)*x + c"
  );
}

#[test]
fn expands_first() {
  assert_eq!(
    interpret("Collect[(x + 1)^2 + x, x]").unwrap(),
    "1 + 3*x + x^2"
  );
}

#[test]
fn non_polynomial() {
  assert_eq!(interpret("Collect[Sin[x] + x, x]").unwrap(), "Undefined");
}
