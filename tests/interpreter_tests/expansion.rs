use super::*;

#[test]
fn base_x_plus_one() {
  assert_eq!(
    interpret("PolynomialExpansion[x^2 + 2*x + 3, x + 1, x, t]").unwrap(),
    "2 + t^2"
  );
}

#[test]
fn remainders_keep_x() {
  assert_eq!(
    interpret("PolynomialExpansion[x^3 + x + 1, x^2 + 1, x, t]").unwrap(),
    "1 + t*x"
  );
}

#[test]
fn zero() {
  assert_eq!(
    interpret("PolynomialExpansion[0, x + 1, x, t]").unwrap(),
    "0"
  );
}

#[test]
fn constant_base_is_undefined() {
  assert_eq!(
    interpret("PolynomialExpansion[x^2, 3, x, t]").unwrap(),
    "Undefined"
  );
}
