use super::*;

mod polynomial_gcd {
  use super::*;

  #[test]
  fn common_linear_factor() {
    assert_eq!(
      interpret("PolynomialGCD[x^2 - 1, x - 1, x]").unwrap(),
      "-1 + x"
    );
    assert_eq!(
      interpret("PolynomialGCD[x^2 + 3*x + 2, x^2 + 4*x + 3, x]").unwrap(),
      "1 + x"
    );
  }

  #[test]
  fn coprime() {
    assert_eq!(interpret("PolynomialGCD[x^2 + 1, x + 1, x]").unwrap(), "1");
  }

  #[test]
  fn zero_operands() {
    assert_eq!(interpret("PolynomialGCD[0, 0, x]").unwrap(), "0");
    assert_eq!(
      interpret("PolynomialGCD[2*x - 2, 0, x]").unwrap(),
      "-1 + x"
    );
  }
}

mod polynomial_extended_gcd {
  use super::*;

  #[test]
  fn divisor_is_the_gcd() {
    assert_eq!(
      interpret("PolynomialExtendedGCD[x^2 - 1, x - 1, x]").unwrap(),
      "{-1 + x, {0, 1}}"
    );
  }

  #[test]
  fn coprime_bezout_coefficients() {
    assert_eq!(
      interpret("PolynomialExtendedGCD[x^2 + 1, x + 1, x]").unwrap(),
      "{1, {1/2, 1/2 - 1/2*x}}"
    );
  }

  #[test]
  fn both_zero() {
    assert_eq!(
      interpret("PolynomialExtendedGCD[0, 0, x]").unwrap(),
      "{0, {0, 0}}"
    );
  }
}
