use super::*;

mod polynomial_q {
  use super::*;

  #[test]
  fn basic_polynomial() {
    assert_eq!(interpret("PolynomialQ[x^2 + 1, x]").unwrap(), "True");
    assert_eq!(
      interpret("PolynomialQ[x^2 + 2*x + 1, x]").unwrap(),
      "True"
    );
  }

  #[test]
  fn constant_is_polynomial() {
    assert_eq!(interpret("PolynomialQ[5, x]").unwrap(), "True");
  }

  #[test]
  fn variable_is_polynomial() {
    assert_eq!(interpret("PolynomialQ[x, x]").unwrap(), "True");
  }

  #[test]
  fn non_polynomial() {
    assert_eq!(interpret("PolynomialQ[Sin[x], x]").unwrap(), "False");
    assert_eq!(interpret("PolynomialQ[1/x, x]").unwrap(), "False");
    assert_eq!(interpret("PolynomialQ[x^(1/2), x]").unwrap(), "False");
  }

  #[test]
  fn other_symbols_are_coefficients() {
    assert_eq!(interpret("PolynomialQ[x^2 + y, x]").unwrap(), "True");
    assert_eq!(interpret("PolynomialQ[Sin[y]*x, x]").unwrap(), "True");
  }

  #[test]
  fn multivariate() {
    assert_eq!(
      interpret("PolynomialQ[x*y + y^2, {x, y}]").unwrap(),
      "True"
    );
    assert_eq!(
      interpret("PolynomialQ[x + Sin[y], {x, y}]").unwrap(),
      "False"
    );
  }

  #[test]
  fn undefined_is_not_a_polynomial() {
    assert_eq!(interpret("PolynomialQ[Undefined, x]").unwrap(), "False");
  }
}

mod monomial_q {
  use super::*;

  #[test]
  fn products_of_powers() {
    assert_eq!(interpret("MonomialQ[3*x^2*y, x]").unwrap(), "True");
    assert_eq!(interpret("MonomialQ[x^2*y, {x, y}]").unwrap(), "True");
  }

  #[test]
  fn sums_are_not_monomials() {
    assert_eq!(interpret("MonomialQ[x + 1, x]").unwrap(), "False");
  }

  #[test]
  fn sum_free_of_var_is_a_coefficient() {
    assert_eq!(interpret("MonomialQ[(y + 1)*x, x]").unwrap(), "True");
  }
}

mod variables {
  use super::*;

  #[test]
  fn symbols() {
    assert_eq!(interpret("Variables[x^2*y + 3*z]").unwrap(), "{x, y, z}");
    assert_eq!(interpret("Variables[7]").unwrap(), "{}");
  }

  #[test]
  fn opaque_sums() {
    assert_eq!(
      interpret("Variables[(x + 1)*(y + 2)]").unwrap(),
      "{1 + x, 2 + y}"
    );
  }
}

mod expand {
  use super::*;

  #[test]
  fn difference_of_squares() {
    assert_eq!(interpret("Expand[(x + 1)*(x - 1)]").unwrap(), "-1 + x^2");
  }

  #[test]
  fn square() {
    assert_eq!(interpret("Expand[(x + 1)^2]").unwrap(), "1 + 2*x + x^2");
  }

  #[test]
  fn huge_merged_exponent() {
    assert_eq!(
      interpret("Expand[((x^2000000000)^2000000000)^3]").unwrap(),
      "x^12000000000000000000"
    );
  }

  #[test]
  fn multivariate() {
    assert_eq!(
      interpret("Expand[(x + y)^2 - x^2 - 2*x*y]").unwrap(),
      "y^2"
    );
  }
}
