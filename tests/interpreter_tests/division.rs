use super::*;

mod quotient_remainder {
  use super::*;

  #[test]
  fn exact_division() {
    assert_eq!(
      interpret("PolynomialQuotientRemainder[x^2 + 3*x + 2, x + 1, x]")
        .unwrap(),
      "{2 + x, 0}"
    );
  }

  #[test]
  fn fractional_quotient() {
    assert_eq!(
      interpret("PolynomialQuotientRemainder[x^2 + 1, 2*x, x]").unwrap(),
      "{1/2*x, 1}"
    );
  }

  #[test]
  fn scalar_divisor() {
    assert_eq!(
      interpret("PolynomialQuotientRemainder[2*x + 4, 2, x]").unwrap(),
      "{2 + x, 0}"
    );
  }

  #[test]
  fn zero_divisor() {
    assert_eq!(
      interpret("PolynomialQuotientRemainder[x^2, 0, x]").unwrap(),
      "{Undefined, Undefined}"
    );
  }
}

mod quotient {
  use super::*;

  #[test]
  fn cubic() {
    assert_eq!(
      interpret("PolynomialQuotient[x^3 - 1, x - 1, x]").unwrap(),
      "1 + x + x^2"
    );
  }
}

mod remainder {
  use super::*;

  #[test]
  fn nonzero_remainder() {
    assert_eq!(
      interpret("PolynomialRemainder[x^3 + 2, x^2 + 1, x]").unwrap(),
      "2 - x"
    );
  }

  #[test]
  fn non_polynomial_dividend() {
    assert_eq!(
      interpret("PolynomialRemainder[1/x, x + 1, x]").unwrap(),
      "Undefined"
    );
  }
}
