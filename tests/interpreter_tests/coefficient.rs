use super::*;

mod coefficient {
  use super::*;

  #[test]
  fn cubic_coefficients() {
    assert_eq!(interpret("Coefficient[x^3 + 2*x + 5, x, 3]").unwrap(), "1");
    assert_eq!(interpret("Coefficient[x^3 + 2*x + 5, x, 1]").unwrap(), "2");
    assert_eq!(interpret("Coefficient[x^3 + 2*x + 5, x, 0]").unwrap(), "5");
  }

  #[test]
  fn missing_power() {
    assert_eq!(interpret("Coefficient[x^3 + 2*x + 5, x, 2]").unwrap(), "0");
    assert_eq!(interpret("Coefficient[3*x^2, x, 1]").unwrap(), "0");
  }

  #[test]
  fn symbolic_coefficients() {
    assert_eq!(
      interpret("Coefficient[a*x^2 + b*x^2 + c, x, 2]").unwrap(),
      "a + b"
    );
  }

  #[test]
  fn non_monomial_addends_are_dropped() {
    assert_eq!(interpret("Coefficient[x^2 + 1/x, x, 2]").unwrap(), "1");
    assert_eq!(
      interpret("Coefficient[3*x + Sin[x] + 2, x, 0]").unwrap(),
      "2"
    );
  }

  #[test]
  fn non_polynomial_is_undefined() {
    assert_eq!(interpret("Coefficient[1/x, x, 2]").unwrap(), "Undefined");
  }
}

mod leading_coefficient {
  use super::*;

  #[test]
  fn numeric() {
    assert_eq!(
      interpret("LeadingCoefficient[4*x^3 - x + 2, x]").unwrap(),
      "4"
    );
  }

  #[test]
  fn symbolic() {
    assert_eq!(interpret("LeadingCoefficient[a*x^2 + x, x]").unwrap(), "a");
  }

  #[test]
  fn ties_are_summed() {
    assert_eq!(
      interpret("LeadingCoefficient[a*x^2 + b*x^2 + x, x]").unwrap(),
      "a + b"
    );
  }
}

mod coefficient_list {
  use super::*;

  #[test]
  fn dense_with_gaps() {
    assert_eq!(
      interpret("CoefficientList[x^3 + 2*x + 5, x]").unwrap(),
      "{5, 2, 0, 1}"
    );
  }

  #[test]
  fn unexpanded_product() {
    assert_eq!(
      interpret("CoefficientList[(x + 1)*(x + 2), x]").unwrap(),
      "{2, 3, 1}"
    );
  }

  #[test]
  fn zero_polynomial() {
    assert_eq!(interpret("CoefficientList[0, x]").unwrap(), "{}");
  }

  #[test]
  fn no_terms_is_an_error() {
    assert!(interpret("CoefficientList[Sin[x], x]").is_err());
  }
}
