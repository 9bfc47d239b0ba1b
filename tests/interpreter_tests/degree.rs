use super::*;

mod exponent {
  use super::*;

  #[test]
  fn basic_exponent() {
    assert_eq!(interpret("Exponent[x^3 + 2*x + 5, x]").unwrap(), "3");
    assert_eq!(interpret("Exponent[a*x^2 + b, x]").unwrap(), "2");
  }

  #[test]
  fn constant_exponent() {
    assert_eq!(interpret("Exponent[7, x]").unwrap(), "0");
    assert_eq!(interpret("Exponent[y^4, x]").unwrap(), "0");
  }

  #[test]
  fn zero_polynomial() {
    assert_eq!(interpret("Exponent[0, x]").unwrap(), "-Infinity");
  }

  #[test]
  fn other_variable() {
    assert_eq!(interpret("Exponent[x^2*y^3 + y, y]").unwrap(), "3");
  }

  #[test]
  fn undefined_addend_is_contagious() {
    assert_eq!(interpret("Exponent[x^2 + 1/x, x]").unwrap(), "Undefined");
    assert_eq!(interpret("Exponent[Sin[x] + x, x]").unwrap(), "Undefined");
  }

  #[test]
  fn multivariate() {
    assert_eq!(
      interpret("Exponent[x^2*y^3 + x*y, {x, y}]").unwrap(),
      "5"
    );
  }
}

mod total_degree {
  use super::*;

  #[test]
  fn discovered_variables() {
    assert_eq!(interpret("TotalDegree[x^2*y + x*y^3]").unwrap(), "4");
    assert_eq!(interpret("TotalDegree[5]").unwrap(), "0");
  }

  #[test]
  fn sentinels_stay_undefined() {
    assert_eq!(interpret("TotalDegree[Undefined]").unwrap(), "Undefined");
    assert_eq!(interpret("TotalDegree[-Infinity]").unwrap(), "Undefined");
  }
}
