use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use pest::iterators::Pair;

use crate::{InterpreterError, Rule};

/// Immutable symbolic expression.
///
/// The n-ary constructors (`sum`, `product`, `power`) apply only light
/// normalization: flattening, numeric folding, `Undefined` absorption and a
/// canonical operand order. Distribution is left to `expand`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
  Number(BigRational),
  Symbol(String),
  Sum(Vec<Expr>),
  Product(Vec<Expr>),
  Power(Box<Expr>, Box<Expr>),
  /// Opaque application such as `Sin[x]`
  FunctionCall {
    name: String,
    args: Vec<Expr>,
  },
  List(Vec<Expr>),
  /// Degree of the zero polynomial
  NegativeInfinity,
  /// Absorbing "not well-defined" value
  Undefined,
}

impl Expr {
  pub fn zero() -> Expr {
    Expr::Number(BigRational::zero())
  }

  pub fn one() -> Expr {
    Expr::Number(BigRational::one())
  }

  pub fn number(n: i64) -> Expr {
    Expr::Number(BigRational::from_integer(BigInt::from(n)))
  }

  /// `n/d` in lowest terms; a zero denominator gives `Undefined`.
  pub fn rational(n: i64, d: i64) -> Expr {
    if d == 0 {
      return Expr::Undefined;
    }
    Expr::Number(BigRational::new(BigInt::from(n), BigInt::from(d)))
  }

  pub fn symbol(name: &str) -> Expr {
    Expr::Symbol(name.to_string())
  }

  pub fn is_zero(&self) -> bool {
    matches!(self, Expr::Number(n) if n.is_zero())
  }

  pub fn is_one(&self) -> bool {
    matches!(self, Expr::Number(n) if n.is_one())
  }

  pub fn is_undefined(&self) -> bool {
    matches!(self, Expr::Undefined)
  }

  pub fn as_number(&self) -> Option<&BigRational> {
    match self {
      Expr::Number(n) => Some(n),
      _ => None,
    }
  }

  /// `base^n` with `n` a literal integer >= 1.
  pub fn positive_integer_power(&self) -> Option<(&Expr, &BigInt)> {
    match self {
      Expr::Power(base, exp) => match exp.as_ref() {
        Expr::Number(n) if n.is_integer() && n.is_positive() => {
          Some((base.as_ref(), n.numer()))
        }
        _ => None,
      },
      _ => None,
    }
  }

  /// Build a sum, flattening nested sums and folding numbers.
  pub fn sum<I: IntoIterator<Item = Expr>>(terms: I) -> Expr {
    let mut numeric = BigRational::zero();
    let mut rest = Vec::new();
    let mut negative_infinity = false;
    let mut pending: Vec<Expr> = terms.into_iter().collect();

    while let Some(term) = pending.pop() {
      match term {
        Expr::Undefined => return Expr::Undefined,
        Expr::NegativeInfinity => negative_infinity = true,
        Expr::Number(n) => numeric += n,
        Expr::Sum(inner) => pending.extend(inner),
        other => rest.push(other),
      }
    }

    if negative_infinity {
      return Expr::NegativeInfinity;
    }
    if !numeric.is_zero() {
      rest.push(Expr::Number(numeric));
    }
    rest.sort_by(canonical_order);
    match rest.len() {
      0 => Expr::zero(),
      1 => rest.remove(0),
      _ => Expr::Sum(rest),
    }
  }

  /// Build a product, flattening nested products and folding numbers into
  /// a single leading coefficient.
  pub fn product<I: IntoIterator<Item = Expr>>(factors: I) -> Expr {
    let mut numeric = BigRational::one();
    let mut rest = Vec::new();
    let mut pending: Vec<Expr> = factors.into_iter().collect();

    while let Some(factor) = pending.pop() {
      match factor {
        Expr::Undefined => return Expr::Undefined,
        Expr::Number(n) => numeric *= n,
        Expr::Product(inner) => pending.extend(inner),
        other => rest.push(other),
      }
    }

    if numeric.is_zero() {
      return Expr::zero();
    }
    rest.sort_by(canonical_order);
    if !numeric.is_one() {
      rest.insert(0, Expr::Number(numeric));
    }
    match rest.len() {
      0 => Expr::one(),
      1 => rest.remove(0),
      _ => Expr::Product(rest),
    }
  }

  pub fn power(base: Expr, exp: Expr) -> Expr {
    if base.is_undefined() || exp.is_undefined() {
      return Expr::Undefined;
    }
    if exp.is_zero() {
      return if base.is_zero() {
        Expr::Undefined
      } else {
        Expr::one()
      };
    }
    if exp.is_one() {
      return base;
    }
    if let (Expr::Number(b), Expr::Number(e)) = (&base, &exp) {
      if e.is_integer() {
        if b.is_zero() {
          return if e.is_negative() {
            Expr::Undefined
          } else {
            Expr::zero()
          };
        }
        if let Ok(k) = i32::try_from(e.to_integer()) {
          return Expr::Number(b.pow(k));
        }
      }
    }
    Expr::Power(Box::new(base), Box::new(exp))
  }

  pub fn pow(self, exp: Expr) -> Expr {
    Expr::power(self, exp)
  }
}

impl From<i64> for Expr {
  fn from(n: i64) -> Self {
    Expr::number(n)
  }
}

impl From<BigInt> for Expr {
  fn from(n: BigInt) -> Self {
    Expr::Number(BigRational::from_integer(n))
  }
}

impl From<BigRational> for Expr {
  fn from(n: BigRational) -> Self {
    Expr::Number(n)
  }
}

// ─── Canonical ordering ─────────────────────────────────────────────

/// (base, exponent) key of a single factor.
fn factor_key(expr: &Expr) -> (String, BigRational) {
  match expr {
    Expr::Power(base, exp) => match exp.as_ref() {
      Expr::Number(n) => (base.to_string(), n.clone()),
      _ => (expr.to_string(), BigRational::one()),
    },
    _ => (expr.to_string(), BigRational::one()),
  }
}

/// Sort key of a term: its non-numeric factors. Numbers sort first.
fn term_key(expr: &Expr) -> Vec<(String, BigRational)> {
  match expr {
    Expr::Number(_) => Vec::new(),
    Expr::Product(factors) => factors
      .iter()
      .filter(|f| !matches!(f, Expr::Number(_)))
      .map(factor_key)
      .collect(),
    _ => vec![factor_key(expr)],
  }
}

/// Total order used by the Orderless constructors: `1 + 2*x + x^2`.
pub fn canonical_order(a: &Expr, b: &Expr) -> Ordering {
  term_key(a)
    .cmp(&term_key(b))
    .then_with(|| a.to_string().cmp(&b.to_string()))
}

// ─── Arithmetic ─────────────────────────────────────────────────────

impl Add for Expr {
  type Output = Expr;

  fn add(self, rhs: Expr) -> Expr {
    Expr::sum([self, rhs])
  }
}

impl Sub for Expr {
  type Output = Expr;

  fn sub(self, rhs: Expr) -> Expr {
    Expr::sum([self, -rhs])
  }
}

impl Mul for Expr {
  type Output = Expr;

  fn mul(self, rhs: Expr) -> Expr {
    Expr::product([self, rhs])
  }
}

impl Div for Expr {
  type Output = Expr;

  fn div(self, rhs: Expr) -> Expr {
    if rhs.is_zero() {
      return Expr::Undefined;
    }
    Expr::product([self, Expr::power(rhs, Expr::number(-1))])
  }
}

impl Neg for Expr {
  type Output = Expr;

  fn neg(self) -> Expr {
    Expr::product([Expr::number(-1), self])
  }
}

impl Neg for &Expr {
  type Output = Expr;

  fn neg(self) -> Expr {
    -self.clone()
  }
}

macro_rules! forward_ref_binop {
  ($($imp:ident $method:ident),*) => {$(
    impl<'a, 'b> $imp<&'b Expr> for &'a Expr {
      type Output = Expr;

      fn $method(self, rhs: &'b Expr) -> Expr {
        $imp::$method(self.clone(), rhs.clone())
      }
    }

    impl<'b> $imp<&'b Expr> for Expr {
      type Output = Expr;

      fn $method(self, rhs: &'b Expr) -> Expr {
        $imp::$method(self, rhs.clone())
      }
    }

    impl<'a> $imp<Expr> for &'a Expr {
      type Output = Expr;

      fn $method(self, rhs: Expr) -> Expr {
        $imp::$method(self.clone(), rhs)
      }
    }
  )*};
}

forward_ref_binop!(Add add, Sub sub, Mul mul, Div div);

// ─── Printing ───────────────────────────────────────────────────────

fn needs_parens_as_base(expr: &Expr) -> bool {
  match expr {
    Expr::Sum(_)
    | Expr::Product(_)
    | Expr::Power(..)
    | Expr::NegativeInfinity => true,
    Expr::Number(n) => n.is_negative() || !n.is_integer(),
    _ => false,
  }
}

fn needs_parens_as_exponent(expr: &Expr) -> bool {
  match expr {
    Expr::Sum(_) | Expr::Product(_) | Expr::Power(..) => true,
    Expr::Number(n) => !n.is_integer(),
    _ => false,
  }
}

fn join(items: &[Expr]) -> String {
  items
    .iter()
    .map(|e| e.to_string())
    .collect::<Vec<_>>()
    .join(", ")
}

impl fmt::Display for Expr {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Expr::Number(n) => {
        if n.is_integer() {
          write!(f, "{}", n.numer())
        } else {
          write!(f, "{}/{}", n.numer(), n.denom())
        }
      }
      Expr::Symbol(name) => write!(f, "{}", name),
      Expr::Sum(terms) => {
        for (i, term) in terms.iter().enumerate() {
          let s = term.to_string();
          if i == 0 {
            write!(f, "{}", s)?;
          } else if let Some(rest) = s.strip_prefix('-') {
            write!(f, " - {}", rest)?;
          } else {
            write!(f, " + {}", s)?;
          }
        }
        Ok(())
      }
      Expr::Product(factors) => {
        let mut parts = Vec::new();
        let mut negate = false;
        let minus_one = -BigRational::one();
        for (i, factor) in factors.iter().enumerate() {
          let leading_minus =
            i == 0 && matches!(factor, Expr::Number(n) if *n == minus_one);
          if leading_minus {
            negate = true;
            continue;
          }
          parts.push(match factor {
            Expr::Sum(_) => format!("({})", factor),
            _ => factor.to_string(),
          });
        }
        write!(f, "{}{}", if negate { "-" } else { "" }, parts.join("*"))
      }
      Expr::Power(base, exp) => {
        if needs_parens_as_base(base) {
          write!(f, "({})", base)?;
        } else {
          write!(f, "{}", base)?;
        }
        if needs_parens_as_exponent(exp) {
          write!(f, "^({})", exp)
        } else {
          write!(f, "^{}", exp)
        }
      }
      Expr::FunctionCall { name, args } => {
        write!(f, "{}[{}]", name, join(args))
      }
      Expr::List(items) => write!(f, "{{{}}}", join(items)),
      Expr::NegativeInfinity => write!(f, "-Infinity"),
      Expr::Undefined => write!(f, "Undefined"),
    }
  }
}

pub fn expr_to_string(expr: &Expr) -> String {
  expr.to_string()
}

// ─── Parsing ────────────────────────────────────────────────────────

fn malformed(rule: Rule) -> InterpreterError {
  InterpreterError::EvaluationError(format!("Malformed {:?}", rule))
}

/// Lower a parse tree into an `Expr` through the normalizing constructors.
pub fn pair_to_expr(pair: Pair<Rule>) -> Result<Expr, InterpreterError> {
  let rule = pair.as_rule();
  match rule {
    Rule::Program => {
      let expression = pair
        .into_inner()
        .find(|p| p.as_rule() == Rule::Expression)
        .ok_or(InterpreterError::EmptyInput)?;
      pair_to_expr(expression)
    }
    Rule::Expression | Rule::Term => {
      let mut inner = pair.into_inner();
      let first = inner.next().ok_or_else(|| malformed(rule))?;
      let mut acc = pair_to_expr(first)?;
      while let Some(op) = inner.next() {
        let rhs = pair_to_expr(inner.next().ok_or_else(|| malformed(rule))?)?;
        acc = match op.as_str() {
          "+" => acc + rhs,
          "-" => acc - rhs,
          "*" => acc * rhs,
          _ => acc / rhs,
        };
      }
      Ok(acc)
    }
    Rule::Unary => {
      let mut negations = 0;
      let mut operand = None;
      for p in pair.into_inner() {
        match p.as_rule() {
          Rule::Minus => negations += 1,
          _ => operand = Some(pair_to_expr(p)?),
        }
      }
      let operand = operand.ok_or_else(|| malformed(rule))?;
      Ok(match (negations % 2 == 1, &operand) {
        (true, Expr::Symbol(name)) if name == "Infinity" => {
          Expr::NegativeInfinity
        }
        (true, _) => -operand,
        (false, _) => operand,
      })
    }
    Rule::PowerExpr => {
      let mut inner = pair.into_inner();
      let base = pair_to_expr(inner.next().ok_or_else(|| malformed(rule))?)?;
      match inner.next() {
        Some(exp) => Ok(Expr::power(base, pair_to_expr(exp)?)),
        None => Ok(base),
      }
    }
    Rule::FunctionCall => {
      let mut inner = pair.into_inner();
      let name = inner.next().ok_or_else(|| malformed(rule))?.as_str();
      let args = inner.map(pair_to_expr).collect::<Result<Vec<_>, _>>()?;
      Ok(Expr::FunctionCall {
        name: name.to_string(),
        args,
      })
    }
    Rule::List => Ok(Expr::List(
      pair
        .into_inner()
        .map(pair_to_expr)
        .collect::<Result<Vec<_>, _>>()?,
    )),
    Rule::Integer => pair
      .as_str()
      .parse::<BigInt>()
      .map(Expr::from)
      .map_err(|e| InterpreterError::EvaluationError(e.to_string())),
    Rule::Identifier => Ok(match pair.as_str() {
      "Undefined" => Expr::Undefined,
      name => Expr::symbol(name),
    }),
    _ => Err(InterpreterError::EvaluationError(format!(
      "Unexpected rule {:?}",
      rule
    ))),
  }
}

/// Parse a string into an `Expr`.
pub fn string_to_expr(s: &str) -> Result<Expr, InterpreterError> {
  let mut pairs = crate::parse(s)?;
  let program = pairs.next().ok_or(InterpreterError::EmptyInput)?;
  pair_to_expr(program)
}
