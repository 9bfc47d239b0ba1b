//! AST-native polynomial functions.
//!
//! Variables, MonomialQ, PolynomialQ, Exponent, Coefficient,
//! CoefficientList, Collect, polynomial division, basis re-expansion and
//! PolynomialGCD over one or several indeterminates.
//!
//! Every operation is a pure function over immutable `Expr` trees. Domain
//! failures (not a polynomial, ill-defined degree) are reported as
//! `Expr::Undefined`, never as an error.

mod coefficient;
mod collect;
mod expand;
mod exponent;
mod helpers;
mod polynomial_division;
mod polynomial_expansion;
mod polynomial_gcd;
mod polynomial_q;
mod variables;

pub use coefficient::*;
pub use collect::*;
pub use expand::*;
pub use exponent::*;
pub use helpers::*;
pub use polynomial_division::*;
pub use polynomial_expansion::*;
pub use polynomial_gcd::*;
pub use polynomial_q::*;
pub use variables::*;
