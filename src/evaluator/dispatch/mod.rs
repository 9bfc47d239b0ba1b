#[allow(unused_imports)]
use super::*;

// Re-export crate types for submodules (used by submodules via `use super::*`)
#[allow(unused_imports)]
pub(crate) use crate::InterpreterError;
#[allow(unused_imports)]
pub(crate) use crate::syntax::Expr;

mod polynomial_functions;

pub use polynomial_functions::*;
