// Functions are organized by categories
pub mod polynomial_ast;
