pub mod ast;
pub mod error;

pub use ast::*;
pub use error::*;
