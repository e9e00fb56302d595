//! Tern interpreter: evaluates AST nodes with a simple tree-walking evaluator.
//!
//! This crate provides the runtime for the Tern language. Evaluation is
//! purely functional: [`evaluate`] takes an expression and an
//! environment and returns a `(value, type, environment)` triple, never
//! mutating anything it was given. Variables live in [`Env`], a
//! persistent chain of bindings where binding prepends and lookup
//! returns the nearest match.

pub mod env;
pub mod eval;
pub mod value;

pub use env::Env;
pub use eval::{evaluate, run, Evaluated};
pub use value::Value;
