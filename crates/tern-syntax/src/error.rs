//! Error handling types and utilities for the Tern language toolchain.
//!
//! Evaluation can fail in exactly three ways, and all three are fatal:
//! nothing in the core catches an error, retries, or produces a partial
//! result. An error raised at the point of detection propagates out of
//! the entire evaluation call chain via `?`.
//!
//! # Examples
//!
//! ## Basic error creation
//!
//! ```rust
//! use tern_syntax::error::{Error, ErrorKind};
//!
//! let err = Error::new(ErrorKind::Math, "Division by zero.");
//! assert_eq!(err.to_string(), "Math error: Division by zero.");
//! ```
//!
//! ## Error propagation
//!
//! ```rust
//! use tern_syntax::error::{Result, type_error};
//!
//! fn require_boolean(tag: &str) -> Result<()> {
//!     if tag != "Boolean" {
//!         type_error(format!("Expected Boolean, got {}", tag))
//!     } else {
//!         Ok(())
//!     }
//! }
//! ```

use std::fmt;

/// The three fatal error categories of the Tern runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized expression shape, or a variable read before any
    /// assignment to it.
    Syntax,
    /// Operand type mismatch, an operator applied to an unsupported
    /// runtime type, a non-Boolean condition, or an assignment that
    /// conflicts with a variable's previously recorded type.
    Type,
    /// Division by a zero divisor, integer or floating.
    Math,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Syntax => "Syntax",
            ErrorKind::Type => "Type",
            ErrorKind::Math => "Math",
        };
        write!(f, "{}", name)
    }
}

/// An error raised during evaluation of a Tern program.
///
/// Carries the error category and a human-readable message naming the
/// offending operator and types. Tern programs are literal ASTs, so
/// there is no source text and no source location to report.
#[derive(Debug, Clone)]
pub struct Error {
    /// Which of the three fatal categories this error belongs to
    pub kind: ErrorKind,
    /// Human-readable error message
    pub msg: String,
}

impl Error {
    /// Creates a new error with the given category and message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tern_syntax::error::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::Syntax, "Cannot read from x before assignment.");
    /// assert_eq!(err.kind, ErrorKind::Syntax);
    /// ```
    pub fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self { kind, msg: msg.into() }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {}", self.kind, self.msg)
    }
}

/// A specialized `Result` type for Tern operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Convenience function to create a syntax error result.
///
/// Shorthand for `Err(Error::new(ErrorKind::Syntax, msg))`, so call
/// sites read as `return syntax_error(...)`.
pub fn syntax_error<T>(msg: impl Into<String>) -> Result<T> {
    Err(Error::new(ErrorKind::Syntax, msg))
}

/// Convenience function to create a type error result.
pub fn type_error<T>(msg: impl Into<String>) -> Result<T> {
    Err(Error::new(ErrorKind::Type, msg))
}

/// Convenience function to create a math error result.
pub fn math_error<T>(msg: impl Into<String>) -> Result<T> {
    Err(Error::new(ErrorKind::Math, msg))
}
