//! AST (abstract syntax tree) types for the Tern language.

use std::fmt;

/// Runtime type tags carried alongside every value.
///
/// These are the interpreter's own value kinds, deliberately kept
/// separate from Rust's type system: operations dispatch on the tag,
/// never on the host representation of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Unit,
    Integer,
    FloatingPoint,
    String,
    Boolean,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Unit => "Unit",
            Type::Integer => "Integer",
            Type::FloatingPoint => "FloatingPoint",
            Type::String => "String",
            Type::Boolean => "Boolean",
        };
        write!(f, "{}", name)
    }
}

/// Expressions. Everything in Tern is an expression, including
/// assignment and loops; there is no statement layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // literals
    UnitLiteral,
    IntLiteral(i64),
    FloatLiteral(f64),
    StringLiteral(String),
    BoolLiteral(bool),
    // names and binding
    Variable(String),
    Assign { name: String, expr: Box<Expr> },
    // arithmetic
    Add(Box<Expr>, Box<Expr>),
    Subtract(Box<Expr>, Box<Expr>),
    Multiply(Box<Expr>, Box<Expr>),
    Divide(Box<Expr>, Box<Expr>),
    // logical
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
    // comparisons
    Lt(Box<Expr>, Box<Expr>),
    Lte(Box<Expr>, Box<Expr>),
    Gt(Box<Expr>, Box<Expr>),
    Gte(Box<Expr>, Box<Expr>),
    Eq(Box<Expr>, Box<Expr>),
    Ne(Box<Expr>, Box<Expr>),
    // control flow and sequencing
    If {
        cond: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
    While {
        cond: Box<Expr>,
        body: Box<Expr>,
    },
    Sequence(Vec<Expr>),
    Program(Vec<Expr>),
    // output
    Print(Box<Expr>),
}

/// Constructor helpers. Tern has no parser; programs are built as
/// literal ASTs, so these keep the boxing out of user code.
impl Expr {
    pub fn unit() -> Expr {
        Expr::UnitLiteral
    }
    pub fn int(n: i64) -> Expr {
        Expr::IntLiteral(n)
    }
    pub fn float(x: f64) -> Expr {
        Expr::FloatLiteral(x)
    }
    pub fn string(s: impl Into<String>) -> Expr {
        Expr::StringLiteral(s.into())
    }
    pub fn boolean(b: bool) -> Expr {
        Expr::BoolLiteral(b)
    }
    pub fn variable(name: impl Into<String>) -> Expr {
        Expr::Variable(name.into())
    }
    pub fn assign(name: impl Into<String>, expr: Expr) -> Expr {
        Expr::Assign { name: name.into(), expr: Box::new(expr) }
    }
    pub fn add(left: Expr, right: Expr) -> Expr {
        Expr::Add(Box::new(left), Box::new(right))
    }
    pub fn subtract(left: Expr, right: Expr) -> Expr {
        Expr::Subtract(Box::new(left), Box::new(right))
    }
    pub fn multiply(left: Expr, right: Expr) -> Expr {
        Expr::Multiply(Box::new(left), Box::new(right))
    }
    pub fn divide(left: Expr, right: Expr) -> Expr {
        Expr::Divide(Box::new(left), Box::new(right))
    }
    pub fn and(left: Expr, right: Expr) -> Expr {
        Expr::And(Box::new(left), Box::new(right))
    }
    pub fn or(left: Expr, right: Expr) -> Expr {
        Expr::Or(Box::new(left), Box::new(right))
    }
    pub fn not(expr: Expr) -> Expr {
        Expr::Not(Box::new(expr))
    }
    pub fn lt(left: Expr, right: Expr) -> Expr {
        Expr::Lt(Box::new(left), Box::new(right))
    }
    pub fn lte(left: Expr, right: Expr) -> Expr {
        Expr::Lte(Box::new(left), Box::new(right))
    }
    pub fn gt(left: Expr, right: Expr) -> Expr {
        Expr::Gt(Box::new(left), Box::new(right))
    }
    pub fn gte(left: Expr, right: Expr) -> Expr {
        Expr::Gte(Box::new(left), Box::new(right))
    }
    pub fn eq(left: Expr, right: Expr) -> Expr {
        Expr::Eq(Box::new(left), Box::new(right))
    }
    pub fn ne(left: Expr, right: Expr) -> Expr {
        Expr::Ne(Box::new(left), Box::new(right))
    }
    pub fn if_(cond: Expr, then_expr: Expr, else_expr: Expr) -> Expr {
        Expr::If {
            cond: Box::new(cond),
            then_expr: Box::new(then_expr),
            else_expr: Box::new(else_expr),
        }
    }
    pub fn while_(cond: Expr, body: Expr) -> Expr {
        Expr::While { cond: Box::new(cond), body: Box::new(body) }
    }
    pub fn sequence(exprs: Vec<Expr>) -> Expr {
        Expr::Sequence(exprs)
    }
    pub fn program(exprs: Vec<Expr>) -> Expr {
        Expr::Program(exprs)
    }
    pub fn print(expr: Expr) -> Expr {
        Expr::Print(Box::new(expr))
    }
}
