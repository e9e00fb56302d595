//! The Tern evaluator.
//!
//! [`evaluate`] is a total function over the closed [`Expr`] variant
//! set: given an expression and an environment it produces the value,
//! the value's runtime type tag, and the environment left behind. The
//! environment threads left to right through every compound form —
//! the right operand of a binary operator always evaluates in the
//! environment the left operand produced, and each element of a
//! sequence sees the bindings of the elements before it. That ordering
//! is observable (through bindings and through `Print`) and is part of
//! the contract, not an implementation detail.

use crate::env::Env;
use crate::value::Value;
use tern_syntax::ast::{Expr, Type};
use tern_syntax::error::{math_error, syntax_error, type_error, Result};

/// The result of one evaluation step: value, runtime type tag, and
/// the environment to thread into the next step.
pub type Evaluated = (Value, Type, Env);

/// Evaluates `expr` in `env`. Errors abort the whole evaluation; the
/// core never catches, retries, or returns a partial result.
pub fn evaluate(expr: &Expr, env: &Env) -> Result<Evaluated> {
    match expr {
        Expr::UnitLiteral => Ok((Value::Unit, Type::Unit, env.clone())),
        Expr::IntLiteral(n) => Ok((Value::Int(*n), Type::Integer, env.clone())),
        Expr::FloatLiteral(x) => Ok((Value::Float(*x), Type::FloatingPoint, env.clone())),
        Expr::StringLiteral(s) => Ok((Value::Str(s.clone()), Type::String, env.clone())),
        Expr::BoolLiteral(b) => Ok((Value::Bool(*b), Type::Boolean, env.clone())),

        Expr::Variable(name) => match env.get(name) {
            Some((value, ty)) => Ok((value, ty, env.clone())),
            None => syntax_error(format!("Cannot read from {} before assignment.", name)),
        },

        Expr::Assign { name, expr } => {
            let (value, ty, env) = evaluate(expr, env)?;
            // a prior binding fixes the variable's type for good
            if let Some((_, declared)) = env.get(name) {
                if declared != ty {
                    return type_error(format!(
                        "Mismatched types for Assign: cannot assign {} to {}",
                        ty, declared
                    ));
                }
            }
            let env = env.bind(name.clone(), value.clone(), ty);
            Ok((value, ty, env))
        }

        Expr::Print(inner) => {
            let (value, ty, env) = evaluate(inner, env)?;
            match ty {
                Type::Unit => println!("Unit"),
                _ => println!("{}", value),
            }
            Ok((value, ty, env))
        }

        Expr::Sequence(exprs) | Expr::Program(exprs) => {
            let mut value = Value::Unit;
            let mut ty = Type::Unit;
            let mut env = env.clone();
            for expr in exprs {
                (value, ty, env) = evaluate(expr, &env)?;
            }
            Ok((value, ty, env))
        }

        Expr::Add(left, right) => {
            let (left_value, left_ty, env) = evaluate(left, env)?;
            let (right_value, right_ty, env) = evaluate(right, &env)?;
            if left_ty != right_ty {
                return type_error(format!(
                    "Mismatched types for Add: cannot add {} to {}",
                    left_ty, right_ty
                ));
            }
            let value = match (left_value, right_value) {
                (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_add(b)),
                (Value::Float(a), Value::Float(b)) => Value::Float(a + b),
                (Value::Str(a), Value::Str(b)) => Value::Str(format!("{}{}", a, b)),
                _ => return type_error(format!("Cannot add {}s", left_ty)),
            };
            Ok((value, left_ty, env))
        }

        Expr::Subtract(left, right) => {
            let (left_value, left_ty, env) = evaluate(left, env)?;
            let (right_value, right_ty, env) = evaluate(right, &env)?;
            if left_ty != right_ty {
                return type_error(format!(
                    "Mismatched types for Subtract: cannot subtract {} from {}",
                    right_ty, left_ty
                ));
            }
            let value = match (left_value, right_value) {
                (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_sub(b)),
                (Value::Float(a), Value::Float(b)) => Value::Float(a - b),
                _ => return type_error(format!("Cannot subtract {}s", left_ty)),
            };
            Ok((value, left_ty, env))
        }

        Expr::Multiply(left, right) => {
            let (left_value, left_ty, env) = evaluate(left, env)?;
            let (right_value, right_ty, env) = evaluate(right, &env)?;
            if left_ty != right_ty {
                return type_error(format!(
                    "Mismatched types for Multiply: cannot multiply {} by {}",
                    left_ty, right_ty
                ));
            }
            let value = match (left_value, right_value) {
                (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_mul(b)),
                (Value::Float(a), Value::Float(b)) => Value::Float(a * b),
                _ => return type_error(format!("Cannot multiply {}s", left_ty)),
            };
            Ok((value, left_ty, env))
        }

        Expr::Divide(left, right) => {
            let (left_value, left_ty, env) = evaluate(left, env)?;
            let (right_value, right_ty, env) = evaluate(right, &env)?;
            if left_ty != right_ty {
                return type_error(format!(
                    "Mismatched types for Divide: cannot divide {} by {}",
                    left_ty, right_ty
                ));
            }
            // the zero check comes before the per-type dispatch
            if is_zero(&right_value) {
                return math_error("Division by zero.");
            }
            let value = match (left_value, right_value) {
                (Value::Int(a), Value::Int(b)) => Value::Int(floor_div(a, b)),
                (Value::Float(a), Value::Float(b)) => Value::Float(a / b),
                _ => return type_error(format!("Cannot divide {}s", left_ty)),
            };
            Ok((value, left_ty, env))
        }

        Expr::And(left, right) => eval_logical("And", left, right, env, |a, b| a && b),
        Expr::Or(left, right) => eval_logical("Or", left, right, env, |a, b| a || b),

        Expr::Not(inner) => {
            let (value, _, env) = evaluate(inner, env)?;
            match value {
                Value::Bool(b) => Ok((Value::Bool(!b), Type::Boolean, env)),
                _ => type_error("Cannot perform logical not on a non-boolean operand."),
            }
        }

        Expr::Lt(left, right) => eval_comparison(CmpOp::Lt, left, right, env),
        Expr::Lte(left, right) => eval_comparison(CmpOp::Lte, left, right, env),
        Expr::Gt(left, right) => eval_comparison(CmpOp::Gt, left, right, env),
        Expr::Gte(left, right) => eval_comparison(CmpOp::Gte, left, right, env),
        Expr::Eq(left, right) => eval_comparison(CmpOp::Eq, left, right, env),
        Expr::Ne(left, right) => eval_comparison(CmpOp::Ne, left, right, env),

        Expr::If { cond, then_expr, else_expr } => {
            let (value, ty, env) = evaluate(cond, env)?;
            match (value, ty) {
                (Value::Bool(true), Type::Boolean) => evaluate(then_expr, &env),
                (Value::Bool(false), Type::Boolean) => evaluate(else_expr, &env),
                _ => type_error("Cannot perform if on a non-boolean condition."),
            }
        }

        Expr::While { cond, body } => {
            let mut env = env.clone();
            loop {
                let (value, ty, cond_env) = evaluate(cond, &env)?;
                env = cond_env;
                match (value, ty) {
                    (Value::Bool(true), Type::Boolean) => {
                        // the body's value is discarded, its bindings are not
                        let (_, _, body_env) = evaluate(body, &env)?;
                        env = body_env;
                    }
                    (Value::Bool(false), Type::Boolean) => break,
                    _ => {
                        return type_error("Cannot perform while on a non-boolean condition.")
                    }
                }
            }
            Ok((Value::Bool(false), Type::Boolean, env))
        }
    }
}

/// Evaluates a whole program against the empty environment and returns
/// the final triple. With `debug` set, also prints the program's
/// structural form, the final value, and the final environment.
pub fn run(program: &Expr, debug: bool) -> Result<Evaluated> {
    let (value, ty, env) = evaluate(program, &Env::new())?;
    if debug {
        println!("program: {:?}", program);
        println!("final_value: ({}, {})", value, ty);
        println!("final_env: {}", env);
    }
    Ok((value, ty, env))
}

fn eval_logical(
    op: &str,
    left: &Expr,
    right: &Expr,
    env: &Env,
    apply: fn(bool, bool) -> bool,
) -> Result<Evaluated> {
    // no short-circuit: both operands always evaluate
    let (left_value, left_ty, env) = evaluate(left, env)?;
    let (right_value, right_ty, env) = evaluate(right, &env)?;
    if left_ty != right_ty {
        return type_error(format!(
            "Mismatched types for {}: cannot combine {} with {}",
            op, left_ty, right_ty
        ));
    }
    match (left_value, right_value) {
        (Value::Bool(a), Value::Bool(b)) => Ok((Value::Bool(apply(a, b)), Type::Boolean, env)),
        _ => type_error(format!(
            "Cannot perform logical {} on non-boolean operands.",
            op.to_lowercase()
        )),
    }
}

#[derive(Clone, Copy)]
enum CmpOp {
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Ne,
}

impl CmpOp {
    fn symbol(self) -> &'static str {
        match self {
            CmpOp::Lt => "<",
            CmpOp::Lte => "<=",
            CmpOp::Gt => ">",
            CmpOp::Gte => ">=",
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
        }
    }

    /// All Units compare as equal, so against Unit operands each
    /// comparator collapses to a constant.
    fn on_unit(self) -> bool {
        matches!(self, CmpOp::Lte | CmpOp::Gte | CmpOp::Eq)
    }

    fn apply<T: PartialOrd + ?Sized>(self, a: &T, b: &T) -> bool {
        match self {
            CmpOp::Lt => a < b,
            CmpOp::Lte => a <= b,
            CmpOp::Gt => a > b,
            CmpOp::Gte => a >= b,
            CmpOp::Eq => a == b,
            CmpOp::Ne => a != b,
        }
    }
}

fn eval_comparison(op: CmpOp, left: &Expr, right: &Expr, env: &Env) -> Result<Evaluated> {
    let (left_value, left_ty, env) = evaluate(left, env)?;
    let (right_value, right_ty, env) = evaluate(right, &env)?;
    if left_ty != right_ty {
        return type_error(format!(
            "Mismatched types for {}: cannot compare {} and {}",
            op.symbol(),
            left_ty,
            right_ty
        ));
    }
    let outcome = match (&left_value, &right_value) {
        (Value::Int(a), Value::Int(b)) => op.apply(a, b),
        (Value::Float(a), Value::Float(b)) => op.apply(a, b),
        (Value::Str(a), Value::Str(b)) => op.apply(a.as_str(), b.as_str()),
        (Value::Bool(a), Value::Bool(b)) => op.apply(a, b),
        (Value::Unit, Value::Unit) => op.on_unit(),
        _ => {
            return type_error(format!(
                "Cannot perform {} on {} operands",
                op.symbol(),
                left_ty
            ))
        }
    };
    Ok((Value::Bool(outcome), Type::Boolean, env))
}

/// Integer division with floor semantics: the quotient rounds toward
/// negative infinity, so `-7 / 2` is `-4`, not `-3`. Wraps on
/// `i64::MIN / -1`, like the other integer operators.
fn floor_div(a: i64, b: i64) -> i64 {
    let q = a.wrapping_div(b);
    if a.wrapping_rem(b) != 0 && (a < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

/// Zero divisors of any type: integer 0, float 0.0, and boolean
/// false, which numerically equals zero.
fn is_zero(value: &Value) -> bool {
    match value {
        Value::Int(n) => *n == 0,
        Value::Float(x) => *x == 0.0,
        Value::Bool(b) => !*b,
        _ => false,
    }
}
