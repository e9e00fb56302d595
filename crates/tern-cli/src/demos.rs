//! Demo programs, built as literal ASTs.
//!
//! Tern has no parser; these are the runnable examples the `tern`
//! binary ships with.

use tern_syntax::ast::Expr;

pub const NAMES: &[&str] = &["arithmetic", "countdown", "greeting", "order", "units"];

pub fn by_name(name: &str) -> Option<Expr> {
    match name {
        "arithmetic" => Some(arithmetic()),
        "countdown" => Some(countdown()),
        "greeting" => Some(greeting()),
        "order" => Some(order()),
        "units" => Some(units()),
        _ => None,
    }
}

/// Integer division floors, float division is exact.
fn arithmetic() -> Expr {
    Expr::program(vec![
        Expr::print(Expr::divide(Expr::int(7), Expr::int(2))),
        Expr::print(Expr::divide(Expr::float(7.0), Expr::float(2.0))),
        Expr::print(Expr::if_(
            Expr::lt(Expr::int(3), Expr::int(5)),
            Expr::string("3 is less than 5"),
            Expr::string("unreachable"),
        )),
    ])
}

/// i := 3; while i > 0 { print i; i := i - 1 }; print "liftoff"
fn countdown() -> Expr {
    Expr::program(vec![
        Expr::assign("i", Expr::int(3)),
        Expr::while_(
            Expr::gt(Expr::variable("i"), Expr::int(0)),
            Expr::sequence(vec![
                Expr::print(Expr::variable("i")),
                Expr::assign("i", Expr::subtract(Expr::variable("i"), Expr::int(1))),
            ]),
        ),
        Expr::print(Expr::string("liftoff")),
    ])
}

fn greeting() -> Expr {
    Expr::program(vec![
        Expr::assign("who", Expr::string("world")),
        Expr::print(Expr::add(Expr::string("hello, "), Expr::variable("who"))),
    ])
}

/// A Unit value prints as the literal word "Unit", and all Units
/// compare as equal.
fn units() -> Expr {
    Expr::program(vec![
        Expr::print(Expr::unit()),
        Expr::print(Expr::eq(Expr::unit(), Expr::unit())),
        Expr::print(Expr::lt(Expr::unit(), Expr::unit())),
    ])
}

/// Operands evaluate left to right: prints 1, then 2, then their sum.
fn order() -> Expr {
    Expr::program(vec![Expr::print(Expr::add(
        Expr::print(Expr::int(1)),
        Expr::print(Expr::int(2)),
    ))])
}
