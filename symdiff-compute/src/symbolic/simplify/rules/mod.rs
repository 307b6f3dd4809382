//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules assume that the operands of the expression have already been
//! simplified, and only look at the node itself.

pub mod arithmetic;
pub mod function;
pub mod identity;
pub mod multiply;

use crate::symbolic::{simplify::step::Step, step_collector::StepCollector, Expr};

/// If the expression is an add expression, calls the given transformation function with the
/// left and right-hand-side of the addition.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_add(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Add(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a subtraction expression, calls the given transformation function with
/// the left and right-hand-side of the subtraction.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_subtract(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Sub(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a multiplication expression, calls the given transformation function
/// with the left and right-hand-side of the multiplication.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_multiply(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Mul(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a division expression, calls the given transformation function with the
/// numerator and denominator.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_divide(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Div(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a power with a literal exponent, calls the given transformation function
/// with the base and the exponent.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_poly_power(expr: &Expr, f: impl Fn(&Expr, f64) -> Option<Expr>) -> Option<Expr> {
    if let Expr::PolyPow(base, exp) = expr {
        f(base, *exp)
    } else {
        None
    }
}

/// Applies all rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply::all(expr, step_collector)
        .or_else(|| arithmetic::all(expr, step_collector))
        .or_else(|| function::all(expr, step_collector))
        .or_else(|| identity::all(expr, step_collector))
}
