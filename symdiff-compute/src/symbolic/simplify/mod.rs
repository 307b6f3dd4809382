//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into an
//! equivalent expression with fewer nodes. It is mostly useful after differentiation, since the
//! derivative rules introduce many multiplications by zero and one.
//!
//! Simplification is a single bottom-up pass. The operands of each node are simplified first,
//! then the rules in [`rules`] are tried on the rebuilt node; the first rule that applies
//! replaces it. Every rule produces either a constant or one of the (already simplified)
//! operands, so the result of [`simplify`] is a fixed point: simplifying it again returns the
//! same expression.
//!
//! The one exception to bottom-up order is multiplication by zero, which is checked before the
//! operands are simplified so that the other operand is discarded without being visited.

pub mod rules;
pub mod step;

use crate::symbolic::{step_collector::StepCollector, Expr};
use log::trace;
use step::Step;

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    // `0 * a` does not need `a` to be simplified
    if let Some(zero) = rules::multiply::multiply_zero(expr, step_collector) {
        trace!("simplified {} to {}", expr, zero);
        return zero;
    }

    let mut recurse = |expr: &Expr| Box::new(inner_simplify(expr, step_collector));
    let rebuilt = match expr {
        Expr::Variable | Expr::Constant(_) => return expr.clone(),
        Expr::Add(lhs, rhs) => {
            let lhs = recurse(lhs);
            Expr::Add(lhs, recurse(rhs))
        },
        Expr::Sub(lhs, rhs) => {
            let lhs = recurse(lhs);
            Expr::Sub(lhs, recurse(rhs))
        },
        Expr::Mul(lhs, rhs) => {
            let lhs = recurse(lhs);
            Expr::Mul(lhs, recurse(rhs))
        },
        Expr::Div(lhs, rhs) => {
            let lhs = recurse(lhs);
            Expr::Div(lhs, recurse(rhs))
        },
        Expr::PolyPow(base, exp) => Expr::PolyPow(recurse(base), *exp),
        Expr::Pow(base, exp) => {
            let base = recurse(base);
            Expr::Pow(base, recurse(exp))
        },
        Expr::Exp(inner) => Expr::Exp(recurse(inner)),
        Expr::Ln(inner) => Expr::Ln(recurse(inner)),
        Expr::Sin(inner) => Expr::Sin(recurse(inner)),
        Expr::Cos(inner) => Expr::Cos(recurse(inner)),
        Expr::Compose(outer, inner) => {
            let outer = recurse(outer);
            Expr::Compose(outer, recurse(inner))
        },
        Expr::Named(named) => named.with_inner(*recurse(named.inner())),
    };

    match rules::all(&rebuilt, step_collector) {
        Some(simplified) => {
            trace!("simplified {} to {}", rebuilt, simplified);
            simplified
        },
        None => rebuilt,
    }
}

/// Simplify the given expression.
///
/// The given expression is not modified; a new expression is returned. Constants are folded,
/// multiplications by zero are removed, and identity elements (`a + 0`, `a * 1`, `a / 1`, `a^1`,
/// `a^0`) are eliminated. Applying [`simplify`] to its own output returns the same expression.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify(expr, &mut ())
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned, in the order they were applied. This is useful for debugging, and also for
/// displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, &mut steps);
    (expr, steps)
}
