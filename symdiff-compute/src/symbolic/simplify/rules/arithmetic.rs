//! Constant folding for arithmetic and powers.

use crate::symbolic::{
    simplify::{
        rules::{do_add, do_divide, do_multiply, do_poly_power, do_subtract},
        step::Step,
    },
    step_collector::StepCollector,
    Expr,
};

/// Applies `op` to both operands if both are constants.
fn fold(lhs: &Expr, rhs: &Expr, op: impl Fn(f64, f64) -> f64) -> Option<Expr> {
    Some(Expr::Constant(op(lhs.as_constant()?, rhs.as_constant()?)))
}

/// `2+3 = 5`
/// `2-3 = -1`
/// `2*3 = 6`
/// `3/2 = 1.5`
///
/// Division by a zero constant folds to `inf` or `NaN`, like evaluation does.
pub fn fold_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| fold(lhs, rhs, |a, b| a + b))
        .or_else(|| do_subtract(expr, |lhs, rhs| fold(lhs, rhs, |a, b| a - b)))
        .or_else(|| do_multiply(expr, |lhs, rhs| fold(lhs, rhs, |a, b| a * b)))
        .or_else(|| do_divide(expr, |lhs, rhs| fold(lhs, rhs, |a, b| a / b)))?;

    step_collector.push(Step::FoldConstants);
    Some(opt)
}

/// `2^3 = 8`, for both literal and general exponents.
pub fn fold_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_poly_power(expr, |base, exp| {
        base.as_constant().map(|k| Expr::Constant(k.powf(exp)))
    }).or_else(|| match expr {
        Expr::Pow(base, exp) => fold(base, exp, f64::powf),
        _ => None,
    })?;

    step_collector.push(Step::FoldPower);
    Some(opt)
}

/// Applies all constant folding rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_constants(expr, step_collector)
        .or_else(|| fold_power(expr, step_collector))
}
