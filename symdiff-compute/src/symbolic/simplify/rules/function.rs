//! Simplification rules for functions applied to constants.

use crate::symbolic::{simplify::step::Step, step_collector::StepCollector, Expr};

/// Evaluates `exp`, `ln`, `sin` and `cos` of a constant.
///
/// `exp(0) = 1`
/// `ln(1) = 0`
/// `sin(0) = 0`
/// `cos(0) = 1`
pub fn fold_elementary(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (value, step) = match expr {
        Expr::Exp(inner) => (inner.as_constant()?.exp(), Step::FoldExp),
        Expr::Ln(inner) => (inner.as_constant()?.ln(), Step::FoldLn),
        Expr::Sin(inner) => (inner.as_constant()?.sin(), Step::FoldSin),
        Expr::Cos(inner) => (inner.as_constant()?.cos(), Step::FoldCos),
        _ => return None,
    };

    step_collector.push(step);
    Some(Expr::Constant(value))
}

/// Evaluates a composition or a named function whose inner expression is a constant.
///
/// `compose(X * X, 3) = 9`
/// `tan(0) = 0`
pub fn fold_composite(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let value = match expr {
        Expr::Compose(outer, inner) => outer.evaluate(inner.as_constant()?),
        Expr::Named(named) => named.function().evaluate(named.inner().as_constant()?),
        _ => return None,
    };

    step_collector.push(Step::FoldComposite);
    Some(Expr::Constant(value))
}

/// Applies all function rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_elementary(expr, step_collector)
        .or_else(|| fold_composite(expr, step_collector))
}
