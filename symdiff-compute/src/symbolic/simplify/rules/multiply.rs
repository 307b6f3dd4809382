//! Simplification rules for expressions involving multiplication by zero.

use crate::symbolic::{
    simplify::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
    Expr,
};

/// `0*a = 0`
/// `a*0 = 0`
///
/// The other operand is discarded without being inspected, even if it would evaluate to `inf` or
/// `NaN`.
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if lhs.is_constant(0.0) || rhs.is_constant(0.0) {
            Some(Expr::Constant(0.0))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(expr, step_collector)
}
