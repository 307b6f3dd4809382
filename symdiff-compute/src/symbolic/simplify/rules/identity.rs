//! Elimination of identity elements: adding zero, multiplying or dividing by one, and raising to
//! the power of zero or one.
//!
//! Each rule here gives the same value as the original expression, for any finite value of the
//! remaining operand.

use crate::symbolic::{
    simplify::{
        rules::{do_add, do_divide, do_multiply, do_poly_power, do_subtract},
        step::Step,
    },
    step_collector::StepCollector,
    Expr,
};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if lhs.is_constant(0.0) {
            Some(rhs.clone())
        } else if rhs.is_constant(0.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `a-0 = a`
pub fn subtract_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_subtract(expr, |lhs, rhs| {
        rhs.is_constant(0.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if lhs.is_constant(1.0) {
            Some(rhs.clone())
        } else if rhs.is_constant(1.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `a/1 = a`
pub fn divide_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_divide(expr, |lhs, rhs| {
        rhs.is_constant(1.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// `a^0 = 1`
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_poly_power(expr, |_, exp| {
        (exp == 0.0).then_some(Expr::Constant(1.0))
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_poly_power(expr, |base, exp| {
        (exp == 1.0).then(|| base.clone())
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// Applies all identity rules.
///
/// All identity rules will reduce the complexity of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(expr, step_collector)
        .or_else(|| subtract_zero(expr, step_collector))
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| divide_one(expr, step_collector))
        .or_else(|| power_zero(expr, step_collector))
        .or_else(|| power_one(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn keeps_non_identity() {
        let expr = Expr::x() * 2.0.into();
        assert_eq!(all(&expr, &mut ()), None);

        // `0 - a` is not an identity
        let expr = Expr::constant(0.0) - Expr::x();
        assert_eq!(all(&expr, &mut ()), None);
    }

    #[test]
    fn removes_identity() {
        let sin = Expr::x().sin();
        assert_eq!(all(&(Expr::constant(0.0) + sin.clone()), &mut ()), Some(sin.clone()));
        assert_eq!(all(&(sin.clone() - 0.0.into()), &mut ()), Some(sin.clone()));
        assert_eq!(all(&(sin.clone() * 1.0.into()), &mut ()), Some(sin.clone()));
        assert_eq!(all(&(sin.clone() / 1.0.into()), &mut ()), Some(sin.clone()));
        assert_eq!(all(&sin.clone().poly_pow(1.0), &mut ()), Some(sin.clone()));
        assert_eq!(all(&sin.poly_pow(0.0), &mut ()), Some(Expr::Constant(1.0)));
    }
}
