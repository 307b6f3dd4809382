//! Symbolic derivatives of the elementary functions and of composition. Each rule applies the
//! chain rule to its inner expression.

use crate::symbolic::Expr;

use super::derivative;

/// `(e^f)' = f' * e^f`
pub(super) fn exp_derivative(inner: &Expr) -> Expr {
    derivative(inner) * inner.clone().exp()
}

/// `ln(f)' = (1 / f) * f'`
pub(super) fn ln_derivative(inner: &Expr) -> Expr {
    (Expr::constant(1.0) / inner.clone()) * derivative(inner)
}

/// `sin(f)' = cos(f) * f'`
pub(super) fn sin_derivative(inner: &Expr) -> Expr {
    inner.clone().cos() * derivative(inner)
}

/// `cos(f)' = (-1 * sin(f)) * f'`
pub(super) fn cos_derivative(inner: &Expr) -> Expr {
    (Expr::constant(-1.0) * inner.clone().sin()) * derivative(inner)
}

/// `outer(inner)' = outer'(inner) * inner'`
///
/// Used for both [`Expr::Compose`] and [`Expr::Named`]. The derivative of the outer function is
/// computed on its own, in terms of `x`, and composed with the unchanged inner expression.
pub(super) fn chain_rule(outer: &Expr, inner: &Expr) -> Expr {
    derivative(outer).compose(inner.clone()) * derivative(inner)
}
