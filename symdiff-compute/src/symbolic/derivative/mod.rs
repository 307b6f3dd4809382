//! Symbolic differentiation of expressions with respect to `x`.
//!
//! The derivative is built structurally: each node kind has exactly one rule, and the rule is
//! applied recursively to the operands. No simplification is done while differentiating, so the
//! resulting trees can be large; pass them through [`simplify`](crate::symbolic::simplify())
//! to fold the constants that the rules introduce.

mod function;

use crate::symbolic::Expr;

/// `(f + g)' = f' + g'`
fn sum_rule(lhs: &Expr, rhs: &Expr) -> Expr {
    derivative(lhs) + derivative(rhs)
}

/// `(f - g)' = f' - g'`
fn difference_rule(lhs: &Expr, rhs: &Expr) -> Expr {
    derivative(lhs) - derivative(rhs)
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(lhs: &Expr, rhs: &Expr) -> Expr {
    derivative(lhs) * rhs.clone() + lhs.clone() * derivative(rhs)
}

/// `(f / g)' = (f' * g - f * g') / g^2`
fn quotient_rule(lhs: &Expr, rhs: &Expr) -> Expr {
    (derivative(lhs) * rhs.clone() - lhs.clone() * derivative(rhs)) / rhs.clone().poly_pow(2.0)
}

/// `(f^n)' = n * (f' * f^(n - 1))`, where `n` is a literal.
fn power_rule(base: &Expr, exponent: f64) -> Expr {
    Expr::constant(exponent) * (derivative(base) * base.clone().poly_pow(exponent - 1.0))
}

/// `(f^g)' = f^(g - 1) * (g * f' + f * ln(f) * g')`
///
/// This is the logarithmic derivative of `f^g`, and is only valid where `f > 0`.
fn general_power_rule(base: &Expr, exponent: &Expr) -> Expr {
    let exponent_minus_one = exponent.clone() - Expr::constant(1.0);
    base.clone().pow(exponent_minus_one)
        * (exponent.clone() * derivative(base)
            + (base.clone() * base.clone().ln()) * derivative(exponent))
}

/// Computes the derivative of the given expression with respect to `x`.
///
/// The result is a new tree; the given expression is not modified. For all `x` where both the
/// expression and its derivative are defined, evaluating the result at `x` gives the derivative
/// of the expression at `x`, up to floating-point error.
pub fn derivative(f: &Expr) -> Expr {
    match f {
        Expr::Variable => Expr::Constant(1.0),
        Expr::Constant(_) => Expr::Constant(0.0),
        Expr::Add(lhs, rhs) => sum_rule(lhs, rhs),
        Expr::Sub(lhs, rhs) => difference_rule(lhs, rhs),
        Expr::Mul(lhs, rhs) => product_rule(lhs, rhs),
        Expr::Div(lhs, rhs) => quotient_rule(lhs, rhs),
        Expr::PolyPow(base, exponent) => power_rule(base, *exponent),
        Expr::Pow(base, exponent) => general_power_rule(base, exponent),
        Expr::Exp(inner) => function::exp_derivative(inner),
        Expr::Ln(inner) => function::ln_derivative(inner),
        Expr::Sin(inner) => function::sin_derivative(inner),
        Expr::Cos(inner) => function::cos_derivative(inner),
        Expr::Compose(outer, inner) => function::chain_rule(outer, inner),
        Expr::Named(named) => function::chain_rule(named.function().template(), named.inner()),
    }
}
