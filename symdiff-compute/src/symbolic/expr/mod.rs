//! A representation of single-variable mathematical expressions as a tree of nodes.
//!
//! Every expression is built from the free variable `x` ([`Expr::Variable`]), numeric literals
//! ([`Expr::Constant`]), and a closed set of operations over them. Each non-leaf node owns its
//! operands, so an expression is always a tree: two parents never share the same operand. The
//! only data shared between trees is the template of a [`Function`], which is never rewritten.
//!
//! [`Function`]: crate::symbolic::Function
//!
//! Expressions are immutable values. [`Expr::differentiate`] and [`Expr::simplify`] borrow the
//! receiver and build a new tree, so the same expression can be reused as a sub-expression of
//! any number of other expressions.
//!
//! ```
//! use symdiff_compute::symbolic::Expr;
//!
//! // 3x^2 + 2x + 1
//! let expr = Expr::constant(3.0) * Expr::x().poly_pow(2.0) + Expr::constant(2.0) * Expr::x() + 1.0.into();
//! assert_eq!(expr.evaluate(2.0), 17.0);
//! assert_eq!(expr.differentiate().evaluate(2.0), 14.0);
//! ```
//!
//! # Formatting
//!
//! The [`Display`](std::fmt::Display) implementation renders a fully parenthesized infix form,
//! such as `((3 * (X ^ 2)) + 1)`. It is deterministic, but it is not meant to be parsed back.
//!
//! # Floating-point values
//!
//! Evaluation follows IEEE 754 semantics. Dividing by zero, taking the logarithm of a
//! non-positive number, or raising a negative base to a non-integer power produces `inf` or
//! `NaN`, which propagates through the rest of the evaluation as a value.

mod iter;

use crate::error::InvalidOperand;
use crate::symbolic::{derivative, function::NamedComposite, simplify};
use iter::ExprIter;
use symdiff_error::Error;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A single-variable expression.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// The free variable `x`.
    Variable,

    /// A numeric literal, such as `2` or `0.5`.
    Constant(f64),

    /// `lhs + rhs`
    Add(Box<Expr>, Box<Expr>),

    /// `lhs - rhs`
    Sub(Box<Expr>, Box<Expr>),

    /// `lhs * rhs`
    Mul(Box<Expr>, Box<Expr>),

    /// `lhs / rhs`
    Div(Box<Expr>, Box<Expr>),

    /// An expression raised to a literal power, `base ^ exponent`.
    PolyPow(Box<Expr>, f64),

    /// An expression raised to the power of another expression, `f(x) ^ g(x)`.
    Pow(Box<Expr>, Box<Expr>),

    /// `e ^ inner`
    Exp(Box<Expr>),

    /// The natural logarithm, `ln(inner)`.
    Ln(Box<Expr>),

    /// `sin(inner)`
    Sin(Box<Expr>),

    /// `cos(inner)`
    Cos(Box<Expr>),

    /// Function composition, `outer(inner(x))`. The outer expression is a function of `x`, which
    /// is substituted with the inner expression.
    Compose(Box<Expr>, Box<Expr>),

    /// A [`Function`](crate::symbolic::Function) defined from a template, applied to an inner
    /// expression.
    Named(NamedComposite),
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable => write!(f, "X"),
            Self::Constant(k) => write!(f, "{}", k),
            Self::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Self::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Self::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Self::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Self::PolyPow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Self::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Self::Exp(inner) => write!(f, "exp({})", inner),
            Self::Ln(inner) => write!(f, "ln({})", inner),
            Self::Sin(inner) => write!(f, "sin({})", inner),
            Self::Cos(inner) => write!(f, "cos({})", inner),
            Self::Compose(outer, inner) => write!(f, "compose({}, {})", outer, inner),
            Self::Named(named) => write!(f, "{}", named),
        }
    }
}

impl Expr {
    /// Returns the free variable `x`.
    pub fn x() -> Self {
        Self::Variable
    }

    /// Returns a numeric literal.
    pub fn constant(k: f64) -> Self {
        Self::Constant(k)
    }

    /// Raises this expression to a literal power.
    pub fn poly_pow(self, exponent: f64) -> Self {
        Self::PolyPow(Box::new(self), exponent)
    }

    /// Raises `base` to the power of `exponent`, which must be a [`Expr::Constant`].
    ///
    /// Returns [`Err`] with [`InvalidOperand`] if the exponent is any other expression. Use
    /// [`Expr::pow`] for exponents that depend on `x`.
    pub fn try_poly_pow(base: Expr, exponent: Expr) -> Result<Self, Error> {
        match exponent {
            Self::Constant(k) => Ok(base.poly_pow(k)),
            exponent => {
                // point the error at the exponent of the node that would have been built
                let lhs = format!("({} ^ ", base);
                let found = exponent.to_string();
                let source = format!("{}{})", lhs, found);
                let span = lhs.len()..lhs.len() + found.len();
                Err(Error::new(source, vec![span], InvalidOperand {
                    expected: "a numeric literal exponent",
                    found,
                    help: Some("use `Expr::pow` to raise an expression to a non-literal power".to_string()),
                }))
            },
        }
    }

    /// Raises this expression to the power of another expression.
    pub fn pow(self, exponent: Expr) -> Self {
        Self::Pow(Box::new(self), Box::new(exponent))
    }

    /// Returns `e` raised to the power of this expression.
    pub fn exp(self) -> Self {
        Self::Exp(Box::new(self))
    }

    /// Returns the natural logarithm of this expression.
    pub fn ln(self) -> Self {
        Self::Ln(Box::new(self))
    }

    /// Returns the sine of this expression.
    pub fn sin(self) -> Self {
        Self::Sin(Box::new(self))
    }

    /// Returns the cosine of this expression.
    pub fn cos(self) -> Self {
        Self::Cos(Box::new(self))
    }

    /// Substitutes `inner` for `x` in this expression, without rewriting the tree.
    pub fn compose(self, inner: Expr) -> Self {
        Self::Compose(Box::new(self), Box::new(inner))
    }

    /// If the expression is a [`Expr::Constant`], returns the contained number.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(k) => Some(*k),
            _ => None,
        }
    }

    /// Returns true if the expression is the given constant.
    pub fn is_constant(&self, k: f64) -> bool {
        self.as_constant() == Some(k)
    }

    /// Returns the contained number if the expression is a [`Expr::Constant`], or
    /// [`InvalidOperand`] otherwise.
    pub fn as_literal(&self) -> Result<f64, Error> {
        self.as_constant().ok_or_else(|| {
            let found = self.to_string();
            Error::new(found.clone(), vec![0..found.len()], InvalidOperand {
                expected: "a numeric literal",
                found,
                help: None,
            })
        })
    }

    /// Evaluates the expression with `x` set to the given value.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Variable => x,
            Self::Constant(k) => *k,
            Self::Add(lhs, rhs) => lhs.evaluate(x) + rhs.evaluate(x),
            Self::Sub(lhs, rhs) => lhs.evaluate(x) - rhs.evaluate(x),
            Self::Mul(lhs, rhs) => lhs.evaluate(x) * rhs.evaluate(x),
            Self::Div(lhs, rhs) => lhs.evaluate(x) / rhs.evaluate(x),
            Self::PolyPow(base, exp) => base.evaluate(x).powf(*exp),
            Self::Pow(base, exp) => base.evaluate(x).powf(exp.evaluate(x)),
            Self::Exp(inner) => inner.evaluate(x).exp(),
            Self::Ln(inner) => inner.evaluate(x).ln(),
            Self::Sin(inner) => inner.evaluate(x).sin(),
            Self::Cos(inner) => inner.evaluate(x).cos(),
            Self::Compose(outer, inner) => outer.evaluate(inner.evaluate(x)),
            Self::Named(named) => named.evaluate(x),
        }
    }

    /// Returns the symbolic derivative of this expression with respect to `x`.
    ///
    /// See [`derivative`](crate::symbolic::derivative()) for the rules that are applied.
    pub fn differentiate(&self) -> Self {
        derivative(self)
    }

    /// Returns a simplified copy of this expression.
    ///
    /// See [`simplify`](crate::symbolic::simplify()) for the rules that are applied.
    pub fn simplify(&self) -> Self {
        simplify(self)
    }

    /// Returns the operands of this node, in left-to-right order.
    ///
    /// The template of a [`Expr::Named`] node is a function definition, not an operand, and is
    /// not returned.
    pub fn operands(&self) -> (Option<&Expr>, Option<&Expr>) {
        match self {
            Self::Variable | Self::Constant(_) => (None, None),
            Self::Add(lhs, rhs)
                | Self::Sub(lhs, rhs)
                | Self::Mul(lhs, rhs)
                | Self::Div(lhs, rhs)
                | Self::Pow(lhs, rhs)
                | Self::Compose(lhs, rhs) => (Some(&**lhs), Some(&**rhs)),
            Self::PolyPow(inner, _)
                | Self::Exp(inner)
                | Self::Ln(inner)
                | Self::Sin(inner)
                | Self::Cos(inner) => (Some(&**inner), None),
            Self::Named(named) => (Some(named.inner()), None),
        }
    }

    /// Returns the number of nodes in the expression tree.
    ///
    /// The simplifier never returns an expression with a higher complexity than its input.
    pub fn complexity(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }
}

impl From<f64> for Expr {
    fn from(k: f64) -> Self {
        Self::Constant(k)
    }
}

/// Builds an [`Expr::Add`] node. No simplification is done.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Add(Box::new(self), Box::new(rhs))
    }
}

/// Builds an [`Expr::Sub`] node. No simplification is done.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Sub(Box::new(self), Box::new(rhs))
    }
}

/// Builds an [`Expr::Mul`] node. No simplification is done.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::Mul(Box::new(self), Box::new(rhs))
    }
}

/// Builds an [`Expr::Div`] node. No simplification is done.
impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::Div(Box::new(self), Box::new(rhs))
    }
}

/// Multiplies this expression by -1. No simplification is done, except for the case where the
/// expression is a [`Expr::Constant`], in which case the number is negated.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Constant(k) => Self::Constant(-k),
            expr => Self::Constant(-1.0) * expr,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use crate::error::InvalidOperand;
    use super::*;

    #[test]
    fn evaluate_arithmetic() {
        // (x + 1) * (x - 3) / 2
        let expr = (Expr::x() + 1.0.into()) * (Expr::x() - 3.0.into()) / 2.0.into();
        assert_eq!(expr.evaluate(5.0), 6.0);
        assert_eq!(expr.evaluate(-1.0), 0.0);
    }

    #[test]
    fn evaluate_functions() {
        assert_abs_diff_eq!(Expr::x().exp().evaluate(1.0), std::f64::consts::E, epsilon = 1e-12);
        assert_abs_diff_eq!(Expr::x().ln().evaluate(std::f64::consts::E), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Expr::x().sin().evaluate(std::f64::consts::FRAC_PI_2), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Expr::x().cos().evaluate(std::f64::consts::PI), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn evaluate_powers() {
        assert_eq!(Expr::x().poly_pow(3.0).evaluate(2.0), 8.0);
        assert_eq!(Expr::x().poly_pow(2.0).evaluate(-3.0), 9.0);
        assert_abs_diff_eq!(Expr::x().pow(Expr::x()).evaluate(3.0), 27.0, epsilon = 1e-12);
        assert!(Expr::x().poly_pow(0.5).evaluate(-4.0).is_nan());
    }

    #[test]
    fn evaluate_compose() {
        // sin(x) evaluated at x^2
        let expr = Expr::x().sin().compose(Expr::x().poly_pow(2.0));
        assert_abs_diff_eq!(expr.evaluate(3.0), 9f64.sin(), epsilon = 1e-12);
    }

    #[test]
    fn non_finite_values_propagate() {
        let recip = Expr::constant(1.0) / Expr::x();
        assert_eq!(recip.evaluate(0.0), f64::INFINITY);
        assert_eq!(recip.evaluate(-0.0), f64::NEG_INFINITY);
        assert!((Expr::x() / Expr::x()).evaluate(0.0).is_nan());
        assert!(Expr::x().ln().evaluate(-1.0).is_nan());
        assert_eq!(Expr::x().ln().evaluate(0.0), f64::NEG_INFINITY);
        assert!((Expr::x().ln() + 1.0.into()).evaluate(-1.0).is_nan());
    }

    #[test]
    fn fmt_expr() {
        let expr = Expr::constant(3.0) * Expr::x().poly_pow(2.0) + Expr::constant(0.5);
        assert_eq!(expr.to_string(), "((3 * (X ^ 2)) + 0.5)");
    }

    #[test]
    fn fmt_expr_2() {
        let expr = (Expr::x().sin() - Expr::x().cos().exp()).pow(Expr::x().ln())
            .compose(Expr::x() / 2.0.into());
        assert_eq!(expr.to_string(), "compose(((sin(X) - exp(cos(X))) ^ ln(X)), (X / 2))");
    }

    #[test]
    fn neg_expr() {
        assert_eq!(-Expr::constant(2.0), Expr::constant(-2.0));
        assert_eq!((-Expr::x()).to_string(), "(-1 * X)");
    }

    #[test]
    fn try_poly_pow_literal() {
        let expr = Expr::try_poly_pow(Expr::x(), Expr::constant(3.0)).unwrap();
        assert_eq!(expr, Expr::x().poly_pow(3.0));
    }

    #[test]
    fn try_poly_pow_expression() {
        let err = Expr::try_poly_pow(Expr::x().sin(), Expr::x() + 1.0.into()).unwrap_err();
        assert_eq!(err.source, "(sin(X) ^ (X + 1))");
        assert_eq!(&err.source[err.spans[0].clone()], "(X + 1)");

        let kind = err.downcast_ref::<InvalidOperand>().unwrap();
        assert_eq!(kind.found, "(X + 1)");
    }

    #[test]
    fn as_literal() {
        assert_eq!(Expr::constant(4.0).as_literal().unwrap(), 4.0);

        let err = Expr::x().cos().as_literal().unwrap_err();
        assert!(err.downcast_ref::<InvalidOperand>().is_some());
        assert_eq!(err.spans, vec![0..6]);
    }

    #[test]
    fn complexity() {
        assert_eq!(Expr::x().complexity(), 1);
        assert_eq!((Expr::x() * Expr::x()).complexity(), 3);
        assert_eq!(Expr::x().poly_pow(2.0).sin().complexity(), 3);
    }
}
