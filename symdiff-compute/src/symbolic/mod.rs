//! Symbolic manipulation of single-variable expressions.
//!
//! # Expression representation
//!
//! Expressions are represented as a tree of [`Expr`] nodes over a single free variable `x`. Each
//! node kind knows how to evaluate itself at a value of `x`, how to differentiate itself, and how
//! to render itself as text. Building, differentiating and simplifying expressions never fails;
//! the only fallible operations are the ones that check their operands, such as
//! [`Expr::try_poly_pow`] and [`Function::define`].
//!
//! ```
//! use symdiff_compute::symbolic::Expr;
//!
//! // x * sin(x)
//! let expr = Expr::x() * Expr::x().sin();
//! assert_eq!(expr.to_string(), "(X * sin(X))");
//! assert_eq!(expr.evaluate(0.0), 0.0);
//! ```
//!
//! # Differentiation
//!
//! [`derivative()`] (or [`Expr::differentiate`]) builds the derivative of an expression with
//! respect to `x`, by applying the sum, product, quotient, power and chain rules structurally.
//! The result is correct but verbose, since every rule is applied literally.
//!
//! ```
//! use symdiff_compute::symbolic::Expr;
//!
//! let d = (Expr::x() * Expr::x()).differentiate();
//! assert_eq!(d.to_string(), "((1 * X) + (X * 1))");
//! assert_eq!(d.evaluate(3.0), 6.0);
//! ```
//!
//! # Simplification
//!
//! [`simplify()`] removes the noise left by differentiation: constant subexpressions are folded,
//! multiplications by zero are dropped, and identity elements are eliminated. It never changes
//! the value of the expression at any `x` where the original is finite.
//!
//! ```
//! use symdiff_compute::symbolic::{simplify, Expr};
//!
//! let d = (Expr::x() * Expr::x()).differentiate();
//! assert_eq!(simplify(&d).to_string(), "(X + X)");
//! ```
//!
//! # Named functions
//!
//! A [`Function`] gives a name to a template expression, and can be applied to any inner
//! expression. Its derivative is derived from the template, so new functions need no
//! differentiation rule of their own. A small library of such functions is provided by the
//! [`funcs`](crate::funcs) module when the `funcs` feature is enabled.

pub mod derivative;
pub mod expr;
pub mod function;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use expr::Expr;
pub use function::{Function, NamedComposite};
pub use simplify::{simplify, simplify_with_steps};
pub use step_collector::StepCollector;
