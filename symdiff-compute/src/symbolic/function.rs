//! Reusable analytic functions defined from template expressions.
//!
//! A [`Function`] is built once from a template expression in terms of `x`, and can then be
//! applied to any inner expression. Applying it yields an [`Expr::Named`] node that evaluates the
//! template at the inner expression and differentiates by the chain rule, reusing the template's
//! own derivative. No differentiation rule has to be written by hand for a new function.
//!
//! ```
//! use symdiff_compute::symbolic::{Expr, Function};
//!
//! let tan = Function::define(Expr::x().sin() / Expr::x().cos(), "tan").unwrap();
//! let expr = tan.apply(Expr::x() * 2.0.into());
//!
//! assert_eq!(expr.to_string(), "tan((X * 2))");
//! assert_eq!(expr.differentiate().evaluate(0.0), 2.0);
//! ```

use crate::error::InvalidFunctionName;
use crate::symbolic::Expr;
use log::debug;
use std::sync::Arc;
use symdiff_error::Error;

/// The name and template of a [`Function`].
#[derive(Debug, PartialEq)]
struct Definition {
    name: String,
    template: Expr,
}

/// A function of `x` defined from a template expression.
///
/// This is a cheap handle to shared, immutable data; cloning it does not clone the template.
#[derive(Debug, Clone)]
pub struct Function(Arc<Definition>);

/// Two functions are equal if they have the same name and strictly equal templates.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

/// Returns true if the given name can be used as a function name.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        },
        _ => false,
    }
}

impl Function {
    /// Defines a new function with the given template and name.
    ///
    /// Every [`Expr::Variable`] in the template stands for the argument of the function. Returns
    /// [`Err`] with [`InvalidFunctionName`] if the name is not an identifier.
    pub fn define(template: Expr, name: &str) -> Result<Self, Error> {
        if !is_identifier(name) {
            // quoted, so that an empty name still has a source and a span
            let span = 0..name.chars().count() + 2;
            return Err(Error::new(format!("`{}`", name), vec![span], InvalidFunctionName {
                name: name.to_string(),
            }));
        }

        debug!("defined function `{}` as {}", name, template);
        Ok(Self::new_unchecked(name, template))
    }

    /// Creates a function without checking its name. The name must be an identifier.
    #[cfg_attr(not(feature = "funcs"), allow(dead_code))]
    pub(crate) fn new_unchecked(name: &str, template: Expr) -> Self {
        Self(Arc::new(Definition { name: name.to_string(), template }))
    }

    /// Returns the name of the function.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the template the function was defined from.
    pub fn template(&self) -> &Expr {
        &self.0.template
    }

    /// Evaluates the function at the given value.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.0.template.evaluate(x)
    }

    /// Applies the function to the given inner expression.
    pub fn apply(&self, inner: Expr) -> Expr {
        Expr::Named(NamedComposite {
            function: self.clone(),
            inner: Box::new(inner),
        })
    }
}

/// A [`Function`] applied to an inner expression.
///
/// This is the data of an [`Expr::Named`] node, and is created with [`Function::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct NamedComposite {
    function: Function,
    inner: Box<Expr>,
}

impl std::fmt::Display for NamedComposite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.function.name(), self.inner)
    }
}

impl NamedComposite {
    /// Returns the applied function.
    pub fn function(&self) -> &Function {
        &self.function
    }

    /// Returns the inner expression the function is applied to.
    pub fn inner(&self) -> &Expr {
        &self.inner
    }

    /// Evaluates the template at the value of the inner expression.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.function.evaluate(self.inner.evaluate(x))
    }

    /// Returns the same function applied to a different inner expression.
    pub fn with_inner(&self, inner: Expr) -> Expr {
        self.function.apply(inner)
    }
}
