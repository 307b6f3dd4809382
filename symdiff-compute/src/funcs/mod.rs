//! A library of named functions built from the elementary node kinds.
//!
//! Each function is a [`Function`] defined from a template expression in `x`, initialised on
//! first use. Since a [`Function`] differentiates by the chain rule through its template, none of
//! these functions needs a differentiation rule of its own.
//!
//! | Name      | Template           |
//! |-----------|--------------------|
//! | `tan`     | `sin(x) / cos(x)`  |
//! | `cot`     | `cos(x) / sin(x)`  |
//! | `sec`     | `1 / cos(x)`       |
//! | `csc`     | `1 / sin(x)`       |
//! | `log10`   | `ln(x) / ln(10)`   |
//! | `inverse` | `1 / x`            |
//! | `square`  | `x * x`            |
//!
//! # Example
//!
//! ```
//! use symdiff_compute::funcs::{self, SEC};
//! use symdiff_compute::symbolic::Expr;
//!
//! // d/dx sec(x) = sec(x) tan(x), which is 0 at x = 0
//! let d = SEC.apply(Expr::x()).differentiate();
//! assert_eq!(d.evaluate(0.0), 0.0);
//!
//! // functions can also be looked up by name
//! let tan = funcs::lookup("tan").unwrap();
//! assert_eq!(tan.apply(Expr::x()).to_string(), "tan(X)");
//! ```

use crate::error::UnknownFunction;
use crate::symbolic::{Expr, Function};
use levenshtein::levenshtein;
use log::debug;
use once_cell::sync::Lazy;
use symdiff_error::Error;

/// The tangent function, `sin(x) / cos(x)`.
pub static TAN: Lazy<Function> = Lazy::new(|| {
    Function::new_unchecked("tan", Expr::x().sin() / Expr::x().cos())
});

/// The cotangent function, `cos(x) / sin(x)`.
pub static COT: Lazy<Function> = Lazy::new(|| {
    Function::new_unchecked("cot", Expr::x().cos() / Expr::x().sin())
});

/// The secant function, `1 / cos(x)`.
pub static SEC: Lazy<Function> = Lazy::new(|| {
    Function::new_unchecked("sec", Expr::constant(1.0) / Expr::x().cos())
});

/// The cosecant function, `1 / sin(x)`.
pub static CSC: Lazy<Function> = Lazy::new(|| {
    Function::new_unchecked("csc", Expr::constant(1.0) / Expr::x().sin())
});

/// The base 10 logarithm, `ln(x) / ln(10)`.
pub static LOG10: Lazy<Function> = Lazy::new(|| {
    Function::new_unchecked("log10", Expr::x().ln() / Expr::constant(10.0).ln())
});

/// The multiplicative inverse, `1 / x`.
pub static INVERSE: Lazy<Function> = Lazy::new(|| {
    Function::new_unchecked("inverse", Expr::constant(1.0) / Expr::x())
});

/// The square, `x * x`.
pub static SQUARE: Lazy<Function> = Lazy::new(|| {
    Function::new_unchecked("square", Expr::x() * Expr::x())
});

/// Returns every function in the library.
pub fn all() -> Vec<Function> {
    [&TAN, &COT, &SEC, &CSC, &LOG10, &INVERSE, &SQUARE]
        .into_iter()
        .map(|f| Function::clone(f))
        .collect()
}

/// Returns the library function with the given name.
///
/// Returns [`Err`] with [`UnknownFunction`] if there is no such function. The error suggests the
/// library functions whose names are within an edit distance of 2 from the given name.
pub fn lookup(name: &str) -> Result<Function, Error> {
    let funcs = all();
    if let Some(f) = funcs.iter().find(|f| f.name() == name) {
        return Ok(f.clone());
    }

    let suggestions = funcs.iter()
        .map(Function::name)
        .filter(|n| levenshtein(n, name) <= 2)
        .map(str::to_string)
        .collect::<Vec<_>>();
    debug!("unknown function `{}`, suggesting {:?}", name, suggestions);

    let span = 0..name.chars().count() + 2;
    Err(Error::new(format!("`{}`", name), vec![span], UnknownFunction {
        name: name.to_string(),
        suggestions,
    }))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use pretty_assertions::assert_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};
    use super::*;

    /// Differentiates `f(x)` and evaluates the derivative at `x`.
    fn slope(f: &Function, x: f64) -> f64 {
        f.apply(Expr::x()).differentiate().evaluate(x)
    }

    #[test]
    fn tan() {
        assert_float_relative_eq!(slope(&TAN, 0.0), 1.0);
        assert_float_relative_eq!(slope(&TAN, FRAC_PI_4), 2.0, 1e-12);
    }

    #[test]
    fn cot() {
        assert_float_relative_eq!(slope(&COT, FRAC_PI_4), -2.0, 1e-12);
        assert_abs_diff_eq!(slope(&COT, FRAC_PI_2), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn sec() {
        assert_abs_diff_eq!(slope(&SEC, 0.0), 0.0, epsilon = 1e-12);
        assert_float_relative_eq!(slope(&SEC, FRAC_PI_4), SQRT_2, 1e-12);
    }

    #[test]
    fn csc() {
        assert_abs_diff_eq!(slope(&CSC, FRAC_PI_2), 0.0, epsilon = 1e-12);
        assert_float_relative_eq!(slope(&CSC, FRAC_PI_4), -SQRT_2, 1e-12);
    }

    #[test]
    fn log10() {
        assert_float_relative_eq!(LOG10.evaluate(1000.0), 3.0, 1e-12);
        assert_float_relative_eq!(slope(&LOG10, 2.0), 1.0 / (2.0 * 10f64.ln()), 1e-12);
    }

    #[test]
    fn inverse() {
        assert_eq!(INVERSE.evaluate(4.0), 0.25);
        assert_eq!(slope(&INVERSE, 2.0), -0.25);
    }

    #[test]
    fn square_in_compound_expression() {
        // d/dx(3 * square(x) + 2x + 1) = 6x + 2
        let expr = Expr::constant(3.0) * SQUARE.apply(Expr::x())
            + Expr::constant(2.0) * Expr::x()
            + Expr::constant(1.0);
        let d = expr.differentiate();
        assert_eq!(d.evaluate(1.0), 8.0);
        assert_eq!(d.evaluate(2.0), 14.0);
        assert_eq!(expr.to_string(), "(((3 * square(X)) + (2 * X)) + 1)");
    }

    #[test]
    fn nested_library_functions() {
        // d/dx tan(square(x)) = 2x sec^2(x^2)
        let expr = TAN.apply(SQUARE.apply(Expr::x()));
        let d = expr.differentiate();
        for x in [0.0f64, 0.3, 0.8] {
            let sec = 1.0 / (x * x).cos();
            assert_abs_diff_eq!(d.evaluate(x), 2.0 * x * sec * sec, epsilon = 1e-12);
        }
    }

    #[test]
    fn all_functions() {
        let names = all().iter().map(|f| f.name().to_string()).collect::<Vec<_>>();
        assert_eq!(names, vec!["tan", "cot", "sec", "csc", "log10", "inverse", "square"]);
    }

    #[test]
    fn lookup_existing() {
        let tan = lookup("tan").unwrap();
        assert_eq!(tan, *TAN);
        assert_eq!(tan.template().to_string(), "(sin(X) / cos(X))");
    }

    #[test]
    fn lookup_suggestions() {
        let err = lookup("lg10").unwrap_err();
        let kind = err.downcast_ref::<UnknownFunction>().unwrap();
        assert_eq!(kind.suggestions, vec!["log10".to_string()]);

        let err = lookup("cec").unwrap_err();
        let kind = err.downcast_ref::<UnknownFunction>().unwrap();
        assert_eq!(kind.suggestions, vec!["cot".to_string(), "sec".to_string(), "csc".to_string()]);
        assert_eq!(err.source, "`cec`");
        assert_eq!(err.spans, vec![0..5]);

        let err = lookup("arcsinh").unwrap_err();
        let kind = err.downcast_ref::<UnknownFunction>().unwrap();
        assert_eq!(kind.name, "arcsinh");
        assert!(kind.suggestions.is_empty());
    }
}
