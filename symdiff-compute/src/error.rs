//! Errors that can occur while constructing expressions and functions.

use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;

/// An operand does not have the shape the constructor requires, such as an expression given
/// where a numeric literal is expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected {}, found `{}`", expected, found),
    labels = [format!("this must be {}", expected)],
    help = help.clone().unwrap_or_else(|| format!("replace it with a {}", "constant".fg(EXPR))),
)]
pub struct InvalidOperand {
    /// What the constructor expected in this position.
    pub expected: &'static str,

    /// The rendered operand that was given.
    pub found: String,

    /// A hint pointing at the constructor that accepts this operand, if there is one.
    pub help: Option<String>,
}

/// A function was defined with a name that is not an identifier.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid function name", name),
    labels = ["this name"],
    help = "function names must start with a letter or `_`, followed by letters, digits, or `_`",
)]
pub struct InvalidFunctionName {
    /// The name that was rejected.
    pub name: String,
}

/// The function is not part of the function library.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function does not exist", name),
    labels = ["this function"],
    help = if suggestions.is_empty() {
        "see the `funcs` module for a list of available functions".to_string()
    } else if suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UnknownFunction {
    /// The name that was looked up.
    pub name: String,

    /// A list of similarly named functions, if any.
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use crate::symbolic::{Expr, Function};
    use super::*;

    /// Renders the error's report and removes the color escape codes.
    fn render(err: &symdiff_error::Error) -> String {
        String::from_utf8(strip_ansi_escapes::strip(err.render("expr"))).unwrap()
    }

    /// Asserts that every snippet appears in the rendered report.
    fn assert_rendered(err: &symdiff_error::Error, snippets: &[&str]) {
        let rendered = render(err);
        for snippet in snippets {
            assert!(rendered.contains(snippet), "missing {snippet:?} in:\n{rendered}");
        }
    }

    #[test]
    fn invalid_operand_default_help() {
        let err = Expr::x().cos().as_literal().unwrap_err();
        assert_rendered(&err, &[
            "expected a numeric literal, found `cos(X)`",
            "this must be a numeric literal",
            "replace it with a constant",
        ]);
    }

    #[test]
    fn invalid_operand_custom_help() {
        let err = Expr::try_poly_pow(Expr::x(), Expr::x().sin()).unwrap_err();
        assert_rendered(&err, &[
            "expected a numeric literal exponent, found `sin(X)`",
            "(X ^ sin(X))",
            "use `Expr::pow` to raise an expression to a non-literal power",
        ]);
        assert!(!render(&err).contains("replace it with a constant"));
    }

    #[test]
    fn invalid_function_name() {
        let err = Function::define(Expr::x(), "2x").unwrap_err();
        assert_rendered(&err, &[
            "`2x` is not a valid function name",
            "this name",
            "function names must start with a letter or `_`",
        ]);
        assert_eq!(err.to_string(), "`2x` is not a valid function name");
    }

    #[test]
    fn empty_function_name() {
        let err = Function::define(Expr::x(), "").unwrap_err();
        assert_rendered(&err, &["`` is not a valid function name", "this name"]);
    }

    #[cfg(feature = "funcs")]
    mod lookup {
        use crate::funcs::lookup;
        use super::*;

        #[test]
        fn no_suggestions() {
            let err = lookup("arcsinh").unwrap_err();
            assert_rendered(&err, &[
                "the `arcsinh` function does not exist",
                "this function",
                "see the `funcs` module for a list of available functions",
            ]);
        }

        #[test]
        fn one_suggestion() {
            let err = lookup("lg10").unwrap_err();
            assert_rendered(&err, &["did you mean the `log10` function?"]);
        }

        #[test]
        fn several_suggestions() {
            let err = lookup("cec").unwrap_err();
            assert_rendered(&err, &["did you mean one of these functions? `cot`, `sec`, `csc`"]);
        }

        #[test]
        fn empty_name() {
            let err = lookup("").unwrap_err();
            assert_rendered(&err, &["the `` function does not exist"]);
            assert_eq!(err.to_string(), "the `` function does not exist");
        }
    }
}
