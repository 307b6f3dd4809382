use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::{Error, EXPR};

/// A literal was required, but something else was given.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a number",
    labels = ["this operand"],
    help = format!("write a {} here", "numeric literal".fg(EXPR)),
)]
struct ExpectedNumber;

/// An unknown name was used.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", name),
    labels = [format!("did you mean `{}`?", suggestion), String::new()],
)]
struct Undefined {
    name: String,
    suggestion: String,
}

fn strip(rendered: String) -> String {
    String::from_utf8(strip_ansi_escapes::strip(rendered)).unwrap()
}

#[test]
fn report_contains_message_and_label() {
    let err = Error::new("(X ^ X)", vec![5..6], ExpectedNumber);
    let rendered = strip(err.render("expr"));

    assert!(rendered.contains("expected a number"), "{rendered}");
    assert!(rendered.contains("this operand"), "{rendered}");
    assert!(rendered.contains("numeric literal"), "{rendered}");
    assert!(rendered.contains("(X ^ X)"), "{rendered}");
}

#[test]
fn fields_are_in_scope() {
    let err = Error::new(
        "tna",
        vec![0..3, 0..3],
        Undefined { name: "tna".to_string(), suggestion: "tan".to_string() },
    );
    let rendered = strip(err.render("lookup"));

    assert!(rendered.contains("`tna` is not defined"), "{rendered}");
    assert!(rendered.contains("did you mean `tan`?"), "{rendered}");
}

#[test]
fn downcast_to_kind() {
    let err = Error::new("X", vec![0..1], ExpectedNumber);
    assert_eq!(err.downcast_ref::<ExpectedNumber>(), Some(&ExpectedNumber));
    assert!(err.downcast_ref::<Undefined>().is_none());
}

#[test]
fn empty_source_renders() {
    let err = Error::new("", vec![0..0], ExpectedNumber);
    let rendered = strip(err.render("expr"));
    assert!(rendered.contains("expected a number"), "{rendered}");
}

#[test]
fn span_past_end_renders() {
    let err = Error::new("X", vec![0..4], ExpectedNumber);
    let rendered = strip(err.render("expr"));
    assert!(rendered.contains("this operand"), "{rendered}");
}

#[test]
fn display_is_message() {
    let err = Error::new(
        "tna",
        vec![0..3],
        Undefined { name: "tna".to_string(), suggestion: "tan".to_string() },
    );
    assert_eq!(err.to_string(), "`tna` is not defined");
    assert_eq!(Error::new("X", vec![0..1], ExpectedNumber).to_string(), "expected a number");
}
