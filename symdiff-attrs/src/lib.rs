mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for unit structs and structs with named fields.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```ignore
/// use symdiff_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "expected a number", labels = ["this operand"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag       | Required | Description                                                           |
/// | --------- | -------- | --------------------------------------------------------------------- |
/// | `message` | yes      | Shown at the top of the report, and by `Display` on the error.        |
/// | `labels`  | yes      | An array of label texts, one per span of the error. `""` is unlabeled. |
/// | `help`    | no       | Help text describing what the user can do to fix the error.           |
///
/// Each tag accepts an expression. For structs with named fields, the expression is evaluated
/// with the members of the struct in scope, so they can be used in the expression.
///
/// The generated code refers to `ariadne` and `symdiff_error` by name, so the deriving crate must
/// depend on both.
///
/// [`ErrorKind`]: https://docs.rs/symdiff-error
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl symdiff_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
