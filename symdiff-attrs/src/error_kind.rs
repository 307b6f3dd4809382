use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// A single `tag = expr` pair inside the `error` attribute.
struct Tag {
    name: Ident,
    value: Expr,
}

impl Parse for Tag {
    fn parse(input: ParseStream) -> Result<Self> {
        let name = input.parse()?;
        input.parse::<Token![=]>()?;
        Ok(Self { name, value: input.parse()? })
    }
}

/// The contents of the `error` attribute. `message` and `labels` are required.
struct ErrorArgs {
    message: Expr,
    labels: Expr,
    help: Option<Expr>,
}

impl ErrorArgs {
    /// Parses the tags of the given `error` attribute. Errors are reported on `target`.
    fn from_attr(attr: &Attribute, target: &Ident) -> Result<Self> {
        let tags = attr.parse_args_with(Punctuated::<Tag, Token![,]>::parse_terminated)?;
        let (mut message, mut labels, mut help) = (None, None, None);

        for Tag { name, value } in tags {
            let slot = match name.to_string().as_str() {
                "message" => &mut message,
                "labels" => &mut labels,
                "help" => &mut help,
                other => return Err(syn::Error::new_spanned(&name, format!("unknown tag `{}`", other))),
            };
            if slot.replace(value).is_some() {
                return Err(syn::Error::new_spanned(&name, format!("duplicate tag `{}`", name)));
            }
        }

        let missing = |tag: &str| syn::Error::new_spanned(target, format!("the `error` attribute requires a `{}` tag", tag));
        Ok(Self {
            message: message.ok_or_else(|| missing("message"))?,
            labels: labels.ok_or_else(|| missing("labels"))?,
            help,
        })
    }
}

/// The target struct to derive [`ErrorKind`] for.
pub struct ErrorKindTarget {
    pub name: Ident,
    field_names: Vec<Ident>,
    args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<ItemStruct>()?;
        let name = item.ident;

        let field_names = match item.fields {
            Fields::Named(fields) => fields.named.into_iter().filter_map(|field| field.ident).collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new_spanned(fields, "`ErrorKind` cannot be derived for tuple structs"));
            },
        };

        let attr = item.attrs.iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| syn::Error::new_spanned(&name, "missing `#[error(...)]` attribute"))?;
        let args = ErrorArgs::from_attr(attr, &name)?;

        Ok(Self { name, field_names, args })
    }
}

impl ErrorKindTarget {
    /// Binds every field of `self` to a local of the same name, so that tag expressions can use
    /// them directly.
    fn bind_fields(&self) -> TokenStream2 {
        if self.field_names.is_empty() {
            return quote! {};
        }
        let name = &self.name;
        let fields = &self.field_names;
        quote! {
            #[allow(unused_variables)]
            let #name { #(#fields),* } = self;
        }
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let bind = self.bind_fields();
        let ErrorArgs { message, labels, help } = &self.args;
        let help = help.as_ref().map(|help| quote! { builder.set_help(#help); });

        tokens.extend(quote! {
            fn message(&self) -> String {
                #bind
                ToString::to_string(&(#message))
            }

            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #bind
                let offset = spans.first().map_or(0, |span| span.start);
                let labels = (#labels)
                    .into_iter()
                    .zip(spans)
                    .map(|(text, span)| {
                        let label = ariadne::Label::new((src_id, span.clone()))
                            .with_color(symdiff_error::EXPR);
                        if text.is_empty() { label } else { label.with_message(text) }
                    });

                #[allow(unused_mut)]
                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(self.message())
                    .with_labels(labels);
                #help
                builder.finish()
            }
        });
    }
}
