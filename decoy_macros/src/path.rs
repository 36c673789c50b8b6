use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Error, Expr, ExprField, Ident, Member};

pub(crate) fn transform(input: TokenStream) -> syn::Result<TokenStream> {
    if input.is_empty() {
        return Err(Error::new(Span::call_site(), "path is empty"));
    }
    let expr: Expr = syn::parse2(input)?;
    let mut steps = Vec::new();
    collect(&expr, &mut steps)?;
    Ok(quote!(::decoy::Path::from(::std::vec![#(#steps),*])))
}

fn collect(expr: &Expr, steps: &mut Vec<TokenStream>) -> syn::Result<()> {
    match expr {
        Expr::Path(path) if path.qself.is_none() => match path.path.get_ident() {
            Some(ident) => {
                steps.push(step(ident));
                Ok(())
            }
            None => Err(Error::new_spanned(path, "expected a single identifier")),
        },
        Expr::Field(ExprField {
            base,
            member: Member::Named(ident),
            ..
        }) => {
            collect(base, steps)?;
            steps.push(step(ident));
            Ok(())
        }
        other => Err(Error::new_spanned(
            other,
            "expected dotted steps such as `return_value.attr.method.return_value`",
        )),
    }
}

fn step(ident: &Ident) -> TokenStream {
    let name = ident.unraw().to_string();
    match name.as_str() {
        "return_value" | "invocation" => quote!(::decoy::PathStep::Invocation),
        _ => quote!(::decoy::PathStep::Attribute(::std::string::String::from(#name))),
    }
}
