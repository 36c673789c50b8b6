use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{Error, Expr, ExprAssign, Ident, Token};

pub(crate) type ArgList = Punctuated<Expr, Token![,]>;

pub(crate) fn transform(list: ArgList) -> syn::Result<TokenStream> {
    let args = Ident::new("args", Span::mixed_site());
    let mut named = false;
    let mut captures = Vec::new();
    for expr in list {
        match expr {
            Expr::Assign(ExprAssign { left, right, .. }) => {
                let name = arg_name(&left)?;
                named = true;
                captures.push(quote!(#args.insert(#name, ::decoy::Value::from(#right));));
            }
            positional if named => {
                return Err(Error::new_spanned(
                    positional,
                    "positional argument follows named argument",
                ))
            }
            positional => {
                captures.push(quote!(#args.push(::decoy::Value::from(#positional));));
            }
        }
    }
    if captures.is_empty() {
        return Ok(quote!(::decoy::Args::new()));
    }
    Ok(quote! {
        {
            let mut #args = ::decoy::Args::new();
            #(#captures)*
            #args
        }
    })
}

fn arg_name(expr: &Expr) -> syn::Result<String> {
    if let Expr::Path(path) = expr {
        if path.qself.is_none() {
            if let Some(ident) = path.path.get_ident() {
                return Ok(ident.unraw().to_string());
            }
        }
    }
    Err(Error::new_spanned(expr, "expected an argument name"))
}
