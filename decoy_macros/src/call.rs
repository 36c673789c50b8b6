use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Error, Expr, ExprCall, ExprField, ExprMethodCall, ExprParen, ExprPath, Member};

pub(crate) fn transform(expr: Expr) -> syn::Result<TokenStream> {
    match &expr {
        Expr::Call(_) | Expr::MethodCall(_) => chain(&expr),
        _ => Err(Error::new_spanned(
            &expr,
            "expected a call such as `call(1)`, `call(1).attr.method(2)` or `call.method()`",
        )),
    }
}

fn chain(expr: &Expr) -> syn::Result<TokenStream> {
    match expr {
        Expr::Path(path) if is_call(path) => Ok(quote!(::decoy::chain())),
        Expr::Call(ExprCall { func, args, .. }) => {
            let args = crate::args::transform(args.clone())?;
            match func.as_ref() {
                Expr::Path(path) if is_call(path) => Ok(quote!(::decoy::call(#args))),
                func => {
                    let base = chain(func)?;
                    Ok(quote!(#base.invoke(#args)))
                }
            }
        }
        Expr::Field(ExprField {
            base,
            member: Member::Named(name),
            ..
        }) => {
            let base = chain(base)?;
            let name = name.unraw().to_string();
            Ok(quote!(#base.attr(#name)))
        }
        Expr::MethodCall(ExprMethodCall {
            receiver,
            method,
            turbofish: None,
            args,
            ..
        }) => {
            let base = chain(receiver)?;
            let name = method.unraw().to_string();
            let args = crate::args::transform(args.clone())?;
            Ok(quote!(#base.attr(#name).invoke(#args)))
        }
        Expr::Paren(ExprParen { expr, .. }) => chain(expr),
        other => Err(Error::new_spanned(
            other,
            "expected a call chain starting with `call`",
        )),
    }
}

fn is_call(path: &ExprPath) -> bool {
    path.qself.is_none() && path.path.is_ident("call")
}
