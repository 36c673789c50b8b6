mod args;
mod call;
mod path;

use syn::parse_macro_input;

/// Captures positional and named arguments: `args!(26, "x", key = value)`.
///
/// Every argument is converted with `decoy::Value::from`.
#[proc_macro]
pub fn args(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    args::transform(parse_macro_input!(input with args::ArgList::parse_terminated))
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Builds an expected call record from call-chain syntax.
///
/// `call!(call(26).attr.method(x))` and `call!(call.method())` describe calls
/// on the return value of a double and on its attribute respectively.
#[proc_macro]
pub fn call(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    call::transform(parse_macro_input!(input as syn::Expr))
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Builds a configuration path from dotted steps:
/// `path!(return_value.attr.method.return_value)`.
///
/// `return_value` and `invocation` step through a call; any other identifier
/// is an attribute.
#[proc_macro]
pub fn path(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    path::transform(input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
