use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Expr, Ident, Token};

/// Comma separated parser expressions, trailing comma allowed.
struct Args(Vec<Expr>);

impl Parse for Args {
    fn parse(input: ParseStream) -> Result<Self> {
        let exprs = Punctuated::<Expr, Token![,]>::parse_terminated(input)?;
        Ok(Self(exprs.into_iter().collect()))
    }
}

/// Folds `args` into a balanced binary tree of calls to `combine`.
fn balanced(args: &[Expr], combine: &proc_macro2::TokenStream) -> proc_macro2::TokenStream {
    match args {
        [single] => quote! { { #single } },
        [first, second] => quote! { { #combine(#first, #second) } },
        _ => {
            let (left, right) = args.split_at(args.len() / 2);
            let left = balanced(left, combine);
            let right = balanced(right, combine);
            quote! { { #combine(#left, #right) } }
        }
    }
}

fn elem_var(idx: usize) -> Ident {
    Ident::new(&format!("__carve_tuple_elem_{idx}"), Span::call_site())
}

/// Runs each parser in order and yields a flat tuple of their outputs.
#[proc_macro]
pub fn tuple(args: TokenStream) -> TokenStream {
    let Args(args) = parse_macro_input!(args as Args);
    if args.is_empty() {
        return quote! {
            { ::carve::basic::success(()) }
        }
        .into();
    }
    let pairs = balanced(&args, &quote! { ::carve::sequence::pair });
    let vars: Vec<_> = (0..args.len()).map(elem_var).collect();
    let nested = tuple_pattern(&vars);
    quote! {
        {
            ::carve::basic::map({ #pairs }, |#nested| (#(#vars,)*))
        }
    }
    .into()
}

/// Destructuring pattern for the tree [`balanced`] builds over `vars`.
fn tuple_pattern(vars: &[Ident]) -> proc_macro2::TokenStream {
    match vars {
        [single] => quote! { #single },
        [first, second] => quote! { (#first, #second,) },
        _ => {
            let (left, right) = vars.split_at(vars.len() / 2);
            let left = tuple_pattern(left);
            let right = tuple_pattern(right);
            quote! { (#left, #right,) }
        }
    }
}

/// Ordered choice over any number of parsers with the same output type.
#[proc_macro]
pub fn alt(args: TokenStream) -> TokenStream {
    let Args(args) = parse_macro_input!(args as Args);
    if args.is_empty() {
        return quote! {
            ::core::compile_error!("alt! expects at least one parser")
        }
        .into();
    }
    let choices = balanced(&args, &quote! { ::carve::branch::either });
    quote! {
        { ::carve::branch::alt(#choices) }
    }
    .into()
}
