//! Compile-time namespace and mosaic IDs.
//!
//! ```ignore
//! use nem_id_macro::{mosaic_id, namespace_id, namespace_path};
//!
//! const NEM: nem_id::NamespaceId = namespace_id!("nem");
//! const XEM: nem_id::MosaicId = mosaic_id!("nem:xem");
//! const PATH: [i64; 2] = namespace_path!("nem.xem");
//! ```
//!
//! Invalid names fail the build, pointing at the offending literal:
//!
//! ```compile_fail
//! const BAD: nem_id::NamespaceId = nem_id_macro::namespace_id!("a.b.c.d");
//! ```

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Ident, LitStr, Result, Token};

use proc_macro_crate::{crate_name, FoundCrate};

/// One or two string literals, comma separated.
struct NameArgs {
    names: Vec<LitStr>,
    span: Span,
}

impl Parse for NameArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let span = input.span();
        let names: Punctuated<LitStr, Token![,]> = Punctuated::parse_terminated(input)?;
        Ok(Self {
            names: names.into_iter().collect(),
            span,
        })
    }
}

fn nem_id_crate_path() -> TokenStream2 {
    match crate_name("nem-id") {
        Ok(FoundCrate::Itself) => quote!(crate),
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Err(_) => quote!(::nem_id),
    }
}

fn invalid(lit: &LitStr, err: nem_id::InvalidIdentifier) -> syn::Error {
    syn::Error::new(lit.span(), err)
}

fn single_name(args: &NameArgs, macro_name: &str) -> Result<LitStr> {
    match args.names.as_slice() {
        [lit] => Ok(lit.clone()),
        _ => Err(syn::Error::new(
            args.span,
            format!("{}! expects a single string literal", macro_name),
        )),
    }
}

// =============================================================================
// Expansion
// =============================================================================

fn expand_namespace_id(args: &NameArgs, krate: &TokenStream2) -> Result<TokenStream2> {
    let lit = single_name(args, "namespace_id")?;
    let id = nem_id::generate_namespace_id(&lit.value()).map_err(|e| invalid(&lit, e))?;
    Ok(quote!(#krate::NamespaceId::from_raw(#id)))
}

fn expand_namespace_path(args: &NameArgs) -> Result<TokenStream2> {
    let lit = single_name(args, "namespace_path")?;
    let ids = nem_id::generate_namespace_path(&lit.value()).map_err(|e| invalid(&lit, e))?;
    Ok(quote!([#(#ids),*]))
}

/// `mosaic_id!("ns:mosaic")` or `mosaic_id!("ns", "mosaic")`.
fn expand_mosaic_id(args: &NameArgs, krate: &TokenStream2) -> Result<TokenStream2> {
    let id = match args.names.as_slice() {
        [full] => nem_id::split_mosaic_full_name(&full.value())
            .and_then(|(namespace, mosaic)| nem_id::generate_mosaic_id(namespace, mosaic))
            .map_err(|e| invalid(full, e))?,
        [namespace, mosaic] => {
            let mosaic_name = mosaic.value();
            nem_id::validate_part(&mosaic_name).map_err(|e| invalid(mosaic, e))?;
            nem_id::generate_mosaic_id(&namespace.value(), &mosaic_name)
                .map_err(|e| invalid(namespace, e))?
        }
        _ => {
            return Err(syn::Error::new(
                args.span,
                "mosaic_id! expects \"namespace:mosaic\" or \"namespace\", \"mosaic\"",
            ));
        }
    };
    Ok(quote!(#krate::MosaicId::from_raw(#id)))
}

// =============================================================================
// Entry points
// =============================================================================

/// `NamespaceId` of the deepest level of a dotted namespace name.
#[proc_macro]
pub fn namespace_id(input: TokenStream) -> TokenStream {
    let args = syn::parse_macro_input!(input as NameArgs);
    expand_namespace_id(&args, &nem_id_crate_path())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// `[i64; N]` of every level of a dotted namespace name, root first.
#[proc_macro]
pub fn namespace_path(input: TokenStream) -> TokenStream {
    let args = syn::parse_macro_input!(input as NameArgs);
    expand_namespace_path(&args)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// `MosaicId` of a mosaic under a namespace.
#[proc_macro]
pub fn mosaic_id(input: TokenStream) -> TokenStream {
    let args = syn::parse_macro_input!(input as NameArgs);
    expand_mosaic_id(&args, &nem_id_crate_path())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
