//! Procedural macros for route-nexus applications.
//!
//! This library provides the `#[screen_ids]` attribute, which turns a plain
//! enum into the closed set of screen identifiers a router dispatches on.

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Fields, ItemEnum};

/// Attribute macro for declaring a router's screen identifiers.
///
/// # Usage
///
/// ```ignore
/// #[screen_ids]
/// pub enum ScreenId {
///     A,
///     B,
///     Z,
/// }
///
/// assert_eq!(ScreenId::B.as_str(), "B");
/// assert_eq!("Z".parse::<ScreenId>(), Ok(ScreenId::Z));
/// ```
///
/// The macro generates:
/// - the usual derives (`Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`)
/// - `ScreenId::ALL` and `ScreenId::as_str`, using the variant name verbatim
/// - `Display` and a case-sensitive `FromStr`
/// - `impl ::route_nexus::ScreenKey for ScreenId`
///
/// Every variant must be a unit variant.
#[proc_macro_attribute]
pub fn screen_ids(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemEnum);
    expand(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand(input: ItemEnum) -> syn::Result<proc_macro2::TokenStream> {
    if let Some(bad) = input.variants.iter().find(|v| !matches!(v.fields, Fields::Unit)) {
        return Err(syn::Error::new_spanned(bad, "#[screen_ids] only supports unit variants"));
    }
    if input.variants.is_empty() {
        return Err(syn::Error::new_spanned(&input.ident, "#[screen_ids] needs at least one variant"));
    }

    let enum_name = &input.ident;
    let attrs = &input.attrs;
    let vis = &input.vis;
    let variants: Vec<_> = input.variants.iter().map(|v| &v.ident).collect();
    let names: Vec<String> = variants.iter().map(|v| v.to_string()).collect();
    let available = names.join(", ");

    let expanded = quote! {
        #(#attrs)*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #vis enum #enum_name {
            #(#variants),*
        }

        impl #enum_name {
            /// Every screen identifier, in declaration order.
            pub const ALL: &'static [#enum_name] = &[#(#enum_name::#variants),*];

            /// The string form of this identifier.
            pub fn as_str(&self) -> &'static str {
                match self {
                    #(#enum_name::#variants => #names),*
                }
            }
        }

        impl ::std::fmt::Display for #enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for #enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    #(#names => Ok(#enum_name::#variants),)*
                    _ => Err(format!("Unknown screen: '{}'. Available screens: {}", s, #available)),
                }
            }
        }

        impl ::route_nexus::ScreenKey for #enum_name {
            fn all() -> &'static [Self] {
                #enum_name::ALL
            }

            fn as_str(&self) -> &'static str {
                #enum_name::as_str(self)
            }
        }
    };

    Ok(expanded)
}
