//! Procedural macros for the `strata` crate.
//!
//! `expand_impl` stamps out one copy of a generic impl block per concrete
//! type, which is how `strata` implements its traits for every unsigned
//! primitive integer.

extern crate proc_macro;
use proc_macro::TokenStream;

use quote::quote;
use syn::visit_mut::VisitMut;
use syn::{parse_macro_input, Error, GenericParam, ItemImpl};

mod expansion_syntax;
use expansion_syntax::*;

mod search_replace;
use search_replace::*;

/// Expands a generic impl block into one impl block per listed type.
///
/// Each entry is written `label<T = Type>`: the type parameter `T` is
/// removed from the impl generics and every use of `T` as a type is
/// replaced by `Type`.
///
/// ```ignore
/// #[expand_impl(_u8<T = u8>, _u16<T = u16>)]
/// impl<T> Extent for T {
///     const ONE: T = 1;
/// }
/// ```
#[proc_macro_attribute]
pub fn expand_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let expansion_sequence = parse_macro_input!(attr as ExpansionSequence);
    let item = parse_macro_input!(item as ItemImpl);

    let mut impl_blocks = Vec::new();

    for expansion in expansion_sequence.iter() {
        let declared = item.generics.params.iter().any(|param| match param {
            GenericParam::Type(type_param) => type_param.ident == expansion.generic,
            _ => false,
        });
        if !declared {
            let message = format!(
                "expansion `{}` substitutes `{}`, which is not a type parameter of this impl",
                expansion.label, expansion.generic
            );
            return Error::new_spanned(&expansion.generic, message)
                .to_compile_error()
                .into();
        }

        let mut impl_block = item.clone();

        let mut generics_visitor = RemoveGenerics {
            find: expansion.generic.clone(),
        };
        let mut type_visitor = FindReplaceType {
            find: expansion.generic.clone(),
            replace: expansion.ty.clone(),
        };
        generics_visitor.visit_item_impl_mut(&mut impl_block);
        type_visitor.visit_item_impl_mut(&mut impl_block);

        impl_blocks.push(impl_block);
    }

    let result = quote! {
        #(#impl_blocks)*
    };
    result.into()
}
