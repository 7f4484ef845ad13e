use proc_macro2::{Ident, TokenStream};
use quote::ToTokens;
use std::ops::Deref;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::{Pair, Punctuated};
use syn::token::{Comma, Eq, Gt, Lt};
use syn::{Result, Type};

/// One expansion of a generic impl block, written `label<T = Type>`.
///
/// The label only names the expansion in diagnostics.
pub struct Expansion {
    pub label: Ident,
    pub lt_token: Lt,
    pub generic: Ident,
    pub eq_token: Eq,
    pub ty: Type,
    pub gt_token: Gt,
}

impl Parse for Expansion {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Expansion {
            label: input.parse()?,
            lt_token: input.parse()?,
            generic: input.parse()?,
            eq_token: input.parse()?,
            ty: input.parse()?,
            gt_token: input.parse()?,
        })
    }
}

impl ToTokens for Expansion {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.label.to_tokens(tokens);
        self.lt_token.to_tokens(tokens);
        self.generic.to_tokens(tokens);
        self.eq_token.to_tokens(tokens);
        self.ty.to_tokens(tokens);
        self.gt_token.to_tokens(tokens);
    }
}

pub struct ExpansionSequence {
    pub sequence: Punctuated<Expansion, Comma>,
}

impl Parse for ExpansionSequence {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(ExpansionSequence {
            sequence: Punctuated::parse_terminated(input)?,
        })
    }
}

impl ToTokens for ExpansionSequence {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        for pair in self.sequence.pairs() {
            match pair {
                Pair::Punctuated(expansion, comma) => {
                    expansion.to_tokens(tokens);
                    comma.to_tokens(tokens);
                }
                Pair::End(expansion) => {
                    expansion.to_tokens(tokens);
                }
            }
        }
    }
}

impl Deref for ExpansionSequence {
    type Target = Punctuated<Expansion, Comma>;
    fn deref(&self) -> &Self::Target {
        &self.sequence
    }
}
