use darling::{FromDeriveInput, FromVariant, ast};
use heck::{ToShoutySnakeCase, ToSnakeCase};
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, parse_macro_input};

#[derive(Debug, FromDeriveInput)]
#[darling(supports(enum_unit))]
struct FilterInput {
    ident: syn::Ident,
    data: ast::Data<FilterVariant, ()>,
}

#[derive(Debug, FromVariant)]
struct FilterVariant {
    ident: syn::Ident,
}

pub fn filter_methods_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_info = match FilterInput::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    let enum_name = &enum_info.ident;
    let variants = enum_info.data.take_enum().unwrap_or_default();

    let keywords = variants.iter().map(|var| {
        let var_name = &var.ident;
        let keyword = var_name.to_string().to_shouty_snake_case().replace('_', " ");
        quote! { #enum_name::#var_name => #keyword, }
    });

    let methods = variants.iter().map(|var| {
        let var_name = &var.ident;
        let snake = var_name.to_string().to_snake_case();
        let set_fn = format_ident!("set_{}", snake);
        let and_fn = format_ident!("and_{}", snake);
        let or_fn = format_ident!("or_{}", snake);

        let set_doc = format!(
            "Replaces the {snake} criteria, discarding anything set before."
        );
        let and_doc = format!(
            "Combines the {snake} criteria with `criteria` under AND. The previous \
             criteria is nested, never flattened: `(prev) AND (new)`."
        );
        let or_doc = format!(
            "Combines the {snake} criteria with `criteria` under OR. The previous \
             criteria is nested, never flattened: `(prev) OR (new)`."
        );

        quote! {
            #[doc = #set_doc]
            pub fn #set_fn<C>(&mut self, criteria: C) -> &mut Self
            where
                C: Into<crate::Criteria>,
            {
                self.set_filter(#enum_name::#var_name, criteria.into())
            }

            #[doc = #and_doc]
            pub fn #and_fn<C>(&mut self, criteria: C) -> &mut Self
            where
                C: Into<crate::Criteria>,
            {
                self.combine_filter(
                    #enum_name::#var_name,
                    crate::Conjunction::And,
                    criteria.into(),
                )
            }

            #[doc = #or_doc]
            pub fn #or_fn<C>(&mut self, criteria: C) -> &mut Self
            where
                C: Into<crate::Criteria>,
            {
                self.combine_filter(
                    #enum_name::#var_name,
                    crate::Conjunction::Or,
                    criteria.into(),
                )
            }
        }
    });

    quote! {
        impl #enum_name {
            pub(crate) fn keyword(&self) -> &'static str {
                match self {
                    #(#keywords)*
                }
            }
        }

        impl crate::Query {
            #(#methods)*
        }
    }
    .into()
}
