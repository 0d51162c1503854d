use proc_macro::TokenStream;

mod filter;

/// Generates the `set_*`, `and_*` and `or_*` methods on `crate::Query` for
/// every variant of a unit enum naming a filter slot.
#[proc_macro_derive(FilterMethods)]
pub fn filter_methods(input: TokenStream) -> TokenStream {
    filter::filter_methods_impl(input)
}
