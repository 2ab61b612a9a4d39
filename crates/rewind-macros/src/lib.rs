extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `Record`, exposing each named field as a property that identifier
/// mappers can read and write.
///
/// Field attributes: `#[property(skip)]`, `#[property(read_only)]` and
/// `#[property(rename = "...")]`. The reported type name can be overridden
/// with `#[record(name = "...")]`.
#[proc_macro_derive(Record, attributes(record, property))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match rewind_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
