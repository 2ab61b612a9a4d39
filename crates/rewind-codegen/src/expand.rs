mod properties;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for rewind types
    rewind: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let rewind = &self.rewind;
        let ident = &self.record.ident;
        let name = &self.record.name;
        let properties = self.expand_properties();

        wrap_in_const(quote! {
            impl #rewind::Record for #ident {
                fn record_type(&self) -> #rewind::RecordType {
                    #rewind::RecordType::new::<#ident>(#name, || {
                        #properties
                    })
                }

                fn as_any(&self) -> &dyn #rewind::Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn #rewind::Any {
                    self
                }
            }
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        rewind: quote!(_rewind::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rewind as _rewind;
            #code
        };
    }
}
