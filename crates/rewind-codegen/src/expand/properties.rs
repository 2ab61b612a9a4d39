use super::Expand;
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_properties(&self) -> TokenStream {
        let properties = self
            .record
            .fields
            .iter()
            .map(|field| self.expand_property(field));

        quote! {
            vec![ #( #properties, )* ]
        }
    }

    fn expand_property(&self, field: &Field) -> TokenStream {
        let rewind = &self.rewind;
        let ident = &self.record.ident;
        let field_ident = &field.ident;
        let name = &field.name;

        let setter = if field.attrs.read_only {
            quote!()
        } else {
            quote! {
                .setter(#rewind::Setter::new::<#ident>(
                    #name,
                    |record: &mut #ident, value: #rewind::Value| -> #rewind::Result<()> {
                        record.#field_ident = #rewind::Primitive::load(value)?;
                        Ok(())
                    },
                ))
            }
        };

        quote! {
            #rewind::Property::new(#name)
                .getter(#rewind::Getter::new::<#ident>(
                    #name,
                    |record: &#ident| -> #rewind::Value {
                        #rewind::Primitive::into_value(::core::clone::Clone::clone(&record.#field_ident))
                    },
                ))
                #setter
        }
    }
}
