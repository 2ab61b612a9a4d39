use super::ErrorSet;

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Rust field identifier
    pub(crate) ident: syn::Ident,

    /// Property name reported to the accessor registry
    pub(crate) name: String,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// True if annotated with `#[property(skip)]`
    pub(crate) skip: bool,

    /// True if annotated with `#[property(read_only)]`
    pub(crate) read_only: bool,

    /// Property name override: `#[property(rename = "...")]`
    pub(crate) rename: Option<syn::LitStr>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("property") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    if attrs.skip {
                        errs.push(meta.error("duplicate `skip`"));
                    }
                    attrs.skip = true;
                } else if meta.path.is_ident("read_only") {
                    if attrs.read_only {
                        errs.push(meta.error("duplicate `read_only`"));
                    }
                    attrs.read_only = true;
                } else if meta.path.is_ident("rename") {
                    let lit: syn::LitStr = meta.value()?.parse()?;

                    if lit.value().is_empty() {
                        errs.push(syn::Error::new_spanned(&lit, "property name must not be empty"));
                    } else if attrs.rename.is_some() {
                        errs.push(syn::Error::new_spanned(&lit, "duplicate `rename`"));
                    } else {
                        attrs.rename = Some(lit);
                    }
                } else {
                    return Err(meta.error("unsupported property attribute"));
                }

                Ok(())
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        if attrs.skip && (attrs.read_only || attrs.rename.is_some()) {
            errs.push(syn::Error::new_spanned(
                ident,
                "`skip` cannot be combined with other property attributes",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let name = match &attrs.rename {
            Some(lit) => lit.value(),
            None => ident.unraw().to_string(),
        };

        Ok(Field {
            ident: ident.clone(),
            name,
            attrs,
        })
    }
}
