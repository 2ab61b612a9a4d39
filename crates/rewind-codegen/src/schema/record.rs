use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Type name reported in diagnostics
    pub(crate) name: String,

    /// Fields exposed as properties, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut name = None;

        for attr in &ast.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: syn::LitStr = meta.value()?.parse()?;

                    if name.is_some() {
                        errs.push(syn::Error::new_spanned(&lit, "duplicate `name`"));
                    } else {
                        name = Some(lit.value());
                    }
                    Ok(())
                } else {
                    Err(meta.error("unsupported record attribute"))
                }
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        let mut fields = vec![];

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => {
                    if field.attrs.skip {
                        continue;
                    }

                    if let Some(other) = fields.iter().find(|f: &&Field| f.name == field.name) {
                        errs.push(syn::Error::new_spanned(
                            &field.ident,
                            format!(
                                "property `{}` is already declared by field `{}`",
                                field.name, other.ident
                            ),
                        ));
                    }

                    fields.push(field);
                }
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Record {
            name: name.unwrap_or_else(|| ast.ident.to_string()),
            ident: ast.ident.clone(),
            fields,
        })
    }
}
