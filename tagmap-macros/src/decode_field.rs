use syn::{Field, Ident, LitStr, Visibility, ext::IdentExt, parse::ParseBuffer};

pub(crate) struct FieldMetadata {
    pub(crate) ident: Ident,
    pub(crate) name: String,
    pub(crate) exported: bool,
    pub(crate) anonymous: bool,
    pub(crate) tags: Vec<(String, String)>,
}

pub fn decode_field(field: &Field) -> FieldMetadata {
    let ident = field
        .ident
        .clone()
        .expect("Record can only be derived for structs with named fields");
    let mut metadata = FieldMetadata {
        name: ident.unraw().to_string(),
        ident,
        exported: matches!(field.vis, Visibility::Public(..)),
        anonymous: false,
        tags: Vec::new(),
    };
    for attr in &field.attrs {
        let meta = &attr.meta;
        if meta.path().is_ident("tag") {
            let Ok(list) = meta.require_list() else {
                panic!(
                    "Error while parsing `tag`, use it like: `#[tag(json = \"name,omitempty\", ...)]`"
                );
            };
            let result = list.parse_nested_meta(|arg| {
                if arg.path.is_ident("embed") {
                    let Err(..) = arg.value() else {
                        // value() is Err for Meta::Path
                        panic!("Error while parsing `embed`, use it like: `#[tag(embed)]`");
                    };
                    metadata.anonymous = true;
                    return Ok(());
                }
                let Some(namespace) = arg.path.get_ident().map(|v| v.unraw().to_string()) else {
                    panic!("Error while parsing `tag`, the namespace must be a plain identifier");
                };
                let Ok(value) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                    panic!(
                        "Error while parsing `{namespace}`, use it like: `#[tag({namespace} = \"value\")]`"
                    );
                };
                metadata.tags.push((namespace, value.value()));
                Ok(())
            });
            if let Err(e) = result {
                panic!("Error while parsing `tag` on field `{}`: {e}", metadata.name);
            }
        }
    }
    metadata
}
