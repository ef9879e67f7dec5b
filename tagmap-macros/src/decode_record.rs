use crate::decode_field::{FieldMetadata, decode_field};
use syn::{Fields, Generics, ItemStruct, parse_quote};

pub(crate) struct RecordMetadata {
    pub(crate) item: ItemStruct,
    pub(crate) fields: Vec<FieldMetadata>,
    pub(crate) generics: Generics,
}

pub fn decode_record(item: ItemStruct) -> RecordMetadata {
    let Fields::Named(named) = &item.fields else {
        panic!(
            "Record can only be derived for structs with named fields, `{}` is not",
            item.ident
        );
    };
    if let Some(lifetime) = item.generics.lifetimes().next() {
        panic!(
            "Record can only be derived for types without lifetime parameters, `{}` declares `{}`",
            item.ident, lifetime.lifetime
        );
    }
    let fields = named.named.iter().map(decode_field).collect();
    let mut generics = item.generics.clone();
    let params: Vec<_> = generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    let where_clause = generics.make_where_clause();
    for param in params {
        where_clause
            .predicates
            .push(parse_quote!(#param: ::tagmap::AsField + 'static));
    }
    RecordMetadata {
        item,
        fields,
        generics,
    }
}
