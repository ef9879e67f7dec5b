mod decode_field;
mod decode_record;
mod encode_field;

use decode_record::decode_record;
use encode_field::{encode_field, encode_tags};
use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemStruct, parse_macro_input};

/// Implements `Record` and `AsField` for a struct with named fields.
///
/// Field attributes:
/// - `#[tag(namespace = "value", ..)]` annotates the field, `namespace` is any identifier
///   (`json`, `sql`, `gorm`, `default`, ..).
/// - `#[tag(embed)]` flattens the fields of an embedded record into the parent.
///
/// Only `pub` fields are extracted.
#[proc_macro_derive(Record, attributes(tag))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let item: ItemStruct = parse_macro_input!(input as ItemStruct);
    let record = decode_record(item);
    let name = &record.item.ident;
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();
    let tags = record.fields.iter().map(encode_tags);
    let fields = record
        .fields
        .iter()
        .enumerate()
        .map(|(i, f)| encode_field(f, i));
    quote! {
        impl #impl_generics ::tagmap::Record for #name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::tagmap::Field<'_>> {
                static TAGS: ::std::sync::LazyLock<::std::boxed::Box<[::tagmap::Tags]>> =
                    ::std::sync::LazyLock::new(|| {
                        ::std::vec![#(#tags),*].into_boxed_slice()
                    });
                ::std::vec![#(#fields),*]
            }
        }

        impl #impl_generics ::tagmap::AsField for #name #ty_generics #where_clause {
            fn as_field(&self) -> ::tagmap::FieldValue<'_> {
                ::tagmap::FieldValue::Struct(self)
            }
        }
    }
    .into()
}
