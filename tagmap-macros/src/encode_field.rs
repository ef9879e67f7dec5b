use crate::decode_field::FieldMetadata;
use proc_macro2::TokenStream;
use quote::quote;

pub fn encode_tags(metadata: &FieldMetadata) -> TokenStream {
    let entries = metadata
        .tags
        .iter()
        .map(|(namespace, value)| quote!(.with(#namespace, #value)));
    quote!(::tagmap::Tags::new()#(#entries)*)
}

pub fn encode_field(metadata: &FieldMetadata, index: usize) -> TokenStream {
    let ident = &metadata.ident;
    let name = &metadata.name;
    let exported = metadata.exported;
    let anonymous = metadata.anonymous;
    quote! {
        ::tagmap::Field {
            name: #name,
            exported: #exported,
            anonymous: #anonymous,
            tags: &TAGS[#index],
            value: ::tagmap::AsField::as_field(&self.#ident),
        }
    }
}
