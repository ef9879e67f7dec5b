use crate::{AnyValue, FieldValue, Mapping, Result, Tags, extract_record};
use std::fmt::{self, Debug};

/// Descriptor of one field of a [`Record`].
#[derive(Debug)]
pub struct Field<'a> {
    /// Declared identifier.
    pub name: &'static str,
    /// Declared `pub`. Only exported fields are extracted.
    pub exported: bool,
    /// Embedded record whose fields are flattened into the parent.
    pub anonymous: bool,
    pub tags: &'a Tags,
    pub value: FieldValue<'a>,
}

/// A composite value that enumerates its own fields.
///
/// Usually implemented through `#[derive(Record)]`. A manual implementation must return the
/// fields in declaration order, every time the same ones.
pub trait Record: AnyValue {
    fn fields(&self) -> Vec<Field<'_>>;

    /// Whether every field, exported or not, holds its default value.
    fn is_zero(&self) -> bool {
        self.fields().iter().all(|f| f.value.is_default())
    }

    /// Tag values of this record under `namespace`, see [`extract`](crate::extract).
    fn tag_values(&self, namespace: &str) -> Result<Mapping<'_>>
    where
        Self: Sized,
    {
        extract_record(self, namespace)
    }
}

impl Debug for dyn Record + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(AnyValue::type_name(self))
    }
}
