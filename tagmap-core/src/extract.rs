use crate::{
    AsField, ExtractError, FieldValue, JSON, Mapping, Record, Resolution, Result, Value, coerce,
    first_non_default, resolve,
};

/// Extracts the tag values of `input` under `namespace` (`json` when empty).
///
/// `input` must be a record, possibly behind one level of indirection (`Box<T>`, `Rc<T>`,
/// `Arc<T>`, `Some(T)`), anything else fails with [`ExtractError::NotAStruct`]. The first
/// failing field aborts the whole extraction.
///
/// ```rust
/// use tagmap_core::{ExtractError, Kind, extract};
/// let error = extract(&42, "").unwrap_err();
/// assert_eq!(
///     error.downcast_ref::<ExtractError>(),
///     Some(&ExtractError::NotAStruct { kind: Kind::Int32 }),
/// );
/// ```
pub fn extract<'a, R: AsField + ?Sized>(input: &'a R, namespace: &str) -> Result<Mapping<'a>> {
    match input.as_field().deref() {
        FieldValue::Struct(record) => extract_record(record, namespace),
        value => Err(ExtractError::NotAStruct { kind: value.kind() }.into()),
    }
}

/// Extracts the tag values of `record` under `namespace` (`json` when empty).
///
/// Embedded records are extracted recursively and merged into the result, their keys replace
/// the ones already present.
pub fn extract_record<'a>(record: &'a dyn Record, namespace: &str) -> Result<Mapping<'a>> {
    let namespace = first_non_default([namespace, JSON]).unwrap_or(JSON);
    let fields = record.fields();
    let mut result = Mapping::with_capacity(fields.len());
    for field in fields {
        if !field.exported {
            continue;
        }
        if field.anonymous {
            if let FieldValue::Struct(embedded) = &field.value {
                log::trace!(
                    "Merging embedded `{}` of `{:?}` into the result",
                    field.name,
                    record
                );
                result.merge(extract_record(*embedded, namespace)?);
                continue;
            }
        }
        let (key, force_null) = match resolve(namespace, &field) {
            Resolution::Skip => {
                log::trace!("Skipping field `{}` of `{:?}`", field.name, record);
                continue;
            }
            Resolution::Include { key, force_null } => (key, force_null),
        };
        let value = if force_null {
            log::trace!("Field `{}` of `{:?}` is forced to null", field.name, record);
            Value::Null
        } else {
            coerce(field.name, field.value)?
        };
        if key.is_empty() {
            log::warn!(
                "Field `{}` of `{:?}` resolves to an empty key under `{}`",
                field.name,
                record,
                namespace
            );
        }
        if result.insert(key, value).is_some() {
            log::warn!(
                "Key `{}` from field `{}` of `{:?}` replaces a previous value",
                key,
                field.name,
                record
            );
        }
    }
    Ok(result)
}
