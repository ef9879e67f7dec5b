use crate::{COLUMN_PREFIX, DEFAULT, Field, GORM, JSON, NULL, OMIT_EMPTY, SKIP, SQL, first_non_default};

/// Outcome of resolving the tags of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'t> {
    /// The field does not appear in the mapping.
    Skip,
    /// The field appears under `key`, as null when `force_null` is set.
    Include { key: &'t str, force_null: bool },
}

/// Decides whether and under which key `field` appears when extracting under `namespace`.
///
/// - A field without an annotation in `namespace` (`json` when empty) is skipped, so is one
///   annotated `-`, or annotated `name,omitempty` while holding its default value.
/// - Under `gorm` a `-` in the `sql` namespace always skips the field, and a `column:` prefix
///   is removed from the annotation.
/// - The key is the annotation up to the first comma.
/// - `default = "null"` (any case) on a field holding its default value forces a null value.
pub fn resolve<'t>(namespace: &str, field: &Field<'t>) -> Resolution<'t> {
    let namespace = first_non_default([namespace, JSON]).unwrap_or(JSON);
    let tags = field.tags;
    let Some(mut annotation) = tags.lookup(namespace) else {
        return Resolution::Skip;
    };
    let is_default = field.value.is_default();
    if annotation == SKIP
        || (is_default && annotation.split(',').skip(1).any(|m| m.trim() == OMIT_EMPTY))
    {
        return Resolution::Skip;
    }
    if namespace == GORM {
        if tags.get(SQL) == SKIP {
            return Resolution::Skip;
        }
        annotation = annotation.strip_prefix(COLUMN_PREFIX).unwrap_or(annotation);
    }
    let key = annotation.split(',').next().unwrap_or_default();
    let force_null = is_default && tags.get(DEFAULT).eq_ignore_ascii_case(NULL);
    Resolution::Include { key, force_null }
}
