use crate::AsField;
use std::borrow::Cow;

/// Consumes the longest prefix of `input` matching `predicate` and returns it.
pub fn consume_while<'s>(input: &mut &'s str, mut predicate: impl FnMut(&char) -> bool) -> &'s str {
    let len = input
        .char_indices()
        .find(|(_, c)| !predicate(c))
        .map_or(input.len(), |(i, _)| i);
    let result = &input[..len];
    *input = &input[len..];
    result
}

/// Shortens long text embedded in error messages.
pub fn truncate_long(value: &str) -> Cow<'_, str> {
    match value.char_indices().nth(97) {
        Some((i, _)) => Cow::Owned(format!("{}...", &value[..i])),
        None => Cow::Borrowed(value),
    }
}

/// Returns `true` if `value` is the default (uninitialized) value of its type.
pub fn is_default<T: AsField + ?Sized>(value: &T) -> bool {
    value.as_field().is_default()
}

/// First value that is not the default value of its type.
///
/// ```rust
/// use tagmap_core::first_non_default;
/// assert_eq!(first_non_default(["", "json"]), Some("json"));
/// assert_eq!(first_non_default([0, 0, 7, 9].iter()), Some(&7));
/// ```
pub fn first_non_default<'v, T, I>(values: I) -> Option<&'v T>
where
    T: AsField + ?Sized + 'v,
    I: IntoIterator<Item = &'v T>,
{
    values.into_iter().find(|v| !is_default(*v))
}
