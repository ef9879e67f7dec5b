use crate::{Error, Result, consume_while, truncate_long};
use std::borrow::Cow;

/// Display namespace, selected when the caller passes an empty namespace.
pub const JSON: &str = "json";
/// Storage namespace, a `-` here also vetoes the field under [`GORM`].
pub const SQL: &str = "sql";
/// Object relational namespace.
pub const GORM: &str = "gorm";
/// Default directive, only [`NULL`] is meaningful as its value.
pub const DEFAULT: &str = "default";
pub const NULL: &str = "null";
/// Annotation value that always omits the field.
pub const SKIP: &str = "-";
pub const OMIT_EMPTY: &str = "omitempty";
pub const COLUMN_PREFIX: &str = "column:";

/// Annotations of a single field, keyed by namespace.
///
/// Lookups return the first annotation registered under a namespace.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Tags {
    entries: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl Tags {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with(
        mut self,
        namespace: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.insert(namespace, value);
        self
    }

    pub fn insert(
        &mut self,
        namespace: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) {
        self.entries.push((namespace.into(), value.into()));
    }

    pub fn lookup(&self, namespace: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == namespace)
            .map(|(_, v)| v.as_ref())
    }

    /// Annotation under `namespace`, or the empty string when missing.
    pub fn get(&self, namespace: &str) -> &str {
        self.lookup(namespace).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }

    /// Parses the conventional annotation string: `json:"name,omitempty" sql:"-"`.
    ///
    /// Entries are separated by spaces, each one is a namespace followed by a colon and a
    /// double quoted value that accepts the `\"`, `\\`, `\'`, `\n`, `\r`, `\t` escapes.
    pub fn parse(tag: &str) -> Result<Self> {
        let mut result = Tags::new();
        let mut input = tag;
        loop {
            consume_while(&mut input, |c| *c == ' ');
            if input.is_empty() {
                break;
            }
            let namespace = consume_while(&mut input, |c| {
                *c > ' ' && *c != ':' && *c != '"' && *c != '\x7f'
            });
            if namespace.is_empty() || !input.starts_with(":\"") {
                return Err(Error::msg(format!(
                    "Malformed tag `{}`, expected `namespace:\"value\"` at `{}`",
                    truncate_long(tag),
                    truncate_long(input),
                )));
            }
            input = &input[2..];
            let mut value = String::new();
            let mut chars = input.char_indices();
            let end = loop {
                match chars.next() {
                    Some((i, '"')) => break i,
                    Some((_, '\\')) => match chars.next() {
                        Some((_, c @ ('"' | '\\' | '\''))) => value.push(c),
                        Some((_, 'n')) => value.push('\n'),
                        Some((_, 'r')) => value.push('\r'),
                        Some((_, 't')) => value.push('\t'),
                        _ => {
                            return Err(Error::msg(format!(
                                "Invalid escape sequence in the value of `{}` inside tag `{}`",
                                namespace,
                                truncate_long(tag),
                            )));
                        }
                    },
                    Some((_, c)) => value.push(c),
                    None => {
                        return Err(Error::msg(format!(
                            "Unterminated value of `{}` inside tag `{}`",
                            namespace,
                            truncate_long(tag),
                        )));
                    }
                }
            };
            input = &input[end + 1..];
            result.insert(namespace.to_owned(), value);
        }
        Ok(result)
    }
}

impl<K, V> FromIterator<(K, V)> for Tags
where
    K: Into<Cow<'static, str>>,
    V: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
