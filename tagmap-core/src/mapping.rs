use crate::Value;
use indexmap::{IndexMap, map};
use std::ops::Index;

/// Resolved key to value mapping produced by the extraction.
///
/// Iteration follows field declaration order, a key written twice keeps the position of its
/// first insertion and the value of the last one.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Mapping<'a> {
    entries: IndexMap<&'a str, Value<'a>>,
}

impl<'a> Mapping<'a> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value<'a>> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the previous value of `key`, if any.
    pub fn insert(&mut self, key: &'a str, value: Value<'a>) -> Option<Value<'a>> {
        self.entries.insert(key, value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value<'a>> {
        self.entries.shift_remove(key)
    }

    /// Copies every entry of `other` into `self`, values from `other` win.
    pub fn merge(&mut self, other: Mapping<'a>) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> map::Iter<'_, &'a str, Value<'a>> {
        self.entries.iter()
    }

    /// Keys in order, the column list of a statement.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &'a str> + '_ {
        self.entries.keys().copied()
    }

    /// Values in the same order as [`Mapping::keys`].
    pub fn values(&self) -> map::Values<'_, &'a str, Value<'a>> {
        self.entries.values()
    }
}

impl<'a> Index<&str> for Mapping<'a> {
    type Output = Value<'a>;

    fn index(&self, key: &str) -> &Self::Output {
        self.entries
            .get(key)
            .unwrap_or_else(|| panic!("Key `{key}` is not present in the mapping"))
    }
}

impl<'a> IntoIterator for Mapping<'a> {
    type Item = (&'a str, Value<'a>);
    type IntoIter = map::IntoIter<&'a str, Value<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'m, 'a> IntoIterator for &'m Mapping<'a> {
    type Item = (&'m &'a str, &'m Value<'a>);
    type IntoIter = map::Iter<'m, &'a str, Value<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a> FromIterator<(&'a str, Value<'a>)> for Mapping<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a str, Value<'a>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> Extend<(&'a str, Value<'a>)> for Mapping<'a> {
    fn extend<I: IntoIterator<Item = (&'a str, Value<'a>)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
