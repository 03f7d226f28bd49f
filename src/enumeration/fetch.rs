use std::borrow::Cow;

use crate::error::{Error, Result};

use super::Enum;

type OnMissing<'f, V> = Box<dyn FnOnce(&str) -> V + 'f>;

/// What [`Enum::fetch_with`] falls back to when the key is missing.
///
/// At most one default is accepted. A callback, when present, takes
/// precedence over the default and is called with the missing key.
pub struct Fetch<'f, V> {
    defaults: Vec<V>,
    on_missing: Option<OnMissing<'f, V>>,
}

impl<'f, V> Fetch<'f, V> {
    pub fn new() -> Self {
        Self { defaults: Vec::new(), on_missing: None }
    }

    pub fn or(mut self, default: V) -> Self {
        self.defaults.push(default);
        self
    }

    pub fn or_else(mut self, on_missing: impl FnOnce(&str) -> V + 'f) -> Self {
        self.on_missing = Some(Box::new(on_missing));
        self
    }
}

impl<V> Default for Fetch<'_, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Enum<V> {
    /// Same as [`Enum::value`].
    pub fn fetch(&self, key: &str) -> Result<&V> {
        self.value(key)
    }
}

impl<V: Clone> Enum<V> {
    /// Look up `key`, falling back to `fallback` on a miss. Errors other than
    /// a missing key are never swallowed.
    pub fn fetch_with(&self, key: &str, fallback: Fetch<'_, V>) -> Result<Cow<'_, V>> {
        let Fetch { mut defaults, on_missing } = fallback;
        if defaults.len() > 1 {
            return Err(Error::Arity { given: defaults.len() + 1 });
        }
        if on_missing.is_some() && !defaults.is_empty() {
            tracing::warn!(key, "block supersedes default value argument");
        }

        match self.value(key) {
            Ok(value) => Ok(Cow::Borrowed(value)),
            Err(err) if err.is_key_not_found() => match (on_missing, defaults.pop()) {
                (Some(on_missing), _) => Ok(Cow::Owned(on_missing(key))),
                (None, Some(default)) => Ok(Cow::Owned(default)),
                (None, None) => Err(err),
            },
            Err(err) => Err(err),
        }
    }

    pub fn fetch_or(&self, key: &str, default: V) -> Cow<'_, V> {
        self.get(key).map_or(Cow::Owned(default), Cow::Borrowed)
    }

    pub fn fetch_or_else(&self, key: &str, on_missing: impl FnOnce(&str) -> V) -> Cow<'_, V> {
        match self.get(key) {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned(on_missing(key)),
        }
    }
}
