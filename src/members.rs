//! Named-member tables and unordered enumeration over them.
//!
//! [`MemberLister`] is the seam the rest of the crate uses to look at a
//! type's own members: it lists names and resolves values, with no promise
//! about order. [`ConstTable`] is the stock implementation, a plain hash map,
//! so its listing order really is arbitrary.
//!
//! If stable ordering matters, wrap the table in [`crate::OrderedConsts`].
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

static MEMBER_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("member name pattern is valid")
});

/// Reject names that are not identifier-like. Scope-delimited paths like
/// `Outer::INNER` never name a member.
pub fn validate_name(name: &str) -> Result<()> {
    if MEMBER_NAME.is_match(name) {
        Ok(())
    } else {
        Err(Error::InvalidName { name: name.to_string() })
    }
}

pub trait MemberLister {
    type Value;

    /// Own member names, in whatever order the backing store yields them.
    fn member_names(&self) -> Vec<String>;

    fn member_value(&self, name: &str) -> Option<&Self::Value>;

    fn has_member(&self, name: &str) -> bool {
        self.member_value(name).is_some()
    }
}

/// A [`MemberLister`] that members can be added to and removed from.
pub trait MemberTable: MemberLister {
    /// Returns the previous value when `name` was already defined.
    fn define_member(&mut self, name: String, value: Self::Value) -> Result<Option<Self::Value>>;

    fn remove_member(&mut self, name: &str) -> Option<Self::Value>;
}

// ------------------------------ ConstTable -------------------------------- //

#[derive(Debug, Clone)]
pub struct ConstTable<V> {
    consts: HashMap<String, V>,
}

impl<V> ConstTable<V> {
    pub fn new() -> Self {
        Self { consts: HashMap::new() }
    }

    pub fn const_set(&mut self, name: impl Into<String>, value: V) -> Result<Option<V>> {
        let name = name.into();
        validate_name(&name)?;
        Ok(self.consts.insert(name, value))
    }

    pub fn const_get(&self, name: &str) -> Option<&V> {
        self.consts.get(name)
    }

    pub fn remove_const(&mut self, name: &str) -> Option<V> {
        self.consts.remove(name)
    }

    /// Names in hash order. Unspecified; may differ between runs.
    pub fn constants(&self) -> impl Iterator<Item = &str> {
        self.consts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.consts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consts.is_empty()
    }
}

impl<V> Default for ConstTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> MemberLister for ConstTable<V> {
    type Value = V;

    fn member_names(&self) -> Vec<String> {
        self.constants().map(str::to_string).collect()
    }

    fn member_value(&self, name: &str) -> Option<&V> {
        self.const_get(name)
    }
}

impl<V> MemberTable for ConstTable<V> {
    fn define_member(&mut self, name: String, value: V) -> Result<Option<V>> {
        self.const_set(name, value)
    }

    fn remove_member(&mut self, name: &str) -> Option<V> {
        self.remove_const(name)
    }
}

// ---------------------------- ConstEnumerable ----------------------------- //

/// Hash-like enumeration over any [`MemberLister`], in raw listing order.
///
/// Cheaper than [`crate::OrderedConsts`], but the order is not guaranteed to
/// be stable across calls.
pub trait ConstEnumerable: MemberLister {
    fn const_names(&self) -> Vec<String> {
        self.member_names()
    }

    fn const_values(&self) -> Vec<&Self::Value> {
        self.member_names()
            .iter()
            .filter_map(|name| self.member_value(name))
            .collect()
    }

    fn const_pairs(&self) -> Vec<(String, &Self::Value)> {
        self.member_names()
            .into_iter()
            .filter_map(|name| {
                let value = self.member_value(&name)?;
                Some((name, value))
            })
            .collect()
    }
}

impl<T: MemberLister + ?Sized> ConstEnumerable for T {}
