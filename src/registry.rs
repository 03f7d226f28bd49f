//! Stable, insertion-ordered enumeration of named members.
//!
//! [`MemberLister`] implementations make no ordering promise, so order is
//! tracked on the side: every member defined through [`OrderedConsts`] is
//! recorded in an [`OrderRegistry`], and enumeration walks the registry,
//! filtered against the members that are still live.
//!
//! Members that already existed when the registry was attached carry no
//! insertion information. They are sorted by name, which is stable but not
//! necessarily the order they were defined in, and come before everything
//! recorded afterwards.
use indexmap::IndexSet;

use crate::error::Result;
use crate::members::{MemberLister, MemberTable};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderRegistry {
    // An IndexSet dedups like a set and remembers first insertion.
    order: IndexSet<String>,
}

impl OrderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catch up on members `lister` already has, sorted by name.
    pub fn attach<L: MemberLister + ?Sized>(lister: &L) -> Self {
        let mut existing = lister.member_names();
        existing.sort_unstable();
        tracing::trace!(count = existing.len(), "attaching order registry to existing members");

        let mut registry = Self::new();
        for name in existing {
            registry.record(name);
        }
        registry
    }

    /// Append `name` unless it is already recorded.
    pub fn record(&mut self, name: impl Into<String>) {
        self.order.insert(name.into());
    }

    /// Recorded names in order, keeping only those `lister` still has.
    pub fn names<L: MemberLister + ?Sized>(&self, lister: &L) -> Vec<String> {
        self.order
            .iter()
            .filter(|name| lister.has_member(name))
            .cloned()
            .collect()
    }

    /// Everything ever recorded, live or not.
    pub fn recorded(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// ------------------------------ OrderedConsts ----------------------------- //

/// A member table whose enumeration follows definition order.
#[derive(Debug, Clone)]
pub struct OrderedConsts<T> {
    table: T,
    registry: OrderRegistry,
}

impl<T: MemberTable + Default> OrderedConsts<T> {
    pub fn new() -> Self {
        Self { table: T::default(), registry: OrderRegistry::new() }
    }
}

impl<T: MemberTable + Default> Default for OrderedConsts<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MemberTable> OrderedConsts<T> {
    /// Start tracking `table`. Its current members are ordered by name.
    pub fn extend(table: T) -> Self {
        let registry = OrderRegistry::attach(&table);
        Self { table, registry }
    }

    /// Define (or redefine) a member. A redefined member keeps its position.
    pub fn const_set(
        &mut self,
        name: impl Into<String>,
        value: T::Value,
    ) -> Result<Option<T::Value>> {
        let name = name.into();
        let previous = self.table.define_member(name.clone(), value)?;
        self.registry.record(name);
        Ok(previous)
    }

    pub fn const_get(&self, name: &str) -> Option<&T::Value> {
        self.table.member_value(name)
    }

    pub fn remove_const(&mut self, name: &str) -> Option<T::Value> {
        self.table.remove_member(name)
    }

    pub fn const_names(&self) -> Vec<String> {
        self.registry.names(&self.table)
    }

    pub fn const_values(&self) -> Vec<&T::Value> {
        self.const_pairs().into_iter().map(|(_, value)| value).collect()
    }

    pub fn const_pairs(&self) -> Vec<(String, &T::Value)> {
        self.const_names()
            .into_iter()
            .filter_map(|name| {
                let value = self.table.member_value(&name)?;
                Some((name, value))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.const_names().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn registry(&self) -> &OrderRegistry {
        &self.registry
    }

    pub fn into_parts(self) -> (T, OrderRegistry) {
        (self.table, self.registry)
    }
}
