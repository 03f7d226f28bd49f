use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::members::{ConstTable, validate_name};
use crate::registry::OrderedConsts;
use crate::sequence::Sequence;
use crate::successor::Successor;

use super::{BASE_NAME, Enum};

/// Collects member declarations, then seals them into an [`Enum`].
///
/// Members are written to a [`ConstTable`] and their order is tracked by
/// [`OrderedConsts`], so [`EnumBuilder::build`] yields them in declaration
/// order. `C` is the counter type of the builder's [`Sequence`], used by the
/// `auto*` declarations.
pub struct EnumBuilder<V, C = i64> {
    name: Option<String>,
    consts: OrderedConsts<ConstTable<V>>,
    seq: Option<Sequence<C, V>>,
}

impl<V, C> EnumBuilder<V, C> {
    pub fn new() -> Self {
        Self { name: None, consts: OrderedConsts::new(), seq: None }
    }

    /// Adopt a table that already has members. Those sort by name, ahead of
    /// anything declared through the builder.
    pub fn from_table(table: ConstTable<V>) -> Self {
        Self { name: None, consts: OrderedConsts::extend(table), seq: None }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_sequence(mut self, seq: Sequence<C, V>) -> Self {
        self.seq = Some(seq);
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(BASE_NAME)
    }

    /// Declare `name`. Redeclaring keeps the member's position and
    /// replaces its value.
    pub fn constant(&mut self, name: impl Into<String>, value: V) -> Result<&mut Self> {
        let name = name.into();
        if self.consts.const_set(name.clone(), value)?.is_some() {
            tracing::warn!(enum_name = self.display_name(), %name, "already initialized constant");
        }
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.consts.const_get(name)
    }

    /// Names declared so far, in order.
    pub fn keys(&self) -> Vec<String> {
        self.consts.const_names()
    }

    /// Pairs declared so far, in order.
    pub fn pairs(&self) -> Vec<(String, &V)> {
        self.consts.const_pairs()
    }

    pub fn len(&self) -> usize {
        self.consts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consts.is_empty()
    }

    /// Seal the declarations.
    pub fn build(self) -> Enum<V> {
        let (mut table, registry) = self.consts.into_parts();
        let mut pairs = IndexMap::with_capacity(table.len());
        for name in registry.names(&table) {
            if let Some(value) = table.remove_const(&name) {
                pairs.insert(name, value);
            }
        }
        tracing::debug!(
            enum_name = self.name.as_deref().unwrap_or(BASE_NAME),
            members = pairs.len(),
            "sealed enum"
        );
        Enum::from_parts(self.name, pairs)
    }
}

impl<V, C> Default for EnumBuilder<V, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C> EnumBuilder<V, C>
where
    C: Successor + Default + 'static,
{
    /// Declare `name` with the first value of a new `step`, counting from zero.
    pub fn auto_with(
        &mut self,
        name: impl Into<String>,
        step: impl FnMut(&C) -> V + 'static,
    ) -> Result<&mut Self> {
        let name = name.into();
        validate_name(&name)?;
        let value = match self.seq.as_mut() {
            Some(seq) => seq.next_with(step)?,
            None => self.seq.insert(Sequence::with_step(step)).next()?,
        };
        self.constant(name, value)
    }

    /// Declare `name` with a new `step` applied to `initial`.
    pub fn auto_from_with(
        &mut self,
        name: impl Into<String>,
        initial: C,
        step: impl FnMut(&C) -> V + 'static,
    ) -> Result<&mut Self> {
        let name = name.into();
        validate_name(&name)?;
        let value = match self.seq.as_mut() {
            Some(seq) => seq.next_from_with(initial, step)?,
            None => self.seq.insert(Sequence::with_step(step)).next_from(initial)?,
        };
        self.constant(name, value)
    }

    /// Declare `name` with the next value of the sequence an earlier
    /// `auto*` call or [`EnumBuilder::with_sequence`] set up. Unlike
    /// [`EnumBuilder::auto`], this never creates a sequence, so it works for
    /// values that have no conversion from the counter.
    pub fn auto_next(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        let name = name.into();
        validate_name(&name)?;
        let seq = self.seq.as_mut().ok_or_else(|| Error::NoSequence {
            enum_name: self.name.as_deref().unwrap_or(BASE_NAME).to_string(),
        })?;
        let value = seq.next()?;
        self.constant(name, value)
    }
}

impl<V, C> EnumBuilder<V, C>
where
    C: Successor + Default + Clone + 'static,
    V: From<C>,
{
    /// The builder's sequence, created on first use.
    pub fn sequence_mut(&mut self) -> &mut Sequence<C, V> {
        self.seq.get_or_insert_with(Sequence::new)
    }

    /// Declare `name` with the sequence's next value.
    pub fn auto(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        let name = name.into();
        validate_name(&name)?;
        let value = self.sequence_mut().next()?;
        self.constant(name, value)
    }

    /// Declare `name` with the sequence restarted at `initial`.
    pub fn auto_from(&mut self, name: impl Into<String>, initial: C) -> Result<&mut Self> {
        let name = name.into();
        validate_name(&name)?;
        let value = self.sequence_mut().next_from(initial)?;
        self.constant(name, value)
    }
}
