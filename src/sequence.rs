//! Sequence generator ("auto"): successive values for members that have no
//! explicit literal, like `iota` in Go or `enum.auto` in Python.
//!
//! A [`Sequence`] holds a counter and a step function. Each call maps the
//! counter through the step, returns the result, then advances the counter
//! with [`Successor::successor`]. A counter that overflows still yields its
//! last value; the call after that fails until the counter is restarted.
//!
//! Not thread-safe, and not meant to outlive the declaration it feeds.
//!
//! ```
//! use ordered_enum::Sequence;
//!
//! let mut binary = Sequence::<u32, u64>::new();
//! assert_eq!(binary.next_with(|n| 1 << (10 * n)).unwrap(), 1);
//! assert_eq!(binary.next().unwrap(), 1 << 10);
//! assert_eq!(binary.next().unwrap(), 1 << 20);
//! ```
use std::fmt;

use crate::error::{Error, Result};
use crate::successor::Successor;

type Step<C, V> = Box<dyn FnMut(&C) -> V>;

pub struct Sequence<C = i64, V = C> {
    /// `None` until first use; reads as `C::default()`.
    counter: Option<C>,
    step: Step<C, V>,
    /// Set once the counter has run past its type's maximum.
    exhausted: Option<Error>,
}

impl<C, V> Sequence<C, V>
where
    C: Clone + 'static,
    V: From<C>,
{
    /// Identity sequence: yields the counter itself, starting at zero.
    pub fn new() -> Self {
        Self::with_step(|c: &C| V::from(c.clone()))
    }
}

impl<C, V> Default for Sequence<C, V>
where
    C: Clone + 'static,
    V: From<C>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, V> Sequence<C, V> {
    pub fn with_step(step: impl FnMut(&C) -> V + 'static) -> Self {
        Self { counter: None, step: Box::new(step), exhausted: None }
    }

    /// Counter value the next call will map, if one has been set or produced.
    pub fn counter(&self) -> Option<&C> {
        self.counter.as_ref()
    }

    /// Forget the counter. The step function is kept.
    pub fn reset(&mut self) {
        self.counter = None;
        self.exhausted = None;
    }
}

impl<C, V> Sequence<C, V>
where
    C: Successor + Default,
{
    /// Map the current counter, then advance it.
    pub fn next(&mut self) -> Result<V> {
        if let Some(err) = &self.exhausted {
            return Err(err.clone());
        }
        let counter = self.counter.get_or_insert_with(C::default);
        let value = (self.step)(counter);
        match counter.successor() {
            Ok(next) => *counter = next,
            Err(err @ Error::Overflow { .. }) => self.exhausted = Some(err),
            Err(err) => return Err(err),
        }
        Ok(value)
    }

    /// Restart the counter at `initial`, keeping the step.
    pub fn next_from(&mut self, initial: C) -> Result<V> {
        self.counter = Some(initial);
        self.exhausted = None;
        self.next()
    }

    /// Replace the step and restart the counter at zero.
    pub fn next_with(&mut self, step: impl FnMut(&C) -> V + 'static) -> Result<V> {
        self.step = Box::new(step);
        self.counter = Some(C::default());
        self.exhausted = None;
        self.next()
    }

    pub fn next_from_with(
        &mut self,
        initial: C,
        step: impl FnMut(&C) -> V + 'static,
    ) -> Result<V> {
        self.step = Box::new(step);
        self.counter = Some(initial);
        self.exhausted = None;
        self.next()
    }
}

impl<C: fmt::Debug, V> fmt::Debug for Sequence<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("counter", &self.counter)
            .field("exhausted", &self.exhausted.is_some())
            .finish_non_exhaustive()
    }
}
