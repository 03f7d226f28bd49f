//! Immutable enum types built from ordered name/value pairs.
//!
//! An [`Enum`] is a sealed mapping: its members are fixed once built, and its
//! pairs always iterate in declaration order. New enums are derived from
//! existing ones with [`Enum::merge`] and [`Enum::slice`]; nothing mutates an
//! enum in place.
//!
//! ```
//! use ordered_enum::Enum;
//!
//! let mut builder = Enum::<i64>::builder().named("CardinalDirection");
//! builder.constant("NORTH", 0)?.constant("EAST", 90)?;
//! builder.constant("SOUTH", 180)?.constant("WEST", 270)?;
//! let direction = builder.build();
//!
//! assert_eq!(direction.keys().collect::<Vec<_>>(), ["NORTH", "EAST", "SOUTH", "WEST"]);
//! assert_eq!(direction.value("SOUTH")?, &180);
//! assert_eq!(direction.key(&270)?, "WEST");
//! assert!(direction.matches(&90));
//! assert_eq!(
//!     direction.to_string(),
//!     "#<CardinalDirection NORTH=0 EAST=90 SOUTH=180 WEST=270>"
//! );
//! # Ok::<(), ordered_enum::Error>(())
//! ```
pub mod builder;
pub mod fetch;
pub mod render;
mod serde_impl;

use std::fmt::Debug;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::inflect;

pub use builder::EnumBuilder;
pub use fetch::Fetch;
pub use render::DEFAULT_WIDTH;

/// Marks a nested-scope path (`Outer::INNER`). Keys containing it never
/// resolve.
pub const SCOPE_SEPARATOR: char = ':';

/// Display name of enums that were never given one.
pub const BASE_NAME: &str = "Enum";

pub struct Enum<V> {
    inner: Arc<Table<V>>,
}

struct Table<V> {
    name: Option<String>,
    pairs: IndexMap<String, V>,
}

impl<V> Clone for Enum<V> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

fn is_scoped(key: &str) -> bool {
    key.contains(SCOPE_SEPARATOR)
}

// ------------------------------ Construction ------------------------------ //

impl<V> Enum<V> {
    /// Pairs are trusted: names unique, validated and in final order.
    pub(crate) fn from_parts(name: Option<String>, pairs: IndexMap<String, V>) -> Self {
        Self { inner: Arc::new(Table { name, pairs }) }
    }

    pub fn builder() -> EnumBuilder<V> {
        EnumBuilder::new()
    }

    /// An anonymous enum from explicit pairs, in the given order.
    pub fn from_pairs<P, N>(pairs: P) -> Result<Self>
    where
        P: IntoIterator<Item = (N, V)>,
        N: Into<String>,
    {
        let mut builder = Self::builder();
        for (name, value) in pairs {
            builder.constant(name, value)?;
        }
        Ok(builder.build())
    }

    /// Build an anonymous enum. `auto_keys` are valued 0, 1, 2, ... by a fresh
    /// sequence; `pairs` follow in the order given.
    ///
    /// Auto keys need `V: From<i64>`. For values without that conversion,
    /// such as `&str`, list every member explicitly with [`Enum::from_pairs`].
    pub fn define<A, K, P, N>(auto_keys: A, pairs: P) -> Result<Self>
    where
        A: IntoIterator<Item = K>,
        K: Into<String>,
        P: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: From<i64>,
    {
        Self::define_with(auto_keys, pairs, |_| Ok(()))
    }

    /// Like [`Enum::define`], then hands the builder to `block` for any
    /// further declarations. `block` runs after every other member is set.
    pub fn define_with<A, K, P, N, F>(auto_keys: A, pairs: P, block: F) -> Result<Self>
    where
        A: IntoIterator<Item = K>,
        K: Into<String>,
        P: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: From<i64>,
        F: FnOnce(&mut EnumBuilder<V>) -> Result<()>,
    {
        let mut builder = Self::builder();
        for key in auto_keys {
            builder.auto(key)?;
        }
        for (key, value) in pairs {
            builder.constant(key, value)?;
        }
        block(&mut builder)?;
        Ok(builder.build())
    }

    /// Enums cannot be specialized further. Member lookup only ever consults
    /// one level; combine enums with [`Enum::merge`] instead.
    pub fn subclass(&self) -> Result<EnumBuilder<V>> {
        Err(Error::Inheritance { parent: self.display_name().to_string() })
    }
}

// -------------------------------- Queries --------------------------------- //

impl<V> Enum<V> {
    pub fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    pub fn display_name(&self) -> &str {
        self.name().unwrap_or(BASE_NAME)
    }

    /// Whether both handles refer to the same enum, not just equal pairs.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + DoubleEndedIterator {
        self.inner.pairs.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + DoubleEndedIterator {
        self.inner.pairs.values()
    }

    pub fn pairs(&self) -> impl ExactSizeIterator<Item = (&str, &V)> + DoubleEndedIterator {
        self.inner.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, V> {
        self.inner.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.pairs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        if is_scoped(key) {
            return None;
        }
        self.inner.pairs.get(key)
    }

    pub fn value(&self, key: &str) -> Result<&V> {
        if is_scoped(key) {
            return Err(Error::ScopedKey { key: key.to_string(), receiver: self.receiver() });
        }
        self.inner
            .pairs
            .get(key)
            .ok_or_else(|| Error::KeyNotFound { key: key.to_string(), receiver: self.receiver() })
    }

    /// Values for `keys`, in the order of `keys`.
    pub fn values_at<I, K>(&self, keys: I) -> Result<Vec<&V>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        keys.into_iter().map(|key| self.value(key.as_ref())).collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn contains_value<Q>(&self, target: &Q) -> bool
    where
        Q: ?Sized,
        V: PartialEq<Q>,
    {
        self.values().any(|value| value == target)
    }

    /// Membership test for dispatching on which enum a value belongs to.
    ///
    /// ```
    /// # use ordered_enum::Enum;
    /// let success = Enum::from_pairs([("OK", 200), ("CREATED", 201)])?;
    /// let redirect = Enum::from_pairs([("MOVED_PERMANENTLY", 301)])?;
    ///
    /// let class = match 301 {
    ///     status if success.matches(&status) => "success",
    ///     status if redirect.matches(&status) => "redirect",
    ///     _ => "other",
    /// };
    /// assert_eq!(class, "redirect");
    /// # Ok::<(), ordered_enum::Error>(())
    /// ```
    pub fn matches<Q>(&self, candidate: &Q) -> bool
    where
        Q: ?Sized,
        V: PartialEq<Q>,
    {
        self.contains_value(candidate)
    }

    /// First key, in iteration order, whose value equals `target`.
    pub fn key<Q>(&self, target: &Q) -> Result<&str>
    where
        Q: ?Sized + Debug,
        V: PartialEq<Q>,
    {
        self.pairs()
            .find(|(_, value)| *value == target)
            .map(|(key, _)| key)
            .ok_or_else(|| Error::ValueNotFound {
                value: format!("{target:?}"),
                receiver: self.receiver(),
            })
    }

    pub fn as_map(&self) -> &IndexMap<String, V> {
        &self.inner.pairs
    }

    fn receiver(&self) -> String {
        self.display_name().to_string()
    }
}

// ------------------------------ Derivation -------------------------------- //

impl<V: Clone> Enum<V> {
    /// Union of `self` and `others`; later values win on repeated keys.
    ///
    /// Keys keep the order they are first seen in: `self`'s keys, then each
    /// new key of each argument in turn. With no arguments, returns `self`.
    pub fn merge<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Enum<V>>,
        V: 'a,
    {
        self.merge_with(others, |_, _, incoming| incoming)
    }

    /// Like [`Enum::merge`], but every repeated key is settled by
    /// `resolve(key, previous, incoming)`. Its result becomes `previous` for
    /// the next repeat of that key.
    pub fn merge_with<'a, I, F>(&self, others: I, mut resolve: F) -> Self
    where
        I: IntoIterator<Item = &'a Enum<V>>,
        V: 'a,
        F: FnMut(&str, V, V) -> V,
    {
        let others: Vec<&Enum<V>> = others.into_iter().collect();
        if others.is_empty() {
            return self.clone();
        }

        let mut merged = self.inner.pairs.clone();
        for other in others {
            for (key, incoming) in other.pairs() {
                match merged.get_mut(key) {
                    Some(slot) => {
                        tracing::trace!(key, "merge: repeated key");
                        *slot = resolve(key, slot.clone(), incoming.clone());
                    }
                    None => {
                        merged.insert(key.to_string(), incoming.clone());
                    }
                }
            }
        }
        Self::from_parts(None, merged)
    }

    /// A new anonymous enum of exactly `keys`, in that order.
    pub fn slice<I, K>(&self, keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut sliced = IndexMap::new();
        for key in keys {
            let key = key.as_ref();
            sliced.insert(key.to_string(), self.value(key)?.clone());
        }
        Ok(Self::from_parts(None, sliced))
    }

    pub fn to_map(&self) -> IndexMap<String, V> {
        self.inner.pairs.clone()
    }

    /// Pairs keyed by snake_cased names, for use as attribute/field names.
    pub fn to_attribute(&self) -> IndexMap<String, V> {
        self.pairs()
            .map(|(key, value)| (inflect::underscore(key), value.clone()))
            .collect()
    }
}

impl<'a, V> IntoIterator for &'a Enum<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = indexmap::map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    pub(crate) fn cardinal_direction() -> Enum<i64> {
        let mut builder = Enum::builder().named("CardinalDirection");
        builder.constant("NORTH", 0).unwrap();
        builder.constant("EAST", 90).unwrap();
        builder.constant("SOUTH", 180).unwrap();
        builder.constant("WEST", 270).unwrap();
        builder.build()
    }

    fn anonymous(pairs: &[(&str, &'static str)]) -> Enum<&'static str> {
        Enum::from_pairs(pairs.iter().copied()).unwrap()
    }

    fn empty() -> Enum<i64> {
        Enum::builder().named("Empty").build()
    }

    #[test]
    fn queries_follow_declaration_order() {
        let subject = cardinal_direction();
        assert_eq!(subject.keys().collect::<Vec<_>>(), ["NORTH", "EAST", "SOUTH", "WEST"]);
        assert_eq!(subject.values().copied().collect::<Vec<_>>(), [0, 90, 180, 270]);
        assert_eq!(
            subject.pairs().collect::<Vec<_>>(),
            [("NORTH", &0), ("EAST", &90), ("SOUTH", &180), ("WEST", &270)]
        );
        assert_eq!(subject.len(), 4);
        assert!(!subject.is_empty());
    }

    #[test]
    fn empty_enums_have_nothing_to_enumerate() {
        let subject = empty();
        assert!(subject.is_empty());
        assert_eq!(subject.len(), 0);
        assert_eq!(subject.keys().count(), 0);
        assert_eq!(subject.values().count(), 0);
        assert_eq!(subject.pairs().count(), 0);
        assert!(subject.to_map().is_empty());
    }

    #[test]
    fn value_reports_the_key_and_receiver() {
        let subject = cardinal_direction();
        assert_eq!(subject.value("EAST"), Ok(&90));

        let err = subject.value("UP").unwrap_err();
        assert_eq!(
            err,
            Error::KeyNotFound { key: "UP".into(), receiver: "CardinalDirection".into() }
        );
        assert_eq!(err.to_string(), r#"key not found: "UP""#);
    }

    #[test]
    fn scoped_keys_never_resolve() {
        let subject = cardinal_direction();
        for key in ["CardinalDirection::NORTH", "::NORTH", "NORTH:"] {
            let err = subject.value(key).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::KeyNotFound);
            assert_eq!(err.to_string(), format!("cannot use scoped enum key: {key:?}"));
            assert!(!subject.contains_key(key));
            assert_eq!(subject.get(key), None);
        }
    }

    #[test]
    fn values_at_follows_the_requested_order() {
        let subject = cardinal_direction();
        assert_eq!(subject.values_at(["WEST", "NORTH"]), Ok(vec![&270, &0]));
        assert_eq!(subject.values_at(Vec::<String>::new()), Ok(vec![]));
        assert!(subject.values_at(["NORTH", "UP"]).is_err());
    }

    #[test]
    fn key_returns_the_first_match() {
        let subject = anonymous(&[("FOO", "same"), ("BAR", "other"), ("BAZ", "same")]);
        assert_eq!(subject.key(&"same"), Ok("FOO"));
        assert_eq!(subject.key(&"other"), Ok("BAR"));

        let err = subject.key(&"missing").unwrap_err();
        assert_eq!(err.to_string(), r#"no key found for value: "missing""#);
        assert_eq!(err.receiver(), Some(BASE_NAME));
    }

    #[test]
    fn presence_checks() {
        let subject = cardinal_direction();
        assert!(subject.contains_key("NORTH"));
        assert!(!subject.contains_key("north"));
        assert!(subject.contains_value(&180));
        assert!(!subject.contains_value(&45));
        assert!(subject.matches(&0));
        assert!(!empty().matches(&0));
    }

    #[test]
    fn subclassing_an_enum_fails() {
        let err = cardinal_direction().subclass().err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Inheritance);
        assert_eq!(err.to_string(), "cannot subclass enum CardinalDirection");

        let err = Enum::<i64>::builder().build().subclass().err().unwrap();
        assert_eq!(err.to_string(), "cannot subclass enum Enum");
    }

    #[test]
    fn define_values_auto_keys_from_zero() {
        let subject = Enum::<i64>::define(["FOO", "BAR", "BAZ"], std::iter::empty::<(&str, i64)>())
            .unwrap();
        assert_eq!(subject.pairs().collect::<Vec<_>>(), [("FOO", &0), ("BAR", &1), ("BAZ", &2)]);

        // every call starts its own sequence
        let again = Enum::<i64>::define(["QUX"], std::iter::empty::<(&str, i64)>()).unwrap();
        assert_eq!(again.value("QUX"), Ok(&0));
    }

    #[test]
    fn define_takes_explicit_pairs_in_order() {
        let pairs = [("FOO", 123), ("BAR", 456), ("BAZ", 789)];
        let subject = Enum::<i64>::define(Vec::<String>::new(), pairs).unwrap();
        assert_eq!(subject.to_map(), IndexMap::from([
            ("FOO".to_string(), 123i64),
            ("BAR".to_string(), 456),
            ("BAZ".to_string(), 789),
        ]));
    }

    #[test]
    fn explicit_only_enums_take_any_value_type() {
        let subject = Enum::<&str>::from_pairs([("FOO", "foo"), ("BAR", "bar")]).unwrap();
        assert_eq!(subject.value("BAR"), Ok(&"bar"));
        assert_eq!(subject.key(&"foo"), Ok("FOO"));
    }

    #[test]
    fn define_runs_the_block_last() {
        let mut seen = Vec::new();
        let subject = Enum::<serde_json::Value>::define_with(
            ["FOO"],
            [("BAR", serde_json::Value::from("kwarg"))],
            |builder| {
                seen = builder.keys();
                builder.constant("BAZ", "block".into())?;
                Ok(())
            },
        )
        .unwrap();

        assert_eq!(seen, ["FOO", "BAR"]);
        assert_eq!(
            subject.to_map(),
            IndexMap::from([
                ("FOO".to_string(), serde_json::json!(0)),
                ("BAR".to_string(), serde_json::json!("kwarg")),
                ("BAZ".to_string(), serde_json::json!("block")),
            ])
        );
    }

    #[test]
    fn define_fails_before_producing_an_enum() {
        let err = Enum::<i64>::define(["GOOD", "not good"], std::iter::empty::<(&str, i64)>())
            .err()
            .unwrap();
        assert_eq!(err, Error::InvalidName { name: "not good".into() });

        let err = Enum::<i64>::define_with(
            Vec::<&str>::new(),
            std::iter::empty::<(&str, i64)>(),
            |_| Err(Error::Arity { given: 9 }),
        )
        .err()
        .unwrap();
        assert_eq!(err, Error::Arity { given: 9 });
    }

    #[test]
    fn merge_combines_into_a_new_enum() {
        let a = anonymous(&[("FOO", "foo")]);
        let b = anonymous(&[("BAR", "bar")]);
        let c = anonymous(&[("BAZ", "baz")]);

        let merged = a.merge([&b, &c]);
        assert!(!Enum::ptr_eq(&a, &merged));
        assert_eq!(merged.pairs().collect::<Vec<_>>(), [
            ("FOO", &"foo"),
            ("BAR", &"bar"),
            ("BAZ", &"baz"),
        ]);
        assert_eq!(merged.name(), None);
    }

    fn overlapping() -> (Enum<&'static str>, Enum<&'static str>, Enum<&'static str>) {
        let a = anonymous(&[("FOO", "foo_a"), ("BAR", "bar_a")]);
        let b = anonymous(&[("BAZ", "baz_b"), ("FOO", "foo_b"), ("BAR", "bar_b")]);
        let c = anonymous(&[
            ("QUX", "qux_c"),
            ("BAR", "bar_c"),
            ("FOO", "foo_c"),
            ("BAZ", "baz_c"),
        ]);
        (a, b, c)
    }

    #[test]
    fn merge_keeps_first_seen_order_and_last_value() {
        let (a, b, c) = overlapping();
        let merged = a.merge([&b, &c]);
        assert_eq!(merged.pairs().collect::<Vec<_>>(), [
            ("FOO", &"foo_c"),
            ("BAR", &"bar_c"),
            ("BAZ", &"baz_c"),
            ("QUX", &"qux_c"),
        ]);
    }

    #[test]
    fn merge_resolver_sees_every_repeat() {
        let (a, b, c) = overlapping();
        let mut calls = Vec::new();
        a.merge_with([&b, &c], |key, previous, incoming| {
            calls.push((key.to_string(), previous, incoming));
            incoming
        });

        assert_eq!(calls, [
            ("FOO".to_string(), "foo_a", "foo_b"),
            ("BAR".to_string(), "bar_a", "bar_b"),
            ("BAR".to_string(), "bar_b", "bar_c"),
            ("FOO".to_string(), "foo_b", "foo_c"),
            ("BAZ".to_string(), "baz_b", "baz_c"),
        ]);
    }

    #[test]
    fn merge_resolver_result_is_threaded_forward() {
        let a = Enum::from_pairs([("X", 1)]).unwrap();
        let b = Enum::from_pairs([("X", 2)]).unwrap();
        let c = Enum::from_pairs([("X", 3)]).unwrap();
        let summed = a.merge_with([&b, &c], |_, previous, incoming| previous + incoming);
        assert_eq!(summed.value("X"), Ok(&6));
    }

    #[test]
    fn merge_right_biased() {
        let a = Enum::from_pairs([("X", 1)]).unwrap();
        let b = Enum::from_pairs([("X", 2), ("Y", 3)]).unwrap();
        assert_eq!(a.merge([&b]).pairs().collect::<Vec<_>>(), [("X", &2), ("Y", &3)]);
    }

    #[test]
    fn merge_of_empties_is_empty() {
        let a = Enum::<i64>::builder().build();
        let merged = a.merge([&Enum::builder().build(), &Enum::builder().build()]);
        assert!(merged.is_empty());
    }

    #[test]
    fn merge_without_arguments_is_identity() {
        let subject = cardinal_direction();
        let merged = subject.merge([]);
        assert!(Enum::ptr_eq(&subject, &merged));
        assert_eq!(merged.name(), Some("CardinalDirection"));
    }

    #[test]
    fn slice_projects_in_the_given_order() {
        let subject = cardinal_direction();
        let sliced = subject.slice(["WEST", "NORTH"]).unwrap();
        assert_eq!(sliced.pairs().collect::<Vec<_>>(), [("WEST", &270), ("NORTH", &0)]);
        assert_eq!(sliced.name(), None);
    }

    #[test]
    fn slice_with_no_keys_is_a_new_empty_enum() {
        let subject = cardinal_direction();
        let sliced = subject.slice(Vec::<&str>::new()).unwrap();
        assert!(sliced.is_empty());
        assert!(!Enum::ptr_eq(&subject, &sliced));
    }

    #[test]
    fn slice_fails_on_unknown_keys() {
        let err = cardinal_direction().slice(["NORTH", "UP"]).err().unwrap();
        assert_eq!(err.key(), Some("UP"));
        assert_eq!(err.receiver(), Some("CardinalDirection"));
    }

    #[test]
    fn to_attribute_snake_cases_keys() {
        let subject = Enum::from_pairs([
            ("SHOUTY_CASE", 0),
            ("PascalCase", 1),
            ("Mixed_Case", 2),
            ("ABBRCase", 3),
        ])
        .unwrap();

        assert_eq!(subject.to_attribute(), IndexMap::from([
            ("shouty_case".to_string(), 0),
            ("pascal_case".to_string(), 1),
            ("mixed_case".to_string(), 2),
            ("abbr_case".to_string(), 3),
        ]));
    }

    #[test]
    fn borrowing_iteration_yields_pairs() {
        let subject = cardinal_direction();
        let mut total = 0;
        for (_, value) in &subject {
            total += value;
        }
        assert_eq!(total, 540);
    }

    fn distinct_keys() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::hash_set("[A-Z][A-Z0-9_]{0,6}", 0..16)
            .prop_map(|keys| keys.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    }

    proptest! {
        #[test]
        fn keys_follow_declaration_order(keys in distinct_keys()) {
            let subject = Enum::from_pairs(keys.iter().cloned().zip(0i64..)).unwrap();
            let expected = keys.iter().map(String::as_str).collect::<Vec<_>>();
            prop_assert_eq!(subject.keys().collect::<Vec<_>>(), expected);
        }

        #[test]
        fn slice_of_all_keys_round_trips(keys in distinct_keys()) {
            let subject = Enum::from_pairs(keys.iter().cloned().zip(0i64..)).unwrap();
            let sliced = subject.slice(subject.keys()).unwrap();
            prop_assert_eq!(sliced.to_map(), subject.to_map());
        }

        #[test]
        fn key_inverts_value(keys in distinct_keys(), modulus in 1i64..4) {
            let values = (0i64..).map(|n| n % modulus);
            let subject = Enum::from_pairs(keys.iter().cloned().zip(values)).unwrap();
            for key in subject.keys() {
                let value = subject.value(key).unwrap();
                let found = subject.key(value).unwrap();
                let first = subject.pairs().find(|(_, v)| *v == value).unwrap().0;
                prop_assert_eq!(found, first);
            }
            if modulus as usize >= keys.len() {
                for key in subject.keys() {
                    prop_assert_eq!(subject.key(subject.value(key).unwrap()).unwrap(), key);
                }
            }
        }

        #[test]
        fn fetch_or_falls_back_exactly_on_misses(keys in distinct_keys(), probe in "[A-Z:]{1,4}") {
            let subject = Enum::from_pairs(keys.iter().cloned().zip(0i64..)).unwrap();
            let fetched = subject.fetch_or(&probe, -1);
            if subject.contains_key(&probe) {
                prop_assert_eq!(fetched.into_owned(), *subject.value(&probe).unwrap());
            } else {
                prop_assert_eq!(fetched.into_owned(), -1);
            }
        }

        #[test]
        fn merge_is_right_biased_union(left in distinct_keys(), right in distinct_keys()) {
            let a = Enum::from_pairs(left.iter().cloned().map(|k| (k, 1))).unwrap();
            let b = Enum::from_pairs(right.iter().cloned().map(|k| (k, 2))).unwrap();
            let merged = a.merge([&b]);

            for key in merged.keys() {
                let expected = if b.contains_key(key) { 2 } else { 1 };
                prop_assert_eq!(merged.value(key).unwrap(), &expected);
            }
            prop_assert_eq!(
                merged.len(),
                left.len() + right.iter().filter(|k| !a.contains_key(k)).count()
            );
            let head = merged.keys().take(left.len()).collect::<Vec<_>>();
            prop_assert_eq!(head, left.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
