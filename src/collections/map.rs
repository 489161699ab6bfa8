//! Insertion-ordered map with functional combinators.
//!
//! This module provides [`ExtendedMap`], a wrapper around
//! [`IndexMap`] that adds `map`, `reduce`, `sort`, `dedupe`, `join` and
//! `to_json` on top of the native map API.
//!
//! # Overview
//!
//! - Keys are unique; iteration follows insertion order, and every
//!   combinator observes that order.
//! - Combinators never mutate the receiver. `map` always builds a new map.
//!   `sort` and `dedupe` return a [`Cow`]: a fresh copy, or the receiver
//!   itself when it holds fewer than two entries.
//! - The whole [`IndexMap`] API stays reachable through `Deref`/`DerefMut`.
//!
//! # Examples
//!
//! ```rust
//! use combinars::collections::ExtendedMap;
//!
//! let scores = ExtendedMap::from_entries([("a", 3), ("b", 1), ("c", 1)]);
//!
//! let sorted = scores.sort_by(|left, right| left.cmp(right));
//! assert_eq!(sorted.values().copied().collect::<Vec<_>>(), vec![1, 1, 3]);
//!
//! let unique = scores.dedupe_sorted_by(|left, right| left == right, |left, right| left.cmp(right));
//! assert_eq!(unique.len(), 2);
//! assert_eq!(unique.join_rows(";"), "b:1;a:3");
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::{self, Display, Write};
use std::hash::{BuildHasher, Hash, RandomState};
use std::iter;
use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::join_options::{JoinOptions, strip_trailing_delimiter};
use super::seed::Seed;
use crate::capability::{Indexable, SequenceLike, indexed_sequence};
use crate::error::{ContainerKind, EmptyReduceError};

#[cfg(feature = "json")]
use crate::capability::Representable;
#[cfg(feature = "json")]
use serde_json::{Map, Value};

// =============================================================================
// ExtendedMap Definition
// =============================================================================

/// An insertion-ordered, key-unique map with functional combinators.
///
/// # Time Complexity
///
/// | Operation      | Complexity          |
/// |----------------|---------------------|
/// | `map`          | O(n)                |
/// | `reduce_from`  | O(n)                |
/// | `sort_by`      | O(n log n)          |
/// | `dedupe`       | O(n log n)          |
/// | `join`         | O(n)                |
/// | `to_json`      | O(n)                |
///
/// # Examples
///
/// ```rust
/// use combinars::collections::ExtendedMap;
///
/// let prices = ExtendedMap::from_entries([("apple", 120), ("pear", 80)]);
/// let discounted = prices.map(|price, _, _| price * 9 / 10);
///
/// assert_eq!(discounted.get("apple"), Some(&108));
/// assert_eq!(discounted.get("pear"), Some(&72));
/// ```
#[derive(Clone)]
pub struct ExtendedMap<K, V, S = RandomState> {
    inner: IndexMap<K, V, S>,
}

impl<K, V> ExtendedMap<K, V> {
    /// Creates an empty map.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: IndexMap::with_capacity(capacity),
        }
    }
}

impl<K, V, S> ExtendedMap<K, V, S> {
    /// Creates an empty map using `hasher`.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            inner: IndexMap::with_hasher(hasher),
        }
    }

    /// Creates an empty map with room for `capacity` entries, using `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            inner: IndexMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the wrapped native map.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> IndexMap<K, V, S> {
        self.inner
    }

    /// Borrows the wrapped native map.
    #[inline]
    #[must_use]
    pub const fn as_inner(&self) -> &IndexMap<K, V, S> {
        &self.inner
    }
}

// =============================================================================
// Construction
// =============================================================================

impl<K: Hash + Eq, V> ExtendedMap<K, V> {
    /// Builds a map from a sequence of `(key, value)` pairs, preserving pair
    /// order.
    ///
    /// A later pair with an existing key overwrites the value but keeps the
    /// key's original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::collections::ExtendedMap;
    ///
    /// let map = ExtendedMap::from_entries(vec![("b", 2), ("a", 1), ("b", 3)]);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["b", "a"]);
    /// assert_eq!(map.get("b"), Some(&3));
    /// ```
    pub fn from_entries<I>(source: I) -> Self
    where
        I: SequenceLike<Item = (K, V)>,
    {
        source.into_iter().collect()
    }

    /// Builds a map from an array-like source of pairs, read by position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::collections::ExtendedMap;
    ///
    /// let pairs = [("x", 1), ("y", 2)];
    /// let map = ExtendedMap::from_indexed(&pairs);
    /// assert_eq!(map.join_rows(","), "x:1,y:2");
    /// ```
    pub fn from_indexed<A>(source: &A) -> Self
    where
        A: Indexable<Item = (K, V)> + ?Sized,
    {
        indexed_sequence(source).collect()
    }

    /// Builds a map from a sequence of pairs, then applies [`map`](Self::map)
    /// to it.
    ///
    /// `function` receives the value, the key and the freshly built source
    /// map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::collections::ExtendedMap;
    ///
    /// let lengths = ExtendedMap::from_entries_mapped(
    ///     [("one", "uno"), ("two", "dos")],
    ///     |value, _, _| value.len(),
    /// );
    /// assert_eq!(lengths.get("two"), Some(&3));
    /// ```
    pub fn from_entries_mapped<I, T, F>(source: I, function: F) -> ExtendedMap<K, T>
    where
        I: SequenceLike<Item = (K, V)>,
        K: Clone,
        F: FnMut(&V, &K, &Self) -> T,
    {
        Self::from_entries(source).map(function)
    }

    /// Builds a map from an array-like source of pairs, then applies
    /// [`map`](Self::map) to it.
    pub fn from_indexed_mapped<A, T, F>(source: &A, function: F) -> ExtendedMap<K, T>
    where
        A: Indexable<Item = (K, V)> + ?Sized,
        K: Clone,
        F: FnMut(&V, &K, &Self) -> T,
    {
        Self::from_indexed(source).map(function)
    }
}

// =============================================================================
// Folding and Transformation
// =============================================================================

impl<K, V, S> ExtendedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Folds every entry in iteration order, starting from `initial`.
    ///
    /// `function` receives the accumulator, the value, the key and the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::collections::ExtendedMap;
    ///
    /// let map = ExtendedMap::from_entries([("a", 1), ("b", 2)]);
    /// let keys = map.reduce_from(String::new(), |mut keys, _, key, _| {
    ///     keys.push_str(key);
    ///     keys
    /// });
    /// assert_eq!(keys, "ab");
    /// ```
    pub fn reduce_from<T, F>(&self, initial: T, mut function: F) -> T
    where
        F: FnMut(T, &V, &K, &Self) -> T,
    {
        self.inner
            .iter()
            .fold(initial, |accumulator, (key, value)| {
                function(accumulator, value, key, self)
            })
    }

    /// Folds without an initial accumulator.
    ///
    /// The first entry's value seeds the accumulator and folding starts at
    /// the second entry, so the first key is never passed to `function`.
    /// A single-entry map returns its value without calling `function`.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyReduceError`] if the map has no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::collections::ExtendedMap;
    ///
    /// let map = ExtendedMap::from_entries([("a", 4), ("b", 7), ("c", 5)]);
    /// let largest = map.reduce_or_fail(|max, value, _, _| max.max(*value));
    /// assert_eq!(largest, Ok(7));
    ///
    /// let empty: ExtendedMap<&str, i32> = ExtendedMap::new();
    /// assert!(empty.reduce_or_fail(|max, value, _, _| max.max(*value)).is_err());
    /// ```
    pub fn reduce_or_fail<F>(&self, mut function: F) -> Result<V, EmptyReduceError>
    where
        V: Clone,
        F: FnMut(V, &V, &K, &Self) -> V,
    {
        let mut entries = self.inner.iter();
        let (_, first) = entries
            .next()
            .ok_or(EmptyReduceError::new(ContainerKind::Map))?;
        Ok(entries.fold(first.clone(), |accumulator, (key, value)| {
            function(accumulator, value, key, self)
        }))
    }

    /// Folds with an explicit [`Seed`].
    ///
    /// # Errors
    ///
    /// Returns [`EmptyReduceError`] for [`Seed::Unseeded`] on an empty map.
    pub fn reduce<F>(&self, function: F, seed: Seed<V>) -> Result<V, EmptyReduceError>
    where
        V: Clone,
        F: FnMut(V, &V, &K, &Self) -> V,
    {
        match seed {
            Seed::Seeded(initial) => Ok(self.reduce_from(initial, function)),
            Seed::Unseeded => self.reduce_or_fail(function),
        }
    }

    /// Returns a new map with the same keys, in the same order, and values
    /// produced by `function(value, key, source)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::collections::ExtendedMap;
    ///
    /// let map = ExtendedMap::from_entries([("a", 1), ("b", 2)]);
    /// let labelled = map.map(|value, key, _| format!("{key}={value}"));
    ///
    /// assert_eq!(labelled.get("b").map(String::as_str), Some("b=2"));
    /// assert_eq!(labelled.len(), map.len());
    /// ```
    pub fn map<T, F>(&self, mut function: F) -> ExtendedMap<K, T, S>
    where
        K: Clone,
        S: Clone,
        F: FnMut(&V, &K, &Self) -> T,
    {
        let result =
            ExtendedMap::with_capacity_and_hasher(self.len(), self.inner.hasher().clone());
        self.reduce_from(result, |mut result, value, key, source| {
            result.inner.insert(key.clone(), function(value, key, source));
            result
        })
    }
}

// =============================================================================
// Ordering and Deduplication
// =============================================================================

impl<K, V, S> ExtendedMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    /// Returns the map unchanged in order.
    ///
    /// Equivalent to [`sort_by`](Self::sort_by) with a comparator that treats
    /// every pair as equal: a map with two or more entries is copied as-is.
    pub fn sort(&self) -> Cow<'_, Self> {
        self.sort_by(|_, _| Ordering::Equal)
    }

    /// Returns the entries stably sorted by value.
    ///
    /// A map with fewer than two entries is returned as
    /// [`Cow::Borrowed`] (the receiver itself). Otherwise a new map is built;
    /// entries whose values compare equal keep their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::borrow::Cow;
    /// use combinars::collections::ExtendedMap;
    ///
    /// let map = ExtendedMap::from_entries([("a", 3), ("b", 1), ("c", 2)]);
    /// let sorted = map.sort_by(|left, right| left.cmp(right));
    /// assert_eq!(sorted.keys().copied().collect::<Vec<_>>(), vec!["b", "c", "a"]);
    ///
    /// let single = ExtendedMap::from_entries([("only", 1)]);
    /// assert!(matches!(single.sort_by(|l, r| l.cmp(r)), Cow::Borrowed(_)));
    /// ```
    pub fn sort_by<F>(&self, mut compare: F) -> Cow<'_, Self>
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        if self.len() < 2 {
            trace!(len = self.len(), "sort returned the receiver");
            return Cow::Borrowed(self);
        }
        let mut sorted = self.inner.clone();
        sorted.sort_by(|_, left, _, right| compare(left, right));
        Cow::Owned(Self { inner: sorted })
    }

    /// Removes entries whose value equals the immediately preceding value.
    ///
    /// Uses `==` and keeps the current order. See
    /// [`dedupe_sorted_by`](Self::dedupe_sorted_by).
    pub fn dedupe(&self) -> Cow<'_, Self>
    where
        V: PartialEq,
    {
        self.dedupe_by(|left, right| left == right)
    }

    /// Removes entries whose value is `equals`-equal to the immediately
    /// preceding value, keeping the current order.
    pub fn dedupe_by<E>(&self, equals: E) -> Cow<'_, Self>
    where
        E: FnMut(&V, &V) -> bool,
    {
        self.dedupe_sorted_by(equals, |_, _| Ordering::Equal)
    }

    /// Sorts by `compare`, then removes every entry whose value is
    /// `equals`-equal to the value of the entry right before it.
    ///
    /// Only duplicates that are adjacent after sorting are detected. If
    /// `compare` does not group values the way `equals` does, equal values
    /// that end up apart are all kept. The first entry of each run of
    /// duplicates survives.
    ///
    /// A map with fewer than two entries is returned as
    /// [`Cow::Borrowed`] (the receiver itself).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::collections::ExtendedMap;
    ///
    /// let map = ExtendedMap::from_entries([("a", 1), ("b", 2), ("c", 1)]);
    ///
    /// // Without sorting, the two 1s are not adjacent.
    /// assert_eq!(map.dedupe().len(), 3);
    ///
    /// let unique = map.dedupe_sorted_by(|l, r| l == r, |l, r| l.cmp(r));
    /// assert_eq!(unique.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
    /// ```
    pub fn dedupe_sorted_by<E, C>(&self, mut equals: E, compare: C) -> Cow<'_, Self>
    where
        E: FnMut(&V, &V) -> bool,
        C: FnMut(&V, &V) -> Ordering,
    {
        if self.len() < 2 {
            trace!(len = self.len(), "dedupe returned the receiver");
            return Cow::Borrowed(self);
        }
        let mut sorted = self.sort_by(compare).into_owned();
        let marked: Vec<bool> = iter::once(false)
            .chain(
                sorted
                    .values()
                    .zip(sorted.values().skip(1))
                    .map(|(prior, value)| equals(prior, value)),
            )
            .collect();

        let before = sorted.len();
        let mut marks = marked.into_iter();
        sorted.inner.retain(|_, _| !marks.next().unwrap_or(false));
        debug!(
            removed = before - sorted.len(),
            remaining = sorted.len(),
            "dedupe removed adjacent duplicates"
        );
        Cow::Owned(sorted)
    }
}

// =============================================================================
// Rendering
// =============================================================================

impl<K, V, S> ExtendedMap<K, V, S>
where
    K: Hash + Eq + Display,
    V: Display,
    S: BuildHasher,
{
    /// Renders the entries into one string.
    ///
    /// Each entry is written as configured by `options` and followed by the
    /// row delimiter; one trailing delimiter is then stripped. When neither
    /// keys nor values are shown the result is always empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::collections::{ExtendedMap, JoinOptions};
    ///
    /// let map = ExtendedMap::from_entries([("x", 1), ("y", 2)]);
    ///
    /// assert_eq!(map.join(&JoinOptions::default()), "x:1,y:2");
    /// assert_eq!(map.join(&JoinOptions::default().with_show_key(false)), "1,2");
    /// assert_eq!(
    ///     map.join(&JoinOptions::default().with_show_key(false).with_show_value(false)),
    ///     ""
    /// );
    /// ```
    pub fn join(&self, options: &JoinOptions) -> String {
        if !options.shows_anything() {
            return String::new();
        }
        let row_delimiter = options.row_delimiter_str();
        let delimiter = &options.key_value_delimiter;
        let rendered = self.reduce_from(String::new(), |mut result, value, key, _| {
            // Writing into a `String` cannot fail.
            let _ = match (options.show_key, options.show_value) {
                (true, true) if options.is_key_before_value => {
                    write!(result, "{key}{delimiter}{value}")
                }
                (true, true) => write!(result, "{value}{delimiter}{key}"),
                (true, false) => write!(result, "{key}"),
                (false, _) => write!(result, "{value}"),
            };
            result.push_str(row_delimiter);
            result
        });
        match &options.row_delimiter {
            Some(row_delimiter) => strip_trailing_delimiter(rendered, row_delimiter),
            None => rendered,
        }
    }

    /// Renders the entries with default options and a custom row delimiter.
    pub fn join_rows(&self, row_delimiter: &str) -> String {
        self.join(&JoinOptions::rows(row_delimiter))
    }
}

#[cfg(feature = "json")]
impl<K, V, S> ExtendedMap<K, V, S>
where
    K: Hash + Eq + Display,
    V: Representable,
    S: BuildHasher,
{
    /// Projects the map into a JSON object.
    ///
    /// Keys are converted with their `Display` form and values with
    /// [`Representable::to_representation`]. Keys whose string forms collide
    /// keep the first position and the last value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::collections::ExtendedMap;
    /// use serde_json::json;
    ///
    /// let map = ExtendedMap::from_entries([(1, "one"), (2, "two")]);
    /// let object = map.to_json();
    /// assert_eq!(serde_json::Value::Object(object), json!({ "1": "one", "2": "two" }));
    /// ```
    pub fn to_json(&self) -> Map<String, Value> {
        self.reduce_from(Map::new(), |mut object, value, key, _| {
            object.insert(key.to_string(), value.to_representation());
            object
        })
    }
}

#[cfg(feature = "json")]
impl<K, V, S> Representable for ExtendedMap<K, V, S>
where
    K: Hash + Eq + Display,
    V: Representable,
    S: BuildHasher,
{
    fn to_representation(&self) -> Value {
        Value::Object(self.to_json())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, S> Deref for ExtendedMap<K, V, S> {
    type Target = IndexMap<K, V, S>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<K, V, S> DerefMut for ExtendedMap<K, V, S> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<K, V, S: Default> Default for ExtendedMap<K, V, S> {
    #[inline]
    fn default() -> Self {
        Self {
            inner: IndexMap::default(),
        }
    }
}

impl<K, V, S> From<IndexMap<K, V, S>> for ExtendedMap<K, V, S> {
    #[inline]
    fn from(inner: IndexMap<K, V, S>) -> Self {
        Self { inner }
    }
}

impl<K, V, S> From<ExtendedMap<K, V, S>> for IndexMap<K, V, S> {
    #[inline]
    fn from(map: ExtendedMap<K, V, S>) -> Self {
        map.inner
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for ExtendedMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        Self::from_entries(entries)
    }
}

impl<K, V, S> FromIterator<(K, V)> for ExtendedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: IndexMap::from_iter(iter),
        }
    }
}

impl<K, V, S> Extend<(K, V)> for ExtendedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<K, V, S> IntoIterator for ExtendedMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a ExtendedMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut ExtendedMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = indexmap::map::IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter_mut()
    }
}

impl<K, V, S> PartialEq for ExtendedMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K, V, S> Eq for ExtendedMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ExtendedMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.inner.iter()).finish()
    }
}

/// Renders with [`JoinOptions::default`], e.g. `a:1,b:2`.
impl<K, V, S> Display for ExtendedMap<K, V, S>
where
    K: Hash + Eq + Display,
    V: Display,
    S: BuildHasher,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.join(&JoinOptions::default()))
    }
}

static_assertions::assert_impl_all!(ExtendedMap<String, i32>: Send, Sync, Clone);

// =============================================================================
// Tests
// =============================================================================
