//! Insertion-ordered unique set with functional combinators.
//!
//! [`ExtendedSet`] wraps [`IndexSet`] and adds `of`, `map`, `reduce`,
//! `join` and `to_json`. Set semantics apply to every result: mapping two
//! elements to equal outputs leaves a single output.
//!
//! # Examples
//!
//! ```rust
//! use combinars::collections::ExtendedSet;
//!
//! let set = ExtendedSet::of([1, 2, 2, 3]);
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.join("-"), "1-2-3");
//!
//! let parity = set.map(|value, _, _| value % 2);
//! assert_eq!(parity.to_list(), vec![&1, &0]);
//! ```

use std::fmt::{self, Display, Write};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{Deref, DerefMut};

use indexmap::IndexSet;
use tracing::debug;

use super::join_options::strip_trailing_delimiter;
use super::seed::Seed;
use crate::capability::{Indexable, SequenceLike, indexed_sequence};
use crate::error::{ContainerKind, EmptyReduceError};

#[cfg(feature = "json")]
use crate::capability::Representable;
#[cfg(feature = "json")]
use serde_json::Value;

/// Delimiter used by [`ExtendedSet`]'s `Display` implementation.
pub const DEFAULT_SET_DELIMITER: &str = ",";

// =============================================================================
// ExtendedSet Definition
// =============================================================================

/// An insertion-ordered set of unique elements with functional combinators.
///
/// # Examples
///
/// ```rust
/// use combinars::collections::ExtendedSet;
///
/// let words = ExtendedSet::from_elements(["b", "a", "b"]);
/// assert_eq!(words.to_list(), vec![&"b", &"a"]);
/// assert_eq!(format!("{words}"), "b,a");
/// ```
#[derive(Clone)]
pub struct ExtendedSet<T, S = RandomState> {
    inner: IndexSet<T, S>,
}

impl<T> ExtendedSet<T> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: IndexSet::new(),
        }
    }

    /// Creates an empty set with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: IndexSet::with_capacity(capacity),
        }
    }
}

impl<T, S> ExtendedSet<T, S> {
    /// Creates an empty set using `hasher`.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            inner: IndexSet::with_hasher(hasher),
        }
    }

    /// Creates an empty set with room for `capacity` elements, using `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            inner: IndexSet::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the wrapped native set.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> IndexSet<T, S> {
        self.inner
    }

    /// Borrows the wrapped native set.
    #[inline]
    #[must_use]
    pub const fn as_inner(&self) -> &IndexSet<T, S> {
        &self.inner
    }

    /// Returns the elements as an ordered list, in iteration order.
    #[must_use]
    pub fn to_list(&self) -> Vec<&T> {
        self.inner.iter().collect()
    }
}

// =============================================================================
// Construction
// =============================================================================

impl<T: Hash + Eq> ExtendedSet<T> {
    /// Builds a set from the given elements; later duplicates are dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::collections::ExtendedSet;
    ///
    /// let set = ExtendedSet::of(["x", "y", "x"]);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn of<const N: usize>(elements: [T; N]) -> Self {
        Self::from_elements(elements)
    }

    /// Builds a set from a sequence, keeping first-occurrence order.
    pub fn from_elements<I>(source: I) -> Self
    where
        I: SequenceLike<Item = T>,
    {
        source.into_iter().collect()
    }

    /// Builds a set from an array-like source read by position.
    pub fn from_indexed<A>(source: &A) -> Self
    where
        A: Indexable<Item = T> + ?Sized,
    {
        indexed_sequence(source).collect()
    }

    /// Builds a set from a sequence, then applies [`map`](Self::map) to it.
    ///
    /// Mapped outputs that compare equal collapse, so the result can be
    /// smaller than the source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::collections::ExtendedSet;
    ///
    /// let lengths = ExtendedSet::from_elements_mapped(["a", "bb", "cc"], |word, _, _| word.len());
    /// assert_eq!(lengths.to_list(), vec![&1, &2]);
    /// ```
    pub fn from_elements_mapped<I, U, F>(source: I, function: F) -> ExtendedSet<U>
    where
        I: SequenceLike<Item = T>,
        U: Hash + Eq,
        F: FnMut(&T, usize, &Self) -> U,
    {
        Self::from_elements(source).map(function)
    }

    /// Builds a set from an array-like source, then applies
    /// [`map`](Self::map) to it.
    pub fn from_indexed_mapped<A, U, F>(source: &A, function: F) -> ExtendedSet<U>
    where
        A: Indexable<Item = T> + ?Sized,
        U: Hash + Eq,
        F: FnMut(&T, usize, &Self) -> U,
    {
        Self::from_indexed(source).map(function)
    }
}

// =============================================================================
// Folding and Transformation
// =============================================================================

impl<T, S> ExtendedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Folds every element in iteration order, starting from `initial`.
    ///
    /// `function` receives the accumulator, the element, its zero-based
    /// position and the set.
    pub fn reduce_from<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, &T, usize, &Self) -> B,
    {
        self.inner
            .iter()
            .enumerate()
            .fold(initial, |accumulator, (index, element)| {
                function(accumulator, element, index, self)
            })
    }

    /// Folds without an initial accumulator.
    ///
    /// The first element seeds the accumulator; folding starts at index 1.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyReduceError`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::collections::ExtendedSet;
    ///
    /// let set = ExtendedSet::of([2, 3, 4]);
    /// assert_eq!(set.reduce_or_fail(|product, value, _, _| product * value), Ok(24));
    /// ```
    pub fn reduce_or_fail<F>(&self, mut function: F) -> Result<T, EmptyReduceError>
    where
        T: Clone,
        F: FnMut(T, &T, usize, &Self) -> T,
    {
        let mut elements = self.inner.iter().enumerate();
        let (_, first) = elements
            .next()
            .ok_or(EmptyReduceError::new(ContainerKind::Set))?;
        Ok(elements.fold(first.clone(), |accumulator, (index, element)| {
            function(accumulator, element, index, self)
        }))
    }

    /// Folds with an explicit [`Seed`].
    ///
    /// # Errors
    ///
    /// Returns [`EmptyReduceError`] for [`Seed::Unseeded`] on an empty set.
    pub fn reduce<F>(&self, function: F, seed: Seed<T>) -> Result<T, EmptyReduceError>
    where
        T: Clone,
        F: FnMut(T, &T, usize, &Self) -> T,
    {
        match seed {
            Seed::Seeded(initial) => Ok(self.reduce_from(initial, function)),
            Seed::Unseeded => self.reduce_or_fail(function),
        }
    }

    /// Returns a new set of `function(element, index, source)` outputs in
    /// iteration order. Equal outputs merge into the first one.
    pub fn map<U, F>(&self, mut function: F) -> ExtendedSet<U, S>
    where
        U: Hash + Eq,
        S: Clone,
        F: FnMut(&T, usize, &Self) -> U,
    {
        let result =
            ExtendedSet::with_capacity_and_hasher(self.len(), self.inner.hasher().clone());
        let mapped = self.reduce_from(result, |mut result, element, index, source| {
            result.inner.insert(function(element, index, source));
            result
        });
        if mapped.len() < self.len() {
            debug!(
                source = self.len(),
                mapped = mapped.len(),
                "map merged equal outputs"
            );
        }
        mapped
    }
}

// =============================================================================
// Rendering
// =============================================================================

impl<T, S> ExtendedSet<T, S>
where
    T: Hash + Eq + Display,
    S: BuildHasher,
{
    /// Renders the elements separated by `delimiter`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::collections::ExtendedSet;
    ///
    /// assert_eq!(ExtendedSet::of([1, 2, 3]).join("-"), "1-2-3");
    /// assert_eq!(ExtendedSet::<i32>::new().join("-"), "");
    /// ```
    pub fn join(&self, delimiter: &str) -> String {
        let rendered = self.reduce_from(String::new(), |mut result, element, _, _| {
            // Writing into a `String` cannot fail.
            let _ = write!(result, "{element}");
            result.push_str(delimiter);
            result
        });
        strip_trailing_delimiter(rendered, delimiter)
    }
}

#[cfg(feature = "json")]
impl<T, S> ExtendedSet<T, S>
where
    T: Hash + Eq + Representable,
    S: BuildHasher,
{
    /// Projects the set into an ordered list of element representations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::collections::ExtendedSet;
    /// use serde_json::json;
    ///
    /// let set = ExtendedSet::of([1, 2, 2, 3]);
    /// assert_eq!(set.to_json(), vec![json!(1), json!(2), json!(3)]);
    /// ```
    pub fn to_json(&self) -> Vec<Value> {
        self.inner
            .iter()
            .map(Representable::to_representation)
            .collect()
    }
}

#[cfg(feature = "json")]
impl<T, S> Representable for ExtendedSet<T, S>
where
    T: Hash + Eq + Representable,
    S: BuildHasher,
{
    fn to_representation(&self) -> Value {
        Value::Array(self.to_json())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S> Deref for ExtendedSet<T, S> {
    type Target = IndexSet<T, S>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T, S> DerefMut for ExtendedSet<T, S> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T, S: Default> Default for ExtendedSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self {
            inner: IndexSet::default(),
        }
    }
}

impl<T, S> From<IndexSet<T, S>> for ExtendedSet<T, S> {
    #[inline]
    fn from(inner: IndexSet<T, S>) -> Self {
        Self { inner }
    }
}

impl<T, S> From<ExtendedSet<T, S>> for IndexSet<T, S> {
    #[inline]
    fn from(set: ExtendedSet<T, S>) -> Self {
        set.inner
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for ExtendedSet<T> {
    fn from(elements: [T; N]) -> Self {
        Self::of(elements)
    }
}

impl<T, S> FromIterator<T> for ExtendedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: IndexSet::from_iter(iter),
        }
    }
}

impl<T, S> Extend<T> for ExtendedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T, S> IntoIterator for ExtendedSet<T, S> {
    type Item = T;
    type IntoIter = indexmap::set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T, S> IntoIterator for &'a ExtendedSet<T, S> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T, S> PartialEq for ExtendedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T, S> Eq for ExtendedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T: fmt::Debug, S> fmt::Debug for ExtendedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.inner.iter()).finish()
    }
}

/// Renders with [`DEFAULT_SET_DELIMITER`], e.g. `1,2,3`.
impl<T, S> Display for ExtendedSet<T, S>
where
    T: Hash + Eq + Display,
    S: BuildHasher,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.join(DEFAULT_SET_DELIMITER))
    }
}

static_assertions::assert_impl_all!(ExtendedSet<String>: Send, Sync, Clone);

// =============================================================================
// Tests
// =============================================================================
