//! Capability contracts consulted by the extended containers.
//!
//! The containers never probe values at runtime. Whether a value can be
//! consumed as a sequence, read by random access, or rendered as structured
//! data is decided at compile time through the traits in this module:
//!
//! - [`SequenceLike`]: anything that produces successive elements on demand
//!   (every [`IntoIterator`]).
//! - [`Indexable`]: array-like sources that are read by position, converted
//!   into a sequence with [`indexed_sequence`].
//! - [`Representable`]: values that convert themselves into a plain JSON
//!   representation (feature `json`).
//!
//! # Examples
//!
//! ```rust
//! use combinars::capability::{Indexable, indexed_sequence};
//!
//! let pairs = vec![("a", 1), ("b", 2)];
//! assert_eq!(pairs.length(), 2);
//!
//! let collected: Vec<(&str, i32)> = indexed_sequence(&pairs).collect();
//! assert_eq!(collected, pairs);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

#[cfg(feature = "json")]
use serde_json::Value;

#[cfg(feature = "derive")]
pub use combinars_derive::Representable;

// =============================================================================
// SequenceLike
// =============================================================================

/// A source that yields its elements through the iteration protocol.
///
/// This is a marker over [`IntoIterator`]; every iterable type is
/// sequence-like. It names the capability in constructor signatures.
pub trait SequenceLike: IntoIterator {}

impl<I: IntoIterator> SequenceLike for I {}

// =============================================================================
// Indexable
// =============================================================================

/// An array-like source read by position.
///
/// `Indexable` is the random-access counterpart of [`SequenceLike`]. A source
/// that only offers a length and positional reads is turned into a sequence
/// with [`indexed_sequence`].
///
/// # Examples
///
/// ```rust
/// use combinars::capability::Indexable;
///
/// let values = [10, 20, 30];
/// assert_eq!(values.length(), 3);
/// assert_eq!(values.at(1), Some(20));
/// assert_eq!(values.at(3), None);
/// ```
pub trait Indexable {
    /// The element type produced by positional reads.
    type Item;

    /// Returns the number of addressable positions.
    fn length(&self) -> usize;

    /// Returns the element at `index`, or `None` if the position is empty.
    fn at(&self, index: usize) -> Option<Self::Item>;
}

impl<T: Clone> Indexable for [T] {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone, const N: usize> Indexable for [T; N] {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> Indexable for Vec<T> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> Indexable for VecDeque<T> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<A: Indexable + ?Sized> Indexable for &A {
    type Item = A::Item;

    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }

    #[inline]
    fn at(&self, index: usize) -> Option<Self::Item> {
        (**self).at(index)
    }
}

/// A sequence over an [`Indexable`] source, reading positions `0..length()`.
///
/// Iteration stops at the first empty position.
pub struct IndexedSequence<'a, A: ?Sized> {
    source: &'a A,
    position: usize,
    length: usize,
}

impl<A: Indexable + ?Sized> Iterator for IndexedSequence<'_, A> {
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.length {
            return None;
        }
        match self.source.at(self.position) {
            Some(item) => {
                self.position += 1;
                Some(item)
            }
            None => {
                self.position = self.length;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.length - self.position))
    }
}

impl<A: Indexable + ?Sized> FusedIterator for IndexedSequence<'_, A> {}

/// Converts an [`Indexable`] source into a sequence by positional reads.
///
/// # Examples
///
/// ```rust
/// use combinars::capability::indexed_sequence;
///
/// let letters = ['x', 'y', 'z'];
/// let joined: String = indexed_sequence(&letters).collect();
/// assert_eq!(joined, "xyz");
/// ```
#[inline]
pub fn indexed_sequence<A: Indexable + ?Sized>(source: &A) -> IndexedSequence<'_, A> {
    IndexedSequence {
        source,
        position: 0,
        length: source.length(),
    }
}

// =============================================================================
// Representable
// =============================================================================

/// A value that converts itself into a plain JSON representation.
///
/// Representations are built only from mappings, lists and primitives.
/// Containers call [`to_representation`](Representable::to_representation)
/// on every value when rendering themselves with `to_json`.
///
/// # Examples
///
/// ```rust
/// use combinars::capability::Representable;
/// use serde_json::{json, Value};
///
/// struct Celsius(f64);
///
/// impl Representable for Celsius {
///     fn to_representation(&self) -> Value {
///         json!({ "celsius": self.0 })
///     }
/// }
///
/// assert_eq!(Celsius(21.5).to_representation(), json!({ "celsius": 21.5 }));
/// assert_eq!(Some(3).to_representation(), json!(3));
/// assert_eq!(vec!["a", "b"].to_representation(), json!(["a", "b"]));
/// ```
#[cfg(feature = "json")]
pub trait Representable {
    /// Returns the structured representation of `self`.
    fn to_representation(&self) -> Value;
}

#[cfg(feature = "json")]
macro_rules! representable_via_from {
    ($($type:ty),* $(,)?) => {
        $(
            impl Representable for $type {
                #[inline]
                fn to_representation(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

#[cfg(feature = "json")]
representable_via_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool);

#[cfg(feature = "json")]
impl Representable for f64 {
    fn to_representation(&self) -> Value {
        serde_json::Number::from_f64(*self).map_or(Value::Null, Value::Number)
    }
}

#[cfg(feature = "json")]
impl Representable for f32 {
    fn to_representation(&self) -> Value {
        f64::from(*self).to_representation()
    }
}

#[cfg(feature = "json")]
impl Representable for char {
    fn to_representation(&self) -> Value {
        Value::String(self.to_string())
    }
}

#[cfg(feature = "json")]
impl Representable for str {
    fn to_representation(&self) -> Value {
        Value::String(self.to_owned())
    }
}

#[cfg(feature = "json")]
impl Representable for String {
    fn to_representation(&self) -> Value {
        Value::String(self.clone())
    }
}

#[cfg(feature = "json")]
impl Representable for () {
    fn to_representation(&self) -> Value {
        Value::Null
    }
}

#[cfg(feature = "json")]
impl Representable for Value {
    fn to_representation(&self) -> Value {
        self.clone()
    }
}

#[cfg(feature = "json")]
impl<T: Representable> Representable for Option<T> {
    fn to_representation(&self) -> Value {
        self.as_ref().map_or(Value::Null, Representable::to_representation)
    }
}

#[cfg(feature = "json")]
impl<T: Representable> Representable for [T] {
    fn to_representation(&self) -> Value {
        Value::Array(self.iter().map(Representable::to_representation).collect())
    }
}

#[cfg(feature = "json")]
impl<T: Representable> Representable for Vec<T> {
    fn to_representation(&self) -> Value {
        self.as_slice().to_representation()
    }
}

#[cfg(feature = "json")]
impl<T: Representable> Representable for VecDeque<T> {
    fn to_representation(&self) -> Value {
        Value::Array(self.iter().map(Representable::to_representation).collect())
    }
}

#[cfg(feature = "json")]
impl<T: Representable + ?Sized> Representable for Box<T> {
    fn to_representation(&self) -> Value {
        (**self).to_representation()
    }
}

#[cfg(feature = "json")]
impl<T: Representable + ?Sized> Representable for &T {
    fn to_representation(&self) -> Value {
        (**self).to_representation()
    }
}

/// Re-exports used by `#[derive(Representable)]` expansions.
#[cfg(feature = "json")]
#[doc(hidden)]
pub mod __private {
    pub use serde_json::{Map, Value};
}
