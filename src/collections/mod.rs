//! Insertion-ordered containers with functional combinators.
//!
//! This module provides two wrappers over the native `indexmap` containers:
//!
//! - [`ExtendedMap`]: key-unique map with `map`, `reduce`, `sort`, `dedupe`,
//!   `join` and `to_json`
//! - [`ExtendedSet`]: unique-element set with `of`, `map`, `reduce`, `join`
//!   and `to_json`
//!
//! Both keep insertion order, and every combinator observes it. Combinators
//! never mutate the receiver; `sort` and `dedupe` hand back the receiver
//! itself (as [`Cow::Borrowed`](std::borrow::Cow::Borrowed)) when there is
//! nothing to reorder.
//!
//! # Examples
//!
//! ## `ExtendedMap`
//!
//! ```rust
//! use combinars::collections::{ExtendedMap, JoinOptions};
//!
//! let map = ExtendedMap::from_entries([("x", 1), ("y", 2)]);
//! assert_eq!(map.join(&JoinOptions::default()), "x:1,y:2");
//!
//! let total = map.reduce_from(0, |sum, value, _, _| sum + value);
//! assert_eq!(total, 3);
//! ```
//!
//! ## `ExtendedSet`
//!
//! ```rust
//! use combinars::extended_set;
//!
//! let set = extended_set![1, 2, 2, 3];
//! assert_eq!(set.join("-"), "1-2-3");
//! ```
//!
//! # Hashers
//!
//! Both containers take the hasher as a type parameter, defaulting to
//! [`RandomState`](std::hash::RandomState). The `fxhash` and `ahash` features
//! add aliases for faster, non-DoS-resistant hashers:
//!
//! ```rust,ignore
//! use combinars::collections::FxExtendedMap;
//!
//! let map: FxExtendedMap<u32, &str> = [(1, "one"), (2, "two")].into_iter().collect();
//! ```

mod join_options;
mod macros;
mod map;
mod seed;
#[cfg(feature = "serde")]
mod serde_impls;
mod set;

pub use join_options::JoinOptions;
pub use map::ExtendedMap;
pub use seed::Seed;
pub use set::{DEFAULT_SET_DELIMITER, ExtendedSet};

/// [`ExtendedMap`] using `rustc-hash`'s `FxBuildHasher`.
#[cfg(feature = "fxhash")]
pub type FxExtendedMap<K, V> = ExtendedMap<K, V, rustc_hash::FxBuildHasher>;

/// [`ExtendedSet`] using `rustc-hash`'s `FxBuildHasher`.
#[cfg(feature = "fxhash")]
pub type FxExtendedSet<T> = ExtendedSet<T, rustc_hash::FxBuildHasher>;

/// [`ExtendedMap`] using `ahash`'s `RandomState`.
#[cfg(feature = "ahash")]
pub type AExtendedMap<K, V> = ExtendedMap<K, V, ahash::RandomState>;

/// [`ExtendedSet`] using `ahash`'s `RandomState`.
#[cfg(feature = "ahash")]
pub type AExtendedSet<T> = ExtendedSet<T, ahash::RandomState>;
