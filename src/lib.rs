//! # combinars
//!
//! Functional combinators for insertion-ordered maps and sets.
//!
//! ## Overview
//!
//! The standard containers offer iteration but leave pipelines such as
//! "sort by value, drop neighbouring duplicates, render as text" to
//! hand-written loops. This library wraps the native ordered containers and
//! adds a uniform set of combinators:
//!
//! - **`ExtendedMap`**: `map`, `reduce`, `sort`, `dedupe`, `join`, `to_json`,
//!   `from_entries`
//! - **`ExtendedSet`**: `map`, `reduce`, `join`, `to_json`, `of`,
//!   `from_elements`
//! - **Capabilities**: compile-time contracts for sequence-like, indexable and
//!   representable values
//!
//! ## Feature Flags
//!
//! - `json` (default): `to_json` and the `Representable` contract
//! - `serde`: `Serialize`/`Deserialize` for both containers
//! - `derive`: `#[derive(Representable)]`
//! - `fxhash`: `FxExtendedMap`/`FxExtendedSet` aliases
//! - `ahash`: `AExtendedMap`/`AExtendedSet` aliases
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use combinars::prelude::*;
//!
//! let map = ExtendedMap::from_entries([("a", 3), ("b", 1), ("c", 1)]);
//! let unique = map.dedupe_sorted_by(|left, right| left == right, |left, right| left.cmp(right));
//! assert_eq!(unique.join(&JoinOptions::rows("; ")), "b:1; a:3");
//!
//! let set = ExtendedSet::of([1, 2, 2, 3]);
//! assert_eq!(set.join("-"), "1-2-3");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, their option types and the capability traits.
///
/// # Usage
///
/// ```rust
/// use combinars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::capability::{Indexable, SequenceLike, indexed_sequence};
    pub use crate::collections::{ExtendedMap, ExtendedSet, JoinOptions, Seed};
    pub use crate::error::{ContainerKind, EmptyReduceError};

    #[cfg(feature = "json")]
    pub use crate::capability::Representable;
}

pub mod capability;
pub mod collections;
pub mod error;
