//! `serde` support for the extended containers.
//!
//! Serialization delegates to the native `indexmap` implementations, so the
//! map is written as a map and the set as a sequence, both in insertion
//! order. Deserialization rebuilds insertion order from input order.

use std::hash::{BuildHasher, Hash};

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ExtendedMap, ExtendedSet};

impl<K, V, S> Serialize for ExtendedMap<K, V, S>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.as_inner().serialize(serializer)
    }
}

impl<'de, K, V, S> Deserialize<'de> for ExtendedMap<K, V, S>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IndexMap::deserialize(deserializer).map(Self::from)
    }
}

impl<T, S> Serialize for ExtendedSet<T, S>
where
    T: Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.as_inner().serialize(serializer)
    }
}

impl<'de, T, S> Deserialize<'de> for ExtendedSet<T, S>
where
    T: Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IndexSet::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(feature = "json")]
impl<K, V, S> ExtendedMap<K, V, S>
where
    K: Serialize,
    V: Serialize,
{
    /// Projects the map through `serde`, for values that implement
    /// [`Serialize`] but not [`Representable`](crate::capability::Representable).
    ///
    /// # Errors
    ///
    /// Returns the serializer's error, e.g. for keys that cannot become
    /// JSON object keys.
    pub fn to_json_serialized(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[cfg(feature = "json")]
impl<T, S> ExtendedSet<T, S>
where
    T: Serialize,
{
    /// Projects the set through `serde`, for elements that implement
    /// [`Serialize`] but not [`Representable`](crate::capability::Representable).
    ///
    /// # Errors
    ///
    /// Returns the serializer's error.
    pub fn to_json_serialized(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
