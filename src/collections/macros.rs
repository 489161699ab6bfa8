//! Literal construction macros for the extended containers.

/// Creates an [`ExtendedSet`](crate::collections::ExtendedSet) from a list of
/// elements, dropping later duplicates.
///
/// # Examples
///
/// ```rust
/// use combinars::extended_set;
///
/// let set = extended_set![1, 2, 2, 3];
/// assert_eq!(set.to_list(), vec![&1, &2, &3]);
///
/// let empty: combinars::collections::ExtendedSet<i32> = extended_set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! extended_set {
    () => {
        $crate::collections::ExtendedSet::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::collections::ExtendedSet::of([$($element),+])
    };
}

/// Creates an [`ExtendedMap`](crate::collections::ExtendedMap) from
/// `key => value` pairs, in the order written.
///
/// # Examples
///
/// ```rust
/// use combinars::extended_map;
///
/// let map = extended_map! { "x" => 1, "y" => 2 };
/// assert_eq!(map.join_rows(","), "x:1,y:2");
/// ```
#[macro_export]
macro_rules! extended_map {
    () => {
        $crate::collections::ExtendedMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::collections::ExtendedMap::from_entries([$(($key, $value)),+])
    };
}
