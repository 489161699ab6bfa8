//! Error types for the extended containers.
//!
//! The only failure these containers define is folding an empty container
//! without a seed. Every other operation is total.

/// The kind of container an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// [`ExtendedMap`](crate::collections::ExtendedMap).
    Map,
    /// [`ExtendedSet`](crate::collections::ExtendedSet).
    Set,
}

impl ContainerKind {
    /// Returns the lowercase name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Set => "set",
        }
    }
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Represents an unseeded reduce over a container with no entries.
///
/// Returned by `reduce_or_fail` (and by `reduce` with [`Seed::Unseeded`]) when
/// there is no first element to seed the accumulator with.
///
/// [`Seed::Unseeded`]: crate::collections::Seed::Unseeded
///
/// # Examples
///
/// ```rust
/// use combinars::error::{ContainerKind, EmptyReduceError};
///
/// let error = EmptyReduceError::new(ContainerKind::Map);
/// assert_eq!(
///     format!("{}", error),
///     "Reduce of empty map with no initial value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyReduceError {
    /// The container the reduce was invoked on.
    pub container: ContainerKind,
}

impl EmptyReduceError {
    /// Creates an error for the given container kind.
    #[must_use]
    pub const fn new(container: ContainerKind) -> Self {
        Self { container }
    }
}

impl std::fmt::Display for EmptyReduceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Reduce of empty {} with no initial value",
            self.container
        )
    }
}

impl std::error::Error for EmptyReduceError {}
