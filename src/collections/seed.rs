//! Seed selection for `reduce`.

/// The starting point of a fold.
///
/// `Seeded` starts from the given accumulator and visits every element.
/// `Unseeded` starts from the first element's value and visits the rest,
/// failing on an empty container.
///
/// # Examples
///
/// ```rust
/// use combinars::collections::{ExtendedSet, Seed};
///
/// let set = ExtendedSet::of([1, 2, 3]);
///
/// let seeded = set.reduce(|sum, value, _, _| sum + value, Seed::Seeded(10));
/// assert_eq!(seeded, Ok(16));
///
/// let unseeded = set.reduce(|sum, value, _, _| sum + value, Seed::Unseeded);
/// assert_eq!(unseeded, Ok(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Seed<T> {
    /// No initial accumulator; the first element seeds the fold.
    #[default]
    Unseeded,
    /// An explicit initial accumulator.
    Seeded(T),
}

impl<T> Seed<T> {
    /// Returns `true` if an initial accumulator was supplied.
    #[must_use]
    pub const fn is_seeded(&self) -> bool {
        matches!(self, Self::Seeded(_))
    }
}

impl<T> From<Option<T>> for Seed<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unseeded, Self::Seeded)
    }
}

impl<T> From<Seed<T>> for Option<T> {
    fn from(seed: Seed<T>) -> Self {
        match seed {
            Seed::Unseeded => None,
            Seed::Seeded(value) => Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_is_unseeded() {
        assert_eq!(Seed::<i32>::default(), Seed::Unseeded);
    }

    #[rstest]
    #[case(Some(5), Seed::Seeded(5))]
    #[case(None, Seed::Unseeded)]
    fn test_from_option(#[case] option: Option<i32>, #[case] expected: Seed<i32>) {
        let seed = Seed::from(option);
        assert_eq!(seed, expected);
        assert_eq!(Option::from(seed), option);
        assert_eq!(seed.is_seeded(), option.is_some());
    }
}
