//! Rendering options for [`ExtendedMap::join`](super::ExtendedMap::join).

/// Controls how a map's entries are rendered into a single string.
///
/// The defaults render every entry as `key:value` and separate entries with
/// `,`. [`JoinOptions::rows`] is the shorthand for changing only the row
/// delimiter.
///
/// # Examples
///
/// ```rust
/// use combinars::collections::{ExtendedMap, JoinOptions};
///
/// let map = ExtendedMap::from_entries([("x", 1), ("y", 2)]);
///
/// assert_eq!(map.join(&JoinOptions::default()), "x:1,y:2");
/// assert_eq!(map.join(&JoinOptions::rows(" | ")), "x:1 | y:2");
///
/// let options = JoinOptions::default()
///     .with_key_before_value(false)
///     .with_key_value_delimiter("=");
/// assert_eq!(map.join(&options), "1=x,2=y");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JoinOptions {
    /// Whether the key is written before the value when both are shown.
    pub is_key_before_value: bool,
    /// Written between key and value when both are shown.
    pub key_value_delimiter: String,
    /// Written after every entry, with one trailing occurrence stripped.
    /// `None` writes no delimiter and strips nothing.
    pub row_delimiter: Option<String>,
    /// Whether keys are rendered.
    pub show_key: bool,
    /// Whether values are rendered.
    pub show_value: bool,
}

impl JoinOptions {
    /// Default key/value delimiter.
    pub const DEFAULT_KEY_VALUE_DELIMITER: &'static str = ":";
    /// Default row delimiter.
    pub const DEFAULT_ROW_DELIMITER: &'static str = ",";

    /// Default options with a custom row delimiter.
    #[must_use]
    pub fn rows(row_delimiter: impl Into<String>) -> Self {
        Self::default().with_row_delimiter(row_delimiter)
    }

    /// Sets whether keys precede values.
    #[must_use]
    pub const fn with_key_before_value(mut self, is_key_before_value: bool) -> Self {
        self.is_key_before_value = is_key_before_value;
        self
    }

    /// Sets the key/value delimiter.
    #[must_use]
    pub fn with_key_value_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.key_value_delimiter = delimiter.into();
        self
    }

    /// Sets the row delimiter.
    #[must_use]
    pub fn with_row_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.row_delimiter = Some(delimiter.into());
        self
    }

    /// Removes the row delimiter, concatenating entries directly.
    #[must_use]
    pub fn without_row_delimiter(mut self) -> Self {
        self.row_delimiter = None;
        self
    }

    /// Sets whether keys are shown.
    #[must_use]
    pub const fn with_show_key(mut self, show_key: bool) -> Self {
        self.show_key = show_key;
        self
    }

    /// Sets whether values are shown.
    #[must_use]
    pub const fn with_show_value(mut self, show_value: bool) -> Self {
        self.show_value = show_value;
        self
    }

    /// Returns `true` if at least one side of each entry is rendered.
    #[must_use]
    pub const fn shows_anything(&self) -> bool {
        self.show_key || self.show_value
    }

    pub(crate) fn row_delimiter_str(&self) -> &str {
        self.row_delimiter.as_deref().unwrap_or_default()
    }
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            is_key_before_value: true,
            key_value_delimiter: Self::DEFAULT_KEY_VALUE_DELIMITER.to_owned(),
            row_delimiter: Some(Self::DEFAULT_ROW_DELIMITER.to_owned()),
            show_key: true,
            show_value: true,
        }
    }
}

impl From<&str> for JoinOptions {
    fn from(row_delimiter: &str) -> Self {
        Self::rows(row_delimiter)
    }
}

impl From<String> for JoinOptions {
    fn from(row_delimiter: String) -> Self {
        Self::rows(row_delimiter)
    }
}

/// Strips one trailing occurrence of `delimiter` from `rendered`.
///
/// The stripped length is the delimiter's own length; an empty delimiter
/// strips nothing.
pub(crate) fn strip_trailing_delimiter(mut rendered: String, delimiter: &str) -> String {
    if !delimiter.is_empty() && rendered.ends_with(delimiter) {
        rendered.truncate(rendered.len() - delimiter.len());
    }
    rendered
}
