//! Truncation of long header values.

/// Values longer than this many characters are truncated unless expanded.
pub const LONG_HEADER_LIMIT: usize = 200;

/// Number of characters kept from a truncated value.
pub const TRUNCATED_LENGTH: usize = LONG_HEADER_LIMIT - 10;

/// Thresholds for value truncation, measured in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationLimits {
    long_value_limit: usize,
    truncated_length: usize,
}

impl Default for TruncationLimits {
    fn default() -> Self {
        Self { long_value_limit: LONG_HEADER_LIMIT, truncated_length: TRUNCATED_LENGTH }
    }
}

impl TruncationLimits {
    pub(crate) fn new(long_value_limit: usize, truncated_length: usize) -> Self {
        Self { long_value_limit, truncated_length }
    }

    #[inline]
    pub fn long_value_limit(&self) -> usize {
        self.long_value_limit
    }

    #[inline]
    pub fn truncated_length(&self) -> usize {
        self.truncated_length
    }

    /// Returns true if `value` has more than `long_value_limit` characters.
    #[inline]
    pub fn is_long(&self, value: &str) -> bool {
        value.chars().nth(self.long_value_limit).is_some()
    }

    /// Decides how much of `value` to show.
    pub fn truncate(&self, value: &str, expanded: bool) -> ValueView {
        if expanded || !self.is_long(value) {
            return ValueView::Full(value.to_string());
        }

        let end = value.char_indices().nth(self.truncated_length).map_or(value.len(), |(index, _)| index);
        ValueView::Truncated { shown: value[..end].to_string(), full_length: value.chars().count() }
    }
}

/// Truncates `value` with the default limits.
pub fn truncate_value(value: &str, expanded: bool) -> ValueView {
    TruncationLimits::default().truncate(value, expanded)
}

/// The part of a header value that is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueView {
    Full(String),
    /// A prefix of the value, shown with a truncation marker.
    Truncated { shown: String, full_length: usize },
}

impl ValueView {
    pub fn shown(&self) -> &str {
        match self {
            ValueView::Full(value) => value,
            ValueView::Truncated { shown, .. } => shown,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, ValueView::Truncated { .. })
    }
}
