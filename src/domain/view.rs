//! User-selected view parameters: search text and sort direction.

use serde::{Deserialize, Serialize};

/// Direction of the population sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Smallest population first.
    Ascending,
    /// Largest population first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Persisted token for this order.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Reads a persisted token. Only `"asc"` means ascending; anything else,
    /// including garbage, reads as descending.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token == "asc" {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the sort toggle, which reflects the current direction.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort by population ↑",
            Self::Descending => "Sort by population ↓",
        }
    }
}

/// Search term and sort order the current view is derived from.
///
/// `search_term` is kept raw, exactly as typed; trimming happens only when
/// matching.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub search_term: String,
    pub sort_order: SortOrder,
}

impl ViewState {
    #[must_use]
    pub fn new(search_term: impl Into<String>, sort_order: SortOrder) -> Self {
        Self {
            search_term: search_term.into(),
            sort_order,
        }
    }
}
