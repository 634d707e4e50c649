//! View model types representing renderable UI state.
//!
//! Built by [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. They hold display-ready strings only: numbers
//! are already grouped, names already truncated, highlight ranges already
//! computed.

/// Everything needed to draw one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows of the visible window of the country list.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    pub search_bar: SearchBarInfo,

    /// Details of the selected country, if any row is selected.
    pub detail: Option<DetailInfo>,

    pub footer: FooterInfo,

    /// Replaces the list when loading, failed, or nothing matches.
    pub empty_state: Option<EmptyState>,
}

/// One row of the country table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Common name, or "Unknown".
    pub name: String,

    /// Population with period digit grouping.
    pub population: String,

    /// Flag image URL, truncated from the left to fit.
    pub flag_url: String,

    pub is_selected: bool,

    /// Character ranges `(start, end)` of the search match within `name`.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title with visible and total counts.
    pub title: String,

    /// Label of the sort toggle, with its direction arrow.
    pub sort_label: String,
}

/// The search box contents.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,

    /// Whether keystrokes go to the search box.
    pub focused: bool,

    /// Whether typed text is waiting for the debounce delay.
    pub pending: bool,
}

/// Line describing the selected country.
#[derive(Debug, Clone)]
pub struct DetailInfo {
    /// Flag description, e.g. "Flag of Chile".
    pub flag_alt: String,

    /// e.g. "Population: 19.116.209".
    pub population: String,

    pub flag_url: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding hints for the current mode.
    pub keybindings: String,
}

/// Message shown in place of the country list.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    pub notice: Notice,
}

/// Severity of an [`EmptyState`], which picks its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Info,
    Error,
}
