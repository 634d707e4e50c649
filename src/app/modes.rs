//! Input mode and load lifecycle state machines.
//!
//! ```text
//! Idle ──permissions granted──▶ Loading ──fetch ok────▶ Ready
//!   │                              └────fetch failed──▶ Failed
//!   └──────permissions denied────────────────────────▶ Failed
//! ```
//!
//! Only [`LoadState::Ready`] accepts search and sort input. `Failed` is final
//! for the lifetime of the plugin instance.

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation and commands: j/k, `/`, `s`, `q`.
    #[default]
    Normal,

    /// Typing into the search bar. Characters edit the term; navigation keys
    /// that are not letters still move the selection.
    Search,
}

/// Where the plugin is in its single load of the country list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Waiting for permissions; nothing requested yet.
    #[default]
    Idle,
    /// The countries request is in flight.
    Loading,
    /// Dataset loaded; filtering and sorting are live.
    Ready,
    /// The load failed. Terminal.
    Failed,
}

impl LoadState {
    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}
