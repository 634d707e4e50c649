//! Terminal UI.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_frame → ANSI output
//! ```
//!
//! - [`viewmodel`]: display-ready data for one frame
//! - [`renderer`]: entry points
//! - [`components`]: header, search box, table, notices, footer
//! - [`helpers`]: cursor movement and match highlighting
//! - [`theme`]: colour schemes and escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_frame};
pub use theme::Theme;
pub use viewmodel::{
    DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, Notice, SearchBarInfo, UIViewModel,
};
