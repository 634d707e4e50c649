//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (`main.rs`) and the domain, fetch, and
//! storage layers:
//!
//! ```text
//! Zellij event → Event → handle_event → AppState → Actions → shim side effects
//!                   ↑                                   │
//!                   └──── timer / web response ─────────┘
//! ```
//!
//! - [`actions`]: side effects emitted by the handler
//! - [`debounce`]: schedule/cancel debouncing of search input
//! - [`handler`]: the lifecycle and input state machine
//! - [`modes`]: input mode and load state
//! - [`state`]: application state and view model computation

pub mod actions;
pub mod debounce;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use debounce::{Clock, Debouncer, ManualClock, SystemClock};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, LoadState};
pub use state::AppState;
