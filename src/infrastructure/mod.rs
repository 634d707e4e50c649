//! Infrastructure layer for the Zellij sandbox environment.
//!
//! Currently only path handling: the host filesystem is mounted under `/host`.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, preferences_path, trace_path};
