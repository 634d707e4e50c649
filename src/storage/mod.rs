//! Storage layer for persisted view preferences.
//!
//! - `backend`: the [`KeyValueStore`] trait
//! - `json`: JSON file implementation with atomic writes
//! - `memory`: in-memory implementation
//! - `preferences`: search term / sort order persistence on top of a store

pub mod backend;
pub mod json;
pub mod memory;
pub mod preferences;

pub use backend::KeyValueStore;
pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use preferences::PreferenceStore;
