//! CountryDeck: a Zellij plugin for browsing the countries of the world.
//!
//! - Loads every country once from the REST Countries API
//! - Debounced, case-insensitive substring search on the common name
//! - Population sort, toggled between descending and ascending
//! - Search term and sort order persisted across plugin restarts

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Zellij plugin shim (main.rs)                │  events in, host calls out
//! └──────────────────────────────────────────────┘
//!                       │
//! ┌──────────────────────────────────────────────┐
//! │  Application layer (app/)                    │  lifecycle, debounce,
//! │                                              │  actions, view model
//! └──────────────────────────────────────────────┘
//!        │               │                │
//! ┌────────────┐  ┌─────────────┐  ┌─────────────┐
//! │ ui/        │  │ storage/    │  │ fetch/      │
//! │ rendering  │  │ preferences │  │ request and │
//! │ theming    │  │ JSON store  │  │ decoding    │
//! └────────────┘  └─────────────┘  └─────────────┘
//!        │               │                │
//! ┌──────────────────────────────────────────────┐
//! │  domain/ (countries, filter/sort, errors)    │
//! │  infrastructure/ (sandbox paths)             │
//! │  observability/ (OTLP file tracing)          │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! countrydeck {
//!     endpoint "https://restcountries.com/v3.1"
//!     debounce_ms "300"
//!     theme "catppuccin-mocha"
//!     theme_file "~/.config/zellij/countrydeck-theme.toml"
//!     trace_level "debug"
//! }
//! ```

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, LoadState};
pub use domain::{CountryDeckError, Result};
pub use ui::Theme;

use domain::CountryDeckError as Error;
use fetch::{CountriesRequest, DEFAULT_ENDPOINT};
use std::collections::BTreeMap;
use std::time::Duration;

/// Plugin options from the Zellij layout or config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// REST Countries base URL.
    pub endpoint: String,

    /// Quiet period before typed search text is applied.
    pub debounce: Duration,

    /// Built-in theme name; ignored when `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a theme TOML file. `~` maps to the host mount.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            debounce: app::state::DEFAULT_DEBOUNCE,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Reads options from the plugin configuration map.
    ///
    /// Missing, empty, or invalid values fall back to their defaults.
    ///
    /// ```
    /// use countrydeck::Config;
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    ///
    /// let mut raw = BTreeMap::new();
    /// raw.insert("debounce_ms".to_string(), "150".to_string());
    ///
    /// let config = Config::from_zellij(&raw);
    /// assert_eq!(config.debounce, Duration::from_millis(150));
    /// assert_eq!(config.endpoint, "https://restcountries.com/v3.1");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let endpoint = config
            .get("endpoint")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or(defaults.endpoint, String::from);

        let debounce = config.get("debounce_ms").map_or(defaults.debounce, |raw| {
            parse_debounce(raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "using default debounce");
                defaults.debounce
            })
        });

        Self {
            endpoint,
            debounce,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Parses a `debounce_ms` value.
///
/// # Errors
///
/// Returns [`CountryDeckError::Config`] unless `raw` is a whole number of
/// milliseconds.
pub fn parse_debounce(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| Error::Config(format!("debounce_ms {raw:?}: {e}")))
}

/// Resolves the theme: `theme_file` first, then `theme_name`, then the
/// default. Failures are logged and fall through to the default.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        match Theme::from_file(&path) {
            Ok(theme) => return theme,
            Err(e) => tracing::warn!(theme_file = %path, error = %e, "using default theme"),
        }
    } else if let Some(theme_name) = &config.theme_name {
        match Theme::from_name(theme_name) {
            Some(theme) => return theme,
            None => tracing::warn!(theme_name = %theme_name, "unknown theme, using default"),
        }
    }
    Theme::default()
}

/// Builds the initial, idle application state from configuration.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, "initializing countrydeck");

    AppState::new(load_theme(config))
        .with_request(CountriesRequest::new(&config.endpoint))
        .with_debounce(config.debounce)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn reads_all_options() {
        let config = Config::from_zellij(&raw(&[
            ("endpoint", " http://localhost:8080/v3.1 "),
            ("debounce_ms", "0"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/theme.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.endpoint, "http://localhost:8080/v3.1");
        assert_eq!(config.debounce, Duration::ZERO);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("~/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_debounce_falls_back() {
        let config = Config::from_zellij(&raw(&[("debounce_ms", "soon")]));
        assert_eq!(config.debounce, app::state::DEFAULT_DEBOUNCE);
        assert!(matches!(parse_debounce("-5"), Err(Error::Config(_))));
    }

    #[test]
    fn initialize_wires_endpoint_and_theme() {
        let config = Config {
            endpoint: "http://localhost:9000/".to_string(),
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);

        assert_eq!(state.request.url, "http://localhost:9000/all?fields=name,flags,population");
        assert_eq!(state.theme.name, "catppuccin-frappe");
        assert_eq!(state.load_state, LoadState::Idle);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("nope".to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&config), Theme::default());
    }
}
