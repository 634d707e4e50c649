//! Colour themes and ANSI escape generation.
//!
//! Four Catppuccin flavours are compiled in from `themes/*.toml`. A custom
//! theme can be loaded from any TOML file with the same shape:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cba6f7"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#89b4fa"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#b4befe"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#a6adc8"
//! error_fg = "#f38ba8"
//! accent_fg = "#fab387"
//! ```

use crate::domain::error::{CountryDeckError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 4] = [
    "catppuccin-mocha",
    "catppuccin-latte",
    "catppuccin-frappe",
    "catppuccin-macchiato",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colours (`#rrggbb`) for each UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Informational notices (loading, no results).
    pub empty_state_fg: String,

    /// Load failure notice.
    pub error_fg: String,

    /// Sort label and population column.
    pub accent_fg: String,
}

impl Theme {
    /// Returns a built-in theme, or `None` for an unknown name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CountryDeckError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            CountryDeckError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents).map_err(|e| {
            CountryDeckError::Theme(format!("failed to parse {}: {e}", path.display()))
        })
    }

    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// Truecolor foreground escape for a hex colour.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Truecolor background escape for a hex colour.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Catppuccin Mocha, spelled out so the default never depends on parsing.
    fn mocha() -> Self {
        let hex = |s: &str| format!("#{s}");
        Self {
            name: "catppuccin-mocha".to_string(),
            colors: ThemeColors {
                header_fg: hex("cba6f7"),
                header_bg: None,
                selection_fg: hex("1e1e2e"),
                selection_bg: hex("89b4fa"),
                text_normal: hex("cdd6f4"),
                text_dim: hex("6c7086"),
                border: hex("45475a"),
                search_bar_border: hex("b4befe"),
                match_highlight_fg: hex("1e1e2e"),
                match_highlight_bg: hex("f9e2af"),
                empty_state_fg: hex("a6adc8"),
                error_fg: hex("f38ba8"),
                accent_fg: hex("fab387"),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").unwrap_or_else(Self::mocha)
    }
}
