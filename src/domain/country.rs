//! Country records as served by the REST Countries API.
//!
//! Records are decoded leniently: a field that is missing or has the wrong JSON
//! type decodes as `None` instead of failing the whole payload. Consumers read
//! through [`Country::display_name`] and [`Country::population_or_zero`], which
//! apply the shared fallbacks.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Name shown and matched for a record without a usable common name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A single country as returned by the endpoint.
///
/// Immutable once fetched. Extra fields in the payload are ignored. Identity is
/// positional; there is no stable id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Country {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<CountryName>,

    #[serde(default, rename = "flags", deserialize_with = "lenient")]
    pub flag: Option<Flag>,

    #[serde(default, deserialize_with = "lenient_population")]
    pub population: Option<u64>,
}

/// The `name` object; only the common name is used.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountryName {
    #[serde(default, deserialize_with = "lenient")]
    pub common: Option<String>,
}

/// The `flags` object with its image URLs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Flag {
    #[serde(default, deserialize_with = "lenient")]
    pub svg: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub png: Option<String>,
}

impl Flag {
    /// Preferred image URL: SVG, then PNG.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.svg.as_deref().or(self.png.as_deref())
    }
}

impl Country {
    /// Builds a record from plain values. Mostly useful in tests and fixtures.
    #[must_use]
    pub fn new(name: &str, population: u64) -> Self {
        Self {
            name: Some(CountryName {
                common: Some(name.to_string()),
            }),
            flag: None,
            population: Some(population),
        }
    }

    /// Attaches an SVG flag URL.
    #[must_use]
    pub fn with_flag(mut self, svg: &str) -> Self {
        self.flag = Some(Flag {
            svg: Some(svg.to_string()),
            png: None,
        });
        self
    }

    /// Common name, or [`UNKNOWN_NAME`] when missing or empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_ref()
            .and_then(|n| n.common.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or(UNKNOWN_NAME)
    }

    /// Population, with a missing value counted as 0.
    #[must_use]
    pub fn population_or_zero(&self) -> u64 {
        self.population.unwrap_or(0)
    }

    /// Flag image URL, if any.
    #[must_use]
    pub fn flag_url(&self) -> Option<&str> {
        self.flag.as_ref().and_then(Flag::image_url)
    }

    /// Alt text for the flag image.
    #[must_use]
    pub fn flag_alt(&self) -> String {
        format!("Flag of {}", self.display_name())
    }
}

/// The full list of countries for one plugin session.
///
/// Replaced wholesale on every successful fetch; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    countries: Vec<Country>,
}

impl Dataset {
    #[must_use]
    pub const fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl From<Vec<Country>> for Dataset {
    fn from(countries: Vec<Country>) -> Self {
        Self::new(countries)
    }
}

/// Formats a number with `pt-BR` digit grouping: periods every three digits.
///
/// ```
/// use countrydeck::domain::country::format_population;
///
/// assert_eq!(format_population(1_234_567), "1.234.567");
/// assert_eq!(format_population(999), "999");
/// ```
#[must_use]
pub fn format_population(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    grouped
}

/// Row label for a population value, e.g. `Population: 1.234.567`.
#[must_use]
pub fn population_label(value: u64) -> String {
    format!("Population: {}", format_population(value))
}

/// Decodes `T` if the value has the right shape, otherwise yields `None`.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Accepts non-negative integers and floats (truncated); anything else is `None`.
fn lenient_population<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let population = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f as u64)
    });
    Ok(population)
}
