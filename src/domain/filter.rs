//! Filter/sort engine deriving the visible list from the dataset.
//!
//! [`apply_filters`] is pure: the caller owns persisting the view state after
//! each pass.

use super::country::{Country, UNKNOWN_NAME};
use super::view::SortOrder;

/// Returns the countries whose name contains `search_term`, sorted by
/// population in `sort_order`.
///
/// The term is trimmed and lowercased. Names are lowercased before matching,
/// except the [`UNKNOWN_NAME`] fallback, which is matched as written. A missing
/// population sorts as 0. The sort is stable, so equal populations keep their
/// dataset order.
///
/// ```
/// use countrydeck::domain::{apply_filters, Country, SortOrder};
///
/// let data = vec![Country::new("Brazil", 200_000_000), Country::new("Chile", 19_000_000)];
/// let view = apply_filters(&data, "chi", SortOrder::Descending);
/// assert_eq!(view, vec![Country::new("Chile", 19_000_000)]);
/// ```
#[must_use]
pub fn apply_filters(dataset: &[Country], search_term: &str, sort_order: SortOrder) -> Vec<Country> {
    let term = search_term.trim().to_lowercase();

    let mut view: Vec<Country> = dataset
        .iter()
        .filter(|country| term.is_empty() || matchable_name(country).contains(&term))
        .cloned()
        .collect();

    match sort_order {
        SortOrder::Ascending => view.sort_by_key(Country::population_or_zero),
        SortOrder::Descending => {
            view.sort_by(|a, b| b.population_or_zero().cmp(&a.population_or_zero()));
        }
    }

    view
}

/// Name used for matching: lowercased, or the literal fallback.
fn matchable_name(country: &Country) -> String {
    match country
        .name
        .as_ref()
        .and_then(|n| n.common.as_deref())
        .filter(|n| !n.is_empty())
    {
        Some(name) => name.to_lowercase(),
        None => UNKNOWN_NAME.to_string(),
    }
}

/// Character range `(start, end)` of the first case-insensitive occurrence of
/// the trimmed term in `name`, for highlighting.
///
/// Returns `None` for an empty term, no match, or a name whose lowercase form
/// changes length (so character positions would not line up).
#[must_use]
pub fn match_range(name: &str, search_term: &str) -> Option<(usize, usize)> {
    let term = search_term.trim().to_lowercase();
    if term.is_empty() {
        return None;
    }

    let lowered = name.to_lowercase();
    if lowered.chars().count() != name.chars().count() {
        return None;
    }

    let byte_start = lowered.find(&term)?;
    let start = lowered[..byte_start].chars().count();
    Some((start, start + term.chars().count()))
}
