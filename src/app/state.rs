//! Application state and view model computation.
//!
//! [`AppState`] owns the dataset, the view state, and the derived view. The
//! derived view is only ever written by [`AppState::apply_filters`], so it
//! always equals `sort(filter(dataset, term), order)` for the current view
//! state.

use super::debounce::{Clock, Debouncer, SystemClock};
use super::modes::{InputMode, LoadState};
use crate::app::Action;
use crate::domain::country::{format_population, population_label};
use crate::domain::filter::match_range;
use crate::domain::{apply_filters, Country, Dataset, ViewState};
use crate::fetch::CountriesRequest;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, Notice, SearchBarInfo, UIViewModel,
};
use std::sync::Arc;
use std::time::Duration;

/// Quiet period before typed search text is applied.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Message shown when the country list cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Could not load countries.";

/// Message shown when no country matches the search.
pub const NO_RESULTS_MESSAGE: &str = "No countries found.";

/// Message shown while the request is in flight.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Rows used by everything except the country list: blank line, header,
/// border, search box (3), column headers, detail line, border, footer, and
/// the blank last line.
const CHROME_ROWS: usize = 11;

/// Width of the NAME column, including its trailing gap.
pub const NAME_COLUMN_WIDTH: usize = 34;

/// Width of the right-aligned POPULATION column.
pub const POPULATION_COLUMN_WIDTH: usize = 15;

/// Longest name shown before truncation.
const MAX_NAME_CHARS: usize = 32;

/// Central application state.
///
/// Mutated only by the event handler. Rendering reads it through
/// [`AppState::compute_viewmodel`].
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every country from the last successful fetch.
    pub dataset: Dataset,

    /// Filtered and sorted countries currently shown.
    pub view: Vec<Country>,

    /// The term and order `view` was computed from.
    pub view_state: ViewState,

    /// Text in the search box. Runs ahead of `view_state.search_term` while a
    /// debounced update is pending.
    pub search_input: String,

    /// Zero-based cursor into `view`.
    pub selected_index: usize,

    pub input_mode: InputMode,

    pub load_state: LoadState,

    /// Pending application of typed search text.
    pub debouncer: Debouncer<String>,

    /// Host timers armed but not yet fired. Zellij timers cannot be
    /// cancelled, so a stale one still arrives as a timer event.
    pub armed_timers: usize,

    /// Request issued when loading starts.
    pub request: CountriesRequest,

    pub theme: Theme,

    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates an idle state with default request, debounce delay, and clock.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            dataset: Dataset::default(),
            view: Vec::new(),
            view_state: ViewState::default(),
            search_input: String::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            load_state: LoadState::Idle,
            debouncer: Debouncer::new(DEFAULT_DEBOUNCE),
            armed_timers: 0,
            request: CountriesRequest::default(),
            theme,
            clock: Arc::new(SystemClock::new()),
        }
    }

    #[must_use]
    pub fn with_request(mut self, request: CountriesRequest) -> Self {
        self.request = request;
        self
    }

    #[must_use]
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    /// Replaces the time source, e.g. with a
    /// [`ManualClock`](crate::app::debounce::ManualClock) in tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Adopts a restored view state; the search box shows the restored term.
    pub fn restore(&mut self, view_state: ViewState) {
        self.search_input.clone_from(&view_state.search_term);
        self.view_state = view_state;
    }

    /// Recomputes the view from the dataset and view state.
    ///
    /// Returns the action persisting the view state, which must follow every
    /// pass.
    pub fn apply_filters(&mut self) -> Action {
        let _span = tracing::debug_span!(
            "apply_filters",
            total = self.dataset.len(),
            term_len = self.view_state.search_term.len(),
            order = self.view_state.sort_order.as_token()
        )
        .entered();

        self.view = apply_filters(
            self.dataset.countries(),
            &self.view_state.search_term,
            self.view_state.sort_order,
        );

        if self.view.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.view.len() - 1);
        }

        tracing::debug!(visible = self.view.len(), "view recomputed");

        Action::PersistPreferences(self.view_state.clone())
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.view.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.view.len();
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.view.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.view.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_country(&self) -> Option<&Country> {
        self.view.get(self.selected_index)
    }

    /// Builds the renderable view model for a `rows` × `cols` pane.
    ///
    /// The visible window is centred on the selection where possible and
    /// pulled back so it never ends short of the last row.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let mut vm = UIViewModel {
            display_items: vec![],
            selected_index: 0,
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            detail: None,
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
        };

        if vm.empty_state.is_some() {
            return vm;
        }

        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.view.len());
        if visible_end - visible_start < available_rows && self.view.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let flag_width = cols.saturating_sub(NAME_COLUMN_WIDTH + POPULATION_COLUMN_WIDTH + 1);

        vm.display_items = self.view[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, country)| {
                self.compute_display_item(country, visible_start + offset, flag_width)
            })
            .collect();
        vm.selected_index = self.selected_index.saturating_sub(visible_start);
        vm.detail = self.selected_country().map(|country| DetailInfo {
            flag_alt: country.flag_alt(),
            population: population_label(country.population_or_zero()),
            flag_url: country.flag_url().unwrap_or_default().to_string(),
        });

        vm
    }

    fn compute_display_item(&self, country: &Country, absolute_idx: usize, flag_width: usize) -> DisplayItem {
        let full_name = country.display_name();
        let (name, visible_chars) = if full_name.chars().count() > MAX_NAME_CHARS {
            let kept: String = full_name.chars().take(MAX_NAME_CHARS - 3).collect();
            (format!("{kept}..."), MAX_NAME_CHARS - 3)
        } else {
            (full_name.to_string(), full_name.chars().count())
        };

        // A match cut off by the ellipsis is not highlighted.
        let highlight_ranges = match_range(full_name, &self.view_state.search_term)
            .filter(|&(_, end)| end <= visible_chars)
            .into_iter()
            .collect();

        DisplayItem {
            name,
            population: format_population(country.population_or_zero()),
            flag_url: truncate_start(country.flag_url().unwrap_or_default(), flag_width),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = if self.load_state.is_ready() {
            format!(" Countries ({}/{}) ", self.view.len(), self.dataset.len())
        } else {
            " Countries ".to_string()
        };

        HeaderInfo {
            title,
            sort_label: self.view_state.sort_order.label().to_string(),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.search_input.clone(),
            focused: self.input_mode == InputMode::Search,
            pending: self.debouncer.is_pending(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.load_state, self.input_mode) {
            (LoadState::Ready, InputMode::Search) => {
                "ESC: done  Tab: toggle sort  Ctrl+n/p: navigate  Type to filter"
            }
            (LoadState::Ready, InputMode::Normal) => {
                "j/k or Ctrl+n/p: navigate  /: search  s: toggle sort  q: quit"
            }
            _ => "q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        match self.load_state {
            LoadState::Idle => Some(EmptyState {
                message: "Waiting for permissions".to_string(),
                subtitle: "Grant web access to load the country list".to_string(),
                notice: Notice::Info,
            }),
            LoadState::Loading => Some(EmptyState {
                message: LOADING_MESSAGE.to_string(),
                subtitle: "Fetching countries".to_string(),
                notice: Notice::Info,
            }),
            LoadState::Failed => Some(EmptyState {
                message: LOAD_FAILED_MESSAGE.to_string(),
                subtitle: "Check your connection and reopen the plugin".to_string(),
                notice: Notice::Error,
            }),
            LoadState::Ready if self.view.is_empty() => Some(EmptyState {
                message: NO_RESULTS_MESSAGE.to_string(),
                subtitle: if self.view_state.search_term.trim().is_empty() {
                    "The country list is empty".to_string()
                } else {
                    format!("No country name contains \"{}\"", self.view_state.search_term.trim())
                },
                notice: Notice::Info,
            }),
            LoadState::Ready => None,
        }
    }
}

/// Keeps the tail of `text` within `max_width` characters, prefixing "...".
fn truncate_start(text: &str, max_width: usize) -> String {
    let len = text.chars().count();
    if len <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return String::new();
    }
    let tail: String = text.chars().skip(len - (max_width - 3)).collect();
    format!("...{tail}")
}
