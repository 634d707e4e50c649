//! Top-level rendering entry points.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Draws the plugin pane to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    print!("{}", render_frame(&viewmodel, &state.theme, rows, cols));
}

/// Builds the ANSI frame for `vm` without printing it.
#[must_use]
pub fn render_frame(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::with_capacity(rows * cols * 2);
    components::render_layout(&mut out, vm, theme, rows, cols);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event, LoadState};
    use crate::domain::{Country, Dataset, ViewState};

    fn frame(state: &AppState) -> String {
        render_frame(&state.compute_viewmodel(24, 100), &state.theme, 24, 100)
    }

    fn ready(countries: Vec<Country>) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.dataset = Dataset::new(countries);
        state.load_state = LoadState::Ready;
        state.apply_filters();
        state
    }

    #[test]
    fn ready_frame_lists_rows_with_grouped_population() {
        let state = ready(vec![
            Country::new("Brazil", 212_559_409).with_flag("https://flagcdn.com/br.svg"),
            Country::new("Chile", 19_116_209).with_flag("https://flagcdn.com/cl.svg"),
        ]);

        let out = frame(&state);

        assert!(out.contains("NAME"));
        assert!(out.contains("212.559.409"));
        assert!(out.contains("19.116.209"));
        assert!(out.contains("https://flagcdn.com/cl.svg"));
        assert!(out.contains("Flag of Brazil · Population: 212.559.409"));
        assert!(out.contains("Sort by population ↓"));
        assert!(!out.contains("No countries found."));
    }

    #[test]
    fn failed_frame_shows_only_the_error_notice() {
        let mut state = AppState::new(Theme::default());
        handle_event(
            &mut state,
            &Event::PermissionsGranted {
                restored: ViewState::default(),
            },
        );
        handle_event(
            &mut state,
            &Event::FetchCompleted {
                status: 503,
                body: Vec::new(),
            },
        );

        let out = frame(&state);

        assert!(out.contains("Could not load countries."));
        assert!(out.contains(&Theme::fg(&state.theme.colors.error_fg)));
        assert!(!out.contains("NAME"));
        assert!(!out.contains("Flag of"));
    }

    #[test]
    fn loading_frame_shows_loading_notice() {
        let mut state = AppState::new(Theme::default());
        handle_event(
            &mut state,
            &Event::PermissionsGranted {
                restored: ViewState::default(),
            },
        );
        assert!(frame(&state).contains("Loading..."));
    }

    #[test]
    fn no_match_frame_keeps_search_text_visible() {
        let mut state = ready(vec![Country::new("Chile", 1)]);
        state.search_input = "zz".to_string();
        state.view_state.search_term = "zz".to_string();
        state.apply_filters();

        let out = frame(&state);
        assert!(out.contains("No countries found."));
        assert!(out.contains("Search: zz"));
    }

    #[test]
    fn narrow_pane_does_not_panic() {
        let state = ready(vec![Country::new("United Kingdom of Great Britain and Northern Ireland", 1)]);
        let out = render_frame(&state.compute_viewmodel(3, 4), &state.theme, 3, 4);
        assert!(!out.is_empty());
    }
}
