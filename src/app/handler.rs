//! Event handling and state transitions.
//!
//! [`handle_event`] is the only place [`AppState`] changes after start-up.
//! It returns whether the pane needs a redraw plus the [`Action`]s the plugin
//! shim must perform, in order. Nothing here talks to Zellij directly, which
//! keeps the whole lifecycle testable on the host.
//!
//! # Example
//!
//! ```rust
//! use countrydeck::app::{handle_event, AppState, Event};
//! use countrydeck::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::PermissionsDenied);
//! assert!(render);
//! assert!(actions.is_empty());
//! ```

use super::debounce::Poll;
use super::modes::{InputMode, LoadState};
use crate::app::{Action, AppState};
use crate::domain::ViewState;
use crate::fetch::decode_response;
use std::error::Error as _;

/// Input the plugin reacts to, already translated from Zellij events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the selection down (wraps to top).
    KeyDown,
    /// Moves the selection up (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Focuses the search box.
    SearchMode,
    /// Leaves the search box. The typed text stays.
    ExitSearch,
    /// Appends a character to the search box.
    Char(char),
    /// Removes the last character from the search box.
    Backspace,
    /// Flips the population sort order and applies it immediately.
    ToggleSort,
    /// A host timer armed by [`Action::ArmTimer`] fired.
    TimerElapsed,

    /// Web and filesystem access were granted.
    PermissionsGranted {
        /// View state read back from the preference store.
        restored: ViewState,
    },

    /// Web access was refused; the list can never load.
    PermissionsDenied,

    /// The countries request finished, successfully or not.
    FetchCompleted {
        /// HTTP status reported by the host.
        status: u16,
        body: Vec<u8>,
    },
}

/// Applies `event` to `state`.
///
/// Returns `(render, actions)`: whether the pane must be redrawn, and the
/// side effects to perform in order. Every filter/sort pass is followed by an
/// [`Action::PersistPreferences`].
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            (true, vec![])
        }
        Event::KeyUp => {
            state.move_selection_up();
            (true, vec![])
        }
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::SearchMode => {
            if !state.load_state.is_ready() {
                return (false, vec![]);
            }
            state.input_mode = InputMode::Search;
            (true, vec![])
        }
        Event::ExitSearch => {
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        Event::Char(c) => {
            if !state.load_state.is_ready() || state.input_mode != InputMode::Search {
                return (false, vec![]);
            }
            state.search_input.push(*c);
            tracing::trace!(input = %state.search_input, "search input updated");
            (true, vec![schedule_search(state)])
        }
        Event::Backspace => {
            if !state.load_state.is_ready() || state.input_mode != InputMode::Search {
                return (false, vec![]);
            }
            if state.search_input.pop().is_none() {
                return (false, vec![]);
            }
            (true, vec![schedule_search(state)])
        }
        Event::ToggleSort => {
            if !state.load_state.is_ready() {
                return (false, vec![]);
            }
            // The pass below uses the live input, so a pending update is moot.
            state.debouncer.cancel();
            state.view_state.search_term.clone_from(&state.search_input);
            state.view_state.sort_order = state.view_state.sort_order.toggled();
            tracing::debug!(order = state.view_state.sort_order.as_token(), "sort toggled");
            (true, vec![state.apply_filters()])
        }
        Event::TimerElapsed => {
            state.armed_timers = state.armed_timers.saturating_sub(1);
            let now = state.now();
            match state.debouncer.poll(now) {
                Poll::Ready(term) if state.load_state.is_ready() => {
                    state.view_state.search_term = term;
                    (true, vec![state.apply_filters()])
                }
                // Only the last outstanding timer re-arms; earlier ones were
                // superseded by a later keystroke whose timer is still due.
                Poll::NotYet(remaining) if state.armed_timers == 0 => {
                    state.armed_timers = 1;
                    tracing::trace!(?remaining, "timer fired early, re-arming");
                    (false, vec![Action::ArmTimer(remaining)])
                }
                Poll::Ready(_) | Poll::NotYet(_) | Poll::Idle => (false, vec![]),
            }
        }
        Event::PermissionsGranted { restored } => {
            if state.load_state != LoadState::Idle {
                return (false, vec![]);
            }
            tracing::debug!(
                term = %restored.search_term,
                order = restored.sort_order.as_token(),
                "restoring view state"
            );
            state.restore(restored.clone());
            state.load_state = LoadState::Loading;
            (true, vec![Action::FetchCountries(state.request.clone())])
        }
        Event::PermissionsDenied => {
            tracing::warn!("web access denied, country list unavailable");
            state.load_state = LoadState::Failed;
            (true, vec![])
        }
        Event::FetchCompleted { status, body } => {
            if state.load_state != LoadState::Loading {
                tracing::debug!(status, "ignoring response outside of loading");
                return (false, vec![]);
            }
            match decode_response(*status, body) {
                Ok(dataset) => {
                    tracing::info!(countries = dataset.len(), "country list loaded");
                    state.dataset = dataset;
                    state.load_state = LoadState::Ready;
                    (true, vec![state.apply_filters()])
                }
                Err(e) => {
                    let cause = e.source().map(ToString::to_string).unwrap_or_default();
                    tracing::error!(error = %e, cause = %cause, "country list unavailable");
                    state.load_state = LoadState::Failed;
                    (true, vec![])
                }
            }
        }
    }
}

fn schedule_search(state: &mut AppState) -> Action {
    let now = state.now();
    let delay = state.debouncer.schedule(state.search_input.clone(), now);
    state.armed_timers += 1;
    Action::ArmTimer(delay)
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::KeyDown => "key_down",
        Event::KeyUp => "key_up",
        Event::CloseFocus => "close_focus",
        Event::SearchMode => "search_mode",
        Event::ExitSearch => "exit_search",
        Event::Char(_) => "char",
        Event::Backspace => "backspace",
        Event::ToggleSort => "toggle_sort",
        Event::TimerElapsed => "timer_elapsed",
        Event::PermissionsGranted { .. } => "permissions_granted",
        Event::PermissionsDenied => "permissions_denied",
        Event::FetchCompleted { .. } => "fetch_completed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::debounce::ManualClock;
    use crate::app::state::{LOAD_FAILED_MESSAGE, NO_RESULTS_MESSAGE};
    use crate::domain::SortOrder;
    use crate::ui::theme::Theme;
    use std::sync::Arc;
    use std::time::Duration;

    const BODY: &str = r#"[
        {"name":{"common":"Brazil"},"flags":{"svg":"https://flagcdn.com/br.svg"},"population":212559409},
        {"name":{"common":"Chile"},"flags":{"svg":"https://flagcdn.com/cl.svg"},"population":19116209},
        {"name":{"common":"Bahamas"},"flags":{"svg":"https://flagcdn.com/bs.svg"},"population":393248}
    ]"#;

    const DELAY: Duration = Duration::from_millis(300);

    fn names(state: &AppState) -> Vec<&str> {
        state.view.iter().map(|c| c.display_name()).collect()
    }

    fn loaded(restored: ViewState) -> (AppState, ManualClock) {
        let clock = ManualClock::new();
        let mut state = AppState::new(Theme::default())
            .with_debounce(DELAY)
            .with_clock(Arc::new(clock.clone()));

        let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted { restored });
        assert!(matches!(actions.as_slice(), [Action::FetchCountries(_)]));

        let (_, actions) = handle_event(
            &mut state,
            &Event::FetchCompleted {
                status: 200,
                body: BODY.as_bytes().to_vec(),
            },
        );
        assert!(matches!(actions.as_slice(), [Action::PersistPreferences(_)]));
        (state, clock)
    }

    fn type_text(state: &mut AppState, text: &str) {
        handle_event(state, &Event::SearchMode);
        for c in text.chars() {
            handle_event(state, &Event::Char(c));
        }
    }

    #[test]
    fn first_load_with_defaults_sorts_descending() {
        let (state, _) = loaded(ViewState::default());

        assert_eq!(state.load_state, LoadState::Ready);
        assert_eq!(names(&state), vec!["Brazil", "Chile", "Bahamas"]);
        assert!(state.search_input.is_empty());
    }

    #[test]
    fn restored_state_is_applied_on_load() {
        let (state, _) = loaded(ViewState::new("b", SortOrder::Ascending));

        assert_eq!(names(&state), vec!["Bahamas", "Brazil"]);
        assert_eq!(state.search_input, "b");
        assert_eq!(
            state.view_state.sort_order.label(),
            "Sort by population ↑"
        );
    }

    #[test]
    fn typing_applies_once_after_quiet_period() {
        let (mut state, clock) = loaded(ViewState::default());

        type_text(&mut state, "ch");
        assert_eq!(state.view.len(), 3, "view must not change before the delay");

        clock.advance(DELAY);
        let (render, actions) = handle_event(&mut state, &Event::TimerElapsed);
        assert!(render);
        assert_eq!(
            actions,
            vec![Action::PersistPreferences(ViewState::new("ch", SortOrder::Descending))]
        );
        assert_eq!(names(&state), vec!["Chile"]);

        let (_, actions) = handle_event(&mut state, &Event::TimerElapsed);
        assert!(actions.is_empty());
    }

    #[test]
    fn superseded_timers_do_nothing() {
        let (mut state, clock) = loaded(ViewState::default());
        handle_event(&mut state, &Event::SearchMode);

        let mut armed = 0;
        for c in ['b', 'r', 'a'] {
            let (_, actions) = handle_event(&mut state, &Event::Char(c));
            armed += actions.len();
            clock.advance(Duration::from_millis(100));
        }
        assert_eq!(armed, 3);

        // Timers from 'b' and 'r' land while 'a' is still pending.
        assert_eq!(handle_event(&mut state, &Event::TimerElapsed), (false, vec![]));
        clock.advance(Duration::from_millis(100));
        assert_eq!(handle_event(&mut state, &Event::TimerElapsed), (false, vec![]));

        clock.advance(Duration::from_millis(100));
        let (render, actions) = handle_event(&mut state, &Event::TimerElapsed);
        assert!(render);
        assert_eq!(
            actions,
            vec![Action::PersistPreferences(ViewState::new("bra", SortOrder::Descending))]
        );
        assert_eq!(state.armed_timers, 0);
    }

    #[test]
    fn last_timer_firing_early_rearms_for_remainder() {
        let (mut state, clock) = loaded(ViewState::default());
        type_text(&mut state, "c");

        clock.advance(Duration::from_millis(290));
        let (render, actions) = handle_event(&mut state, &Event::TimerElapsed);
        assert!(!render);
        assert_eq!(actions, vec![Action::ArmTimer(Duration::from_millis(10))]);

        clock.advance(Duration::from_millis(10));
        let (_, actions) = handle_event(&mut state, &Event::TimerElapsed);
        assert_eq!(
            actions,
            vec![Action::PersistPreferences(ViewState::new("c", SortOrder::Descending))]
        );
    }

    #[test]
    fn toggle_reorders_immediately_and_persists() {
        let (mut state, _) = loaded(ViewState::default());

        let (render, actions) = handle_event(&mut state, &Event::ToggleSort);

        assert!(render);
        assert_eq!(names(&state), vec!["Bahamas", "Chile", "Brazil"]);
        assert_eq!(
            actions,
            vec![Action::PersistPreferences(ViewState::new("", SortOrder::Ascending))]
        );
    }

    #[test]
    fn toggle_commits_pending_search_text() {
        let (mut state, clock) = loaded(ViewState::default());

        type_text(&mut state, "b");
        handle_event(&mut state, &Event::ToggleSort);

        assert_eq!(names(&state), vec!["Bahamas", "Brazil"]);
        assert!(!state.debouncer.is_pending());

        clock.advance(DELAY);
        let (_, actions) = handle_event(&mut state, &Event::TimerElapsed);
        assert!(actions.is_empty());
    }

    #[test]
    fn search_without_match_shows_notice() {
        let (mut state, clock) = loaded(ViewState::default());

        type_text(&mut state, "zz");
        clock.advance(DELAY);
        handle_event(&mut state, &Event::TimerElapsed);

        assert!(state.view.is_empty());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.map(|e| e.message), Some(NO_RESULTS_MESSAGE.to_string()));
    }

    #[test]
    fn failed_fetch_moves_to_failed_without_rows() {
        let mut state = AppState::new(Theme::default());
        handle_event(
            &mut state,
            &Event::PermissionsGranted {
                restored: ViewState::default(),
            },
        );

        let (render, actions) = handle_event(
            &mut state,
            &Event::FetchCompleted {
                status: 500,
                body: b"oops".to_vec(),
            },
        );

        assert!(render);
        assert!(actions.is_empty(), "nothing is persisted on failure");
        assert_eq!(state.load_state, LoadState::Failed);
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.display_items.is_empty());
        assert_eq!(vm.empty_state.map(|e| e.message), Some(LOAD_FAILED_MESSAGE.to_string()));
    }

    #[test]
    fn malformed_body_is_a_failure() {
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
                status: 200,
                body: b"{not json".to_vec(),
            },
        );
        assert_eq!(state.load_state, LoadState::Failed);
    }

    #[test]
    fn input_is_ignored_until_ready() {
        let mut state = AppState::new(Theme::default());

        assert_eq!(handle_event(&mut state, &Event::SearchMode), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::ToggleSort), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::Char('a')), (false, vec![]));
        assert_eq!(
            handle_event(&mut state, &Event::CloseFocus),
            (false, vec![Action::CloseFocus])
        );
    }

    #[test]
    fn permissions_denied_is_terminal() {
        let mut state = AppState::new(Theme::default());
        handle_event(&mut state, &Event::PermissionsDenied);
        assert_eq!(state.load_state, LoadState::Failed);

        let (_, actions) = handle_event(
            &mut state,
            &Event::PermissionsGranted {
                restored: ViewState::default(),
            },
        );
        assert!(actions.is_empty());
        assert_eq!(state.load_state, LoadState::Failed);
    }

    #[test]
    fn late_response_is_ignored() {
        let (mut state, _) = loaded(ViewState::default());
        let (render, actions) = handle_event(
            &mut state,
            &Event::FetchCompleted {
                status: 500,
                body: vec![],
            },
        );
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.load_state, LoadState::Ready);
    }

    #[test]
    fn backspace_reschedules_search() {
        let (mut state, clock) = loaded(ViewState::default());
        type_text(&mut state, "chx");

        let (_, actions) = handle_event(&mut state, &Event::Backspace);
        assert_eq!(actions, vec![Action::ArmTimer(DELAY)]);

        clock.advance(DELAY);
        handle_event(&mut state, &Event::TimerElapsed);
        assert_eq!(names(&state), vec!["Chile"]);
    }

    #[test]
    fn exit_search_keeps_typed_text() {
        let (mut state, _) = loaded(ViewState::default());
        type_text(&mut state, "br");
        handle_event(&mut state, &Event::ExitSearch);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search_input, "br");
        assert_eq!(handle_event(&mut state, &Event::Char('x')), (false, vec![]));
    }
}
