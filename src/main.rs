//! Zellij plugin entry point.
//!
//! A thin shim: Zellij events are translated into [`countrydeck::Event`]s,
//! handed to [`handle_event`], and the returned [`Action`]s are carried out
//! with host calls (web requests, timers, preference writes, hiding the pane).

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use countrydeck::app::AppState;
use countrydeck::fetch::CountriesRequest;
use countrydeck::infrastructure::preferences_path;
use countrydeck::storage::{JsonStorage, KeyValueStore, MemoryStorage, PreferenceStore};
use countrydeck::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

struct State {
    app: AppState,

    /// Opened once permissions allow filesystem access.
    preferences: Option<PreferenceStore>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: countrydeck::initialize(&Config::default()),
            preferences: None,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        countrydeck::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        self.app = countrydeck::initialize(&config);
        tracing::debug!(url = %self.app.request.url, debounce = ?config.debounce, "configured");

        request_permission(&[PermissionType::WebAccess, PermissionType::FullHdAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let _guard = tracing::debug_span!("plugin_update", event_type = event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_) => Event::TimerElapsed,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                if !CountriesRequest::owns_response(&context) {
                    tracing::debug!(status, "ignoring unrelated web response");
                    return false;
                }
                Event::FetchCompleted { status, body }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                self.map_permission_result(status)
            }
            _ => return false,
        };

        let (should_render, actions) = handle_event(&mut self.app, &our_event);
        tracing::debug!(action_count = actions.len(), should_render, "event handled");

        for action in &actions {
            self.execute_action(action);
        }
        should_render
    }

    fn render(&mut self, rows: usize, cols: usize) {
        countrydeck::ui::render(&self.app, rows, cols);
    }
}

impl State {
    const fn event_name(event: &zellij_tile::prelude::Event) -> &'static str {
        match event {
            zellij_tile::prelude::Event::Key(_) => "Key",
            zellij_tile::prelude::Event::Timer(_) => "Timer",
            zellij_tile::prelude::Event::WebRequestResult(..) => "WebRequestResult",
            zellij_tile::prelude::Event::PermissionRequestResult(_) => "PermissionRequestResult",
            _ => "Other",
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        let searching = self.app.input_mode == InputMode::Search;

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Tab => Event::ToggleSort,
            BareKey::Esc if searching => Event::ExitSearch,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if searching => Event::Char(c),
            BareKey::Char('j') => Event::KeyDown,
            BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('s') => Event::ToggleSort,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Opens the preference store and reads back the last view state.
    fn map_permission_result(&mut self, status: PermissionStatus) -> Event {
        match status {
            PermissionStatus::Granted => {
                let store = PreferenceStore::new(Self::open_backend());
                let restored = store.load();
                self.preferences = Some(store);
                Event::PermissionsGranted { restored }
            }
            PermissionStatus::Denied => Event::PermissionsDenied,
        }
    }

    fn open_backend() -> Box<dyn KeyValueStore> {
        match JsonStorage::new(preferences_path()) {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                tracing::warn!(error = %e, "preferences will not survive a restart");
                Box::new(MemoryStorage::new())
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::FetchCountries(request) => {
                tracing::info!(url = %request.url, "requesting countries");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    request.headers.clone(),
                    vec![],
                    request.context.clone(),
                );
            }
            Action::ArmTimer(delay) => set_timeout(delay.as_secs_f64()),
            Action::PersistPreferences(view_state) => {
                if let Some(store) = self.preferences.as_mut() {
                    if let Err(e) = store.save(view_state) {
                        tracing::warn!(error = %e, "failed to persist preferences");
                    }
                }
            }
        }
    }
}
