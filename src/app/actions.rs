//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never touches Zellij, the network,
//! or the filesystem. It returns a `Vec<Action>` and the plugin shim performs
//! them in order.

use crate::domain::ViewState;
use crate::fetch::CountriesRequest;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the single countries GET through the host.
    FetchCountries(CountriesRequest),

    /// Arms a one-shot host timer; its expiry arrives as
    /// [`Event::TimerElapsed`](crate::app::Event::TimerElapsed).
    ArmTimer(Duration),

    /// Writes the view state to the preference store.
    ///
    /// Emitted after every filter/sort pass.
    PersistPreferences(ViewState),
}
