//! Screen routing over an injected location capability.

use std::fmt;

use crate::errors::NavigationError;

pub const LANDING_PATH: &str = "/";
pub const DATA_ENTRY_PATH: &str = "/start";
pub const RESULT_PATH: &str = "/submitted";

/// The three logical screens of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    DataEntry,
    Result,
}

impl Screen {
    pub fn path(self) -> &'static str {
        match self {
            Screen::Landing => LANDING_PATH,
            Screen::DataEntry => DATA_ENTRY_PATH,
            Screen::Result => RESULT_PATH,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::DataEntry => "data entry",
            Screen::Result => "result",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a path to its screen by prefix. Unrecognized paths land on `Landing`.
pub fn route(path: &str) -> Screen {
    if path.starts_with(RESULT_PATH) {
        Screen::Result
    } else if path.starts_with(DATA_ENTRY_PATH) {
        Screen::DataEntry
    } else {
        Screen::Landing
    }
}

/// Addressable location with a navigation history.
pub trait Location {
    fn current_path(&self) -> String;

    /// Performs a full navigation to `path`, recording it in history.
    fn push(&mut self, path: &str);

    /// Returns to the previous entry. Returns `false` when there is no history.
    fn back(&mut self) -> bool;
}

/// In-process history stack.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
}

impl MemoryHistory {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_path.into()],
        }
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(LANDING_PATH)
    }
}

impl Location for MemoryHistory {
    fn current_path(&self) -> String {
        self.entries
            .last()
            .cloned()
            .unwrap_or_else(|| LANDING_PATH.to_string())
    }

    fn push(&mut self, path: &str) {
        self.entries.push(path.to_string());
    }

    fn back(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }
}

/// Drives screen transitions against a [`Location`].
pub struct NavigationController<L: Location> {
    location: L,
}

impl<L: Location> NavigationController<L> {
    pub fn new(location: L) -> Self {
        Self { location }
    }

    pub fn current_screen(&self) -> Screen {
        route(&self.location.current_path())
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn start(&mut self) -> Result<Screen, NavigationError> {
        self.transition("start", Screen::Landing, Screen::DataEntry)
    }

    pub fn submit_succeeded(&mut self) -> Result<Screen, NavigationError> {
        self.transition("show the result", Screen::DataEntry, Screen::Result)
    }

    pub fn try_again(&mut self) -> Result<Screen, NavigationError> {
        self.transition("try again", Screen::Result, Screen::DataEntry)
    }

    /// Steps back in history from the data-entry screen. Without history this
    /// is a no-op and the current screen is returned.
    pub fn back(&mut self) -> Result<Screen, NavigationError> {
        let from = self.current_screen();
        if from != Screen::DataEntry {
            return Err(NavigationError::InvalidTransition {
                action: "go back",
                from: from.name(),
            });
        }
        if !self.location.back() {
            tracing::debug!("no history entry to return to");
        }
        let screen = self.current_screen();
        tracing::info!(%from, to = %screen, "navigated back");
        Ok(screen)
    }

    fn transition(
        &mut self,
        action: &'static str,
        from: Screen,
        to: Screen,
    ) -> Result<Screen, NavigationError> {
        let current = self.current_screen();
        if current != from {
            return Err(NavigationError::InvalidTransition {
                action,
                from: current.name(),
            });
        }
        self.location.push(to.path());
        tracing::info!(from = %current, %to, "navigated");
        Ok(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_recognized_paths() {
        assert_eq!(route("/"), Screen::Landing);
        assert_eq!(route("/start"), Screen::DataEntry);
        assert_eq!(route("/submitted"), Screen::Result);
    }

    #[test]
    fn routes_by_prefix() {
        assert_eq!(route("/start/anything"), Screen::DataEntry);
        assert_eq!(route("/submitted/2024"), Screen::Result);
    }

    #[test]
    fn unknown_paths_fall_back_to_landing() {
        assert_eq!(route("/unknown"), Screen::Landing);
        assert_eq!(route(""), Screen::Landing);
    }

    #[test]
    fn full_flow_transitions() {
        let mut nav = NavigationController::new(MemoryHistory::default());
        assert_eq!(nav.current_screen(), Screen::Landing);
        assert_eq!(nav.start().unwrap(), Screen::DataEntry);
        assert_eq!(nav.submit_succeeded().unwrap(), Screen::Result);
        assert_eq!(nav.try_again().unwrap(), Screen::DataEntry);
        assert_eq!(nav.location().current_path(), DATA_ENTRY_PATH);
    }

    #[test]
    fn back_returns_to_previous_entry() {
        let mut nav = NavigationController::new(MemoryHistory::default());
        nav.start().unwrap();
        assert_eq!(nav.back().unwrap(), Screen::Landing);
    }

    #[test]
    fn back_without_history_is_noop() {
        let mut nav = NavigationController::new(MemoryHistory::new("/start"));
        assert_eq!(nav.back().unwrap(), Screen::DataEntry);
        assert_eq!(nav.location().depth(), 1);
    }

    #[test]
    fn invalid_transition_leaves_location_untouched() {
        let mut nav = NavigationController::new(MemoryHistory::default());
        let err = nav.try_again().unwrap_err();
        assert!(matches!(err, NavigationError::InvalidTransition { .. }));
        assert_eq!(nav.location().depth(), 1);
        assert!(nav.submit_succeeded().is_err());
    }
}
