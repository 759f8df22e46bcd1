use super::*;
use crate::storage::{load_history, load_theme};
use log::info;

impl App {
    /// Load persisted history and theme. Runs once, before any event is handled.
    pub(super) fn restore_session(&mut self) {
        self.history = load_history(self.storage.as_ref());
        self.theme = load_theme(self.storage.as_ref());
        self.history_pos = None;
        self.autoscroll = true;
        self.invalidate_render_cache();
        if !self.history.is_empty() {
            self.last_status = format!("restored {} history entries", self.history.len());
        }
        info!(
            "session restored: {} history entries, theme {}",
            self.history.len(),
            self.theme.as_str()
        );
    }
}
