use super::*;
use crate::content::PROMPT;
use crate::execute_command;
use crate::storage::{store_history, store_theme, truncate_history};
use log::info;

impl App {
    pub(super) fn submit_current_line(&mut self) {
        let command = self.input.trim().to_string();
        if command.is_empty() {
            return;
        }
        self.submit_command(&command);
    }

    /// Entry point for triggers outside the composer (taskbar keys).
    pub(crate) fn run_command(&mut self, command: &str) {
        let command = command.trim();
        if command.is_empty() {
            return;
        }
        self.submit_command(command);
    }

    fn submit_command(&mut self, command: &str) {
        let echo = TerminalLine::new(LineKind::Command, format!("{PROMPT} {command}"));

        let mut requested_theme: Option<ThemePreset> = None;
        let outcome = execute_command(command, self.theme, self.storage.as_ref(), &mut |theme: ThemePreset| {
            requested_theme = Some(theme)
        });

        if outcome.clear {
            self.replace_transcript(outcome.lines);
            self.clear_input_buffer();
            self.last_status = "cleared".to_string();
            return;
        }

        self.push_lines(std::iter::once(echo).chain(outcome.lines));
        if let Some(theme) = outcome.theme.or(requested_theme) {
            self.apply_theme(theme);
        }

        self.history.push(command.to_string());
        truncate_history(&mut self.history);
        self.history_pos = None;
        store_history(self.storage.as_mut(), &self.history);

        self.clear_input_buffer();
        self.last_status = format!("ran {}", command.split_whitespace().next().unwrap_or(""));
    }

    fn apply_theme(&mut self, theme: ThemePreset) {
        if theme != self.theme {
            info!("theme changed to {}", theme.as_str());
        }
        self.theme = theme;
        store_theme(self.storage.as_mut(), theme);
        self.invalidate_render_cache();
    }

    pub(super) fn clear_screen(&mut self) {
        self.entries.clear();
        self.autoscroll = true;
        self.follow_scroll();
        self.last_status = "cleared".to_string();
    }
}
