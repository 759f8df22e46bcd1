use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Terminal;

use crate::config::Config;
use crate::registry::welcome_lines;
use crate::storage::Storage;

mod commands;
mod input;
mod render;
mod runtime;
mod session;
mod text;
mod types;
mod ui;

pub(crate) use runtime::run_app;
pub(crate) use types::{
    default_theme, CommandOutcome, LineKind, TerminalLine, ThemePalette, ThemePreset,
};

/// Taskbar entries: function key number, label, command submitted.
pub(crate) const TASKBAR: &[(u8, &str, &str)] = &[
    (1, "Home", "home"),
    (2, "About", "about"),
    (3, "Experience", "experience"),
    (4, "Projects", "projects"),
    (5, "Contact", "contact"),
];

/// The transcript paragraph scrolls by a `u16` row offset.
const MAX_RENDERED_ROWS: usize = u16::MAX as usize;

/// Keep the newest lines whose wrapped height fits in `budget` rows, so the
/// tail stays reachable however long the transcript grows. Returns the kept
/// lines and their wrapped height.
fn tail_within(lines: Vec<Line<'static>>, width: u16, budget: usize) -> (Vec<Line<'static>>, usize) {
    let total = Paragraph::new(Text::from(lines.clone()))
        .wrap(Wrap { trim: false })
        .line_count(width);
    if total <= budget {
        return (lines, total);
    }

    let mut used = 0usize;
    let mut keep = 0usize;
    for line in lines.iter().rev() {
        let rows = Paragraph::new(line.clone())
            .wrap(Wrap { trim: false })
            .line_count(width);
        if used + rows > budget {
            break;
        }
        used += rows;
        keep += 1;
    }
    let skip = lines.len() - keep;
    (lines.into_iter().skip(skip).collect(), used)
}

/// Cached rendering state to avoid recomputing transcript lines and scroll bounds every frame.
struct RenderCache {
    /// Generation counter at the time of last cache build.
    generation: u64,
    width: u16,
    height: u16,
    lines: Vec<Line<'static>>,
    /// The cached maximum scroll offset.
    scroll_max: u16,
}

impl RenderCache {
    fn new() -> Self {
        Self {
            generation: u64::MAX, // force first rebuild
            width: 0,
            height: 0,
            lines: Vec::new(),
            scroll_max: 0,
        }
    }
}

pub(crate) struct App {
    should_quit: bool,

    input: String,
    cursor: usize,
    entries: Vec<TerminalLine>,
    max_entries: Option<usize>,
    scroll: u16,
    autoscroll: bool,
    viewport_width: u16,
    viewport_height: u16,

    history: Vec<String>,
    history_pos: Option<usize>,

    theme: ThemePreset,
    storage: Box<dyn Storage>,
    last_status: String,

    /// Monotonically increasing counter bumped whenever entries or theme change.
    render_generation: u64,
    render_cache: RenderCache,
}

impl App {
    pub(crate) fn new(config: &Config, storage: Box<dyn Storage>) -> Self {
        let mut app = Self {
            should_quit: false,
            input: String::new(),
            cursor: 0,
            entries: Vec::new(),
            max_entries: config.max_transcript_lines,
            scroll: 0,
            autoscroll: true,
            viewport_width: 100,
            viewport_height: 36,
            history: Vec::new(),
            history_pos: None,
            theme: default_theme(),
            storage,
            last_status: "ready".to_string(),
            render_generation: 0,
            render_cache: RenderCache::new(),
        };
        app.restore_session();
        app.push_lines(welcome_lines());
        app
    }

    /// Bump the render generation to invalidate the render cache.
    fn invalidate_render_cache(&mut self) {
        self.render_generation = self.render_generation.wrapping_add(1);
    }

    pub(super) fn theme_palette(&self) -> ThemePalette {
        self.theme.palette()
    }

    fn push_lines(&mut self, lines: impl IntoIterator<Item = TerminalLine>) {
        self.entries.extend(lines);
        if let Some(max) = self.max_entries {
            if self.entries.len() > max {
                let overflow = self.entries.len() - max;
                self.entries.drain(..overflow);
            }
        }
        self.follow_scroll();
    }

    fn replace_transcript(&mut self, lines: Vec<TerminalLine>) {
        self.entries.clear();
        self.autoscroll = true;
        self.push_lines(lines);
    }

    /// Invalidate render cache and update scroll to follow content.
    /// Call after any mutation of entries.
    fn follow_scroll(&mut self) {
        self.invalidate_render_cache();
        if self.autoscroll {
            self.scroll = self.scroll_max();
        } else {
            self.scroll = self.scroll.min(self.scroll_max());
        }
    }

    /// Ensure the render cache is up-to-date for the current state.
    /// Returns true if the cache was rebuilt.
    fn ensure_render_cache(&mut self) -> bool {
        let need_rebuild = self.render_cache.generation != self.render_generation
            || self.render_cache.width != self.viewport_width
            || self.render_cache.height != self.viewport_height;
        if !need_rebuild {
            return false;
        }

        let w = ui::transcript_inner_width(self.viewport_width);
        let available = ui::transcript_inner_height(self.viewport_height);
        let (lines, rendered_line_count) =
            tail_within(self.render_transcript_lines(), w, MAX_RENDERED_ROWS);
        let scroll_max = (rendered_line_count as u16).saturating_sub(available);

        self.render_cache = RenderCache {
            generation: self.render_generation,
            width: self.viewport_width,
            height: self.viewport_height,
            lines,
            scroll_max,
        };
        true
    }

    fn scroll_max(&mut self) -> u16 {
        self.ensure_render_cache();
        self.render_cache.scroll_max
    }

    pub(super) fn cached_transcript_lines(&self) -> &[Line<'static>] {
        &self.render_cache.lines
    }

    fn update_viewport(&mut self, width: u16, height: u16) {
        self.viewport_width = width.max(1);
        self.viewport_height = height.max(1);
        let max_scroll = self.scroll_max();
        if self.autoscroll {
            self.scroll = max_scroll;
        } else {
            self.scroll = self.scroll.min(max_scroll);
        }
    }

    fn scroll_up(&mut self, n: u16) {
        let from = if self.autoscroll {
            self.scroll_max()
        } else {
            self.scroll
        };
        self.autoscroll = false;
        self.scroll = from.saturating_sub(n);
    }

    fn scroll_down(&mut self, n: u16) {
        let max_scroll = self.scroll_max();
        self.scroll = self.scroll.saturating_add(n).min(max_scroll);
        if self.scroll >= max_scroll {
            self.autoscroll = true;
        }
    }
}
