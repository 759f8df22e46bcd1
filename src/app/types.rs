use ratatui::style::{Color, Modifier, Style};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ThemePreset {
    Green,
    Blue,
    Amber,
    White,
    Matrix,
}

impl ThemePreset {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            ThemePreset::Green => "green",
            ThemePreset::Blue => "blue",
            ThemePreset::Amber => "amber",
            ThemePreset::White => "white",
            ThemePreset::Matrix => "matrix",
        }
    }

    /// Exact, case-insensitive theme name. No aliases.
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "green" => Some(ThemePreset::Green),
            "blue" => Some(ThemePreset::Blue),
            "amber" => Some(ThemePreset::Amber),
            "white" => Some(ThemePreset::White),
            "matrix" => Some(ThemePreset::Matrix),
            _ => None,
        }
    }

    pub(crate) fn all() -> [ThemePreset; 5] {
        [
            ThemePreset::Green,
            ThemePreset::Blue,
            ThemePreset::Amber,
            ThemePreset::White,
            ThemePreset::Matrix,
        ]
    }

    pub(crate) fn palette(self) -> ThemePalette {
        match self {
            ThemePreset::Green => ThemePalette {
                // classic phosphor green
                prompt: Color::Rgb(102, 255, 153),
                text: Color::Rgb(74, 246, 38),
                muted: Color::Rgb(70, 140, 80),
                success: Color::Rgb(150, 255, 150),
                warning: Color::Rgb(240, 200, 80),
                error: Color::Rgb(255, 95, 95),
                link: Color::Rgb(110, 200, 255),
                system: Color::Rgb(90, 220, 120),
                highlight_fg: Color::Rgb(10, 20, 10),
                highlight_bg: Color::Rgb(74, 246, 38),
                border: Color::Rgb(40, 110, 50),
                panel_bg: Color::Rgb(6, 14, 6),
            },
            ThemePreset::Blue => ThemePalette {
                // ocean blue
                prompt: Color::Rgb(140, 210, 255),
                text: Color::Rgb(100, 180, 255),
                muted: Color::Rgb(80, 110, 150),
                success: Color::Rgb(120, 230, 200),
                warning: Color::Rgb(240, 200, 100),
                error: Color::Rgb(255, 110, 120),
                link: Color::Rgb(180, 160, 255),
                system: Color::Rgb(120, 190, 240),
                highlight_fg: Color::Rgb(8, 16, 30),
                highlight_bg: Color::Rgb(100, 180, 255),
                border: Color::Rgb(40, 70, 120),
                panel_bg: Color::Rgb(6, 12, 24),
            },
            ThemePreset::Amber => ThemePalette {
                // vintage amber monitor
                prompt: Color::Rgb(255, 204, 102),
                text: Color::Rgb(255, 176, 0),
                muted: Color::Rgb(150, 110, 40),
                success: Color::Rgb(255, 220, 120),
                warning: Color::Rgb(255, 140, 0),
                error: Color::Rgb(255, 90, 60),
                link: Color::Rgb(255, 230, 160),
                system: Color::Rgb(230, 170, 60),
                highlight_fg: Color::Rgb(24, 14, 0),
                highlight_bg: Color::Rgb(255, 176, 0),
                border: Color::Rgb(120, 80, 20),
                panel_bg: Color::Rgb(18, 10, 0),
            },
            ThemePreset::White => ThemePalette {
                // white phosphor
                prompt: Color::Rgb(255, 255, 255),
                text: Color::Rgb(225, 225, 225),
                muted: Color::Rgb(128, 128, 128),
                success: Color::Rgb(200, 240, 200),
                warning: Color::Rgb(240, 220, 150),
                error: Color::Rgb(240, 130, 130),
                link: Color::Rgb(170, 200, 255),
                system: Color::Rgb(200, 200, 200),
                highlight_fg: Color::Rgb(16, 16, 16),
                highlight_bg: Color::Rgb(225, 225, 225),
                border: Color::Rgb(90, 90, 90),
                panel_bg: Color::Rgb(12, 12, 12),
            },
            ThemePreset::Matrix => ThemePalette {
                // digital rain
                prompt: Color::Rgb(180, 255, 180),
                text: Color::Rgb(0, 255, 65),
                muted: Color::Rgb(0, 143, 17),
                success: Color::Rgb(160, 255, 160),
                warning: Color::Rgb(200, 255, 80),
                error: Color::Rgb(255, 60, 60),
                link: Color::Rgb(0, 200, 255),
                system: Color::Rgb(0, 200, 50),
                highlight_fg: Color::Rgb(0, 0, 0),
                highlight_bg: Color::Rgb(0, 255, 65),
                border: Color::Rgb(0, 90, 20),
                panel_bg: Color::Rgb(0, 0, 0),
            },
        }
    }
}

pub(crate) fn default_theme() -> ThemePreset {
    ThemePreset::Green
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ThemePalette {
    pub(crate) prompt: Color,
    pub(crate) text: Color,
    pub(crate) muted: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) error: Color,
    pub(crate) link: Color,
    pub(crate) system: Color,
    pub(crate) highlight_fg: Color,
    pub(crate) highlight_bg: Color,
    pub(crate) border: Color,
    pub(crate) panel_bg: Color,
}

impl ThemePalette {
    pub(crate) fn prompt_style(self) -> Style {
        Style::default()
            .fg(self.prompt)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn title_style(self) -> Style {
        Style::default().fg(self.prompt).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn body_style(self) -> Style {
        Style::default().fg(self.text)
    }

    pub(crate) fn muted_style(self) -> Style {
        Style::default().fg(self.muted)
    }

    pub(crate) fn success_style(self) -> Style {
        Style::default().fg(self.success)
    }

    pub(crate) fn warning_style(self) -> Style {
        Style::default().fg(self.warning)
    }

    pub(crate) fn error_style(self) -> Style {
        Style::default().fg(self.error)
    }

    pub(crate) fn link_style(self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub(crate) fn system_style(self) -> Style {
        Style::default().fg(self.system)
    }

    pub(crate) fn panel_surface_style(self) -> Style {
        Style::default().bg(self.panel_bg).fg(self.text)
    }

    pub(crate) fn panel_border_style(self) -> Style {
        Style::default().fg(self.border)
    }

    pub(crate) fn hint_selected_style(self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LineKind {
    Command,
    Output,
    Error,
    Success,
    Warning,
    Link,
    System,
    List,
    Comment,
}

/// One row of terminal output. `href` is only ever set on `Link` lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct TerminalLine {
    pub(crate) kind: LineKind,
    pub(crate) text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) href: Option<String>,
}

impl TerminalLine {
    pub(crate) fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            href: None,
        }
    }

    pub(crate) fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Link,
            text: text.into(),
            href: Some(href.into()),
        }
    }

    pub(crate) fn blank() -> Self {
        Self::new(LineKind::Output, "")
    }

    pub(crate) fn plain_text(&self) -> String {
        match (&self.kind, &self.href) {
            (LineKind::Link, Some(href)) => format!("{} <{}>", self.text, href),
            (LineKind::List, _) => format!("    {}", self.text),
            _ => self.text.clone(),
        }
    }
}

/// Result of dispatching one input. `clear` asks the session to replace the
/// transcript with `lines` instead of appending them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub(crate) struct CommandOutcome {
    pub(crate) lines: Vec<TerminalLine>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub(crate) clear: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) theme: Option<ThemePreset>,
}

impl CommandOutcome {
    pub(crate) fn lines(lines: Vec<TerminalLine>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }
}
