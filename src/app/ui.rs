use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::text::visible_input;
use super::{App, ThemePalette, TASKBAR};
use crate::content::{OWNER, PROMPT, TRANSCRIPT_TITLE};

const PANEL_PADDING_X: u16 = 1;
const PANEL_PADDING_Y: u16 = 0;
const PANEL_HORIZONTAL_INSET: u16 = 2 + PANEL_PADDING_X * 2;
const PANEL_VERTICAL_INSET: u16 = 2 + PANEL_PADDING_Y * 2;
const TASKBAR_H: u16 = 1 + PANEL_VERTICAL_INSET;
const COMPOSER_H: u16 = 1 + PANEL_VERTICAL_INSET;
const STATUS_H: u16 = 1;

pub(super) fn transcript_inner_width(width: u16) -> u16 {
    width.saturating_sub(PANEL_HORIZONTAL_INSET).max(1)
}

pub(super) fn transcript_inner_height(height: u16) -> u16 {
    height
        .saturating_sub(TASKBAR_H + COMPOSER_H + STATUS_H + PANEL_VERTICAL_INSET)
        .max(1)
}

pub(super) fn draw(f: &mut Frame, app: &App) {
    let theme = app.theme_palette();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TASKBAR_H),
            Constraint::Min(1 + PANEL_VERTICAL_INSET),
            Constraint::Length(COMPOSER_H),
            Constraint::Length(STATUS_H),
        ])
        .split(f.area());

    let taskbar = Paragraph::new(build_taskbar_line(theme))
        .style(theme.panel_surface_style())
        .block(panel_block(theme, OWNER));
    f.render_widget(taskbar, chunks[0]);

    let transcript = Paragraph::new(Text::from(app.cached_transcript_lines().to_vec()))
        .style(theme.panel_surface_style())
        .block(panel_block(theme, TRANSCRIPT_TITLE))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(transcript, chunks[1]);

    // Composer: prompt, then the slice of input that fits, caret kept in view.
    let composer_area = chunks[2];
    let prompt = format!("{PROMPT} ");
    let prompt_width = UnicodeWidthStr::width(prompt.as_str()) as u16;
    let content_width = composer_area.width.saturating_sub(PANEL_HORIZONTAL_INSET);
    let input_width = content_width.saturating_sub(prompt_width).max(1);
    let (shown, caret) = visible_input(&app.input, app.cursor, input_width);
    let composer = Paragraph::new(Line::from(vec![
        Span::styled(prompt, theme.prompt_style()),
        Span::styled(shown.to_string(), theme.body_style()),
    ]))
    .style(theme.panel_surface_style())
    .block(panel_block(theme, "input"));
    f.render_widget(composer, composer_area);

    let caret_x = composer_area.x
        + 1
        + PANEL_PADDING_X
        + (prompt_width + caret).min(content_width.saturating_sub(1));
    let caret_y = composer_area.y + 1 + PANEL_PADDING_Y;
    f.set_cursor_position((caret_x, caret_y));

    let status = Paragraph::new(build_status_line(app, theme)).style(theme.panel_surface_style());
    f.render_widget(status, chunks[3]);
}

pub(super) fn draw_exit(f: &mut Frame) {
    f.render_widget(Clear, f.area());
}

fn panel_block(theme: ThemePalette, title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.panel_border_style())
        .title(Span::styled(format!(" {} ", title), theme.title_style()))
        .padding(Padding::new(
            PANEL_PADDING_X,
            PANEL_PADDING_X,
            PANEL_PADDING_Y,
            PANEL_PADDING_Y,
        ))
        .style(theme.panel_surface_style())
}

fn build_taskbar_line(theme: ThemePalette) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, label, _)) in TASKBAR.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("F{key}"), theme.hint_selected_style()));
        spans.push(Span::styled(format!(" {label}"), theme.body_style()));
    }
    Line::from(spans)
}

fn build_status_line(app: &App, theme: ThemePalette) -> Line<'static> {
    let hints = app.completion_hints();
    if hints.len() > 1 {
        let mut spans = vec![Span::styled(" matches: ", theme.muted_style())];
        for (i, hint) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(hint.to_string(), theme.hint_selected_style()));
        }
        return Line::from(spans);
    }

    Line::from(Span::styled(
        format!(
            " Tab: autocomplete | ↑↓: history | Ctrl+L: clear | Ctrl+C: cancel | Esc: quit | theme: {} | {}",
            app.theme.as_str(),
            app.last_status
        ),
        theme.muted_style(),
    ))
}
