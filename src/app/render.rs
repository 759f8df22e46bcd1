use super::*;
use ratatui::text::Span;

const LIST_INDENT: &str = "    ";

/// Map one transcript record to a styled row. Pure: depends only on the line and palette.
pub(crate) fn render_line(line: &TerminalLine, palette: ThemePalette) -> Line<'static> {
    // Empty rows still need a cell so wrapped paragraphs keep their height.
    let text = if line.text.is_empty() {
        " ".to_string()
    } else {
        line.text.clone()
    };
    match line.kind {
        LineKind::Command => Line::from(Span::styled(text, palette.prompt_style())),
        LineKind::Error => Line::from(Span::styled(text, palette.error_style())),
        LineKind::Success => Line::from(Span::styled(text, palette.success_style())),
        LineKind::Warning => Line::from(Span::styled(text, palette.warning_style())),
        LineKind::Link => Line::from(Span::styled(text, palette.link_style())),
        LineKind::Comment => Line::from(Span::styled(text, palette.muted_style())),
        LineKind::System => Line::from(Span::styled(text, palette.system_style())),
        LineKind::List => Line::from(vec![
            Span::raw(LIST_INDENT),
            Span::styled(text, palette.body_style()),
        ]),
        LineKind::Output => Line::from(Span::styled(text, palette.body_style())),
    }
}

impl App {
    pub(super) fn render_transcript_lines(&self) -> Vec<Line<'static>> {
        let palette = self.theme.palette();
        self.entries
            .iter()
            .map(|line| render_line(line, palette))
            .collect()
    }
}
