//! Status Bar View Component
//!
//! One line: data origin, counts, log location and key hints.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarModel {
    pub origin: String,
    pub clusters: usize,
    pub files: usize,
    pub points: usize,
    pub open_panels: usize,
    pub loading: usize,
    pub editing: bool,
    /// Diagnostic log file, when logging goes to one
    pub log_path: Option<String>,
}

pub struct StatusBarWidget<'a> {
    model: &'a StatusBarModel,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(model: &'a StatusBarModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let mut status = vec![
            Span::styled(self.model.origin.as_str(), Style::default().fg(Color::Cyan)),
            Span::raw(format!(
                " | {} clusters, {} files, {} points | {} open",
                self.model.clusters, self.model.files, self.model.points, self.model.open_panels
            )),
        ];
        if self.model.loading > 0 {
            status.push(Span::raw(format!(", {} loading", self.model.loading)));
        }
        if let Some(path) = &self.model.log_path {
            status.push(Span::styled(
                format!(" | log: {}", path),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help = if self.model.editing {
            Line::from(vec![Span::styled("[Esc]", key), Span::raw("done editing")])
        } else {
            Line::from(vec![
                Span::styled("[q]", key),
                Span::raw("uit "),
                Span::styled("[Tab]", key),
                Span::raw("focus "),
                Span::styled("[Enter]", key),
                Span::raw("open "),
                Span::styled("[J/K]", key),
                Span::raw("move "),
                Span::styled("[e]", key),
                Span::raw("dit"),
            ])
        };
        Paragraph::new(help).render(chunks[1], buf);
    }
}
