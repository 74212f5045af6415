//! Open file panels, stacked top to bottom in display order.

use docmap_engine::OpenPanel;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::border_style;

/// Screen area of each of `count` panels inside `area`
pub fn panel_areas(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::vertical(constraints).split(area).to_vec()
}

pub struct PanelsWidget<'a> {
    panels: &'a [OpenPanel],
    cursor: Option<usize>,
    editing: bool,
    scroll: u16,
    loading: usize,
}

impl<'a> PanelsWidget<'a> {
    pub fn new(panels: &'a [OpenPanel]) -> Self {
        Self {
            panels,
            cursor: None,
            editing: false,
            scroll: 0,
            loading: 0,
        }
    }

    /// Focused panel, `None` when panels do not have focus
    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    /// Scroll offset of the focused panel
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn loading(mut self, loading: usize) -> Self {
        self.loading = loading;
        self
    }
}

impl<'a> Widget for PanelsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.panels.is_empty() {
            let message = if self.loading > 0 {
                "Loading..."
            } else {
                "Click a point or press Enter on a file to open it."
            };
            Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Files").borders(Borders::ALL))
                .render(area, buf);
            return;
        }

        let areas = panel_areas(area, self.panels.len());
        for (index, (panel, panel_area)) in self.panels.iter().zip(areas).enumerate() {
            let focused = self.cursor == Some(index);

            let mut title = vec![Span::styled(
                panel.id.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if panel.is_edited() {
                title.push(Span::raw(" [modified]"));
            }
            if focused && self.editing {
                title.push(Span::styled(" EDIT", Style::default().fg(Color::Yellow)));
            }

            let block = Block::default()
                .title(Line::from(title))
                .borders(Borders::ALL)
                .border_style(border_style(focused));

            let mut paragraph = Paragraph::new(panel.text())
                .wrap(Wrap { trim: false })
                .block(block);
            if focused {
                paragraph = paragraph.scroll((self.scroll, 0));
            }
            paragraph.render(panel_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_areas_stack_vertically() {
        let areas = panel_areas(Rect::new(0, 0, 30, 30), 3);
        assert_eq!(areas.len(), 3);
        assert_eq!(areas[0].y, 0);
        assert!(areas[1].y > areas[0].y);
        assert!(areas[2].y > areas[1].y);
        assert_eq!(areas.iter().map(|a| a.height).sum::<u16>(), 30);

        assert!(panel_areas(Rect::new(0, 0, 30, 30), 0).is_empty());
    }
}
