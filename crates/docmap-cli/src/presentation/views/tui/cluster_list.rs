//! Cluster list: one bold header row per cluster followed by its files.

use docmap_engine::{ClusterListView, DragTarget, Emphasis};
use docmap_types::DocumentId;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{border_style, emphasis_style};

/// One screen row of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    Header(String),
    File { id: DocumentId, emphasis: Emphasis },
}

impl ListRow {
    pub fn drag_target(&self) -> DragTarget {
        match self {
            ListRow::Header(name) => DragTarget::Cluster(name.clone()),
            ListRow::File { id, .. } => DragTarget::File(id.clone()),
        }
    }
}

pub fn list_rows(list: &ClusterListView) -> Vec<ListRow> {
    let mut rows = Vec::with_capacity(list.blocks().len() + list.item_count());
    for block in list.blocks() {
        rows.push(ListRow::Header(block.name.clone()));
        rows.extend(block.items.iter().map(|item| ListRow::File {
            id: item.id.clone(),
            emphasis: item.emphasis,
        }));
    }
    rows
}

pub struct ClusterListWidget<'a> {
    rows: &'a [ListRow],
    cursor: Option<usize>,
    offset: usize,
    focused: bool,
}

impl<'a> ClusterListWidget<'a> {
    pub fn new(rows: &'a [ListRow]) -> Self {
        Self {
            rows,
            cursor: None,
            offset: 0,
            focused: false,
        }
    }

    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl<'a> Widget for ClusterListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Clusters")
            .borders(Borders::ALL)
            .border_style(border_style(self.focused));

        if self.rows.is_empty() {
            Paragraph::new("Loading clusters...")
                .block(block)
                .render(area, buf);
            return;
        }

        let lines: Vec<Line> = self
            .rows
            .iter()
            .enumerate()
            .skip(self.offset)
            .map(|(index, row)| {
                let mut line = match row {
                    ListRow::Header(name) => Line::from(Span::styled(
                        name.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    ListRow::File { id, emphasis } => Line::from(vec![
                        Span::raw("  "),
                        Span::styled(id.as_str(), emphasis_style(*emphasis)),
                    ]),
                };
                if self.focused && self.cursor == Some(index) {
                    line = line.patch_style(Style::default().add_modifier(Modifier::REVERSED));
                }
                line
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
