//! Where things were drawn in the last frame.
//!
//! Terminal mouse events only carry a cell position, so every render records
//! the rows, plot viewport and panels it produced. Input handling resolves
//! cells against this record.

use docmap_engine::{DragTarget, Rect as Bounds};
use docmap_types::DocumentId;
use ratatui::layout::Rect;

use crate::presentation::views::tui::PlotViewport;

#[derive(Debug, Clone, PartialEq)]
pub enum Hit {
    /// A cluster header or file row of the list
    Row { index: usize, target: DragTarget },
    /// A position in plot space
    Plot { x: f64, y: f64 },
    PanelTitle(DocumentId),
    PanelBody(DocumentId),
}

#[derive(Debug, Clone, Default)]
pub struct HitMap {
    list: Option<Rect>,
    list_offset: usize,
    list_targets: Vec<DragTarget>,
    plot: Option<PlotViewport>,
    panels: Vec<(DocumentId, Rect)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// `area` is the inner list region; row `offset` is drawn on its first line.
    pub fn record_list(&mut self, area: Rect, offset: usize, targets: Vec<DragTarget>) {
        self.list = Some(area);
        self.list_offset = offset;
        self.list_targets = targets;
    }

    pub fn record_plot(&mut self, viewport: PlotViewport) {
        self.plot = Some(viewport);
    }

    pub fn record_panel(&mut self, id: DocumentId, area: Rect) {
        self.panels.push((id, area));
    }

    pub fn plot(&self) -> Option<&PlotViewport> {
        self.plot.as_ref()
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let position = (column, row).into();

        if let Some(list) = self.list.filter(|area| area.contains(position)) {
            let index = self.list_offset + usize::from(row - list.y);
            return self.list_targets.get(index).map(|target| Hit::Row {
                index,
                target: target.clone(),
            });
        }

        if let Some(plot) = &self.plot {
            if let Some((x, y)) = plot.cell_to_plot(column, row) {
                return Some(Hit::Plot { x, y });
            }
        }

        self.panels
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(id, area)| {
                if row == area.y {
                    Hit::PanelTitle(id.clone())
                } else {
                    Hit::PanelBody(id.clone())
                }
            })
    }

    /// Screen row of list entry `index`, if it is visible
    pub fn list_row_of(&self, index: usize) -> Option<u16> {
        let list = self.list?;
        let visible = index.checked_sub(self.list_offset)?;
        let row = list.y.checked_add(u16::try_from(visible).ok()?)?;
        (row < list.bottom()).then_some(row)
    }

    /// Bounds of one list row in cell units
    pub fn list_row_bounds(&self, row: u16) -> Bounds {
        let (x, width) = self
            .list
            .map(|list| (f64::from(list.x), f64::from(list.width)))
            .unwrap_or((0.0, 1.0));
        Bounds::new(x, f64::from(row), width, 1.0)
    }

    /// Every open panel with its bounds in cell units, in display order
    pub fn panel_layout(&self) -> Vec<(DocumentId, Bounds)> {
        self.panels
            .iter()
            .map(|(id, area)| {
                (
                    id.clone(),
                    Bounds::new(
                        f64::from(area.x),
                        f64::from(area.y),
                        f64::from(area.width),
                        f64::from(area.height),
                    ),
                )
            })
            .collect()
    }
}
