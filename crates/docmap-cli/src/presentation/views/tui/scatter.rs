//! Scatterplot drawn on a braille canvas.
//!
//! The canvas covers the whole outer plot box (inner plot plus margins), so
//! axis labels have room in the margins. Plot space has y growing downward
//! while the canvas grows upward; [`PlotViewport`] converts between cells
//! and plot space for mouse hit-testing.

use docmap_engine::{ScatterConfig, ScatterplotView};
use docmap_types::DocumentId;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Block, Borders, Widget,
        canvas::{Canvas, Circle, Line as CanvasLine, Points},
    },
};

use super::border_style;

/// Mapping between terminal cells inside the plot block and plot space
#[derive(Debug, Clone, PartialEq)]
pub struct PlotViewport {
    area: Rect,
    x_bounds: [f64; 2],
    /// Plot-space y at the top and bottom edges of `area`
    y_bounds: [f64; 2],
}

impl PlotViewport {
    /// `area` is the inner (borderless) region the canvas paints into.
    pub fn new(area: Rect, config: &ScatterConfig) -> Self {
        let margin = config.margin;
        Self {
            area,
            x_bounds: [-margin.left, config.inner_width() + margin.right],
            y_bounds: [-margin.top, config.inner_height() + margin.bottom],
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains((column, row).into())
    }

    /// Plot-space position of the centre of a cell
    pub fn cell_to_plot(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        if !self.contains(column, row) {
            return None;
        }
        let cx = f64::from(column - self.area.x) + 0.5;
        let cy = f64::from(row - self.area.y) + 0.5;
        Some((
            self.x_bounds[0] + cx * (self.x_bounds[1] - self.x_bounds[0]) / f64::from(self.area.width),
            self.y_bounds[0] + cy * (self.y_bounds[1] - self.y_bounds[0]) / f64::from(self.area.height),
        ))
    }

    /// Plot units covered by one cell; used as the hover tolerance
    pub fn cell_extent(&self) -> f64 {
        if self.area.width == 0 || self.area.height == 0 {
            return 0.0;
        }
        let w = (self.x_bounds[1] - self.x_bounds[0]) / f64::from(self.area.width);
        let h = (self.y_bounds[1] - self.y_bounds[0]) / f64::from(self.area.height);
        w.max(h)
    }

    /// Centre cell of a plot-space position, if it is on screen
    pub fn plot_to_cell(&self, px: f64, py: f64) -> Option<(u16, u16)> {
        let fx = (px - self.x_bounds[0]) / (self.x_bounds[1] - self.x_bounds[0]);
        let fy = (py - self.y_bounds[0]) / (self.y_bounds[1] - self.y_bounds[0]);
        if !(0.0..1.0).contains(&fx) || !(0.0..1.0).contains(&fy) {
            return None;
        }
        let column = self.area.x + (fx * f64::from(self.area.width)) as u16;
        let row = self.area.y + (fy * f64::from(self.area.height)) as u16;
        Some((column, row))
    }
}

pub struct ScatterWidget<'a> {
    view: &'a ScatterplotView,
    selected: Option<&'a DocumentId>,
    focused: bool,
}

impl<'a> ScatterWidget<'a> {
    pub fn new(view: &'a ScatterplotView) -> Self {
        Self {
            view,
            selected: None,
            focused: false,
        }
    }

    pub fn selected(mut self, selected: Option<&'a DocumentId>) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl<'a> Widget for ScatterWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let config = self.view.config();
        let margin = config.margin;
        let (width, height) = (config.inner_width(), config.inner_height());

        // Canvas y grows upward: flip plot-space y
        let flip = |cy: f64| height - cy;

        let marks: Vec<(f64, f64)> = self
            .view
            .marks()
            .iter()
            .map(|m| (m.cx, flip(m.cy)))
            .collect();
        let ring = |id: Option<&DocumentId>| {
            id.and_then(|id| self.view.marks().iter().rev().find(|m| m.id == *id))
                .map(|m| (m.cx, flip(m.cy), m.r))
        };
        let hovered = ring(self.view.hovered());
        let selected = ring(self.selected);
        let x_ticks = self.view.x_axis();
        let y_ticks = self.view.y_axis();

        let title = if self.view.is_empty() {
            "Scatterplot (waiting for points)"
        } else {
            "Scatterplot"
        };

        Canvas::default()
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style(self.focused)),
            )
            .marker(Marker::Braille)
            .x_bounds([-margin.left, width + margin.right])
            .y_bounds([-margin.bottom, height + margin.top])
            .paint(|ctx| {
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: width,
                    y2: 0.0,
                    color: Color::Gray,
                });
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: 0.0,
                    y2: height,
                    color: Color::Gray,
                });
                for tick in &x_ticks {
                    ctx.print(
                        tick.position,
                        -margin.bottom / 2.0,
                        Span::styled(tick.label.clone(), Style::default().fg(Color::Gray)),
                    );
                }
                for tick in &y_ticks {
                    ctx.print(
                        -margin.left,
                        flip(tick.position),
                        Span::styled(tick.label.clone(), Style::default().fg(Color::Gray)),
                    );
                }

                ctx.layer();
                ctx.draw(&Points {
                    coords: &marks,
                    color: Color::Blue,
                });
                if let Some((x, y, r)) = selected {
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: r * 2.0,
                        color: Color::LightBlue,
                    });
                }
                if let Some((x, y, r)) = hovered {
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: r * 3.0,
                        color: Color::Yellow,
                    });
                }
            })
            .render(area, buf);
    }
}
