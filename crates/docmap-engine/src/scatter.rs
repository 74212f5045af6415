//! Scatterplot view model.
//!
//! Data coordinates are mapped into plot space through two fixed linear
//! scales. The domains are configuration, not fitted to the data, so points
//! outside them land outside the plot area.

use docmap_types::{DocumentId, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 30.0,
            left: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// Outer width including margins
    pub width: f64,
    /// Outer height including margins
    pub height: f64,
    pub x_domain: [f64; 2],
    pub y_domain: [f64; 2],
    /// Mark radius in plot units
    pub radius: f64,
    /// Approximate number of ticks per axis
    pub ticks: usize,
    pub margin: Margin,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 500.0,
            x_domain: [-15.0, 23.0],
            y_domain: [-25.0, 15.0],
            radius: 3.0,
            ticks: 10,
            margin: Margin::default(),
        }
    }
}

impl ScatterConfig {
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

/// Continuous linear mapping `domain -> range`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn invert(&self, position: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return (d0 + d1) / 2.0;
        }
        d0 + (position - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Round tick values covering the domain, roughly `count` of them
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        if lo == hi {
            return vec![lo];
        }
        if count == 0 || !lo.is_finite() || !hi.is_finite() {
            return Vec::new();
        }

        let step = tick_step(hi - lo, count);
        let start = (lo / step).ceil() as i64;
        let stop = (hi / step).floor() as i64;
        (start..=stop).map(|i| i as f64 * step).collect()
    }
}

fn tick_step(span: f64, count: usize) -> f64 {
    let raw = span / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}

fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    let text = format!("{:.*}", decimals, value);
    // "-0" reads oddly on an axis
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_string()
    } else {
        text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

/// One plotted document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mark {
    pub id: DocumentId,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// Pointer moved from one mark (or none) to another (or none)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverTransition {
    pub left: Option<DocumentId>,
    pub entered: Option<DocumentId>,
}

impl HoverTransition {
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.entered.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct ScatterplotView {
    config: ScatterConfig,
    x: LinearScale,
    y: LinearScale,
    marks: Vec<Mark>,
    hovered: Option<DocumentId>,
}

impl Default for ScatterplotView {
    fn default() -> Self {
        Self::new(ScatterConfig::default())
    }
}

impl ScatterplotView {
    pub fn new(config: ScatterConfig) -> Self {
        let x = LinearScale::new(
            (config.x_domain[0], config.x_domain[1]),
            (0.0, config.inner_width()),
        );
        let y = LinearScale::new(
            (config.y_domain[0], config.y_domain[1]),
            (config.inner_height(), 0.0),
        );
        Self {
            config,
            x,
            y,
            marks: Vec::new(),
            hovered: None,
        }
    }

    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    pub fn x_scale(&self) -> &LinearScale {
        &self.x
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y
    }

    /// Rebuild one mark per point, in input order.
    pub fn render(&mut self, points: &[Point]) {
        self.marks = points
            .iter()
            .map(|p| Mark {
                id: p.index.clone(),
                cx: self.x.map(p.mds1),
                cy: self.y.map(p.mds2),
                r: self.config.radius,
            })
            .collect();
        self.hovered = None;
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn hovered(&self) -> Option<&DocumentId> {
        self.hovered.as_ref()
    }

    /// Nearest mark whose centre lies within `r + tolerance` of the pointer.
    /// Later marks are drawn on top, so they win ties.
    pub fn mark_at(&self, px: f64, py: f64, tolerance: f64) -> Option<&DocumentId> {
        let mut best: Option<(f64, &Mark)> = None;
        for mark in &self.marks {
            let distance = ((mark.cx - px).powi(2) + (mark.cy - py).powi(2)).sqrt();
            if distance > mark.r + tolerance {
                continue;
            }
            match best {
                Some((d, _)) if distance > d => {}
                _ => best = Some((distance, mark)),
            }
        }
        best.map(|(_, mark)| &mark.id)
    }

    pub fn track_pointer(&mut self, px: f64, py: f64, tolerance: f64) -> HoverTransition {
        let hit = self.mark_at(px, py, tolerance).cloned();
        if hit == self.hovered {
            return HoverTransition::default();
        }
        HoverTransition {
            left: std::mem::replace(&mut self.hovered, hit.clone()),
            entered: hit,
        }
    }

    /// Pointer left the plot area entirely
    pub fn pointer_left(&mut self) -> HoverTransition {
        HoverTransition {
            left: self.hovered.take(),
            entered: None,
        }
    }

    pub fn x_axis(&self) -> Vec<AxisTick> {
        axis_ticks(&self.x, self.config.ticks)
    }

    pub fn y_axis(&self) -> Vec<AxisTick> {
        axis_ticks(&self.y, self.config.ticks)
    }
}

fn axis_ticks(scale: &LinearScale, count: usize) -> Vec<AxisTick> {
    let values = scale.ticks(count);
    let step = match values.as_slice() {
        [a, b, ..] => (b - a).abs(),
        _ => 1.0,
    };
    values
        .into_iter()
        .map(|value| AxisTick {
            value,
            position: scale.map(value),
            label: format_tick(value, step),
        })
        .collect()
}
