use owo_colors::OwoColorize;
use std::fmt;

use super::{CreateView, DisplayOptions};
use crate::presentation::view_models::PointListViewModel;

pub struct PointListView<'a> {
    data: &'a PointListViewModel,
    options: DisplayOptions,
}

impl<'a> PointListView<'a> {
    pub fn new(data: &'a PointListViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for PointListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.points.is_empty() {
            writeln!(f, "No points.")?;
            return Ok(());
        }

        let id_width = self
            .data
            .points
            .iter()
            .map(|p| p.id.len())
            .max()
            .unwrap_or(0)
            .max(8);

        writeln!(
            f,
            "{:<id_width$} {:<12} {:>9} {:>9} {:>8} {:>8}",
            "DOCUMENT", "CLUSTER", "MDS1", "MDS2", "X", "Y"
        )?;
        writeln!(f, "{}", "-".repeat(id_width + 52))?;

        for point in &self.data.points {
            let cluster = match &point.cluster {
                Some(name) => name.clone(),
                None if self.options.enable_color => "(none)".dimmed().to_string(),
                None => "(none)".to_string(),
            };
            writeln!(
                f,
                "{:<id_width$} {:<12} {:>9.3} {:>9.3} {:>8.1} {:>8.1}",
                point.id, cluster, point.mds1, point.mds2, point.cx, point.cy
            )?;
        }

        Ok(())
    }
}

impl CreateView for PointListViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(PointListView::new(self, options))
    }
}
