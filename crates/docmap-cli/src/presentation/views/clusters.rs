use owo_colors::OwoColorize;
use std::fmt;

use super::{CreateView, DisplayOptions};
use crate::presentation::view_models::ClusterListViewModel;

pub struct ClusterListView<'a> {
    data: &'a ClusterListViewModel,
    options: DisplayOptions,
}

impl<'a> ClusterListView<'a> {
    pub fn new(data: &'a ClusterListViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for ClusterListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.clusters.is_empty() {
            writeln!(f, "No clusters.")?;
            return Ok(());
        }

        for cluster in &self.data.clusters {
            if self.options.enable_color {
                writeln!(f, "{}", cluster.name.bold())?;
            } else {
                writeln!(f, "{}", cluster.name)?;
            }
            for file in &cluster.files {
                writeln!(f, "  {}", file)?;
            }
        }

        Ok(())
    }
}

impl CreateView for ClusterListViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ClusterListView::new(self, options))
    }
}
