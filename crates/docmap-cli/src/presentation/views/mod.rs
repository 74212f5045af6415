pub mod clusters;
pub mod document;
pub mod points;
pub mod tui;

pub use clusters::ClusterListView;
pub use document::DocumentView;
pub use points::PointListView;

use std::fmt;

#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    pub enable_color: bool,
}

/// Bridges a view model to the `Display` view that lays it out as text
pub trait CreateView {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
