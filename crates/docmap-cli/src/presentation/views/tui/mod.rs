//! Ratatui widgets for the explorer screen. Widgets are stateless; the
//! cursor, focus and scroll they draw come from `ExplorerApp`.

pub mod cluster_list;
pub mod panels;
pub mod scatter;
pub mod status_bar;

pub use cluster_list::{ClusterListWidget, ListRow, list_rows};
pub use panels::{PanelsWidget, panel_areas};
pub use scatter::{PlotViewport, ScatterWidget};
pub use status_bar::{StatusBarModel, StatusBarWidget};

use docmap_engine::Emphasis;
use ratatui::style::{Color, Style};

pub(crate) fn emphasis_style(emphasis: Emphasis) -> Style {
    match emphasis {
        Emphasis::Default => Style::default(),
        Emphasis::Selected => Style::default().fg(Color::Blue),
    }
}

pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
