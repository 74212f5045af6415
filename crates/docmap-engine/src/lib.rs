// Engine module - interaction state behind the explorer surfaces.
// Nothing here touches a terminal or the network: views are plain data,
// user input arrives as `UiEvent`s and side effects leave as `Effect`s.

pub mod cluster_list;
pub mod drag;
mod events;
mod explorer;
pub mod geometry;
pub mod highlight;
pub mod panels;
pub mod scatter;

pub use cluster_list::{ClusterBlock, ClusterListView, ListItem};
pub use drag::{DragCoordinator, DragKind, DragScope, DragTarget, DropPosition};
pub use events::{Effect, UiEvent};
pub use explorer::{Explorer, ExplorerOptions};
pub use geometry::Rect;
pub use highlight::{Emphasis, SelectionHighlighter};
pub use panels::{FilePanelManager, OpenPanel, PanelState, ToggleOutcome};
pub use scatter::{AxisTick, HoverTransition, LinearScale, Margin, Mark, ScatterConfig, ScatterplotView};
