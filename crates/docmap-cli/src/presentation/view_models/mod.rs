pub mod clusters;
pub mod document;
pub mod points;
pub mod result;

pub use clusters::{ClusterEntry, ClusterListViewModel};
pub use document::DocumentViewModel;
pub use points::{PointEntry, PointListViewModel};
pub use result::{CommandResultViewModel, Guidance};
