mod cluster;
mod document;
mod point;

pub use cluster::{Cluster, ClusterSet};
pub use document::DocumentId;
pub use point::Point;
