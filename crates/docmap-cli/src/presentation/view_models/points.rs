use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PointListViewModel {
    pub points: Vec<PointEntry>,
    /// Plotted documents that no cluster lists
    pub unmatched: usize,
}

#[derive(Debug, Serialize)]
pub struct PointEntry {
    pub id: String,
    pub cluster: Option<String>,
    pub mds1: f64,
    pub mds2: f64,
    /// Plot-space x, 0 at the left edge of the inner plot
    pub cx: f64,
    /// Plot-space y, 0 at the top edge of the inner plot
    pub cy: f64,
}
