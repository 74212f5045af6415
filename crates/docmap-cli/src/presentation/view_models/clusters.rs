use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClusterListViewModel {
    pub clusters: Vec<ClusterEntry>,
}

#[derive(Debug, Serialize)]
pub struct ClusterEntry {
    pub name: String,
    pub files: Vec<String>,
}
