//! Domain state to view models. No formatting happens here.

use docmap_engine::{ClusterListView, ScatterplotView};
use docmap_types::{ClusterSet, DocumentId, Point};

use crate::presentation::view_models::{
    ClusterEntry, ClusterListViewModel, CommandResultViewModel, DocumentViewModel, Guidance,
    PointEntry, PointListViewModel,
};

pub fn present_clusters(list: &ClusterListView) -> ClusterListViewModel {
    ClusterListViewModel {
        clusters: list
            .blocks()
            .iter()
            .map(|block| ClusterEntry {
                name: block.name.clone(),
                files: block.items.iter().map(|i| i.id.to_string()).collect(),
            })
            .collect(),
    }
}

/// Notes about input quirks the explorer tolerates but the user should know
pub fn cluster_set_guidance(set: &ClusterSet) -> Vec<Guidance> {
    let duplicates = set.duplicate_documents();
    if duplicates.is_empty() {
        return Vec::new();
    }

    let names: Vec<&str> = duplicates.iter().map(DocumentId::as_str).collect();
    vec![Guidance::new(format!(
        "{} file name(s) appear in more than one cluster: {}",
        names.len(),
        names.join(", ")
    ))]
}

pub fn present_points(
    scatter: &ScatterplotView,
    points: &[Point],
    list: &ClusterListView,
) -> CommandResultViewModel<PointListViewModel> {
    let entries: Vec<PointEntry> = points
        .iter()
        .zip(scatter.marks())
        .map(|(point, mark)| PointEntry {
            id: point.index.to_string(),
            cluster: list
                .locate(&point.index)
                .map(|(block, _)| list.blocks()[block].name.clone()),
            mds1: point.mds1,
            mds2: point.mds2,
            cx: mark.cx,
            cy: mark.cy,
        })
        .collect();

    let unmatched = entries.iter().filter(|e| e.cluster.is_none()).count();
    let result = CommandResultViewModel::new(PointListViewModel {
        points: entries,
        unmatched,
    });

    if unmatched == 0 {
        return result;
    }
    result.with_suggestion(Guidance::new(format!(
        "{} plotted document(s) are not listed in any cluster and will not highlight",
        unmatched
    )))
}

pub fn present_document(id: &DocumentId, resource: String, text: String) -> DocumentViewModel {
    DocumentViewModel {
        id: id.to_string(),
        resource,
        text,
    }
}
