use docmap_types::{ClusterSet, DocumentId, Point};
use tracing::{debug, error, info, warn};

use crate::cluster_list::ClusterListView;
use crate::drag::{DragCoordinator, DragTarget};
use crate::events::{Effect, UiEvent};
use crate::highlight::SelectionHighlighter;
use crate::panels::{FilePanelManager, ToggleOutcome};
use crate::scatter::{ScatterConfig, ScatterplotView};

#[derive(Debug, Clone, Default)]
pub struct ExplorerOptions {
    pub scatter: ScatterConfig,
    /// Re-apply the last click selection after an unhover instead of
    /// leaving every item at the default emphasis
    pub restore_selection_on_unhover: bool,
}

/// Owns every piece of interactive state and routes events to it.
///
/// The explorer never performs I/O: fetches are returned as [`Effect`]s and
/// their results come back through [`Explorer::dispatch`].
#[derive(Debug)]
pub struct Explorer {
    list: ClusterListView,
    scatter: ScatterplotView,
    panels: FilePanelManager,
    drag: DragCoordinator,
    highlighter: SelectionHighlighter,
    restore_selection_on_unhover: bool,
    selected: Option<DocumentId>,
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(ExplorerOptions::default())
    }
}

impl Explorer {
    pub fn new(options: ExplorerOptions) -> Self {
        Self {
            list: ClusterListView::new(),
            scatter: ScatterplotView::new(options.scatter),
            panels: FilePanelManager::new(),
            drag: DragCoordinator::new(),
            highlighter: SelectionHighlighter,
            restore_selection_on_unhover: options.restore_selection_on_unhover,
            selected: None,
        }
    }

    /// Effects to run once at startup
    pub fn start(&self) -> Vec<Effect> {
        vec![Effect::FetchClusterSet]
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::ClusterSetLoaded(Ok(set)) => self.on_cluster_set(set),
            UiEvent::ClusterSetLoaded(Err(err)) => {
                error!(error = %err, "Error fetching clustering results");
                Vec::new()
            }
            UiEvent::PointsLoaded(Ok(points)) => {
                self.on_points(&points);
                Vec::new()
            }
            UiEvent::PointsLoaded(Err(err)) => {
                error!(error = %err, "Error fetching point coordinates");
                Vec::new()
            }
            UiEvent::DocumentLoaded { id, result } => {
                if self.panels.complete(&id, result) {
                    debug!(document = %id, "panel opened");
                }
                Vec::new()
            }
            UiEvent::PointHovered(id) => {
                self.highlighter.highlight(self.list.items_mut(), &id);
                Vec::new()
            }
            UiEvent::PointUnhovered(id) => {
                self.highlighter.unhighlight(self.list.items_mut(), &id);
                if self.restore_selection_on_unhover {
                    if let Some(selected) = &self.selected {
                        self.highlighter.highlight(self.list.items_mut(), selected);
                    }
                }
                Vec::new()
            }
            UiEvent::PointSelected(id) | UiEvent::ItemSelected(id) => self.select(id),
            UiEvent::DragStarted(target) => {
                self.drag.start(target);
                Vec::new()
            }
            UiEvent::DragOver {
                candidate,
                pointer_y,
                bounds,
            } => {
                // Panels reorder on drop only
                if !matches!(candidate, DragTarget::Panel(_)) {
                    self.drag
                        .drag_over(&mut self.list, &candidate, pointer_y, &bounds);
                }
                Vec::new()
            }
            UiEvent::PanelDropped { point, layout } => {
                let layout: Vec<_> = layout
                    .into_iter()
                    .map(|(id, rect)| (DragTarget::Panel(id), rect))
                    .collect();
                self.drag.drop_nearest(&mut self.panels, point, &layout);
                Vec::new()
            }
            UiEvent::DragEnded => {
                self.drag.end();
                Vec::new()
            }
        }
    }

    fn on_cluster_set(&mut self, set: ClusterSet) -> Vec<Effect> {
        let duplicates = set.duplicate_documents();
        if !duplicates.is_empty() {
            warn!(
                count = duplicates.len(),
                first = %duplicates[0],
                "file names repeat across clusters; selection will match every copy"
            );
        }

        self.list.render(&set);
        info!(
            clusters = set.len(),
            files = self.list.item_count(),
            "cluster list rendered"
        );

        vec![Effect::FetchPoints]
    }

    fn on_points(&mut self, points: &[Point]) {
        self.scatter.render(points);

        let unmatched = points
            .iter()
            .filter(|p| self.list.locate(&p.index).is_none())
            .count();
        if unmatched > 0 {
            warn!(
                unmatched,
                "plotted documents missing from the cluster list will not highlight"
            );
        }
        info!(points = points.len(), "scatterplot rendered");
    }

    fn select(&mut self, id: DocumentId) -> Vec<Effect> {
        let outcome = self.panels.toggle(&id);
        self.highlighter.highlight(self.list.items_mut(), &id);
        self.selected = Some(id);

        match outcome {
            ToggleOutcome::FetchRequested(id) => vec![Effect::FetchDocument(id)],
            ToggleOutcome::Closed(_) | ToggleOutcome::Withdrawn(_) => Vec::new(),
        }
    }

    pub fn list(&self) -> &ClusterListView {
        &self.list
    }

    pub fn scatter(&self) -> &ScatterplotView {
        &self.scatter
    }

    pub fn scatter_mut(&mut self) -> &mut ScatterplotView {
        &mut self.scatter
    }

    pub fn panels(&self) -> &FilePanelManager {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut FilePanelManager {
        &mut self.panels
    }

    pub fn drag(&self) -> &DragCoordinator {
        &self.drag
    }

    pub fn selected(&self) -> Option<&DocumentId> {
        self.selected.as_ref()
    }
}
