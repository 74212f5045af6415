use docmap_types::{ClusterSet, DocumentId, LoadError, Point};

use crate::drag::DragTarget;
use crate::geometry::Rect;
use crate::scatter::HoverTransition;

/// Everything the explorer reacts to: fetch results and user gestures
#[derive(Debug, Clone)]
pub enum UiEvent {
    ClusterSetLoaded(Result<ClusterSet, LoadError>),
    PointsLoaded(Result<Vec<Point>, LoadError>),
    DocumentLoaded {
        id: DocumentId,
        result: Result<String, LoadError>,
    },
    PointHovered(DocumentId),
    PointUnhovered(DocumentId),
    PointSelected(DocumentId),
    ItemSelected(DocumentId),
    DragStarted(DragTarget),
    /// Pointer is over `candidate`, whose on-screen bounds are `bounds`
    DragOver {
        candidate: DragTarget,
        pointer_y: f64,
        bounds: Rect,
    },
    /// Dragged panel released at `point`; `layout` lists every panel's bounds
    PanelDropped {
        point: (f64, f64),
        layout: Vec<(DocumentId, Rect)>,
    },
    DragEnded,
}

/// Side effects requested by the explorer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchClusterSet,
    FetchPoints,
    FetchDocument(DocumentId),
}

impl HoverTransition {
    /// Unhover first, then hover, matching mouseout/mouseover ordering.
    pub fn into_events(self) -> Vec<UiEvent> {
        let mut events = Vec::with_capacity(2);
        if let Some(left) = self.left {
            events.push(UiEvent::PointUnhovered(left));
        }
        if let Some(entered) = self.entered {
            events.push(UiEvent::PointHovered(entered));
        }
        events
    }
}
