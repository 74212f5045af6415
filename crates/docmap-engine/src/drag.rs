//! Drag-and-drop coordination shared by every reorderable container.
//!
//! Cluster blocks, file items and file panels all follow the same gesture:
//! a drag starts on one element, candidates are tested against it, and the
//! dragged element is placed before or after the candidate depending on
//! which half of the candidate the pointer is in. Each container plugs in
//! through [`DragScope`]; the coordinator owns the single active drag.

use docmap_types::DocumentId;
use tracing::debug;

use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragKind {
    ClusterBlock,
    FileItem,
    FilePanel,
}

/// The element a drag gesture refers to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DragTarget {
    Cluster(String),
    File(DocumentId),
    Panel(DocumentId),
}

impl DragTarget {
    pub fn kind(&self) -> DragKind {
        match self {
            DragTarget::Cluster(_) => DragKind::ClusterBlock,
            DragTarget::File(_) => DragKind::FileItem,
            DragTarget::Panel(_) => DragKind::FilePanel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPosition {
    Before,
    After,
}

impl DropPosition {
    /// Above the vertical midpoint of `bounds` means before, otherwise after.
    pub fn from_pointer(pointer_y: f64, bounds: &Rect) -> Self {
        if pointer_y < bounds.mid_y() {
            DropPosition::Before
        } else {
            DropPosition::After
        }
    }
}

/// A container whose children can be reordered by dragging
pub trait DragScope {
    /// Candidate-match predicate: may `dragged` be placed relative to `candidate`?
    fn accepts(&self, dragged: &DragTarget, candidate: &DragTarget) -> bool;

    /// Move `dragged` next to `anchor`. Returns true when the order changed.
    fn place(&mut self, dragged: &DragTarget, anchor: &DragTarget, position: DropPosition)
    -> bool;
}

/// Owner of the one drag context that may be active at a time
#[derive(Debug, Default)]
pub struct DragCoordinator {
    active: Option<DragTarget>,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, target: DragTarget) {
        if let Some(previous) = self.active.replace(target) {
            debug!(?previous, "drag started while another was active; replacing");
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Continuous reordering: called for every drag-over on `candidate`.
    pub fn drag_over<S>(
        &self,
        scope: &mut S,
        candidate: &DragTarget,
        pointer_y: f64,
        bounds: &Rect,
    ) -> bool
    where
        S: DragScope + ?Sized,
    {
        let Some(dragged) = &self.active else {
            return false;
        };
        if dragged == candidate || !scope.accepts(dragged, candidate) {
            return false;
        }

        let position = DropPosition::from_pointer(pointer_y, bounds);
        scope.place(dragged, candidate, position)
    }

    /// Drop-time reordering against the accepted candidate nearest `point`.
    pub fn drop_nearest<S>(
        &self,
        scope: &mut S,
        point: (f64, f64),
        layout: &[(DragTarget, Rect)],
    ) -> bool
    where
        S: DragScope + ?Sized,
    {
        let Some(dragged) = &self.active else {
            return false;
        };

        let (x, y) = point;
        let nearest = layout
            .iter()
            .filter(|(candidate, _)| scope.accepts(dragged, candidate))
            .min_by(|(_, a), (_, b)| a.distance_to(x, y).total_cmp(&b.distance_to(x, y)));

        let Some((anchor, bounds)) = nearest else {
            return false;
        };
        if anchor == dragged {
            return false;
        }

        let position = DropPosition::from_pointer(y, bounds);
        scope.place(dragged, anchor, position)
    }

    /// Ends the gesture, dropped or cancelled.
    pub fn end(&mut self) -> Option<DragTarget> {
        self.active.take()
    }
}

/// Move `items[from]` before or after `items[anchor]`, keeping everything
/// else in its relative order. Returns true when the order changed.
pub fn move_relative<T>(
    items: &mut Vec<T>,
    from: usize,
    anchor: usize,
    position: DropPosition,
) -> bool {
    if from == anchor || from >= items.len() || anchor >= items.len() {
        return false;
    }

    let item = items.remove(from);
    let anchor = if from < anchor { anchor - 1 } else { anchor };
    let dest = match position {
        DropPosition::Before => anchor,
        DropPosition::After => anchor + 1,
    };
    items.insert(dest, item);
    dest != from
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Letters(Vec<&'static str>);

    impl Letters {
        fn index(&self, target: &DragTarget) -> Option<usize> {
            match target {
                DragTarget::Cluster(name) => self.0.iter().position(|l| l == name),
                _ => None,
            }
        }
    }

    impl DragScope for Letters {
        fn accepts(&self, dragged: &DragTarget, candidate: &DragTarget) -> bool {
            dragged.kind() == DragKind::ClusterBlock && candidate.kind() == DragKind::ClusterBlock
        }

        fn place(
            &mut self,
            dragged: &DragTarget,
            anchor: &DragTarget,
            position: DropPosition,
        ) -> bool {
            match (self.index(dragged), self.index(anchor)) {
                (Some(from), Some(to)) => move_relative(&mut self.0, from, to, position),
                _ => false,
            }
        }
    }

    fn cluster(name: &str) -> DragTarget {
        DragTarget::Cluster(name.to_string())
    }

    #[test]
    fn test_move_first_after_kth() {
        let original = vec!["a", "b", "c", "d", "e"];
        for k in 1..original.len() {
            let mut items = original.clone();
            assert!(move_relative(&mut items, 0, k, DropPosition::After));
            assert_eq!(items[k], "a");

            let rest: Vec<_> = items.iter().filter(|l| **l != "a").copied().collect();
            assert_eq!(rest, vec!["b", "c", "d", "e"]);
        }
    }

    #[test]
    fn test_move_before_neighbour_is_noop() {
        let mut items = vec!["a", "b", "c"];
        assert!(!move_relative(&mut items, 0, 1, DropPosition::Before));
        assert_eq!(items, vec!["a", "b", "c"]);
        assert!(!move_relative(&mut items, 1, 1, DropPosition::After));
        assert!(!move_relative(&mut items, 5, 1, DropPosition::After));
    }

    #[test]
    fn test_move_up() {
        let mut items = vec!["a", "b", "c", "d"];
        assert!(move_relative(&mut items, 3, 1, DropPosition::Before));
        assert_eq!(items, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_drop_position_from_midpoint() {
        let bounds = Rect::new(0.0, 10.0, 5.0, 2.0);
        assert_eq!(DropPosition::from_pointer(10.5, &bounds), DropPosition::Before);
        assert_eq!(DropPosition::from_pointer(11.0, &bounds), DropPosition::After);
        assert_eq!(DropPosition::from_pointer(11.9, &bounds), DropPosition::After);
    }

    #[test]
    fn test_drag_over_requires_active_drag() {
        let coordinator = DragCoordinator::new();
        let mut scope = Letters(vec!["a", "b"]);
        let moved = coordinator.drag_over(&mut scope, &cluster("b"), 0.0, &Rect::default());
        assert!(!moved);
    }

    #[test]
    fn test_drag_over_rejects_other_kinds() {
        let mut coordinator = DragCoordinator::new();
        coordinator.start(DragTarget::File(DocumentId::from("x.txt")));
        let mut scope = Letters(vec!["a", "b"]);

        let moved = coordinator.drag_over(&mut scope, &cluster("b"), 0.0, &Rect::default());
        assert!(!moved);
        assert_eq!(scope.0, vec!["a", "b"]);
    }

    #[test]
    fn test_drag_over_reorders_continuously() {
        let mut coordinator = DragCoordinator::new();
        let mut scope = Letters(vec!["a", "b", "c"]);
        coordinator.start(cluster("a"));

        let b = Rect::new(0.0, 1.0, 10.0, 1.0);
        assert!(coordinator.drag_over(&mut scope, &cluster("b"), 1.75, &b));
        assert_eq!(scope.0, vec!["b", "a", "c"]);

        let c = Rect::new(0.0, 2.0, 10.0, 1.0);
        assert!(coordinator.drag_over(&mut scope, &cluster("c"), 2.75, &c));
        assert_eq!(scope.0, vec!["b", "c", "a"]);

        assert_eq!(coordinator.end(), Some(cluster("a")));
        assert!(!coordinator.is_dragging());
    }

    #[test]
    fn test_drop_nearest_uses_closest_candidate() {
        let mut coordinator = DragCoordinator::new();
        let mut scope = Letters(vec!["a", "b", "c"]);
        coordinator.start(cluster("a"));

        let layout = vec![
            (cluster("a"), Rect::new(0.0, 0.0, 10.0, 4.0)),
            (cluster("b"), Rect::new(0.0, 5.0, 10.0, 4.0)),
            (cluster("c"), Rect::new(0.0, 10.0, 10.0, 4.0)),
        ];

        // Below the last rect: nearest is "c", lower half → after
        assert!(coordinator.drop_nearest(&mut scope, (3.0, 20.0), &layout));
        assert_eq!(scope.0, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let mut coordinator = DragCoordinator::new();
        let mut scope = Letters(vec!["a", "b"]);
        coordinator.start(cluster("a"));

        let layout = vec![
            (cluster("a"), Rect::new(0.0, 0.0, 10.0, 4.0)),
            (cluster("b"), Rect::new(0.0, 5.0, 10.0, 4.0)),
        ];
        assert!(!coordinator.drop_nearest(&mut scope, (3.0, 1.0), &layout));
        assert_eq!(scope.0, vec!["a", "b"]);
    }
}
