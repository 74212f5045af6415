//! Cluster list view model.
//!
//! Holds the rendered block/item arrangement. Rendering always rebuilds from
//! the cluster set; afterwards the arrangement only changes through drag
//! reordering, and emphasis only through the highlighter.

use docmap_types::{Cluster, ClusterSet, DocumentId};
use serde::Serialize;

use crate::drag::{DragScope, DragTarget, DropPosition, move_relative};
use crate::highlight::Emphasis;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub id: DocumentId,
    pub emphasis: Emphasis,
}

impl ListItem {
    pub fn new(id: impl Into<DocumentId>) -> Self {
        Self {
            id: id.into(),
            emphasis: Emphasis::Default,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterBlock {
    pub name: String,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, Default)]
pub struct ClusterListView {
    blocks: Vec<ClusterBlock>,
}

impl ClusterListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current arrangement and rebuild it from `set`.
    pub fn render(&mut self, set: &ClusterSet) {
        self.blocks = set
            .iter()
            .map(|(name, cluster)| ClusterBlock {
                name: name.to_string(),
                items: cluster.files.iter().cloned().map(ListItem::new).collect(),
            })
            .collect();
    }

    pub fn blocks(&self) -> &[ClusterBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &ListItem> {
        self.blocks.iter().flat_map(|b| b.items.iter())
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut ListItem> {
        self.blocks.iter_mut().flat_map(|b| b.items.iter_mut())
    }

    pub fn item_count(&self) -> usize {
        self.blocks.iter().map(|b| b.items.len()).sum()
    }

    pub fn block_index(&self, name: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.name == name)
    }

    /// (block index, item index) of the first item with this id
    pub fn locate(&self, id: &DocumentId) -> Option<(usize, usize)> {
        self.blocks.iter().enumerate().find_map(|(bi, block)| {
            block
                .items
                .iter()
                .position(|item| item.id == *id)
                .map(|ii| (bi, ii))
        })
    }

    pub fn item(&self, id: &DocumentId) -> Option<&ListItem> {
        self.locate(id).map(|(b, i)| &self.blocks[b].items[i])
    }

    pub fn move_block(&mut self, name: &str, anchor: &str, position: DropPosition) -> bool {
        match (self.block_index(name), self.block_index(anchor)) {
            (Some(from), Some(to)) => move_relative(&mut self.blocks, from, to, position),
            _ => false,
        }
    }

    /// Move a file next to `anchor`. The anchor may live in another cluster,
    /// in which case the file changes cluster.
    pub fn move_item(&mut self, id: &DocumentId, anchor: &DocumentId, position: DropPosition) -> bool {
        let (Some((from_block, from_item)), Some((to_block, to_item))) =
            (self.locate(id), self.locate(anchor))
        else {
            return false;
        };

        if from_block == to_block {
            return move_relative(
                &mut self.blocks[from_block].items,
                from_item,
                to_item,
                position,
            );
        }

        let item = self.blocks[from_block].items.remove(from_item);
        let dest = match position {
            DropPosition::Before => to_item,
            DropPosition::After => to_item + 1,
        };
        self.blocks[to_block].items.insert(dest, item);
        true
    }

    /// Snapshot of the current arrangement as a cluster set
    pub fn to_cluster_set(&self) -> ClusterSet {
        self.blocks
            .iter()
            .map(|block| {
                (
                    block.name.clone(),
                    Cluster {
                        files: block.items.iter().map(|i| i.id.clone()).collect(),
                    },
                )
            })
            .collect()
    }
}

impl DragScope for ClusterListView {
    fn accepts(&self, dragged: &DragTarget, candidate: &DragTarget) -> bool {
        matches!(
            (dragged, candidate),
            (DragTarget::Cluster(_), DragTarget::Cluster(_))
                | (DragTarget::File(_), DragTarget::File(_))
        )
    }

    fn place(&mut self, dragged: &DragTarget, anchor: &DragTarget, position: DropPosition) -> bool {
        match (dragged, anchor) {
            (DragTarget::Cluster(name), DragTarget::Cluster(anchor)) => {
                self.move_block(name, anchor, position)
            }
            (DragTarget::File(id), DragTarget::File(anchor)) => self.move_item(id, anchor, position),
            _ => false,
        }
    }
}
