//! File panel manager: the open/close state machine for document panels.
//!
//! Per document: `Closed -> Loading -> Open -> Closed`, with
//! `Loading -> Closed` on load failure or when the request is withdrawn by a
//! second toggle. Fetch results that arrive for a document that is no longer
//! `Loading` are dropped.

use std::collections::HashMap;

use docmap_types::{DocumentId, LoadError};
use tracing::{debug, warn};

use crate::drag::{DragScope, DragTarget, DropPosition, move_relative};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Loading,
    Open,
}

/// One open document. Text edits stay in memory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenPanel {
    pub id: DocumentId,
    text: String,
    edited: bool,
}

impl OpenPanel {
    pub fn new(id: DocumentId, text: String) -> Self {
        Self {
            id,
            text,
            edited: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_edited(&self) -> bool {
        self.edited
    }

    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
        self.edited = true;
    }

    pub fn push_newline(&mut self) {
        self.push_char('\n');
    }

    pub fn pop_char(&mut self) -> Option<char> {
        let popped = self.text.pop();
        if popped.is_some() {
            self.edited = true;
        }
        popped
    }
}

/// What a toggle asks the caller to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Document was closed; content must be fetched
    FetchRequested(DocumentId),
    /// Open panel was removed, nothing to fetch
    Closed(DocumentId),
    /// Pending fetch was withdrawn; its result will be ignored
    Withdrawn(DocumentId),
}

#[derive(Debug, Default)]
pub struct FilePanelManager {
    states: HashMap<DocumentId, PanelState>,
    panels: Vec<OpenPanel>,
}

impl FilePanelManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: &DocumentId) -> PanelState {
        self.states.get(id).copied().unwrap_or_default()
    }

    pub fn is_open(&self, id: &DocumentId) -> bool {
        self.state(id) == PanelState::Open
    }

    pub fn toggle(&mut self, id: &DocumentId) -> ToggleOutcome {
        match self.state(id) {
            PanelState::Open => {
                self.panels.retain(|panel| panel.id != *id);
                self.states.insert(id.clone(), PanelState::Closed);
                ToggleOutcome::Closed(id.clone())
            }
            PanelState::Loading => {
                debug!(document = %id, "toggle while loading; withdrawing request");
                self.states.insert(id.clone(), PanelState::Closed);
                ToggleOutcome::Withdrawn(id.clone())
            }
            PanelState::Closed => {
                self.states.insert(id.clone(), PanelState::Loading);
                ToggleOutcome::FetchRequested(id.clone())
            }
        }
    }

    /// Apply a finished fetch. Returns true when a panel was opened.
    pub fn complete(&mut self, id: &DocumentId, result: Result<String, LoadError>) -> bool {
        if self.state(id) != PanelState::Loading {
            debug!(document = %id, "dropping fetch result for document that is not loading");
            return false;
        }

        match result {
            Ok(text) => {
                self.panels.push(OpenPanel::new(id.clone(), text));
                self.states.insert(id.clone(), PanelState::Open);
                true
            }
            Err(err) => {
                warn!(document = %id, error = %err, "Error fetching file content");
                self.states.insert(id.clone(), PanelState::Closed);
                false
            }
        }
    }

    /// Open panels in display order
    pub fn panels(&self) -> &[OpenPanel] {
        &self.panels
    }

    pub fn panel(&self, id: &DocumentId) -> Option<&OpenPanel> {
        self.panels.iter().find(|p| p.id == *id)
    }

    pub fn panel_mut(&mut self, id: &DocumentId) -> Option<&mut OpenPanel> {
        self.panels.iter_mut().find(|p| p.id == *id)
    }

    pub fn loading_count(&self) -> usize {
        self.states
            .values()
            .filter(|s| **s == PanelState::Loading)
            .count()
    }

    pub fn move_panel(&mut self, id: &DocumentId, anchor: &DocumentId, position: DropPosition) -> bool {
        let from = self.panels.iter().position(|p| p.id == *id);
        let to = self.panels.iter().position(|p| p.id == *anchor);
        match (from, to) {
            (Some(from), Some(to)) => move_relative(&mut self.panels, from, to, position),
            _ => false,
        }
    }
}

impl DragScope for FilePanelManager {
    fn accepts(&self, dragged: &DragTarget, candidate: &DragTarget) -> bool {
        matches!(
            (dragged, candidate),
            (DragTarget::Panel(_), DragTarget::Panel(_))
        )
    }

    fn place(&mut self, dragged: &DragTarget, anchor: &DragTarget, position: DropPosition) -> bool {
        match (dragged, anchor) {
            (DragTarget::Panel(id), DragTarget::Panel(anchor)) => {
                self.move_panel(id, anchor, position)
            }
            _ => false,
        }
    }
}
