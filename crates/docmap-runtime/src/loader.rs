use crate::config::ResourceConfig;
use crate::source::ResourceSource;
use docmap_engine::{Effect, UiEvent};
use docmap_types::{ClusterSet, DocumentId, LoadError, Point};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Fetches and parses the three resource kinds from one source
pub struct DataLoader {
    source: Box<dyn ResourceSource>,
    resources: ResourceConfig,
}

impl DataLoader {
    pub fn new(source: Box<dyn ResourceSource>, resources: ResourceConfig) -> Self {
        Self { source, resources }
    }

    pub fn source(&self) -> &dyn ResourceSource {
        self.source.as_ref()
    }

    pub fn resources(&self) -> &ResourceConfig {
        &self.resources
    }

    pub fn load_cluster_set(&self) -> Result<ClusterSet, LoadError> {
        self.load_json(&self.resources.cluster_set)
    }

    pub fn load_points(&self) -> Result<Vec<Point>, LoadError> {
        self.load_json(&self.resources.points)
    }

    /// Raw text of one document. Content is never parsed.
    pub fn load_document_text(&self, id: &DocumentId) -> Result<String, LoadError> {
        self.source.fetch(&self.resources.content_path(id.as_str()))
    }

    /// Run a fetch effect and wrap its result as the matching event.
    pub fn execute(&self, effect: Effect) -> UiEvent {
        match effect {
            Effect::FetchClusterSet => UiEvent::ClusterSetLoaded(self.load_cluster_set()),
            Effect::FetchPoints => UiEvent::PointsLoaded(self.load_points()),
            Effect::FetchDocument(id) => {
                let result = self.load_document_text(&id);
                UiEvent::DocumentLoaded { id, result }
            }
        }
    }

    fn load_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LoadError> {
        let body = self.source.fetch(path)?;
        debug!(resource = path, bytes = body.len(), "fetched");
        serde_json::from_str(&body).map_err(|err| LoadError::malformed(path, err))
    }
}
