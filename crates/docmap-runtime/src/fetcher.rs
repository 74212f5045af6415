use crate::Result;
use crate::loader::DataLoader;
use docmap_engine::{Effect, UiEvent};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use tracing::{debug, warn};

/// Executes fetch effects off the UI thread.
///
/// Each effect gets its own worker; results come back on the receiver
/// returned by [`Fetcher::new`] in completion order.
pub struct Fetcher {
    loader: Arc<DataLoader>,
    tx: Sender<UiEvent>,
}

impl Fetcher {
    pub fn new(loader: DataLoader) -> (Self, Receiver<UiEvent>) {
        let (tx, rx) = channel();
        let fetcher = Self {
            loader: Arc::new(loader),
            tx,
        };
        (fetcher, rx)
    }

    pub fn spawn(&self, effect: Effect) -> Result<()> {
        let loader = Arc::clone(&self.loader);
        let tx = self.tx.clone();
        let name = match &effect {
            Effect::FetchClusterSet => "docmap-fetch-clusters",
            Effect::FetchPoints => "docmap-fetch-points",
            Effect::FetchDocument(_) => "docmap-fetch-document",
        };
        debug!(?effect, "spawning fetch");

        std::thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                let event = loader.execute(effect);
                if tx.send(event).is_err() {
                    debug!("fetch finished after the receiver closed");
                }
            })?;
        Ok(())
    }

    /// Spawn every effect. A spawn failure is logged and the rest continue.
    pub fn spawn_all(&self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            if let Err(err) = self.spawn(effect) {
                warn!(error = %err, "could not start fetch worker");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResourceConfig;
    use crate::source::DirectorySource;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_results_arrive_on_channel() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("dataset")).unwrap();
        std::fs::write(dir.path().join("dataset/a.txt"), "alpha").unwrap();

        let loader = DataLoader::new(
            Box::new(DirectorySource::new(dir.path())),
            ResourceConfig::default(),
        );
        let (fetcher, rx) = Fetcher::new(loader);
        fetcher.spawn_all([Effect::FetchDocument("a.txt".into()), Effect::FetchPoints]);

        let mut documents = 0;
        let mut points = 0;
        for _ in 0..2 {
            match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
                UiEvent::DocumentLoaded { result, .. } => {
                    assert_eq!(result.unwrap(), "alpha");
                    documents += 1;
                }
                UiEvent::PointsLoaded(result) => {
                    assert!(result.is_err());
                    points += 1;
                }
                other => panic!("unexpected event {other:?}"),
            }
        }
        assert_eq!((documents, points), (1, 1));
    }
}
