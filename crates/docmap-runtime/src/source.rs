//! Where resources come from.
//!
//! A resource is addressed by a relative path such as
//! `clustering_results.json` or `dataset/a.txt`. Sources only fetch text;
//! parsing happens in the loader.

use docmap_types::LoadError;
use reqwest::Url;
use reqwest::blocking::Client;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub trait ResourceSource: Send + Sync {
    fn fetch(&self, path: &str) -> Result<String, LoadError>;

    /// Human-readable origin, used in logs and the status bar
    fn describe(&self) -> String;
}

/// Serves resources from files under a root directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Join `path` onto the root, refusing anything that could escape it.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || path.is_empty() {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl ResourceSource for DirectorySource {
    fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let not_found = || LoadError::NotFound {
            resource: path.to_string(),
        };

        let Some(full) = self.resolve(path) else {
            debug!(resource = path, "rejected path outside the data directory");
            return Err(not_found());
        };

        std::fs::read_to_string(&full).map_err(|err| match err.kind() {
            ErrorKind::NotFound => not_found(),
            _ => LoadError::Io {
                resource: path.to_string(),
                message: err.to_string(),
            },
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Serves resources over HTTP(S) relative to a base URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Each `/`-separated part of `path` becomes one percent-encoded
    /// segment, so `#` and `?` in file names stay part of the path.
    fn url_for(&self, path: &str) -> Result<Url, String> {
        let mut url = Url::parse(&self.base_url).map_err(|err| err.to_string())?;
        url.path_segments_mut()
            .map_err(|()| format!("{} cannot be used as a base URL", self.base_url))?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }
}

impl ResourceSource for HttpSource {
    fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let network = |err: reqwest::Error| LoadError::Network {
            resource: path.to_string(),
            message: err.to_string(),
        };

        let url = self.url_for(path).map_err(|message| LoadError::Network {
            resource: path.to_string(),
            message,
        })?;
        debug!(%url, "GET");
        let response = self.client.get(url).send().map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                resource: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(network)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docmap_testing::http::OneShotServer;
    use tempfile::TempDir;

    fn data_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("dataset")).unwrap();
        std::fs::write(dir.path().join("dataset/a.txt"), "alpha").unwrap();
        dir
    }

    #[test]
    fn test_directory_reads_relative_path() {
        let dir = data_dir();
        let source = DirectorySource::new(dir.path());
        assert_eq!(source.fetch("dataset/a.txt").unwrap(), "alpha");
    }

    #[test]
    fn test_directory_missing_file_is_not_found() {
        let dir = data_dir();
        let source = DirectorySource::new(dir.path());
        assert_eq!(
            source.fetch("dataset/zzz.txt"),
            Err(LoadError::NotFound {
                resource: "dataset/zzz.txt".to_string()
            })
        );
    }

    #[test]
    fn test_directory_rejects_escaping_paths() {
        let dir = data_dir();
        let source = DirectorySource::new(dir.path().join("dataset"));

        for path in ["../dataset/a.txt", "/etc/passwd", ""] {
            assert!(
                matches!(source.fetch(path), Err(LoadError::NotFound { .. })),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn test_directory_unreadable_is_io_error() {
        let dir = data_dir();
        let source = DirectorySource::new(dir.path());
        // A directory cannot be read as a string
        assert!(matches!(source.fetch("dataset"), Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_http_url_join() {
        let source = HttpSource::new("http://example.test/data/");
        let url = |path: &str| source.url_for(path).unwrap().to_string();

        assert_eq!(url("dataset/a.txt"), "http://example.test/data/dataset/a.txt");
        assert_eq!(url("/x.json"), "http://example.test/data/x.json");

        let bare = HttpSource::new("http://example.test");
        assert_eq!(
            bare.url_for("clustering_results.json").unwrap().to_string(),
            "http://example.test/clustering_results.json"
        );
    }

    #[test]
    fn test_http_url_encodes_file_names() {
        let source = HttpSource::new("http://example.test/");
        assert_eq!(
            source.url_for("dataset/notes #2?.txt").unwrap().to_string(),
            "http://example.test/dataset/notes%20%232%3F.txt"
        );
    }

    #[test]
    fn test_http_invalid_base_url_is_network_error() {
        let source = HttpSource::new("not a url");
        assert!(matches!(
            source.fetch("clustering_results.json"),
            Err(LoadError::Network { .. })
        ));
    }

    #[test]
    fn test_http_error_status_is_not_parsed() {
        let server = OneShotServer::respond("500 Internal Server Error", "{\"C1\": oops").unwrap();
        let source = HttpSource::new(server.base_url());

        assert_eq!(
            source.fetch("clustering_results.json"),
            Err(LoadError::Status {
                resource: "clustering_results.json".to_string(),
                status: 500,
            })
        );
        assert_eq!(
            server.request_line().unwrap(),
            "GET /clustering_results.json HTTP/1.1"
        );
    }

    #[test]
    fn test_http_not_found_status() {
        let server = OneShotServer::respond("404 Not Found", "missing").unwrap();
        let source = HttpSource::new(server.base_url());

        assert!(matches!(
            source.fetch("dataset/a.txt"),
            Err(LoadError::Status { status: 404, .. })
        ));
    }

    #[test]
    fn test_http_fetch_requests_encoded_path() {
        let server = OneShotServer::respond("200 OK", "hello").unwrap();
        let source = HttpSource::new(format!("{}/", server.base_url()));

        assert_eq!(source.fetch("dataset/what?#1.txt").unwrap(), "hello");
        assert_eq!(
            server.request_line().unwrap(),
            "GET /dataset/what%3F%231.txt HTTP/1.1"
        );
    }

    #[test]
    fn test_http_unreachable_is_network_error() {
        // Port 9 on loopback has nothing listening in test environments
        let source = HttpSource::new("http://127.0.0.1:9");
        assert!(matches!(
            source.fetch("clustering_results.json"),
            Err(LoadError::Network { .. })
        ));
    }
}
