use std::fmt;

/// Failure to retrieve or parse one of the explorer's resources
///
/// Every variant names the resource path that was requested. The error is
/// `Clone` so it can travel inside UI events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Transport failure (connection refused, timeout, ...)
    Network { resource: String, message: String },

    /// Server answered with a non-success status
    Status { resource: String, status: u16 },

    /// Resource does not exist in the content store
    NotFound { resource: String },

    /// Local read failed for a reason other than absence
    Io { resource: String, message: String },

    /// Body was retrieved but is not the expected shape
    Malformed { resource: String, message: String },
}

impl LoadError {
    pub fn resource(&self) -> &str {
        match self {
            LoadError::Network { resource, .. }
            | LoadError::Status { resource, .. }
            | LoadError::NotFound { resource }
            | LoadError::Io { resource, .. }
            | LoadError::Malformed { resource, .. } => resource,
        }
    }

    pub fn malformed(resource: impl Into<String>, err: impl fmt::Display) -> Self {
        LoadError::Malformed {
            resource: resource.into(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network { resource, message } => {
                write!(f, "Network error fetching {}: {}", resource, message)
            }
            LoadError::Status { resource, status } => {
                write!(f, "Fetching {} failed with HTTP status {}", resource, status)
            }
            LoadError::NotFound { resource } => write!(f, "Resource not found: {}", resource),
            LoadError::Io { resource, message } => {
                write!(f, "IO error reading {}: {}", resource, message)
            }
            LoadError::Malformed { resource, message } => {
                write!(f, "Malformed payload in {}: {}", resource, message)
            }
        }
    }
}

impl std::error::Error for LoadError {}
