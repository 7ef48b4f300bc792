use std::fmt;
use std::path::PathBuf;

/// Errors raised while deriving routes.
///
/// Discovery and namespace errors abort the whole registration call. Methods
/// without an HTTP marker and unsupported route options are not errors; they
/// are skipped where they occur.
#[derive(Debug)]
pub enum RouteError {
    /// The directory handed to a directory registration does not exist.
    DirectoryNotFound {
        /// Directory as supplied by the caller
        path: PathBuf,
    },
    /// No declared source root contains the directory.
    NamespaceResolution {
        /// Canonical directory that could not be mapped
        path: PathBuf,
    },
    /// A controller was named (or discovered) that the catalog does not describe.
    ControllerNotFound {
        /// Fully-qualified controller name
        class: String,
    },
    /// Options or configuration values that cannot be coerced.
    Configuration {
        /// Option or setting that failed
        key: String,
        /// What was wrong with it
        message: String,
    },
    /// A descriptor manifest could not be parsed.
    Catalog {
        /// Manifest file
        path: PathBuf,
        /// Parser message
        message: String,
    },
    /// Filesystem failure during discovery.
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

impl RouteError {
    pub(crate) fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        RouteError::Configuration {
            key: key.into(),
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RouteError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::DirectoryNotFound { path } => {
                write!(f, "controller directory not found: {}", path.display())
            }
            RouteError::NamespaceResolution { path } => write!(
                f,
                "unable to determine namespace for directory: {} \
                (no declared source root contains it)",
                path.display()
            ),
            RouteError::ControllerNotFound { class } => {
                write!(f, "controller '{class}' is not described in the catalog")
            }
            RouteError::Configuration { key, message } => {
                write!(f, "invalid option '{key}': {message}")
            }
            RouteError::Catalog { path, message } => {
                write!(f, "failed to load controller manifest {}: {message}", path.display())
            }
            RouteError::Io { path, source } => {
                write!(f, "I/O error on {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RouteError>;
