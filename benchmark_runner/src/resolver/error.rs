//!
//! The shim component resolution error.
//!

use std::path::PathBuf;

///
/// The shim component resolution error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The working copy parent directory could not be created.
    #[error("Directory {path:?} creating error: {error}")]
    Directory {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The repository could not be cloned.
    #[error("Component `{component}` repository cloning error: {error}")]
    Cloning {
        /// The requested component.
        component: String,
        /// The version control error.
        error: crate::tool::error::Error,
    },
    /// The sparse selection could not be read or updated.
    #[error("Component `{component}` sparse selection error: {error}")]
    Selecting {
        /// The requested component.
        component: String,
        /// The version control error.
        error: crate::tool::error::Error,
    },
    /// The working copy could not be brought up to date.
    #[error("Component `{component}` working copy updating error: {error}")]
    Updating {
        /// The requested component.
        component: String,
        /// The version control error.
        error: crate::tool::error::Error,
    },
    /// The component is present in neither location.
    #[error("Component `{component}` not found in {searched:?}")]
    NotFound {
        /// The requested component.
        component: String,
        /// The searched directories.
        searched: Vec<PathBuf>,
    },
}

impl Error {
    ///
    /// Returns the underlying tool error, if there is one.
    ///
    pub fn tool_error(&self) -> Option<&crate::tool::error::Error> {
        match self {
            Self::Cloning { error, .. } => Some(error),
            Self::Selecting { error, .. } => Some(error),
            Self::Updating { error, .. } => Some(error),
            Self::Directory { .. } | Self::NotFound { .. } => None,
        }
    }
}
