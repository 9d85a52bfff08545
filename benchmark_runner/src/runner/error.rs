//!
//! The benchmark execution error.
//!

use crate::platform::Platform;

///
/// The benchmark execution error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The benchmark could not be run to a successful exit.
    #[error("{platform} run error: {error}")]
    Tool {
        /// The measured platform.
        platform: Platform,
        /// The tool error.
        error: crate::tool::error::Error,
    },
    /// The sandbox was asked to boot nothing.
    #[error("{platform} run error: no modules to boot")]
    NoModules {
        /// The measured platform.
        platform: Platform,
    },
}

impl Error {
    ///
    /// Returns the underlying tool error, if there is one.
    ///
    pub fn tool_error(&self) -> Option<&crate::tool::error::Error> {
        match self {
            Self::Tool { error, .. } => Some(error),
            Self::NoModules { .. } => None,
        }
    }
}
