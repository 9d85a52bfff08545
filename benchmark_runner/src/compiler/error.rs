//!
//! The benchmark compilation error.
//!

use std::path::PathBuf;

///
/// The benchmark compilation error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The benchmark entry could not be parsed.
    #[error(transparent)]
    Definition(#[from] crate::test_spec::error::Error),
    /// The operation does not apply to the benchmark kind.
    #[error("Benchmark `{name}` is not a simple benchmark")]
    NotSimple {
        /// The benchmark name.
        name: String,
    },
    /// The source is outside of the benchmark directory.
    #[error("Source {path:?} is outside of the benchmark directory {base:?}")]
    OutsideBenchmarkDirectory {
        /// The source path.
        path: PathBuf,
        /// The benchmark directory.
        base: PathBuf,
    },
    /// The component directory has no name.
    #[error("Component directory {path:?} has no name")]
    ComponentName {
        /// The component directory.
        path: PathBuf,
    },
    /// The output directory could not be created.
    #[error("Directory {path:?} creating error: {error}")]
    Directory {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The toolchain failed.
    #[error("{path:?} compiling error: {error}")]
    Toolchain {
        /// The compiled source or component.
        path: PathBuf,
        /// The toolchain error.
        error: crate::tool::error::Error,
    },
    /// A shim component of a composite benchmark could not be resolved.
    #[error(transparent)]
    Resolution(#[from] crate::resolver::error::Error),
}

impl Error {
    ///
    /// Returns the underlying tool error, if there is one.
    ///
    pub fn tool_error(&self) -> Option<&crate::tool::error::Error> {
        match self {
            Self::Toolchain { error, .. } => Some(error),
            Self::Resolution(error) => error.tool_error(),
            _ => None,
        }
    }
}
