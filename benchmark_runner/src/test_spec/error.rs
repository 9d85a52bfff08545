//!
//! The benchmark definition error.
//!

use std::path::PathBuf;

///
/// The benchmark definition error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The entry has no usable name.
    #[error("Benchmark {path:?} has no name")]
    Name {
        /// The entry path.
        path: PathBuf,
    },
    /// The entry is neither a source nor a composite marker.
    #[error("Benchmark {path:?} has unsupported extension `{extension}`")]
    Extension {
        /// The entry path.
        path: PathBuf,
        /// The unsupported extension.
        extension: String,
    },
    /// A composite name contains an empty part, e.g. `a..b`.
    #[error("Composite benchmark {path:?} has an empty part")]
    EmptyPart {
        /// The entry path.
        path: PathBuf,
    },
}
