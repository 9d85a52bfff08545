//!
//! The benchmark failure.
//!

use crate::platform::Platform;

///
/// The benchmark failure.
///
/// None of these abort the run. The benchmark or the invocation is skipped, and its
/// cells stay unmeasured in the report.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A shim component could not be fetched or found.
    #[error("{0}")]
    Resolution(crate::resolver::error::Error),
    /// An artifact could not be built.
    #[error("{0}")]
    Compilation(crate::compiler::error::Error),
    /// An artifact could not be run to a successful exit.
    #[error("{0}")]
    Execution(#[from] crate::runner::error::Error),
    /// The benchmark output contained no usable measurements.
    #[error("{platform} output error: {error}")]
    MalformedOutput {
        /// The measured platform.
        platform: Platform,
        /// The parsing error.
        error: crate::results::error::Error,
    },
}

///
/// The failure kind.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    /// See [`Error::Resolution`].
    Resolution,
    /// See [`Error::Compilation`].
    Compilation,
    /// See [`Error::Execution`].
    Execution,
    /// See [`Error::MalformedOutput`].
    MalformedOutput,
}

impl Error {
    ///
    /// Returns the failure kind.
    ///
    pub fn kind(&self) -> Kind {
        match self {
            Self::Resolution(_) => Kind::Resolution,
            Self::Compilation(_) => Kind::Compilation,
            Self::Execution(_) => Kind::Execution,
            Self::MalformedOutput { .. } => Kind::MalformedOutput,
        }
    }

    ///
    /// Returns the captured output of the failed external command, if there is any.
    ///
    pub fn diagnostics(&self) -> Option<String> {
        let tool_error = match self {
            Self::Resolution(error) => error.tool_error(),
            Self::Compilation(error) => error.tool_error(),
            Self::Execution(error) => error.tool_error(),
            Self::MalformedOutput { .. } => None,
        };
        tool_error.and_then(|error| error.diagnostics())
    }
}

impl From<crate::compiler::error::Error> for Error {
    fn from(error: crate::compiler::error::Error) -> Self {
        match error {
            crate::compiler::error::Error::Resolution(error) => Self::Resolution(error),
            error => Self::Compilation(error),
        }
    }
}

impl From<crate::resolver::error::Error> for Error {
    fn from(error: crate::resolver::error::Error) -> Self {
        Self::Resolution(error)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolution => write!(f, "resolution"),
            Self::Compilation => write!(f, "compilation"),
            Self::Execution => write!(f, "execution"),
            Self::MalformedOutput => write!(f, "malformed output"),
        }
    }
}
