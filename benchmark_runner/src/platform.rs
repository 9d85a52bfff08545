//!
//! The measured platform.
//!

///
/// The measured platform.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Platform {
    /// The native build running directly on the host.
    Linux,
    /// The sandbox module running inside the sandbox.
    Lind,
    /// The composite of sandbox modules and shim components running inside the sandbox.
    Grate,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linux => write!(f, "linux"),
            Self::Lind => write!(f, "lind"),
            Self::Grate => write!(f, "grate"),
        }
    }
}
