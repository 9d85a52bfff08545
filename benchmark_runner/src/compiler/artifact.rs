//!
//! The compiled benchmark artifact.
//!

use std::path::PathBuf;

///
/// The artifact target.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A native executable.
    Native,
    /// A sandbox module compiled from a plain source.
    Sandbox,
    /// A sandbox module built from a shim component.
    SandboxShim,
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Sandbox => write!(f, "sandbox"),
            Self::SandboxShim => write!(f, "sandbox+shim"),
        }
    }
}

///
/// The compiled benchmark artifact.
///
/// Native paths are absolute. Sandbox paths are relative to the sandbox root, since the
/// sandbox boot tool resolves modules against its own root.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// The artifact target.
    pub target: Target,
    /// The artifact path.
    pub path: PathBuf,
}

impl Artifact {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(target: Target, path: PathBuf) -> Self {
        Self { target, path }
    }
}
