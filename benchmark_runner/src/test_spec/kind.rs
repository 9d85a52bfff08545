//!
//! The benchmark kind.
//!

///
/// The benchmark kind.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A single compiled source, measured natively and in the sandbox.
    Simple,
    /// A chain of sandbox modules and shim components, measured in the sandbox only.
    Composite,
}
