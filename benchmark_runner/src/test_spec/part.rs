//!
//! The composite benchmark part.
//!

///
/// The composite benchmark part.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// A plain source in the benchmark directory, named without its extension.
    Source(String),
    /// A shim component directory, named with its tagging suffix.
    Shim(String),
}

impl Part {
    ///
    /// Tags the part by its name suffix.
    ///
    pub fn new(name: &str, shim_suffix: &str) -> Self {
        if name.ends_with(shim_suffix) {
            Self::Shim(name.to_owned())
        } else {
            Self::Source(name.to_owned())
        }
    }

    ///
    /// Returns the part name.
    ///
    pub fn name(&self) -> &str {
        match self {
            Self::Source(name) => name.as_str(),
            Self::Shim(name) => name.as_str(),
        }
    }
}
