//!
//! The benchmark definition.
//!

pub mod error;
pub mod kind;
pub mod part;


use std::path::Path;
use std::path::PathBuf;

use crate::config::Config;

use self::error::Error;
use self::kind::Kind;
use self::part::Part;

///
/// The benchmark definition.
///
/// A simple benchmark is one source file. A composite benchmark is a marker file whose
/// name lists the sandbox modules and shim components to boot together, in order.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSpec {
    /// The name, which is the file name without its extension.
    pub name: String,
    /// The path to the source file or the composite marker.
    pub path: PathBuf,
    /// The benchmark kind.
    pub kind: Kind,
    /// The parts in boot order.
    pub parts: Vec<Part>,
}

impl TestSpec {
    ///
    /// Parses the benchmark entry found in the benchmark directory.
    ///
    pub fn new(path: &Path, config: &Config) -> Result<Self, Error> {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| Error::Name {
                path: path.to_path_buf(),
            })?;
        let extension = path
            .extension()
            .map(|extension| extension.to_string_lossy().to_string())
            .unwrap_or_default();

        if extension == config.source_extension {
            return Ok(Self {
                parts: vec![Part::Source(name.clone())],
                name,
                path: path.to_path_buf(),
                kind: Kind::Simple,
            });
        }

        if extension == config.composite_extension {
            let mut parts = Vec::new();
            for part in name.split(config.composite_delimiter) {
                if part.is_empty() {
                    return Err(Error::EmptyPart {
                        path: path.to_path_buf(),
                    });
                }
                parts.push(Part::new(part, config.shim_suffix.as_str()));
            }
            return Ok(Self {
                name,
                path: path.to_path_buf(),
                kind: Kind::Composite,
                parts,
            });
        }

        Err(Error::Extension {
            path: path.to_path_buf(),
            extension,
        })
    }
}

impl std::fmt::Display for TestSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.to_string_lossy())
    }
}
