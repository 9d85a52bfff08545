//!
//! The external shim component repository.
//!

use std::path::PathBuf;

///
/// The external shim component repository.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Repository {
    /// The upstream URL.
    pub url: String,
    /// The tracked branch.
    pub branch: String,
    /// The local working copy.
    pub working_copy: PathBuf,
}

impl Default for Repository {
    fn default() -> Self {
        Self {
            url: "https://github.com/Lind-Project/lind-wasm-example-grates.git".to_owned(),
            branch: "main".to_owned(),
            working_copy: PathBuf::from("tests/lind-wasm-example-grates"),
        }
    }
}
