//!
//! The benchmark discovery.
//!

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::config::Config;

///
/// The benchmark directory.
///
#[derive(Debug, Clone)]
pub struct TestsDirectory {
    /// The directory path.
    pub path: PathBuf,
    /// The support source names, which are never benchmarks themselves.
    pub support_sources: Vec<String>,
    /// The recognized benchmark extensions.
    pub extensions: Vec<String>,
}

impl TestsDirectory {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.benchmark_directory.clone(),
            support_sources: config.support_sources.clone(),
            extensions: vec![
                config.source_extension.clone(),
                config.composite_extension.clone(),
            ],
        }
    }

    ///
    /// Returns the benchmark files whose names start with any of the prefixes.
    ///
    /// An empty prefix list matches everything. Directories are never returned, as
    /// composite benchmarks reference shim component directories by name only.
    ///
    pub fn discover(&self, prefixes: &[String]) -> anyhow::Result<Vec<PathBuf>> {
        let default_prefixes = [String::new()];
        let prefixes = if prefixes.is_empty() {
            &default_prefixes[..]
        } else {
            prefixes
        };

        let directory = glob::Pattern::escape(self.path.to_string_lossy().as_ref());
        let mut paths = BTreeSet::new();
        for prefix in prefixes.iter() {
            let pattern = format!("{directory}/{}*", glob::Pattern::escape(prefix));
            for path in glob::glob(pattern.as_str())?.filter_map(Result::ok) {
                if !path.is_file() {
                    continue;
                }

                let file_name = match path.file_name() {
                    Some(file_name) => file_name.to_string_lossy().to_string(),
                    None => continue,
                };
                if self.support_sources.contains(&file_name) {
                    continue;
                }

                let is_recognized = path
                    .extension()
                    .map(|extension| {
                        self.extensions
                            .iter()
                            .any(|recognized| extension == recognized.as_str())
                    })
                    .unwrap_or_default();
                if !is_recognized {
                    continue;
                }

                paths.insert(path);
            }
        }

        Ok(paths.into_iter().collect())
    }
}
