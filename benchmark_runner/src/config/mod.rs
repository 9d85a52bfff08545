//!
//! The benchmark runner configuration.
//!

pub mod repository;
pub mod tools;


use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use self::repository::Repository;
use self::tools::Tools;

///
/// The benchmark runner configuration.
///
/// Every field has a default, so a configuration file only needs to list overrides.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The directory with benchmark sources and composite benchmark markers.
    pub benchmark_directory: PathBuf,
    /// The sandbox root, which mirrors the benchmark directory layout for build outputs.
    pub sandbox_root: PathBuf,
    /// The support sources linked into every benchmark, in command line order.
    pub support_sources: Vec<String>,
    /// The extension of single-source benchmarks.
    pub source_extension: String,
    /// The extension of composite benchmark markers.
    pub composite_extension: String,
    /// The extension of sandbox modules produced by the toolchains.
    pub module_extension: String,
    /// The name suffix tagging shim components in composite benchmarks.
    pub shim_suffix: String,
    /// The delimiter between parts of a composite benchmark name.
    pub composite_delimiter: char,
    /// The external tools.
    pub tools: Tools,
    /// The external shim component repository.
    pub repository: Repository,
    /// The per-process timeout in seconds.
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            benchmark_directory: PathBuf::from(Self::DEFAULT_BENCHMARK_DIRECTORY),
            sandbox_root: PathBuf::from(Self::DEFAULT_SANDBOX_ROOT),
            support_sources: vec!["imfs.c".to_owned(), "bench.c".to_owned()],
            source_extension: "c".to_owned(),
            composite_extension: "grate".to_owned(),
            module_extension: "cwasm".to_owned(),
            shim_suffix: "_grate".to_owned(),
            composite_delimiter: '.',
            tools: Tools::default(),
            repository: Repository::default(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// The default benchmark directory.
    pub const DEFAULT_BENCHMARK_DIRECTORY: &'static str = "tests/benchmarks";

    /// The default sandbox root.
    pub const DEFAULT_SANDBOX_ROOT: &'static str = "lindfs";

    /// The default per-process timeout in seconds.
    pub const DEFAULT_TIMEOUT: u64 = 180;

    ///
    /// Makes every directory absolute against the current working directory.
    ///
    /// Native binaries are executed directly by path, so the path must not depend on
    /// the working directory of any later command.
    ///
    pub fn resolve(mut self) -> anyhow::Result<Self> {
        if self.timeout == 0 {
            anyhow::bail!("The per-process timeout must be positive");
        }
        self.benchmark_directory = std::path::absolute(self.benchmark_directory.as_path())
            .map_err(|error| {
                anyhow::anyhow!(
                    "Benchmark directory {:?} resolving error: {error}",
                    self.benchmark_directory
                )
            })?;
        self.sandbox_root =
            std::path::absolute(self.sandbox_root.as_path()).map_err(|error| {
                anyhow::anyhow!("Sandbox root {:?} resolving error: {error}", self.sandbox_root)
            })?;
        self.repository.working_copy = std::path::absolute(self.repository.working_copy.as_path())
            .map_err(|error| {
                anyhow::anyhow!(
                    "Repository working copy {:?} resolving error: {error}",
                    self.repository.working_copy
                )
            })?;
        Ok(self)
    }

    ///
    /// Returns the per-process timeout.
    ///
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    ///
    /// Returns the support source paths inside the benchmark directory.
    ///
    pub fn support_source_paths(&self) -> Vec<PathBuf> {
        self.support_sources
            .iter()
            .map(|name| self.benchmark_directory.join(name))
            .collect()
    }
}

impl TryFrom<&Path> for Config {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Config file {path:?} reading error: {error}"))?;
        let config: Self = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Config file {path:?} parsing error: {error}"))?;
        Ok(config)
    }
}
