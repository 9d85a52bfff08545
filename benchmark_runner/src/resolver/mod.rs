//!
//! The shim component resolver.
//!

pub mod error;


use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;

use crate::config::repository::Repository;
use crate::config::Config;
use crate::tool::command::Command;
use crate::tool::ToolInvoker;

use self::error::Error;

///
/// Makes shim component sources available locally.
///
/// The external repository is cloned without checkout and without blobs, and only the
/// components that are actually needed are added to its cone-mode sparse selection.
/// The selection only ever grows.
///
pub struct Resolver {
    /// The tool invoker.
    invoker: Arc<dyn ToolInvoker>,
    /// The version control client.
    version_control: String,
    /// The external repository.
    repository: Repository,
    /// The benchmark directory used as a fallback location.
    benchmark_directory: PathBuf,
    /// The per-process timeout.
    timeout: Duration,
    /// Whether the sparse selection has been initialized during this run.
    is_sparse_initialized: bool,
    /// Whether progress lines are suppressed.
    quiet: bool,
}

impl Resolver {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(invoker: Arc<dyn ToolInvoker>, config: &Config, quiet: bool) -> Self {
        Self {
            invoker,
            version_control: config.tools.version_control.clone(),
            repository: config.repository.clone(),
            benchmark_directory: config.benchmark_directory.clone(),
            timeout: config.timeout(),
            is_sparse_initialized: false,
            quiet,
        }
    }

    ///
    /// Returns the directory with the component sources, fetching them if necessary.
    ///
    /// The working copy of the external repository is preferred. A same-named directory
    /// in the benchmark directory is used otherwise.
    ///
    pub fn resolve(&mut self, component: &str) -> Result<PathBuf, Error> {
        self.ensure_working_copy(component)?;
        self.select(component)?;
        self.update(component)?;

        let external = self.repository.working_copy.join(component);
        if external.is_dir() {
            return Ok(external);
        }
        let local = self.benchmark_directory.join(component);
        if local.is_dir() {
            return Ok(local);
        }

        Err(Error::NotFound {
            component: component.to_owned(),
            searched: vec![external, local],
        })
    }

    ///
    /// Clones the repository if there is no working copy yet, and initializes the sparse
    /// selection once per run.
    ///
    fn ensure_working_copy(&mut self, component: &str) -> Result<(), Error> {
        if !self.repository.working_copy.exists() {
            if let Some(parent) = self.repository.working_copy.parent() {
                std::fs::create_dir_all(parent).map_err(|error| Error::Directory {
                    path: parent.to_path_buf(),
                    error,
                })?;
            }

            if !self.quiet {
                println!(
                    "    {} {} => {:?}",
                    "Fetching".bright_green().bold(),
                    self.repository.url,
                    self.repository.working_copy,
                );
            }
            let command = Command::new(self.version_control.as_str(), self.timeout)
                .args(["clone", "--filter=blob:none", "--no-checkout"])
                .arg(self.repository.url.as_str())
                .arg(self.repository.working_copy.as_os_str());
            self.invoker
                .invoke(&command)
                .map_err(|error| Error::Cloning {
                    component: component.to_owned(),
                    error,
                })?;
        }

        if !self.is_sparse_initialized {
            let command = self.git().args(["sparse-checkout", "init", "--cone"]);
            self.invoker
                .invoke(&command)
                .map_err(|error| Error::Selecting {
                    component: component.to_owned(),
                    error,
                })?;
            self.is_sparse_initialized = true;
        }

        Ok(())
    }

    ///
    /// Adds the component to the sparse selection, unless it is already there.
    ///
    fn select(&self, component: &str) -> Result<(), Error> {
        let command = self.git().args(["sparse-checkout", "list"]);
        let output = self
            .invoker
            .invoke(&command)
            .map_err(|error| Error::Selecting {
                component: component.to_owned(),
                error,
            })?;
        let mut paths: Vec<String> = output
            .stdout_lossy()
            .lines()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(str::to_owned)
            .collect();
        if paths.iter().any(|path| path == component) {
            return Ok(());
        }

        paths.push(component.to_owned());
        let command = self.git().args(["sparse-checkout", "set"]).args(paths);
        self.invoker
            .invoke(&command)
            .map_err(|error| Error::Selecting {
                component: component.to_owned(),
                error,
            })?;
        Ok(())
    }

    ///
    /// Brings the working copy to the latest state of the tracked branch.
    ///
    fn update(&self, component: &str) -> Result<(), Error> {
        let checkout = self
            .git()
            .arg("checkout")
            .arg(self.repository.branch.as_str());
        let pull = self
            .git()
            .args(["pull", "--ff-only", "origin"])
            .arg(self.repository.branch.as_str());
        for command in [checkout, pull].iter() {
            self.invoker
                .invoke(command)
                .map_err(|error| Error::Updating {
                    component: component.to_owned(),
                    error,
                })?;
        }
        Ok(())
    }

    ///
    /// Returns a version control command bound to the working copy.
    ///
    fn git(&self) -> Command {
        Command::new(self.version_control.as_str(), self.timeout)
            .arg("-C")
            .arg(self.repository.working_copy.as_os_str())
    }
}
