//!
//! The benchmark execution runner.
//!

pub mod error;


use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;

use crate::config::Config;
use crate::platform::Platform;
use crate::tool::command::Command;
use crate::tool::ToolInvoker;

use self::error::Error;

///
/// Runs compiled benchmarks and captures their measurement stream.
///
pub struct Runner {
    /// The tool invoker.
    invoker: Arc<dyn ToolInvoker>,
    /// The configuration.
    config: Arc<Config>,
    /// Whether progress lines are suppressed.
    quiet: bool,
}

impl Runner {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(invoker: Arc<dyn ToolInvoker>, config: Arc<Config>, quiet: bool) -> Self {
        Self {
            invoker,
            config,
            quiet,
        }
    }

    ///
    /// Runs a native executable directly.
    ///
    pub fn run_native(&self, path: &Path) -> Result<String, Error> {
        self.print_running(Platform::Linux, path.to_string_lossy().as_ref());
        let command = Command::new(path.to_string_lossy(), self.config.timeout());
        let output = self
            .invoker
            .invoke(&command)
            .map_err(|error| Error::Tool {
                platform: Platform::Linux,
                error,
            })?;
        Ok(output.stdout_lossy())
    }

    ///
    /// Boots the sandbox with the modules in the given order, with elevated privileges.
    ///
    /// The module paths are relative to the sandbox root.
    ///
    pub fn run_sandboxed(&self, paths: &[PathBuf], platform: Platform) -> Result<String, Error> {
        if paths.is_empty() {
            return Err(Error::NoModules { platform });
        }

        let modules = paths
            .iter()
            .map(|path| path.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        self.print_running(platform, modules.as_str());
        let command = Command::new(self.config.tools.sandbox_boot.as_str(), self.config.timeout())
            .args(paths)
            .privileged();
        let output = self
            .invoker
            .invoke(&command)
            .map_err(|error| Error::Tool { platform, error })?;
        Ok(output.stdout_lossy())
    }

    ///
    /// Prints the execution progress line.
    ///
    fn print_running(&self, platform: Platform, what: &str) {
        if self.quiet {
            return;
        }
        println!(
            "     {} {what} ({platform})",
            "Running".bright_green().bold()
        );
    }
}
