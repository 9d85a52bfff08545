//!
//! The external command description.
//!

use std::ffi::OsStr;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

///
/// The external command description.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The executable name or path.
    pub program: String,
    /// The positional arguments.
    pub arguments: Vec<String>,
    /// The working directory. The current one is inherited if unset.
    pub working_directory: Option<PathBuf>,
    /// Whether the command must be run with elevated privileges.
    pub is_privileged: bool,
    /// The hard limit on the process lifetime.
    pub timeout: Duration,
}

impl Command {
    ///
    /// A shortcut constructor.
    ///
    pub fn new<S>(program: S, timeout: Duration) -> Self
    where
        S: Into<String>,
    {
        Self {
            program: program.into(),
            arguments: Vec::new(),
            working_directory: None,
            is_privileged: false,
            timeout,
        }
    }

    ///
    /// Appends an argument.
    ///
    pub fn arg<S>(mut self, argument: S) -> Self
    where
        S: AsRef<OsStr>,
    {
        self.arguments
            .push(argument.as_ref().to_string_lossy().to_string());
        self
    }

    ///
    /// Appends several arguments.
    ///
    pub fn args<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for argument in arguments.into_iter() {
            self = self.arg(argument);
        }
        self
    }

    ///
    /// Sets the working directory.
    ///
    pub fn current_dir(mut self, path: &Path) -> Self {
        self.working_directory = Some(path.to_path_buf());
        self
    }

    ///
    /// Marks the command as requiring elevated privileges.
    ///
    pub fn privileged(mut self) -> Self {
        self.is_privileged = true;
        self
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for argument in self.arguments.iter() {
            write!(f, " {argument}")?;
        }
        Ok(())
    }
}
