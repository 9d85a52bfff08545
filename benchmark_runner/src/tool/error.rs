//!
//! The external tool invocation error.
//!

use std::time::Duration;

///
/// The external tool invocation error.
///
/// Callers treat every variant as a plain failure. The variants only make the console
/// diagnostics more precise.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The executable is not available.
    #[error("The `{program}` executable not found in ${{PATH}}: {error}")]
    NotFound {
        /// The executable name.
        program: String,
        /// The lookup error.
        error: which::Error,
    },
    /// The process could not be started.
    #[error("`{program}` subprocess spawning error: {error}")]
    Spawning {
        /// The executable name.
        program: String,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The process status could not be queried.
    #[error("`{program}` subprocess waiting error: {error}")]
    Waiting {
        /// The executable name.
        program: String,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The process outlived its deadline and was killed.
    #[error("`{program}` timed out after {}s", .timeout.as_secs_f64())]
    Timeout {
        /// The executable name.
        program: String,
        /// The exceeded deadline.
        timeout: Duration,
    },
    /// The process exited unsuccessfully.
    #[error("`{program}` exited with {}", .code.map(|code| format!("code {code}")).unwrap_or_else(|| "a signal".to_owned()))]
    ExitStatus {
        /// The executable name.
        program: String,
        /// The exit code, if the process was not terminated by a signal.
        code: Option<i32>,
        /// The captured standard output.
        stdout: Vec<u8>,
        /// The captured standard error.
        stderr: Vec<u8>,
    },
}

impl Error {
    ///
    /// Returns the captured output of a failed process, if there is any.
    ///
    pub fn diagnostics(&self) -> Option<String> {
        match self {
            Self::ExitStatus { stdout, stderr, .. } => {
                let mut diagnostics = String::new();
                for stream in [stderr, stdout] {
                    let stream = String::from_utf8_lossy(stream.as_slice());
                    let stream = stream.trim_end();
                    if stream.is_empty() {
                        continue;
                    }
                    if !diagnostics.is_empty() {
                        diagnostics.push('\n');
                    }
                    diagnostics.push_str(stream);
                }
                if diagnostics.is_empty() {
                    None
                } else {
                    Some(diagnostics)
                }
            }
            _ => None,
        }
    }
}
