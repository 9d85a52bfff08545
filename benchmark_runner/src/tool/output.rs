//!
//! The captured output of a successful external command.
//!

///
/// The captured output of a successful external command.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Output {
    /// The standard output bytes.
    pub stdout: Vec<u8>,
    /// The standard error bytes.
    pub stderr: Vec<u8>,
}

impl Output {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self { stdout, stderr }
    }

    ///
    /// Returns the standard output decoded as UTF-8, replacing invalid sequences.
    ///
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(self.stdout.as_slice()).to_string()
    }
}
