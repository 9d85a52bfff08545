//!
//! The benchmark output parsing error.
//!

///
/// The benchmark output parsing error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A record has a non-integer parameter.
    #[error("Line {line}: parameter `{value}` is not an integer")]
    Param {
        /// The 1-based line number.
        line: usize,
        /// The offending value.
        value: String,
    },
    /// The output contains no records.
    #[error("No measurement records among {lines} output lines")]
    NoRecords {
        /// The number of output lines.
        lines: usize,
    },
}
