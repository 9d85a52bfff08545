//!
//! The benchmark outcome.
//!

use crate::error::Error;
use crate::platform::Platform;

///
/// The benchmark outcome.
///
#[derive(Debug)]
pub enum Outcome {
    /// Every invocation has been measured.
    Measured {
        /// The measured platforms.
        platforms: Vec<Platform>,
    },
    /// Some invocations have been measured.
    Partial {
        /// The measured platforms.
        platforms: Vec<Platform>,
        /// The failures of the other invocations.
        failures: Vec<Error>,
    },
    /// Nothing has been measured.
    Skipped {
        /// The failures.
        failures: Vec<Error>,
    },
}

impl Outcome {
    ///
    /// Classifies the benchmark by its measured platforms and failures.
    ///
    pub fn new(platforms: Vec<Platform>, failures: Vec<Error>) -> Self {
        if failures.is_empty() {
            Self::Measured { platforms }
        } else if platforms.is_empty() {
            Self::Skipped { failures }
        } else {
            Self::Partial {
                platforms,
                failures,
            }
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn skipped(error: Error) -> Self {
        Self::Skipped {
            failures: vec![error],
        }
    }

    ///
    /// Returns the failures.
    ///
    pub fn failures(&self) -> &[Error] {
        match self {
            Self::Measured { .. } => &[],
            Self::Partial { failures, .. } => failures.as_slice(),
            Self::Skipped { failures } => failures.as_slice(),
        }
    }
}
