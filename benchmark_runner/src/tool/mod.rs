//!
//! The external tool invocation capability.
//!

pub mod command;
pub mod error;
#[cfg(test)]
pub mod fake;
pub mod output;
pub mod process;


use self::command::Command;
use self::error::Error;
use self::output::Output;

///
/// Runs external commands on behalf of the compiler dispatcher, the runner, and the resolver.
///
/// Every external process the harness starts goes through this trait, so that the exact
/// command lines can be inspected and replayed in tests.
///
pub trait ToolInvoker {
    ///
    /// Runs the command to completion, capturing its output.
    ///
    /// Non-zero exit, timeout, and spawning failures are all errors.
    ///
    fn invoke(&self, command: &Command) -> Result<Output, Error>;
}
