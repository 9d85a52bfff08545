//!
//! The scripted tool invoker for unit tests.
//!

use std::sync::Mutex;

use super::command::Command;
use super::error::Error;
use super::output::Output;
use super::ToolInvoker;

///
/// A scripted response.
///
#[derive(Debug, Clone)]
enum Response {
    /// Succeeds with the standard output.
    Success(String),
    /// Exits with a non-zero code.
    Failure,
    /// Exceeds the deadline.
    Timeout,
}

///
/// Records every command and replays scripted responses.
///
/// A rule applies to a command if its pattern is a substring of the command line.
/// The first matching rule wins. Commands without a matching rule succeed with no output.
///
#[derive(Debug, Default)]
pub struct FakeInvoker {
    /// The pattern and response pairs.
    rules: Vec<(String, Response)>,
    /// The invoked commands in order.
    commands: Mutex<Vec<Command>>,
}

impl FakeInvoker {
    ///
    /// Makes matching commands succeed with the given standard output.
    ///
    pub fn respond(mut self, pattern: &str, stdout: &str) -> Self {
        self.rules
            .push((pattern.to_owned(), Response::Success(stdout.to_owned())));
        self
    }

    ///
    /// Makes matching commands exit with a non-zero code.
    ///
    pub fn fail(mut self, pattern: &str) -> Self {
        self.rules.push((pattern.to_owned(), Response::Failure));
        self
    }

    ///
    /// Makes matching commands time out.
    ///
    pub fn time_out(mut self, pattern: &str) -> Self {
        self.rules.push((pattern.to_owned(), Response::Timeout));
        self
    }

    ///
    /// Returns the invoked commands.
    ///
    pub fn commands(&self) -> Vec<Command> {
        self.commands.lock().expect("Sync").clone()
    }

    ///
    /// Returns the invoked command lines.
    ///
    pub fn command_lines(&self) -> Vec<String> {
        self.commands()
            .iter()
            .map(|command| command.to_string())
            .collect()
    }
}

impl ToolInvoker for FakeInvoker {
    fn invoke(&self, command: &Command) -> Result<Output, Error> {
        self.commands.lock().expect("Sync").push(command.clone());

        let line = command.to_string();
        let response = self
            .rules
            .iter()
            .find(|(pattern, _)| line.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| Response::Success(String::new()));

        match response {
            Response::Success(stdout) => Ok(Output::new(stdout.into_bytes(), Vec::new())),
            Response::Failure => Err(Error::ExitStatus {
                program: command.program.clone(),
                code: Some(1),
                stdout: Vec::new(),
                stderr: b"scripted failure".to_vec(),
            }),
            Response::Timeout => Err(Error::Timeout {
                program: command.program.clone(),
                timeout: command.timeout,
            }),
        }
    }
}
