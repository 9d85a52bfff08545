//!
//! The operating system process invoker.
//!

use std::io::Read;
use std::os::unix::process::CommandExt;
use std::process::Child;
use std::process::Stdio;
use std::sync::mpsc;
use std::time::Duration;
use std::time::Instant;

use super::command::Command;
use super::error::Error;
use super::output::Output;
use super::ToolInvoker;

///
/// Spawns real operating system processes with a hard deadline.
///
/// Every process leads its own process group, and the deadline covers the whole group.
/// Descendants holding the output pipes open past the deadline count as a timeout.
///
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    /// The program prepended to privileged commands, e.g. `sudo`.
    elevation: String,
}

impl ProcessInvoker {
    /// The interval between process status checks.
    const POLL_INTERVAL: Duration = Duration::from_millis(10);

    /// The time the process group gets to exit after `SIGTERM`, before `SIGKILL`.
    const TERMINATION_GRACE: Duration = Duration::from_millis(500);

    ///
    /// A shortcut constructor.
    ///
    pub fn new(elevation: String) -> Self {
        Self { elevation }
    }

    ///
    /// Reads the pipe to the end on a separate thread, sending the bytes when it closes.
    ///
    fn drain<R>(pipe: Option<R>) -> mpsc::Receiver<Vec<u8>>
    where
        R: Read + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        std::thread::spawn(move || {
            let mut buffer = Vec::new();
            if let Some(mut pipe) = pipe {
                let _ = pipe.read_to_end(&mut buffer);
            }
            let _ = sender.send(buffer);
        });
        receiver
    }

    ///
    /// Waits for the pipe to close until the deadline.
    ///
    fn collect(receiver: &mpsc::Receiver<Vec<u8>>, deadline: Instant) -> Option<Vec<u8>> {
        receiver
            .recv_timeout(deadline.saturating_duration_since(Instant::now()))
            .ok()
    }

    ///
    /// Terminates the whole process group of the child.
    ///
    /// `SIGTERM` comes first, since an elevation program relays it to the command it
    /// runs but cannot relay `SIGKILL`.
    ///
    fn terminate(child: &mut Child) {
        let group = -(child.id() as libc::pid_t);
        // SAFETY: `kill` has no memory effects. The group is led by our own child.
        unsafe { libc::kill(group, libc::SIGTERM) };

        let grace = Instant::now() + Self::TERMINATION_GRACE;
        while Instant::now() < grace {
            match child.try_wait() {
                Ok(None) => std::thread::sleep(Self::POLL_INTERVAL),
                Ok(Some(_)) | Err(_) => break,
            }
        }

        // SAFETY: see above.
        unsafe { libc::kill(group, libc::SIGKILL) };
        let _ = child.wait();
    }
}

impl ToolInvoker for ProcessInvoker {
    fn invoke(&self, command: &Command) -> Result<Output, Error> {
        let (program, arguments) = if command.is_privileged {
            let mut arguments = Vec::with_capacity(command.arguments.len() + 1);
            arguments.push(command.program.clone());
            arguments.extend(command.arguments.iter().cloned());
            (self.elevation.clone(), arguments)
        } else {
            (command.program.clone(), command.arguments.clone())
        };

        if let Err(error) = which::which(program.as_str()) {
            return Err(Error::NotFound { program, error });
        }

        let mut process = std::process::Command::new(program.as_str());
        process.args(arguments.iter());
        process.stdin(Stdio::null());
        process.stdout(Stdio::piped());
        process.stderr(Stdio::piped());
        process.process_group(0);
        if let Some(ref working_directory) = command.working_directory {
            process.current_dir(working_directory);
        }

        let mut child = process.spawn().map_err(|error| Error::Spawning {
            program: program.clone(),
            error,
        })?;
        let stdout = Self::drain(child.stdout.take());
        let stderr = Self::drain(child.stderr.take());

        let deadline = Instant::now() + command.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    Self::terminate(&mut child);
                    return Err(Error::Timeout {
                        program,
                        timeout: command.timeout,
                    });
                }
                Ok(None) => std::thread::sleep(Self::POLL_INTERVAL),
                Err(error) => {
                    Self::terminate(&mut child);
                    return Err(Error::Waiting { program, error });
                }
            }
        };

        let (stdout, stderr) = match (
            Self::collect(&stdout, deadline),
            Self::collect(&stderr, deadline),
        ) {
            (Some(stdout), Some(stderr)) => (stdout, stderr),
            _ => {
                Self::terminate(&mut child);
                return Err(Error::Timeout {
                    program,
                    timeout: command.timeout,
                });
            }
        };
        if !status.success() {
            return Err(Error::ExitStatus {
                program,
                code: status.code(),
                stdout,
                stderr,
            });
        }

        Ok(Output::new(stdout, stderr))
    }
}
