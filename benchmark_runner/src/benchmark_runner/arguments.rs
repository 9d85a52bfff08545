//!
//! The benchmark runner arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark runner arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Runs only benchmarks whose file name starts with any of the specified prefixes.
    pub prefixes: Vec<String>,

    /// Writes the results as JSON to the specified file instead of printing the table.
    #[arg(short, long = "out")]
    pub output_path: Option<PathBuf>,

    /// Prints every benchmark outcome and the output of failed tools.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the progress output. The results are still reported.
    #[arg(short, long)]
    pub quiet: bool,

    /// The JSON configuration file.
    /// Built-in defaults are used if not specified.
    #[arg(long = "config")]
    pub config_path: Option<PathBuf>,

    /// The per-process timeout in seconds, overriding the configuration.
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl Arguments {
    ///
    /// Validates the arguments, checking invariants that are not expressed in the type system.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.verbose && arguments.quiet {
            anyhow::bail!("Verbose and quiet modes are mutually exclusive");
        }
        if arguments.timeout == Some(0) {
            anyhow::bail!("The timeout must be a positive number of seconds");
        }

        Ok(arguments)
    }
}
