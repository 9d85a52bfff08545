//!
//! The benchmark runner library.
//!

pub(crate) mod compiler;
pub(crate) mod config;
pub(crate) mod discovery;
pub(crate) mod error;
pub(crate) mod output;
pub(crate) mod platform;
pub(crate) mod resolver;
pub(crate) mod results;
pub(crate) mod runner;
pub(crate) mod summary;
pub(crate) mod test_spec;
pub(crate) mod tool;

#[cfg(test)]
mod tests;

pub use self::config::repository::Repository;
pub use self::config::tools::Tools;
pub use self::config::Config;
pub use self::discovery::TestsDirectory;
pub use self::error::Error;
pub use self::error::Kind as FailureKind;
pub use self::output::table::format_ratio;
pub use self::output::Output;
pub use self::platform::Platform;
pub use self::results::measurement::Measurement;
pub use self::results::record::Record;
pub use self::results::ResultTable;
pub use self::summary::Summary;
pub use self::test_spec::TestSpec;
pub use self::tool::command::Command;
pub use self::tool::process::ProcessInvoker;
pub use self::tool::ToolInvoker;

use std::path::Path;
use std::sync::Arc;

use colored::Colorize;

use crate::compiler::Dispatcher;
use crate::resolver::Resolver;
use crate::runner::Runner;
use crate::summary::element::outcome::Outcome;
use crate::test_spec::kind::Kind;

/// The success exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;

///
/// The benchmark runner.
///
/// Runs the discovered benchmarks one by one. A benchmark is compiled, executed, and
/// absorbed into the results table before the next one starts.
///
pub struct BenchmarkRunner {
    /// The configuration.
    config: Arc<Config>,
    /// The benchmark directory.
    tests_directory: TestsDirectory,
    /// The shim component resolver.
    resolver: Resolver,
    /// The compiler dispatcher.
    dispatcher: Dispatcher,
    /// The execution runner.
    runner: Runner,
    /// The summary.
    summary: Summary,
}

impl BenchmarkRunner {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: Config, invoker: Arc<dyn ToolInvoker>, summary: Summary) -> Self {
        let quiet = summary.is_quiet();
        let config = Arc::new(config);
        Self {
            tests_directory: TestsDirectory::new(&config),
            resolver: Resolver::new(invoker.clone(), &config, quiet),
            dispatcher: Dispatcher::new(invoker.clone(), config.clone(), quiet),
            runner: Runner::new(invoker, config.clone(), quiet),
            config,
            summary,
        }
    }

    ///
    /// Runs the benchmarks matching any of the prefixes, or all of them if there are none.
    ///
    /// Only a failing discovery aborts the run. Benchmark failures are recorded in the
    /// summary.
    ///
    pub fn run(&mut self, prefixes: &[String], results: &mut ResultTable) -> anyhow::Result<()> {
        let paths = self.tests_directory.discover(prefixes)?;
        if !self.summary.is_quiet() {
            println!(
                "     {} {} benchmarks in {:?}",
                "Found".bright_green().bold(),
                paths.len(),
                self.config.benchmark_directory,
            );
        }

        for path in paths.into_iter() {
            self.run_test(path.as_path(), results);
        }
        Ok(())
    }

    ///
    /// Runs a single benchmark.
    ///
    pub fn run_test(&mut self, path: &Path, results: &mut ResultTable) {
        let spec = match TestSpec::new(path, &self.config) {
            Ok(spec) => spec,
            Err(error) => {
                let name = path.to_string_lossy().to_string();
                let error = Error::from(crate::compiler::error::Error::from(error));
                self.summary.push(name, Outcome::skipped(error));
                return;
            }
        };

        if !self.summary.is_quiet() {
            println!("{:>12} {}", "Benchmarking".bright_green().bold(), spec.name);
        }
        let outcome = match spec.kind {
            Kind::Simple => self.run_simple(&spec, results),
            Kind::Composite => self.run_composite(&spec, results),
        };
        self.summary.push(spec.name, outcome);
    }

    ///
    /// Consumes the runner, returning the summary.
    ///
    pub fn into_summary(self) -> Summary {
        self.summary
    }

    ///
    /// Builds both targets first, then measures the sandboxed and the native builds.
    ///
    fn run_simple(&mut self, spec: &TestSpec, results: &mut ResultTable) -> Outcome {
        let artifacts = self.dispatcher.compile_native(spec).and_then(|native| {
            let sandbox = self.dispatcher.compile_sandbox(spec)?;
            Ok((native, sandbox))
        });
        let (native, sandbox) = match artifacts {
            Ok(artifacts) => artifacts,
            Err(error) => return Outcome::skipped(error.into()),
        };

        let mut platforms = Vec::with_capacity(2);
        let mut failures = Vec::new();

        let output = self
            .runner
            .run_sandboxed(&[sandbox.path], Platform::Lind);
        Self::measure(results, Platform::Lind, output, &mut platforms, &mut failures);

        let output = self.runner.run_native(native.path.as_path());
        Self::measure(results, Platform::Linux, output, &mut platforms, &mut failures);

        Outcome::new(platforms, failures)
    }

    ///
    /// Builds every part, then boots them together.
    ///
    fn run_composite(&mut self, spec: &TestSpec, results: &mut ResultTable) -> Outcome {
        let artifacts = match self
            .dispatcher
            .compile_composite(spec, &mut self.resolver)
        {
            Ok(artifacts) => artifacts,
            Err(error) => return Outcome::skipped(error.into()),
        };
        let paths = artifacts
            .into_iter()
            .map(|artifact| artifact.path)
            .collect::<Vec<_>>();

        let mut platforms = Vec::with_capacity(1);
        let mut failures = Vec::new();

        let output = self.runner.run_sandboxed(paths.as_slice(), Platform::Grate);
        Self::measure(results, Platform::Grate, output, &mut platforms, &mut failures);

        Outcome::new(platforms, failures)
    }

    ///
    /// Absorbs the output of a single invocation into the platform column.
    ///
    fn measure(
        results: &mut ResultTable,
        platform: Platform,
        output: Result<String, crate::runner::error::Error>,
        platforms: &mut Vec<Platform>,
        failures: &mut Vec<Error>,
    ) {
        let absorbed = output.map_err(Error::from).and_then(|output| {
            results
                .absorb(output.as_str(), platform)
                .map_err(|error| Error::MalformedOutput { platform, error })
        });
        match absorbed {
            Ok(_) => platforms.push(platform),
            Err(error) => failures.push(error),
        }
    }
}
