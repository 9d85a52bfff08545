//!
//! The benchmark runner executable.
//!

pub(crate) mod arguments;

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let arguments = Arguments::parse();
    let exit_code = match main_inner(arguments) {
        Ok(()) => benchmark_runner::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            benchmark_runner::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;

    let mut config = match arguments.config_path {
        Some(ref path) => benchmark_runner::Config::try_from(path.as_path())?,
        None => benchmark_runner::Config::default(),
    };
    if let Some(timeout) = arguments.timeout {
        config.timeout = timeout;
    }
    let config = config.resolve()?;

    if !arguments.quiet {
        println!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
    }

    let invoker: Arc<dyn benchmark_runner::ToolInvoker> = Arc::new(
        benchmark_runner::ProcessInvoker::new(config.tools.elevation.clone()),
    );
    let summary = benchmark_runner::Summary::new(arguments.verbose, arguments.quiet);
    let mut runner = benchmark_runner::BenchmarkRunner::new(config, invoker, summary);

    let run_time_start = Instant::now();
    let mut results = benchmark_runner::ResultTable::default();
    runner.run(arguments.prefixes.as_slice(), &mut results)?;

    let summary = runner.into_summary();
    if !arguments.quiet {
        print!("{summary}");
        println!(
            "    {} running benchmarks in {}m{:02}s",
            "Finished".bright_green().bold(),
            run_time_start.elapsed().as_secs() / 60,
            run_time_start.elapsed().as_secs() % 60,
        );
    }

    match arguments.output_path {
        Some(path) => {
            benchmark_runner::Output::json(&results).write_to_file(path.as_path())?;
            if !arguments.quiet {
                println!(
                    "     {} results to {path:?}",
                    "Written".bright_green().bold()
                );
            }
        }
        None => print!("{}", benchmark_runner::Output::table(&results)),
    }

    Ok(())
}
