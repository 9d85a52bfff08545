//!
//! The benchmark run summary.
//!

pub mod element;


use colored::Colorize;

use crate::error::Kind;

use self::element::outcome::Outcome;
use self::element::Element;

///
/// The benchmark run summary.
///
#[derive(Debug)]
pub struct Summary {
    /// The summary elements.
    elements: Vec<Element>,
    /// The output verbosity.
    verbosity: bool,
    /// Whether the output is suppressed.
    quiet: bool,
    /// The fully measured benchmarks counter.
    measured: usize,
    /// The partially measured benchmarks counter.
    partial: usize,
    /// The skipped benchmarks counter.
    skipped: usize,
    /// The resolution failures counter.
    resolution_failures: usize,
    /// The compilation failures counter.
    compilation_failures: usize,
    /// The execution failures counter.
    execution_failures: usize,
    /// The malformed outputs counter.
    malformed_outputs: usize,
}

impl Summary {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(verbosity: bool, quiet: bool) -> Self {
        Self {
            elements: Vec::new(),
            verbosity,
            quiet,
            measured: 0,
            partial: 0,
            skipped: 0,
            resolution_failures: 0,
            compilation_failures: 0,
            execution_failures: 0,
            malformed_outputs: 0,
        }
    }

    ///
    /// Whether progress output is suppressed.
    ///
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    ///
    /// Returns the benchmark elements in completion order.
    ///
    pub fn elements(&self) -> &[Element] {
        self.elements.as_slice()
    }

    ///
    /// Returns the fully measured benchmarks count.
    ///
    pub fn measured(&self) -> usize {
        self.measured
    }

    ///
    /// Returns the partially measured benchmarks count.
    ///
    pub fn partial(&self) -> usize {
        self.partial
    }

    ///
    /// Returns the skipped benchmarks count.
    ///
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    ///
    /// Returns the failures count of the kind.
    ///
    pub fn failures(&self, kind: Kind) -> usize {
        match kind {
            Kind::Resolution => self.resolution_failures,
            Kind::Compilation => self.compilation_failures,
            Kind::Execution => self.execution_failures,
            Kind::MalformedOutput => self.malformed_outputs,
        }
    }

    ///
    /// Adds a benchmark outcome, printing it.
    ///
    pub fn push(&mut self, name: String, outcome: Outcome) {
        let element = Element::new(name, outcome);
        if !self.quiet {
            if let Some(string) = element.print(self.verbosity) {
                println!("{string}");
            }
        }

        match element.outcome {
            Outcome::Measured { .. } => self.measured += 1,
            Outcome::Partial { .. } => self.partial += 1,
            Outcome::Skipped { .. } => self.skipped += 1,
        }
        for failure in element.outcome.failures() {
            match failure.kind() {
                Kind::Resolution => self.resolution_failures += 1,
                Kind::Compilation => self.compilation_failures += 1,
                Kind::Execution => self.execution_failures += 1,
                Kind::MalformedOutput => self.malformed_outputs += 1,
            }
        }

        self.elements.push(element);
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quiet {
            return Ok(());
        }

        writeln!(
            f,
            "╔═══════════════════╡ BENCHMARK RUN ╞══════════════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                              ║"
        )?;
        for (name, count, color) in [
            ("MEASURED", self.measured, colored::Color::Green),
            ("PARTIAL", self.partial, colored::Color::Yellow),
            ("SKIPPED", self.skipped, colored::Color::BrightRed),
        ] {
            writeln!(
                f,
                "║     {:26}{:>26}     ║",
                name.color(color),
                count.to_string().color(color),
            )?;
        }
        writeln!(
            f,
            "║                                                              ║"
        )?;
        for kind in [
            Kind::Resolution,
            Kind::Compilation,
            Kind::Execution,
            Kind::MalformedOutput,
        ] {
            writeln!(
                f,
                "║     {:26}{:>26}     ║",
                format!("{} failures", kind).to_uppercase().bright_black(),
                self.failures(kind).to_string().bright_black(),
            )?;
        }
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;

        Ok(())
    }
}
