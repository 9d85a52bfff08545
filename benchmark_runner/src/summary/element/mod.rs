//!
//! The benchmark run summary element.
//!

pub mod outcome;

use colored::Colorize;

use self::outcome::Outcome;

///
/// The benchmark run summary element.
///
#[derive(Debug)]
pub struct Element {
    /// The benchmark name.
    pub name: String,
    /// The benchmark outcome.
    pub outcome: Outcome,
}

impl Element {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, outcome: Outcome) -> Self {
        Self { name, outcome }
    }

    ///
    /// Prints the element.
    ///
    pub fn print(&self, verbosity: bool) -> Option<String> {
        if let Outcome::Measured { .. } = self.outcome {
            if !verbosity {
                return None;
            }
        }

        let outcome = match self.outcome {
            Outcome::Measured { .. } => "MEASURED".green(),
            Outcome::Partial { .. } => "PARTIAL".yellow(),
            Outcome::Skipped { .. } => "SKIPPED".bright_red(),
        };

        let details = match self.outcome {
            Outcome::Measured { ref platforms } | Outcome::Partial { ref platforms, .. } => {
                format!(
                    "({})",
                    platforms
                        .iter()
                        .map(|platform| platform.to_string())
                        .collect::<Vec<String>>()
                        .join(", ")
                )
                .bright_white()
                .to_string()
            }
            Outcome::Skipped { .. } => String::new(),
        };

        let mut string = format!("{:>12} {} {}", outcome, self.name, details);
        for failure in self.outcome.failures() {
            string.push_str(format!("\n{:>12} {failure}", failure.kind().to_string().red()).as_str());
            if !verbosity {
                continue;
            }
            if let Some(diagnostics) = failure.diagnostics() {
                for line in diagnostics.lines() {
                    string.push_str(format!("\n{:>12} {}", "", line.bright_black()).as_str());
                }
            }
        }
        Some(string)
    }
}
