//!
//! The benchmark results table.
//!

pub mod error;
pub mod measurement;
pub mod record;
pub mod sample;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use crate::platform::Platform;

use self::error::Error;
use self::measurement::Measurement;
use self::record::Record;
use self::sample::Sample;

///
/// The benchmark results table.
///
/// Maps test names to parameters to per-platform records. It is created empty for each
/// run, filled as benchmarks finish, and reported once at the end.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    /// The records by test name and parameter.
    pub tests: BTreeMap<String, BTreeMap<i64, Record>>,
}

impl ResultTable {
    ///
    /// Writes the measurements from the benchmark output into the platform column.
    ///
    /// Returns the number of records written. A rejected batch leaves the table unchanged.
    ///
    pub fn absorb(&mut self, output: &str, platform: Platform) -> Result<usize, Error> {
        let samples = Sample::parse_batch(output)?;
        let count = samples.len();
        for Sample {
            test,
            param,
            loops,
            average,
        } in samples.into_iter()
        {
            self.tests.entry(test).or_default().entry(param).or_default().set(
                platform,
                Measurement::Reported(average),
                Measurement::Reported(loops),
            );
        }
        Ok(count)
    }

    ///
    /// Returns the record, if it exists.
    ///
    pub fn get(&self, test: &str, param: i64) -> Option<&Record> {
        self.tests.get(test).and_then(|params| params.get(&param))
    }

    ///
    /// Whether the table is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    ///
    /// Returns the number of records.
    ///
    pub fn len(&self) -> usize {
        self.tests.values().map(BTreeMap::len).sum()
    }
}
