//!
//! One line of benchmark output.
//!

use super::error::Error;

///
/// One line of benchmark output.
///
/// The wire format is `<test>\t<param>\t<loops>\t<average>`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// The test name.
    pub test: String,
    /// The test parameter.
    pub param: i64,
    /// The iteration count.
    pub loops: String,
    /// The average time per iteration.
    pub average: String,
}

impl Sample {
    /// The field delimiter.
    pub const DELIMITER: char = '\t';

    ///
    /// Parses a whole output batch.
    ///
    /// Lines of a different shape are skipped. A non-integer parameter rejects the whole
    /// batch, as does a batch without a single record.
    ///
    pub fn parse_batch(output: &str) -> Result<Vec<Self>, Error> {
        let mut samples = Vec::new();
        for (index, line) in output.lines().enumerate() {
            let fields: Vec<&str> = line.split(Self::DELIMITER).map(str::trim).collect();
            let [test, param, loops, average] = fields.as_slice() else {
                continue;
            };
            let param = param.parse::<i64>().map_err(|_| Error::Param {
                line: index + 1,
                value: param.to_string(),
            })?;
            samples.push(Self {
                test: test.to_string(),
                param,
                loops: loops.to_string(),
                average: average.to_string(),
            });
        }

        if samples.is_empty() {
            return Err(Error::NoRecords {
                lines: output.lines().count(),
            });
        }
        Ok(samples)
    }
}
