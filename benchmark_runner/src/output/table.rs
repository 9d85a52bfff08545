//!
//! The console comparison table.
//!

use itertools::Itertools;

use crate::results::measurement::Measurement;
use crate::results::ResultTable;

///
/// The console comparison table.
///
/// Sandboxed measurements are annotated with their ratio to the native baseline.
///
#[derive(Default)]
pub struct Table {
    /// The rendered table.
    pub content: String,
}

impl Table {
    /// The column headers.
    pub const HEADERS: [&'static str; 6] = [
        "TEST",
        "PARAM",
        "LINUX (ns)",
        "LIND (ns)",
        "GRATE (ns)",
        "ITERATIONS",
    ];

    /// The gap between columns.
    pub const GUTTER: &'static str = "  ";

    /// The placeholder for missing values.
    pub const PLACEHOLDER: &'static str = "--";
}

impl From<&ResultTable> for Table {
    fn from(results: &ResultTable) -> Self {
        let mut rows = Vec::with_capacity(results.len());
        for (test, params) in results.tests.iter() {
            for (param, record) in params.iter() {
                rows.push([
                    test.to_owned(),
                    param.to_string(),
                    display(&record.linux),
                    format_ratio(&record.lind, &record.linux),
                    format_ratio(&record.grate, &record.linux),
                    display(&record.loops),
                ]);
            }
        }

        let mut widths = Self::HEADERS.map(str::len);
        for row in rows.iter() {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.len());
            }
        }

        let format_line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, width)| format!("{cell:<width$}"))
                .join(Self::GUTTER)
        };

        let mut content = String::new();
        content.push_str(format_line(Self::HEADERS.map(str::to_owned).as_slice()).as_str());
        content.push('\n');
        content.push_str(
            widths
                .iter()
                .map(|width| "-".repeat(*width))
                .join(Self::GUTTER)
                .as_str(),
        );
        content.push('\n');
        for row in rows.iter() {
            content.push_str(format_line(row.as_slice()).as_str());
            content.push('\n');
        }

        Self { content }
    }
}

///
/// Formats the value with its ratio to the baseline, e.g. `200 (2.000)`.
///
/// A missing or non-integer value is shown as `--`. The raw value is shown alone if the
/// baseline is missing, non-integer, or not positive.
///
pub fn format_ratio(value: &Measurement, base: &Measurement) -> String {
    let value_integer = value.as_integer();
    let base_integer = base.as_integer();
    if value_integer < 0 {
        return Table::PLACEHOLDER.to_owned();
    }
    if base_integer <= 0 {
        return value.to_string();
    }
    format!(
        "{value_integer} ({:.3})",
        value_integer as f64 / base_integer as f64
    )
}

///
/// Formats the value, or `--` if it is missing.
///
fn display(value: &Measurement) -> String {
    match value {
        Measurement::NotMeasured => Table::PLACEHOLDER.to_owned(),
        Measurement::Reported(value) => value.to_owned(),
    }
}
