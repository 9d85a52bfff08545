//!
//! The benchmark report output.
//!

pub mod json;
pub mod table;


use std::path::Path;

use crate::results::ResultTable;

use self::json::Json;
use self::table::Table;

///
/// The benchmark report output.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// The column-aligned console table.
    Table(String),
    /// The structured report.
    Json(String),
}

impl Output {
    ///
    /// Renders the console table.
    ///
    pub fn table(results: &ResultTable) -> Self {
        Table::from(results).into()
    }

    ///
    /// Serializes the structured report.
    ///
    pub fn json(results: &ResultTable) -> Self {
        Json::from(results).into()
    }

    ///
    /// Returns the rendered content.
    ///
    pub fn content(&self) -> &str {
        match self {
            Self::Table(content) => content.as_str(),
            Self::Json(content) => content.as_str(),
        }
    }

    ///
    /// Writes the report to a file.
    ///
    pub fn write_to_file(self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.content())
            .map_err(|error| anyhow::anyhow!("Benchmark report {path:?} writing: {error}"))?;
        Ok(())
    }
}

impl From<Table> for Output {
    fn from(value: Table) -> Self {
        Self::Table(value.content)
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Self::Json(value.content)
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content())
    }
}
