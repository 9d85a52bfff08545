//!
//! The structured report.
//!

use crate::results::ResultTable;

///
/// The structured report, mirroring the results table with sorted keys.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl From<&ResultTable> for Json {
    fn from(results: &ResultTable) -> Self {
        let content = serde_json::to_string_pretty(results).expect("Always valid");
        Self { content }
    }
}
