//!
//! The measurements of one benchmark parameter across platforms.
//!

use crate::platform::Platform;

use super::measurement::Measurement;

///
/// The measurements of one benchmark parameter across platforms.
///
/// The iteration count belongs to whichever platform wrote last. Counts are not
/// checked for consistency across platforms.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Record {
    // Fields are declared in key order, so the serialized form has sorted keys.
    /// The composite sandbox average time.
    pub grate: Measurement,
    /// The sandbox average time.
    pub lind: Measurement,
    /// The native average time.
    pub linux: Measurement,
    /// The iteration count.
    pub loops: Measurement,
}

impl Record {
    ///
    /// Overwrites the platform measurement and the iteration count.
    ///
    pub fn set(&mut self, platform: Platform, average: Measurement, loops: Measurement) {
        let field = match platform {
            Platform::Linux => &mut self.linux,
            Platform::Lind => &mut self.lind,
            Platform::Grate => &mut self.grate,
        };
        *field = average;
        self.loops = loops;
    }
}
