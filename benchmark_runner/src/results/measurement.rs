//!
//! A single reported value.
//!

///
/// A single reported value.
///
/// Values are kept exactly as the benchmark printed them.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Measurement {
    /// Nothing has been reported.
    #[default]
    NotMeasured,
    /// The value as reported by the benchmark.
    Reported(String),
}

impl Measurement {
    /// The serialized representation of a missing value.
    pub const SENTINEL: i64 = -1;

    ///
    /// A shortcut constructor.
    ///
    pub fn reported<S>(value: S) -> Self
    where
        S: Into<String>,
    {
        Self::Reported(value.into())
    }

    ///
    /// Returns the value as an integer, or the sentinel if it is missing or not an integer.
    ///
    pub fn as_integer(&self) -> i64 {
        match self {
            Self::NotMeasured => Self::SENTINEL,
            Self::Reported(value) => value.parse::<i64>().unwrap_or(Self::SENTINEL),
        }
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotMeasured => write!(f, "{}", Self::SENTINEL),
            Self::Reported(value) => write!(f, "{value}"),
        }
    }
}

impl serde::Serialize for Measurement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::NotMeasured => serializer.serialize_i64(Self::SENTINEL),
            Self::Reported(value) => serializer.serialize_str(value.as_str()),
        }
    }
}
