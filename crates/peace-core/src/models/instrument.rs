use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Identifier of a screening instrument in the fixed catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentId {
    /// PHQ-9 depression screen.
    Phq9,
    /// GAD-7 anxiety screen.
    Gad7,
    /// PSS-10 perceived stress scale.
    Pss10,
    /// Sleep hygiene index.
    SleepHygiene,
}

impl InstrumentId {
    pub const ALL: [InstrumentId; 4] = [
        InstrumentId::Phq9,
        InstrumentId::Gad7,
        InstrumentId::Pss10,
        InstrumentId::SleepHygiene,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InstrumentId::Phq9 => "phq9",
            InstrumentId::Gad7 => "gad7",
            InstrumentId::Pss10 => "pss10",
            InstrumentId::SleepHygiene => "sleep_hygiene",
        }
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InstrumentId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoreError::UnknownInstrument(s.to_string()))
    }
}
