use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Ordered clinical-style severity bucket.
///
/// Not every instrument reaches every tier; the ordering matters for trend
/// display and colouring, never for cutoff lookup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityTier {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

/// Presentation metadata for a severity tier. There is exactly one table
/// ([`SeverityTier::display`]); every consumer reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityDisplay {
    /// Title-case label, e.g. "Moderately Severe".
    pub label: &'static str,
    /// Lowercase phrase used inside sentences, e.g. "moderately severe".
    pub phrase: &'static str,
    pub text_class: &'static str,
    pub badge_class: &'static str,
}

impl SeverityTier {
    pub const ALL: [SeverityTier; 5] = [
        SeverityTier::Minimal,
        SeverityTier::Mild,
        SeverityTier::Moderate,
        SeverityTier::ModeratelySevere,
        SeverityTier::Severe,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityTier::Minimal => "minimal",
            SeverityTier::Mild => "mild",
            SeverityTier::Moderate => "moderate",
            SeverityTier::ModeratelySevere => "moderately_severe",
            SeverityTier::Severe => "severe",
        }
    }

    pub fn display(self) -> SeverityDisplay {
        match self {
            SeverityTier::Minimal => SeverityDisplay {
                label: "Minimal",
                phrase: "minimal",
                text_class: "text-green-600",
                badge_class: "bg-green-100 text-green-800",
            },
            SeverityTier::Mild => SeverityDisplay {
                label: "Mild",
                phrase: "mild",
                text_class: "text-yellow-600",
                badge_class: "bg-yellow-100 text-yellow-800",
            },
            SeverityTier::Moderate => SeverityDisplay {
                label: "Moderate",
                phrase: "moderate",
                text_class: "text-orange-600",
                badge_class: "bg-orange-100 text-orange-800",
            },
            SeverityTier::ModeratelySevere => SeverityDisplay {
                label: "Moderately Severe",
                phrase: "moderately severe",
                text_class: "text-red-600",
                badge_class: "bg-red-100 text-red-800",
            },
            SeverityTier::Severe => SeverityDisplay {
                label: "Severe",
                phrase: "severe",
                text_class: "text-red-700",
                badge_class: "bg-red-200 text-red-900",
            },
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeverityTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSeverity(s.to_string()))
    }
}
