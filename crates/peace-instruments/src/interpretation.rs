//! Static interpretation tables.
//!
//! Recommendations and resource tags depend on the severity tier alone and
//! are shared by every instrument; the interpretation text depends on the
//! (instrument, tier) pair. No randomness, no personalization.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use peace_core::models::instrument::InstrumentId;
use peace_core::models::severity::SeverityTier;

use crate::Instrument;
use crate::error::InstrumentError;
use crate::severity::check_range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub text: String,
    pub recommendations: Vec<String>,
    pub resources: Vec<String>,
}

pub fn base_recommendations(tier: SeverityTier) -> &'static [&'static str] {
    match tier {
        SeverityTier::Minimal => &[
            "Continue your current self-care practices",
            "Consider regular mood tracking",
            "Maintain healthy lifestyle habits",
        ],
        SeverityTier::Mild => &[
            "Consider talking to a healthcare provider",
            "Try mood tracking and meditation",
            "Focus on sleep and exercise",
        ],
        SeverityTier::Moderate => &[
            "Consider professional mental health support",
            "Try structured self-care routines",
            "Consider therapy or counseling",
        ],
        SeverityTier::ModeratelySevere => &[
            "Seek professional mental health support",
            "Consider medication evaluation",
            "Build a strong support network",
        ],
        SeverityTier::Severe => &[
            "Seek immediate professional help",
            "Consider crisis support services",
            "Build emergency support plan",
        ],
    }
}

pub fn base_resources(tier: SeverityTier) -> &'static [&'static str] {
    match tier {
        SeverityTier::Minimal => &["Mood tracking", "Meditation", "Exercise"],
        SeverityTier::Mild => &[
            "Mood tracking",
            "Meditation",
            "Sleep resources",
            "Professional support",
        ],
        SeverityTier::Moderate => &["Professional support", "Therapy resources", "Crisis support"],
        SeverityTier::ModeratelySevere => &[
            "Professional support",
            "Crisis support",
            "Emergency resources",
        ],
        SeverityTier::Severe => &["Crisis support", "Emergency resources", "Professional support"],
    }
}

/// The instrument-specific sentence for a tier.
pub fn finding(instrument: InstrumentId, tier: SeverityTier) -> &'static str {
    use InstrumentId::*;
    use SeverityTier::*;

    match (instrument, tier) {
        (Phq9, Minimal) => "Your responses suggest minimal depression symptoms.",
        (Phq9, Mild) => "Your responses suggest mild depression symptoms.",
        (Phq9, Moderate) => "Your responses suggest moderate depression symptoms.",
        (Phq9, ModeratelySevere) => {
            "Your responses suggest moderately severe depression symptoms."
        }
        (Phq9, Severe) => "Your responses suggest severe depression symptoms.",

        (Gad7, Minimal) => "Your responses suggest minimal anxiety symptoms.",
        (Gad7, Mild) => "Your responses suggest mild anxiety symptoms.",
        (Gad7, Moderate) => "Your responses suggest moderate anxiety symptoms.",
        (Gad7, ModeratelySevere) => "Your responses suggest moderately severe anxiety symptoms.",
        (Gad7, Severe) => "Your responses suggest severe anxiety symptoms.",

        (Pss10, Minimal) => "Your stress levels appear to be well-managed.",
        (Pss10, Mild) => {
            "You may be experiencing some stress that could benefit from management techniques."
        }
        (Pss10, Moderate) => "You appear to be experiencing moderate stress levels.",
        (Pss10, ModeratelySevere) => "You appear to be experiencing high stress levels.",
        (Pss10, Severe) => "You appear to be experiencing very high stress levels.",

        (SleepHygiene, Minimal) => "Your sleep habits appear to be excellent.",
        (SleepHygiene, Mild) => {
            "Your sleep habits are generally good with room for improvement."
        }
        (SleepHygiene, Moderate) => "Your sleep habits could benefit from some improvements.",
        (SleepHygiene, ModeratelySevere) => "Your sleep habits need significant improvement.",
        (SleepHygiene, Severe) => "Your sleep habits need major improvements.",
    }
}

fn opening(instrument: InstrumentId, score: u32, tier: SeverityTier) -> String {
    let phrase = tier.display().phrase;
    match instrument {
        InstrumentId::Phq9 => {
            format!("Your PHQ-9 score of {score} suggests {phrase} depression symptoms.")
        }
        InstrumentId::Gad7 => {
            format!("Your GAD-7 score of {score} suggests {phrase} anxiety symptoms.")
        }
        InstrumentId::Pss10 => {
            format!("Your PSS-10 score of {score} indicates {phrase} stress levels.")
        }
        InstrumentId::SleepHygiene => {
            format!("Your sleep hygiene score of {score} indicates {phrase} sleep habits.")
        }
    }
}

pub fn interpret<I: Instrument + ?Sized>(
    instrument: &I,
    score: u32,
    severity: SeverityTier,
) -> Result<Interpretation, InstrumentError> {
    check_range(instrument, score)?;

    let id = instrument.id();
    Ok(Interpretation {
        text: format!("{} {}", opening(id, score, severity), finding(id, severity)),
        recommendations: base_recommendations(severity)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        resources: base_resources(severity)
            .iter()
            .map(|s| s.to_string())
            .collect(),
    })
}
