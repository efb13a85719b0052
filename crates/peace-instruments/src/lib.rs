//! peace-instruments
//!
//! Screening instrument definitions and the rules that turn answers into a
//! score, a severity tier and an interpretation. Pure data and pure
//! functions with no storage and no clock.

pub mod error;
pub mod instruments;
pub mod interpretation;
pub mod scoring;
pub mod severity;

use peace_core::models::assessment::ResponseSet;
use peace_core::models::instrument::InstrumentId;
use peace_core::models::severity::SeverityTier;

use error::InstrumentError;
use interpretation::Interpretation;
use scoring::Question;
use severity::SeverityScale;

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    fn id(&self) -> InstrumentId;

    /// Full name (e.g., "PHQ-9 Depression Screening").
    fn name(&self) -> &str;

    /// Compact name for charts and goal cards (e.g., "Depression (PHQ-9)").
    fn short_name(&self) -> &str;

    fn description(&self) -> &str;

    fn category(&self) -> &str;

    fn duration_minutes(&self) -> u32;

    /// Questions in administration order.
    fn questions(&self) -> &[Question];

    /// Cutoff table used by [`severity::classify`].
    fn severity_scale(&self) -> &SeverityScale;

    /// Highest achievable score: the sum of each question's highest option.
    fn max_score(&self) -> u32 {
        self.questions().iter().map(Question::max_value).sum()
    }

    fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == question_id)
    }

    /// Tiers this instrument's classifier can return, mildest first.
    fn reachable_tiers(&self) -> Vec<SeverityTier> {
        self.severity_scale().tiers()
    }
}

/// Outcome of scoring, classifying and interpreting one response set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub instrument: InstrumentId,
    pub score: u32,
    pub max_score: u32,
    pub severity: SeverityTier,
    pub interpretation: Interpretation,
}

/// Score → classify → interpret.
pub fn evaluate<I: Instrument + ?Sized>(
    instrument: &I,
    responses: &ResponseSet,
) -> Result<Evaluation, InstrumentError> {
    let score = scoring::score(instrument, responses)?;
    let severity = severity::classify(instrument, score)?;
    let interpretation = interpretation::interpret(instrument, score, severity)?;

    Ok(Evaluation {
        instrument: instrument.id(),
        score,
        max_score: instrument.max_score(),
        severity,
        interpretation,
    })
}

/// Return all catalog instruments in display order.
pub fn all_instruments() -> Vec<&'static dyn Instrument> {
    InstrumentId::ALL.into_iter().map(instrument).collect()
}

/// The catalog entry for a known identifier.
pub fn instrument(id: InstrumentId) -> &'static dyn Instrument {
    match id {
        InstrumentId::Phq9 => &instruments::phq9::Phq9,
        InstrumentId::Gad7 => &instruments::gad7::Gad7,
        InstrumentId::Pss10 => &instruments::pss10::Pss10,
        InstrumentId::SleepHygiene => &instruments::sleep_hygiene::SleepHygiene,
    }
}

/// Look up an instrument by its string ID.
pub fn get_instrument(id: &str) -> Result<&'static dyn Instrument, InstrumentError> {
    id.parse::<InstrumentId>()
        .map(instrument)
        .map_err(|_| InstrumentError::UnknownInstrument(id.to_string()))
}
