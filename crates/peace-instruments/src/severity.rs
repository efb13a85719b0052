use peace_core::models::severity::SeverityTier;

use crate::Instrument;
use crate::error::InstrumentError;

/// Cutoff table for one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityScale {
    /// Higher score = more severe. Bands are `(inclusive upper bound, tier)`,
    /// listed from the lowest bound up.
    Ascending(&'static [(u32, SeverityTier)]),
    /// Higher score = healthier. Bands are `(inclusive lower bound, tier)`,
    /// listed from the highest bound down; the last bound is 0.
    Descending(&'static [(u32, SeverityTier)]),
}

impl SeverityScale {
    fn bands(&self) -> &'static [(u32, SeverityTier)] {
        match self {
            SeverityScale::Ascending(bands) | SeverityScale::Descending(bands) => bands,
        }
    }

    fn lookup(&self, score: u32) -> Option<SeverityTier> {
        match self {
            SeverityScale::Ascending(bands) => bands
                .iter()
                .find(|(upper, _)| score <= *upper)
                .map(|(_, tier)| *tier),
            SeverityScale::Descending(bands) => bands
                .iter()
                .find(|(lower, _)| score >= *lower)
                .map(|(_, tier)| *tier),
        }
    }

    /// Tiers in the table, mildest first.
    pub fn tiers(&self) -> Vec<SeverityTier> {
        let mut tiers: Vec<_> = self.bands().iter().map(|(_, tier)| *tier).collect();
        tiers.sort();
        tiers
    }
}

/// Map a raw score to its severity tier.
///
/// Scores above the instrument maximum are a caller bug and are rejected,
/// never clamped.
pub fn classify<I: Instrument + ?Sized>(
    instrument: &I,
    score: u32,
) -> Result<SeverityTier, InstrumentError> {
    let out_of_range = || InstrumentError::ScoreOutOfRange {
        instrument: instrument.id(),
        score,
        max: instrument.max_score(),
    };

    check_range(instrument, score)?;
    instrument.severity_scale().lookup(score).ok_or_else(out_of_range)
}

pub(crate) fn check_range<I: Instrument + ?Sized>(
    instrument: &I,
    score: u32,
) -> Result<(), InstrumentError> {
    let max = instrument.max_score();
    if score > max {
        return Err(InstrumentError::ScoreOutOfRange {
            instrument: instrument.id(),
            score,
            max,
        });
    }
    Ok(())
}
