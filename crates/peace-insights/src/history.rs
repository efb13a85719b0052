use std::cmp::Ordering;

use peace_core::models::assessment::{AssessmentResult, EnrichedResult, ScoreTrend};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Attach previous-score, trend and days-since-last to each result.
///
/// `history` must already be sorted newest first; the result at `i + 1` is
/// treated as the predecessor of the result at `i`. The input is never
/// re-sorted, so the same slice always yields the same output.
pub fn enrich(history: &[AssessmentResult]) -> Vec<EnrichedResult> {
    history
        .iter()
        .enumerate()
        .map(|(i, result)| {
            let previous = history.get(i + 1);
            EnrichedResult {
                result: result.clone(),
                previous_score: previous.map(|p| p.score),
                score_trend: previous.map(|p| trend(p.score, result.score)),
                days_since_last: previous
                    .map(|p| days_between(p.completed_at, result.completed_at)),
            }
        })
        .collect()
}

/// Numeric direction only. A lower score is "improving" for every
/// instrument, including the sleep index where higher is healthier.
pub fn trend(previous: u32, current: u32) -> ScoreTrend {
    match current.cmp(&previous) {
        Ordering::Less => ScoreTrend::Improving,
        Ordering::Equal => ScoreTrend::Stable,
        Ordering::Greater => ScoreTrend::Declining,
    }
}

/// Whole days from `earlier` to `later`, rounded down.
pub fn days_between(earlier: jiff::Timestamp, later: jiff::Timestamp) -> i64 {
    (later.as_millisecond() - earlier.as_millisecond()).div_euclid(MILLIS_PER_DAY)
}
