use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use peace_core::models::assessment::{AssessmentResult, AssessmentSummary, ScoreTrend};
use peace_core::models::instrument::InstrumentId;

/// Results compared on each side of the overall trend.
pub const TREND_WINDOW: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistorySummary {
    pub count: usize,
    /// Mean score, rounded half up.
    pub average: u32,
    pub lowest: u32,
    pub highest: u32,
    pub latest: AssessmentSummary,
    /// Mean of the newest five results against the mean of the five before.
    pub overall_trend: ScoreTrend,
}

/// Summarize a newest-first history window. `None` when empty.
pub fn summarize(history: &[AssessmentResult]) -> Option<HistorySummary> {
    let latest = history.first()?;
    let scores: Vec<u32> = history.iter().map(|r| r.score).collect();

    let count = scores.len();
    let sum: u64 = scores.iter().map(|s| u64::from(*s)).sum();
    let n = count as u64;
    let average = ((2 * sum + n) / (2 * n)) as u32;

    Some(HistorySummary {
        count,
        average,
        lowest: scores.iter().copied().min().unwrap_or(0),
        highest: scores.iter().copied().max().unwrap_or(0),
        latest: latest.summary(),
        overall_trend: overall_trend(&scores),
    })
}

fn mean(scores: &[u32]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().map(|s| f64::from(*s)).sum::<f64>() / scores.len() as f64)
}

fn overall_trend(scores: &[u32]) -> ScoreTrend {
    let recent = &scores[..scores.len().min(TREND_WINDOW)];
    let older_end = scores.len().min(TREND_WINDOW * 2);
    let older = scores.get(recent.len()..older_end).unwrap_or(&[]);

    let recent_avg = mean(recent).unwrap_or(0.0);
    let older_avg = mean(older).unwrap_or(recent_avg);

    if recent_avg < older_avg {
        ScoreTrend::Improving
    } else if recent_avg > older_avg {
        ScoreTrend::Declining
    } else {
        ScoreTrend::Stable
    }
}

/// Newest result per catalog instrument; instruments never taken map to
/// `None`. Input order does not matter; ties keep the first seen.
pub fn latest_by_instrument(
    results: &[AssessmentResult],
) -> BTreeMap<InstrumentId, Option<AssessmentSummary>> {
    let mut latest: BTreeMap<InstrumentId, Option<AssessmentSummary>> =
        InstrumentId::ALL.into_iter().map(|id| (id, None)).collect();

    for result in results {
        let slot = latest.entry(result.instrument).or_insert(None);
        let newer = match slot {
            Some(current) => result.completed_at > current.completed_at,
            None => true,
        };
        if newer {
            *slot = Some(result.summary());
        }
    }
    latest
}
