use std::collections::BTreeMap;

use jiff::Timestamp;
use peace_core::models::assessment::{AssessmentResult, ScoreTrend};
use peace_core::models::instrument::InstrumentId;
use peace_core::models::severity::SeverityTier;
use peace_insights::history::{days_between, enrich, trend};
use uuid::Uuid;

fn result(score: u32, completed_at: &str) -> AssessmentResult {
    AssessmentResult {
        id: Uuid::new_v4(),
        instrument: InstrumentId::Phq9,
        score,
        max_score: 27,
        severity: SeverityTier::Mild,
        interpretation: String::new(),
        recommendations: vec![],
        resources: vec![],
        responses: BTreeMap::new(),
        completed_at: completed_at.parse().unwrap(),
    }
}

fn newest_first() -> Vec<AssessmentResult> {
    vec![
        result(12, "2026-03-22T09:00:00Z"),
        result(15, "2026-03-15T09:00:00Z"),
        result(15, "2026-03-01T18:30:00Z"),
        result(9, "2026-02-20T08:00:00Z"),
    ]
}

#[test]
fn compares_each_result_with_the_one_after_it() {
    let enriched = enrich(&newest_first());

    let scores: Vec<u32> = enriched.iter().map(|e| e.result.score).collect();
    assert_eq!(scores, vec![12, 15, 15, 9]);

    assert_eq!(enriched[0].previous_score, Some(15));
    assert_eq!(enriched[0].score_trend, Some(ScoreTrend::Improving));
    assert_eq!(enriched[1].previous_score, Some(15));
    assert_eq!(enriched[1].score_trend, Some(ScoreTrend::Stable));
    assert_eq!(enriched[2].previous_score, Some(9));
    assert_eq!(enriched[2].score_trend, Some(ScoreTrend::Declining));
    assert_eq!(enriched[3].previous_score, None);
    assert_eq!(enriched[3].score_trend, None);
    assert_eq!(enriched[3].days_since_last, None);
}

#[test]
fn days_since_last_rounds_down() {
    let enriched = enrich(&newest_first());
    assert_eq!(enriched[0].days_since_last, Some(7));
    // 13 days 14.5 hours
    assert_eq!(enriched[1].days_since_last, Some(13));
    assert_eq!(enriched[2].days_since_last, Some(9));
}

#[test]
fn enrichment_is_repeatable() {
    let history = newest_first();
    assert_eq!(enrich(&history), enrich(&history));
}

#[test]
fn empty_history_enriches_to_nothing() {
    assert!(enrich(&[]).is_empty());
}

#[test]
fn trend_is_numeric() {
    assert_eq!(trend(10, 8), ScoreTrend::Improving);
    assert_eq!(trend(8, 8), ScoreTrend::Stable);
    assert_eq!(trend(8, 10), ScoreTrend::Declining);
}

#[test]
fn days_between_same_day_is_zero() {
    let a: Timestamp = "2026-05-01T08:00:00Z".parse().unwrap();
    let b: Timestamp = "2026-05-01T23:59:59Z".parse().unwrap();
    assert_eq!(days_between(a, b), 0);
    assert_eq!(days_between(b, a), -1);
}
