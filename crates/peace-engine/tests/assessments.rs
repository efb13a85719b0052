mod common;

use common::{TestClock, answers_summing_to, engine, ts};
use peace_core::models::assessment::ScoreTrend;
use peace_core::models::instrument::InstrumentId;
use peace_core::models::severity::SeverityTier;
use peace_engine::EngineError;
use peace_instruments::Instrument;
use peace_instruments::error::InstrumentError;

#[tokio::test]
async fn completing_phq9_with_seven_points_is_mild() {
    let clock = TestClock::at("2026-05-04T09:00:00Z");
    let engine = engine(clock.clone());

    let result = engine
        .complete_assessment(InstrumentId::Phq9, answers_summing_to(InstrumentId::Phq9, 7))
        .await
        .unwrap();

    assert_eq!(result.score, 7);
    assert_eq!(result.max_score, 27);
    assert_eq!(result.severity, SeverityTier::Mild);
    assert!(result.interpretation.starts_with("Your PHQ-9 score of 7"));
    assert_eq!(result.recommendations.len(), 3);
    assert_eq!(result.completed_at, ts("2026-05-04T09:00:00Z"));
    assert_eq!(engine.get_result(result.id).await.unwrap(), result);
}

#[tokio::test]
async fn incomplete_responses_are_rejected_and_not_stored() {
    let engine = engine(TestClock::at("2026-05-04T09:00:00Z"));
    let mut answers = answers_summing_to(InstrumentId::Gad7, 5);
    answers.remove("restless");

    let err = engine
        .complete_assessment(InstrumentId::Gad7, answers)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Instrument(InstrumentError::IncompleteResponse { ref missing, .. })
            if missing == &vec!["restless".to_string()]
    ));
    assert!(engine.export_csv(None).await.unwrap().lines().count() == 1);
}

#[tokio::test]
async fn history_is_enriched_across_the_window_edge() {
    let clock = TestClock::at("2026-01-01T09:00:00Z");
    let engine = engine(clock.clone());
    for score in [9, 15, 15, 12] {
        engine
            .complete_assessment(InstrumentId::Phq9, answers_summing_to(InstrumentId::Phq9, score))
            .await
            .unwrap();
        clock.advance_days(7);
    }

    let all = engine.enriched_history(InstrumentId::Phq9, None).await.unwrap();
    let scores: Vec<u32> = all.iter().map(|e| e.result.score).collect();
    assert_eq!(scores, vec![12, 15, 15, 9]);
    assert_eq!(all[0].score_trend, Some(ScoreTrend::Improving));
    assert_eq!(all[0].days_since_last, Some(7));
    assert_eq!(all[3].score_trend, None);

    let two = engine.enriched_history(InstrumentId::Phq9, Some(2)).await.unwrap();
    assert_eq!(two.len(), 2);
    assert_eq!(two[1].previous_score, Some(15));
    assert_eq!(two[1].score_trend, Some(ScoreTrend::Stable));
}

#[tokio::test]
async fn summary_and_latest_per_instrument() {
    let clock = TestClock::at("2026-01-01T09:00:00Z");
    let engine = engine(clock.clone());
    for score in [4, 8] {
        engine
            .complete_assessment(InstrumentId::Gad7, answers_summing_to(InstrumentId::Gad7, score))
            .await
            .unwrap();
        clock.advance_days(1);
    }

    let summary = engine
        .history_summary(InstrumentId::Gad7)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.average, 6);
    assert_eq!(summary.latest.score, 8);
    assert_eq!(engine.history_summary(InstrumentId::Pss10).await.unwrap(), None);

    let latest = engine.latest_results().await.unwrap();
    assert_eq!(latest[&InstrumentId::Gad7].map(|s| s.score), Some(8));
    assert_eq!(latest[&InstrumentId::Phq9], None);
}

#[tokio::test]
async fn deleting_a_result_removes_it() {
    let engine = engine(TestClock::at("2026-01-01T09:00:00Z"));
    let result = engine
        .complete_assessment(InstrumentId::Phq9, answers_summing_to(InstrumentId::Phq9, 3))
        .await
        .unwrap();

    engine.delete_result(result.id).await.unwrap();
    let err = engine.get_result(result.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn csv_export_lists_newest_first() {
    let clock = TestClock::at("2026-02-10T09:00:00Z");
    let engine = engine(clock.clone());
    for score in [2, 11] {
        engine
            .complete_assessment(InstrumentId::Phq9, answers_summing_to(InstrumentId::Phq9, score))
            .await
            .unwrap();
        clock.advance_days(1);
    }

    let csv = engine.export_csv(Some(InstrumentId::Phq9)).await.unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with(r#""phq9","11","moderate","#));
    assert!(lines[1].ends_with(r#","2026-02-11""#));
    assert!(lines[2].starts_with(r#""phq9","2","minimal","#));
}

struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn csv_export_streams_to_a_writer() {
    let engine = engine(TestClock::at("2026-02-10T09:00:00Z"));
    engine
        .complete_assessment(InstrumentId::Gad7, answers_summing_to(InstrumentId::Gad7, 6))
        .await
        .unwrap();

    let mut buf = Vec::new();
    let count = engine.export_csv_to(None, &mut buf).await.unwrap();
    assert_eq!(count, 1);
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        engine.export_csv(None).await.unwrap()
    );

    let err = engine.export_csv_to(None, BrokenPipe).await.unwrap_err();
    assert!(matches!(err, EngineError::Export(_)));
}

#[test]
fn catalog_lookup() {
    let engine = engine(TestClock::at("2026-01-01T00:00:00Z"));
    assert_eq!(engine.catalog().len(), 4);
    assert_eq!(engine.instrument("gad7").unwrap().id(), InstrumentId::Gad7);
    assert!(matches!(
        engine.instrument("bdi2"),
        Err(EngineError::Instrument(InstrumentError::UnknownInstrument(_)))
    ));
}
