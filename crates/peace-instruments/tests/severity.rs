use peace_core::models::instrument::InstrumentId;
use peace_core::models::severity::SeverityTier::{self, *};
use peace_instruments::error::InstrumentError;
use peace_instruments::severity::classify;
use peace_instruments::{all_instruments, instrument};

fn tier(id: InstrumentId, score: u32) -> SeverityTier {
    classify(instrument(id), score).unwrap()
}

#[test]
fn phq9_boundaries() {
    let cases = [
        (0, Minimal),
        (4, Minimal),
        (5, Mild),
        (9, Mild),
        (10, Moderate),
        (14, Moderate),
        (15, ModeratelySevere),
        (19, ModeratelySevere),
        (20, Severe),
        (27, Severe),
    ];
    for (score, expected) in cases {
        assert_eq!(tier(InstrumentId::Phq9, score), expected, "score {score}");
    }
}

#[test]
fn gad7_skips_moderately_severe() {
    assert_eq!(tier(InstrumentId::Gad7, 14), Moderate);
    assert_eq!(tier(InstrumentId::Gad7, 15), Severe);
    assert_eq!(tier(InstrumentId::Gad7, 21), Severe);
}

#[test]
fn pss10_three_bands() {
    assert_eq!(tier(InstrumentId::Pss10, 13), Minimal);
    assert_eq!(tier(InstrumentId::Pss10, 14), Moderate);
    assert_eq!(tier(InstrumentId::Pss10, 26), Moderate);
    assert_eq!(tier(InstrumentId::Pss10, 27), Severe);
    assert_eq!(tier(InstrumentId::Pss10, 40), Severe);
}

#[test]
fn sleep_runs_downward() {
    let cases = [
        (36, Minimal),
        (32, Minimal),
        (31, Mild),
        (24, Mild),
        (23, Moderate),
        (16, Moderate),
        (15, ModeratelySevere),
        (8, ModeratelySevere),
        (7, Severe),
        (0, Severe),
    ];
    for (score, expected) in cases {
        assert_eq!(tier(InstrumentId::SleepHygiene, score), expected, "score {score}");
    }
}

#[test]
fn score_above_max_is_rejected_not_clamped() {
    assert_eq!(
        classify(instrument(InstrumentId::Phq9), 28),
        Err(InstrumentError::ScoreOutOfRange {
            instrument: InstrumentId::Phq9,
            score: 28,
            max: 27,
        })
    );
}

#[test]
fn classification_is_total_and_monotonic() {
    for inst in all_instruments() {
        let reachable = inst.reachable_tiers();
        let mut seen = Vec::new();
        let mut previous: Option<SeverityTier> = None;

        for score in 0..=inst.max_score() {
            let t = classify(inst, score).unwrap();
            assert!(reachable.contains(&t), "{} {score}", inst.id());
            if let Some(prev) = previous {
                match inst.id() {
                    InstrumentId::SleepHygiene => assert!(t <= prev),
                    _ => assert!(t >= prev),
                }
            }
            previous = Some(t);
            if !seen.contains(&t) {
                seen.push(t);
            }
        }

        seen.sort();
        assert_eq!(seen, reachable, "every tier in {} is reachable", inst.id());
    }
}
