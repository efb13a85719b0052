use peace_core::models::instrument::InstrumentId;
use peace_core::models::severity::SeverityTier;
use peace_instruments::error::InstrumentError;
use peace_instruments::{all_instruments, get_instrument, instrument};

#[test]
fn catalog_lists_every_instrument_once() {
    let ids: Vec<_> = all_instruments().iter().map(|i| i.id()).collect();
    assert_eq!(ids, InstrumentId::ALL.to_vec());
}

#[test]
fn lookup_by_string_id() {
    let sleep = get_instrument("sleep_hygiene").unwrap();
    assert_eq!(sleep.id(), InstrumentId::SleepHygiene);
    assert_eq!(sleep.name(), "Sleep Hygiene Assessment");
}

#[test]
fn unknown_id_is_rejected() {
    let err = get_instrument("beck_depression").err().unwrap();
    assert_eq!(
        err,
        InstrumentError::UnknownInstrument("beck_depression".to_string())
    );
}

#[test]
fn question_counts_and_max_scores() {
    let expected = [
        (InstrumentId::Phq9, 9, 27),
        (InstrumentId::Gad7, 7, 21),
        (InstrumentId::Pss10, 10, 40),
        (InstrumentId::SleepHygiene, 10, 36),
    ];
    for (id, questions, max) in expected {
        let inst = instrument(id);
        assert_eq!(inst.questions().len(), questions, "{id}");
        assert_eq!(inst.max_score(), max, "{id}");
    }
}

#[test]
fn question_ids_are_unique_within_each_instrument() {
    for inst in all_instruments() {
        let mut ids: Vec<_> = inst.questions().iter().map(|q| q.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), inst.questions().len(), "{}", inst.id());
    }
}

#[test]
fn pss10_reverse_items() {
    let pss = instrument(InstrumentId::Pss10);
    let reversed: Vec<_> = pss
        .questions()
        .iter()
        .filter(|q| q.reverse_scored)
        .map(|q| q.id.as_str())
        .collect();
    assert_eq!(
        reversed,
        ["confident", "things_going_way", "irritation", "top_of_things"]
    );

    let confident = pss.question("confident").unwrap();
    assert_eq!(confident.options[0].label, "Never");
    assert_eq!(confident.options[0].value, 4);
    assert_eq!(confident.options[4].label, "Very often");
    assert_eq!(confident.options[4].value, 0);
}

#[test]
fn sleep_mixes_four_and_five_option_items() {
    let sleep = instrument(InstrumentId::SleepHygiene);
    let four = sleep.questions().iter().filter(|q| q.options.len() == 4).count();
    let five = sleep.questions().iter().filter(|q| q.options.len() == 5).count();
    assert_eq!((four, five), (4, 6));
}

#[test]
fn sleep_habit_items_separate_rarely_from_never() {
    let sleep = instrument(InstrumentId::SleepHygiene);
    for id in ["screen_time", "caffeine_intake", "exercise_timing", "napping", "stress_bedtime"] {
        let question = sleep.question(id).unwrap();
        assert!(question.reverse_scored, "{id}");
        let tail: Vec<(u32, &str)> = question.options[3..]
            .iter()
            .map(|o| (o.value, o.label.as_str()))
            .collect();
        assert_eq!(tail, vec![(3, "Rarely"), (4, "Never")], "{id}");
    }
}

#[test]
fn reachable_tiers() {
    assert_eq!(
        instrument(InstrumentId::Gad7).reachable_tiers(),
        vec![
            SeverityTier::Minimal,
            SeverityTier::Mild,
            SeverityTier::Moderate,
            SeverityTier::Severe
        ]
    );
    assert_eq!(
        instrument(InstrumentId::Pss10).reachable_tiers(),
        vec![
            SeverityTier::Minimal,
            SeverityTier::Moderate,
            SeverityTier::Severe
        ]
    );
    assert_eq!(
        instrument(InstrumentId::SleepHygiene).reachable_tiers(),
        SeverityTier::ALL.to_vec()
    );
}

#[test]
fn questions_serialize_for_the_ui() {
    let phq9 = instrument(InstrumentId::Phq9);
    let json = serde_json::to_value(&phq9.questions()[0]).unwrap();
    assert_eq!(json["id"], "interest");
    assert_eq!(json["options"][3]["label"], "Nearly every day");
    assert_eq!(json["reverse_scored"], false);
}
