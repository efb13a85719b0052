use peace_core::error::CoreError;
use peace_core::keys;
use peace_core::models::assessment::ScoreTrend;
use peace_core::models::instrument::InstrumentId;
use peace_core::models::schedule::Frequency;
use peace_core::models::severity::SeverityTier;
use uuid::Uuid;

#[test]
fn instrument_ids_parse_and_print() {
    for id in InstrumentId::ALL {
        assert_eq!(id.to_string().parse::<InstrumentId>().unwrap(), id);
    }
    assert_eq!(InstrumentId::SleepHygiene.as_str(), "sleep_hygiene");
    assert_eq!(
        "PHQ9".parse::<InstrumentId>().unwrap_err(),
        CoreError::UnknownInstrument("PHQ9".to_string())
    );
}

#[test]
fn serde_names_match_display() {
    for id in InstrumentId::ALL {
        assert_eq!(serde_json::to_value(id).unwrap(), id.as_str());
    }
    for tier in SeverityTier::ALL {
        assert_eq!(serde_json::to_value(tier).unwrap(), tier.as_str());
        assert_eq!(tier.as_str().parse::<SeverityTier>().unwrap(), tier);
    }
    assert_eq!(serde_json::to_value(ScoreTrend::Declining).unwrap(), "declining");
    assert_eq!(serde_json::to_value(Frequency::Biweekly).unwrap(), "biweekly");
}

#[test]
fn severity_tiers_are_ordered_mildest_first() {
    let mut shuffled = vec![
        SeverityTier::Severe,
        SeverityTier::Minimal,
        SeverityTier::ModeratelySevere,
        SeverityTier::Mild,
        SeverityTier::Moderate,
    ];
    shuffled.sort();
    assert_eq!(shuffled, SeverityTier::ALL.to_vec());
}

#[test]
fn severity_display_table() {
    let display = SeverityTier::ModeratelySevere.display();
    assert_eq!(display.label, "Moderately Severe");
    assert_eq!(display.phrase, "moderately severe");
    assert_eq!(SeverityTier::Minimal.display().text_class, "text-green-600");
    assert!(
        "catastrophic"
            .parse::<SeverityTier>()
            .is_err_and(|e| e == CoreError::UnknownSeverity("catastrophic".to_string()))
    );
}

#[test]
fn trend_display() {
    assert_eq!(ScoreTrend::Improving.display().icon, "trending-down");
    assert_eq!(ScoreTrend::Declining.display().label, "Declining");
}

#[test]
fn record_keys() {
    let id = Uuid::nil();
    assert_eq!(
        keys::result(id),
        "results/00000000-0000-0000-0000-000000000000.json"
    );
    assert_eq!(keys::draft(InstrumentId::Pss10), "drafts/pss10.json");
    assert!(keys::goal(id).starts_with(keys::GOALS_PREFIX));
    assert!(keys::schedule(id).starts_with(keys::SCHEDULES_PREFIX));
}
