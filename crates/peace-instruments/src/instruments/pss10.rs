use peace_core::models::instrument::InstrumentId;
use peace_core::models::severity::SeverityTier;

use crate::Instrument;
use crate::scoring::Question;
use crate::severity::SeverityScale;

/// PSS-10: Perceived Stress Scale.
/// 10 items rated 0–4 over the last month. Items 4, 5, 7 and 8 are
/// positively framed and reverse-scored. Total 0–40, banded low / moderate /
/// high.
pub struct Pss10;

const SCALE: SeverityScale = SeverityScale::Ascending(&[
    (13, SeverityTier::Minimal),
    (26, SeverityTier::Moderate),
    (40, SeverityTier::Severe),
]);

const NORMAL: [(u32, &str); 5] = [
    (0, "Never"),
    (1, "Almost never"),
    (2, "Sometimes"),
    (3, "Fairly often"),
    (4, "Very often"),
];

const REVERSED: [(u32, &str); 5] = [
    (4, "Never"),
    (3, "Almost never"),
    (2, "Sometimes"),
    (1, "Fairly often"),
    (0, "Very often"),
];

impl Instrument for Pss10 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Pss10
    }

    fn name(&self) -> &str {
        "PSS-10 Stress Scale"
    }

    fn short_name(&self) -> &str {
        "Stress (PSS-10)"
    }

    fn description(&self) -> &str {
        "A 10-question scale to measure perceived stress"
    }

    fn category(&self) -> &str {
        "Stress"
    }

    fn duration_minutes(&self) -> u32 {
        5
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            vec![
                Question::new(
                    "upset",
                    "In the last month, how often have you been upset because of something that happened unexpectedly?",
                    &NORMAL,
                ),
                Question::new(
                    "control",
                    "In the last month, how often have you felt that you were unable to control the important things in your life?",
                    &NORMAL,
                ),
                Question::new(
                    "nervous_stress",
                    "In the last month, how often have you felt nervous and 'stressed'?",
                    &NORMAL,
                ),
                Question::reverse(
                    "confident",
                    "In the last month, how often have you felt confident about your ability to handle your personal problems?",
                    &REVERSED,
                ),
                Question::reverse(
                    "things_going_way",
                    "In the last month, how often have you felt that things were going your way?",
                    &REVERSED,
                ),
                Question::new(
                    "difficulties",
                    "In the last month, how often have you found that you could not cope with all the things that you had to do?",
                    &NORMAL,
                ),
                Question::reverse(
                    "irritation",
                    "In the last month, how often have you been able to control irritations in your life?",
                    &REVERSED,
                ),
                Question::reverse(
                    "top_of_things",
                    "In the last month, how often have you felt that you were on top of things?",
                    &REVERSED,
                ),
                Question::new(
                    "anger",
                    "In the last month, how often have you been angered because of things that were outside of your control?",
                    &NORMAL,
                ),
                Question::new(
                    "difficulties_piling",
                    "In the last month, how often have you felt difficulties were piling up so high that you could not overcome them?",
                    &NORMAL,
                ),
            ]
        });
        &QUESTIONS
    }

    fn severity_scale(&self) -> &SeverityScale {
        &SCALE
    }
}
