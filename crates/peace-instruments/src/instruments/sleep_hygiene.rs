use peace_core::models::instrument::InstrumentId;
use peace_core::models::severity::SeverityTier;

use crate::Instrument;
use crate::scoring::Question;
use crate::severity::SeverityScale;

/// Sleep Hygiene Index.
///
/// 10 items; higher totals mean healthier habits, so the cutoff table runs
/// downward. Four ordinal items take four options (0–3). Sleep quality and
/// the five habit-frequency items take five options (0–4); the habit items
/// are negatively framed and reverse-scored (Always = 0 … Never = 4).
/// Total 0–36.
pub struct SleepHygiene;

const SCALE: SeverityScale = SeverityScale::Descending(&[
    (32, SeverityTier::Minimal),
    (24, SeverityTier::Mild),
    (16, SeverityTier::Moderate),
    (8, SeverityTier::ModeratelySevere),
    (0, SeverityTier::Severe),
]);

const CONSISTENCY: [(u32, &str); 4] = [
    (0, "Very inconsistent"),
    (1, "Somewhat inconsistent"),
    (2, "Moderately consistent"),
    (3, "Very consistent"),
];

const ALWAYS_TO_NEVER: [(u32, &str); 5] = [
    (0, "Always"),
    (1, "Often"),
    (2, "Sometimes"),
    (3, "Rarely"),
    (4, "Never"),
];

const DAILY_TO_NEVER: [(u32, &str); 5] = [
    (0, "Daily"),
    (1, "Often"),
    (2, "Sometimes"),
    (3, "Rarely"),
    (4, "Never"),
];

impl Instrument for SleepHygiene {
    fn id(&self) -> InstrumentId {
        InstrumentId::SleepHygiene
    }

    fn name(&self) -> &str {
        "Sleep Hygiene Assessment"
    }

    fn short_name(&self) -> &str {
        "Sleep Hygiene"
    }

    fn description(&self) -> &str {
        "Evaluate your sleep habits and quality"
    }

    fn category(&self) -> &str {
        "Sleep"
    }

    fn duration_minutes(&self) -> u32 {
        5
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            vec![
                Question::new(
                    "bedtime_consistency",
                    "How consistent is your bedtime routine?",
                    &CONSISTENCY,
                ),
                Question::reverse(
                    "screen_time",
                    "How often do you use electronic devices (phone, tablet, TV) within 1 hour of bedtime?",
                    &ALWAYS_TO_NEVER,
                ),
                Question::reverse(
                    "caffeine_intake",
                    "How often do you consume caffeine after 2 PM?",
                    &DAILY_TO_NEVER,
                ),
                Question::reverse(
                    "exercise_timing",
                    "How often do you exercise within 3 hours of bedtime?",
                    &DAILY_TO_NEVER,
                ),
                Question::new(
                    "room_environment",
                    "How would you rate your bedroom environment for sleep?",
                    &[(0, "Poor"), (1, "Fair"), (2, "Good"), (3, "Excellent")],
                ),
                Question::new(
                    "sleep_duration",
                    "How many hours of sleep do you typically get per night?",
                    &[
                        (0, "Less than 5 hours"),
                        (1, "5-6 hours"),
                        (2, "7-8 hours"),
                        (3, "9+ hours"),
                    ],
                ),
                Question::new(
                    "sleep_quality",
                    "How would you rate your overall sleep quality?",
                    &[
                        (0, "Very poor"),
                        (1, "Poor"),
                        (2, "Fair"),
                        (3, "Good"),
                        (4, "Excellent"),
                    ],
                ),
                Question::new(
                    "wake_consistency",
                    "How consistent is your wake-up time?",
                    &CONSISTENCY,
                ),
                Question::reverse(
                    "napping",
                    "How often do you take naps during the day?",
                    &DAILY_TO_NEVER,
                ),
                Question::reverse(
                    "stress_bedtime",
                    "How often do you feel stressed or anxious at bedtime?",
                    &ALWAYS_TO_NEVER,
                ),
            ]
        });
        &QUESTIONS
    }

    fn severity_scale(&self) -> &SeverityScale {
        &SCALE
    }
}
