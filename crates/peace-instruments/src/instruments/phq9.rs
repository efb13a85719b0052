use peace_core::models::instrument::InstrumentId;
use peace_core::models::severity::SeverityTier;

use super::FREQUENCY_0_3;
use crate::Instrument;
use crate::scoring::Question;
use crate::severity::SeverityScale;

/// PHQ-9: Patient Health Questionnaire depression screen.
/// 9 items rated 0–3 over the last two weeks. Total 0–27.
pub struct Phq9;

const SCALE: SeverityScale = SeverityScale::Ascending(&[
    (4, SeverityTier::Minimal),
    (9, SeverityTier::Mild),
    (14, SeverityTier::Moderate),
    (19, SeverityTier::ModeratelySevere),
    (27, SeverityTier::Severe),
]);

impl Instrument for Phq9 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Phq9
    }

    fn name(&self) -> &str {
        "PHQ-9 Depression Screening"
    }

    fn short_name(&self) -> &str {
        "Depression (PHQ-9)"
    }

    fn description(&self) -> &str {
        "A validated 9-question screening tool for depression"
    }

    fn category(&self) -> &str {
        "Mental Health"
    }

    fn duration_minutes(&self) -> u32 {
        10
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                ("interest", "Little interest or pleasure in doing things"),
                ("mood", "Feeling down, depressed, or hopeless"),
                (
                    "sleep",
                    "Trouble falling or staying asleep, or sleeping too much",
                ),
                ("energy", "Feeling tired or having little energy"),
                ("appetite", "Poor appetite or overeating"),
                (
                    "self_esteem",
                    "Feeling bad about yourself - or that you are a failure or have let yourself or your family down",
                ),
                (
                    "concentration",
                    "Trouble concentrating on things, such as reading the newspaper or watching television",
                ),
                (
                    "movement",
                    "Moving or speaking so slowly that other people could have noticed, or the opposite - being so fidgety or restless that you have been moving around a lot more than usual",
                ),
                (
                    "suicidal",
                    "Thoughts that you would be better off dead, or of hurting yourself",
                ),
            ];

            items
                .iter()
                .map(|(id, text)| Question::new(id, text, &FREQUENCY_0_3))
                .collect()
        });
        &QUESTIONS
    }

    fn severity_scale(&self) -> &SeverityScale {
        &SCALE
    }
}
