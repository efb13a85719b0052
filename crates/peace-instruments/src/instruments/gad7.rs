use peace_core::models::instrument::InstrumentId;
use peace_core::models::severity::SeverityTier;

use super::FREQUENCY_0_3;
use crate::Instrument;
use crate::scoring::Question;
use crate::severity::SeverityScale;

/// GAD-7: Generalized Anxiety Disorder screen.
/// 7 items rated 0–3. Total 0–21. No moderately-severe band.
pub struct Gad7;

const SCALE: SeverityScale = SeverityScale::Ascending(&[
    (4, SeverityTier::Minimal),
    (9, SeverityTier::Mild),
    (14, SeverityTier::Moderate),
    (21, SeverityTier::Severe),
]);

impl Instrument for Gad7 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Gad7
    }

    fn name(&self) -> &str {
        "GAD-7 Anxiety Screening"
    }

    fn short_name(&self) -> &str {
        "Anxiety (GAD-7)"
    }

    fn description(&self) -> &str {
        "A validated 7-question screening tool for anxiety"
    }

    fn category(&self) -> &str {
        "Mental Health"
    }

    fn duration_minutes(&self) -> u32 {
        7
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                ("nervous", "Feeling nervous, anxious, or on edge"),
                ("worry", "Not being able to stop or control worrying"),
                ("worry_excessive", "Worrying too much about different things"),
                ("trouble_relaxing", "Trouble relaxing"),
                ("restless", "Being so restless that it's hard to sit still"),
                ("irritable", "Becoming easily annoyed or irritable"),
                ("afraid", "Feeling afraid as if something awful might happen"),
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
