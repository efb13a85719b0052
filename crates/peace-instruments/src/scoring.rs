use serde::{Deserialize, Serialize};
use ts_rs::TS;

use peace_core::models::assessment::ResponseSet;

use crate::Instrument;
use crate::error::InstrumentError;

/// One selectable answer. Reverse scoring lives here: a positively framed
/// item simply lists its options with descending point values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    /// In presentation order, not necessarily in value order.
    pub options: Vec<AnswerOption>,
    /// Framed opposite to the instrument's other items, so its point values
    /// run against the label order.
    pub reverse_scored: bool,
}

impl Question {
    pub fn new(id: &str, text: &str, options: &[(u32, &str)]) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            options: options
                .iter()
                .map(|(value, label)| AnswerOption {
                    value: *value,
                    label: label.to_string(),
                })
                .collect(),
            reverse_scored: false,
        }
    }

    /// Same as [`Question::new`], flagged as reverse-scored. The option
    /// values passed in are already inverted.
    pub fn reverse(id: &str, text: &str, options: &[(u32, &str)]) -> Self {
        Self {
            reverse_scored: true,
            ..Self::new(id, text, options)
        }
    }

    pub fn max_value(&self) -> u32 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }

    pub fn accepts(&self, value: u32) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

/// Check that every answered question exists and every value is one of its
/// options. Missing questions are allowed, so partial drafts pass.
pub fn validate_answers<I: Instrument + ?Sized>(
    instrument: &I,
    responses: &ResponseSet,
) -> Result<(), InstrumentError> {
    for (question_id, value) in responses {
        let question =
            instrument
                .question(question_id)
                .ok_or_else(|| InstrumentError::UnknownQuestion {
                    instrument: instrument.id(),
                    question_id: question_id.clone(),
                })?;

        if !question.accepts(*value) {
            return Err(InstrumentError::InvalidAnswer {
                instrument: instrument.id(),
                question_id: question_id.clone(),
                value: *value,
            });
        }
    }
    Ok(())
}

/// Question ids with no answer, in administration order.
pub fn missing_questions<I: Instrument + ?Sized>(
    instrument: &I,
    responses: &ResponseSet,
) -> Vec<String> {
    instrument
        .questions()
        .iter()
        .filter(|q| !responses.contains_key(&q.id))
        .map(|q| q.id.clone())
        .collect()
}

/// Sum a complete response set into a raw score.
pub fn score<I: Instrument + ?Sized>(
    instrument: &I,
    responses: &ResponseSet,
) -> Result<u32, InstrumentError> {
    validate_answers(instrument, responses)?;

    let missing = missing_questions(instrument, responses);
    if !missing.is_empty() {
        return Err(InstrumentError::IncompleteResponse {
            instrument: instrument.id(),
            missing,
        });
    }

    Ok(responses.values().sum())
}
