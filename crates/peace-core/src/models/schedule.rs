use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::instrument::InstrumentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

impl Frequency {
    pub fn label(self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Every 2 weeks",
            Frequency::Monthly => "Monthly",
        }
    }
}

/// When a reassessment reminder recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScheduleRule {
    pub frequency: Frequency,
    pub hour: i8,
    pub minute: i8,
    /// 0 = Sunday … 6 = Saturday. Required for weekly and biweekly.
    pub day_of_week: Option<i8>,
    /// 1–31, clamped to the month's length. Required for monthly.
    pub day_of_month: Option<i8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReassessmentSchedule {
    pub id: Uuid,
    pub instrument: InstrumentId,
    pub rule: ScheduleRule,
    pub enabled: bool,
    pub next_scheduled: jiff::Timestamp,
}
