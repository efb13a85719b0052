use jiff::civil::Date;
use jiff::{ToSpan, Zoned};

use peace_core::models::schedule::{Frequency, ScheduleRule};

use crate::error::InsightError;

/// Reject rules whose fields are out of range or missing for the frequency.
pub fn validate_rule(rule: &ScheduleRule) -> Result<(), InsightError> {
    if !(0..=23).contains(&rule.hour) {
        return Err(invalid(format!("hour {} is not in 0-23", rule.hour)));
    }
    if !(0..=59).contains(&rule.minute) {
        return Err(invalid(format!("minute {} is not in 0-59", rule.minute)));
    }
    if let Some(day) = rule.day_of_week.filter(|d| !(0..=6).contains(d)) {
        return Err(invalid(format!("day of week {day} is not in 0-6")));
    }
    if let Some(day) = rule.day_of_month.filter(|d| !(1..=31).contains(d)) {
        return Err(invalid(format!("day of month {day} is not in 1-31")));
    }
    match rule.frequency {
        Frequency::Weekly | Frequency::Biweekly if rule.day_of_week.is_none() => Err(invalid(
            format!("{} schedules need a day of week", rule.frequency.label()),
        )),
        Frequency::Monthly if rule.day_of_month.is_none() => {
            Err(invalid("Monthly schedules need a day of month".to_string()))
        }
        _ => Ok(()),
    }
}

fn invalid(message: String) -> InsightError {
    InsightError::InvalidSchedule(message)
}

/// The next time `rule` fires strictly after `now`, in `now`'s time zone.
pub fn next_occurrence(rule: &ScheduleRule, now: &Zoned) -> Result<Zoned, InsightError> {
    validate_rule(rule)?;
    let today = now.date();
    let at = |date: Date| -> Result<Zoned, InsightError> {
        Ok(date
            .at(rule.hour, rule.minute, 0, 0)
            .to_zoned(now.time_zone().clone())?)
    };
    let passed = |candidate: &Zoned| candidate.timestamp() <= now.timestamp();

    let next = match rule.frequency {
        Frequency::Daily => {
            let candidate = at(today)?;
            if passed(&candidate) {
                at(today.checked_add(1.day())?)?
            } else {
                candidate
            }
        }
        Frequency::Weekly | Frequency::Biweekly => {
            let target = i64::from(rule.day_of_week.unwrap_or(0));
            let current = i64::from(today.weekday().to_sunday_zero_offset());
            let ahead = (target - current).rem_euclid(7);
            let date = today.checked_add(ahead.days())?;
            let candidate = at(date)?;
            if passed(&candidate) {
                let roll = if rule.frequency == Frequency::Biweekly { 14 } else { 7 };
                at(date.checked_add(roll.days())?)?
            } else {
                candidate
            }
        }
        Frequency::Monthly => {
            let day = rule.day_of_month.unwrap_or(1);
            let candidate = at(clamp_to_month(today, day)?)?;
            if passed(&candidate) {
                let next_month = today.first_of_month().checked_add(1.month())?;
                at(clamp_to_month(next_month, day)?)?
            } else {
                candidate
            }
        }
    };
    Ok(next)
}

/// `day` within the month containing `date`, clamped to its last day.
fn clamp_to_month(date: Date, day: i8) -> Result<Date, InsightError> {
    let day = day.min(date.days_in_month());
    Ok(Date::new(date.year(), date.month(), day)?)
}
