use jiff::Timestamp;
use jiff::civil::Date;
use uuid::Uuid;

use peace_core::models::goal::{Goal, GoalProgress, Milestone};
use peace_instruments::Instrument;
use peace_instruments::severity::classify;

use crate::error::InsightError;

/// Score points per milestone step before clamping.
pub const STEP_SIZE: u32 = 5;
pub const MIN_STEPS: u32 = 2;
pub const MAX_STEPS: u32 = 4;

/// Start tracking a reduction from `baseline` to `target` by `target_date`.
///
/// Both scores are classified against the instrument, so an out-of-range
/// score fails before the target is compared with the baseline.
pub fn create_goal<I: Instrument + ?Sized>(
    instrument: &I,
    baseline: u32,
    target: u32,
    target_date: Date,
    now: Timestamp,
) -> Result<Goal, InsightError> {
    let baseline_severity = classify(instrument, baseline)?;
    let target_severity = classify(instrument, target)?;
    if target >= baseline {
        return Err(InsightError::InvalidTarget { baseline, target });
    }

    Ok(Goal {
        id: Uuid::new_v4(),
        instrument: instrument.id(),
        baseline_score: baseline,
        baseline_severity,
        target_score: target,
        target_severity,
        target_date,
        milestones: milestone_thresholds(baseline, target)
            .into_iter()
            .map(Milestone::pending)
            .collect(),
        created_at: now,
    })
}

/// Strictly decreasing thresholds from just below `baseline` down to
/// `target`, which is always the last entry. Empty when `target >= baseline`.
pub fn milestone_thresholds(baseline: u32, target: u32) -> Vec<u32> {
    if target >= baseline {
        return Vec::new();
    }
    let diff = baseline - target;
    let steps = (diff / STEP_SIZE).clamp(MIN_STEPS, MAX_STEPS);

    let mut thresholds = Vec::with_capacity(steps as usize + 1);
    for i in 1..=steps {
        let exact = f64::from(baseline) - f64::from(diff * i) / f64::from(steps + 1);
        let threshold = (exact + 0.5).floor() as u32;
        if threshold >= baseline || threshold <= target {
            continue;
        }
        if thresholds.last() == Some(&threshold) {
            continue;
        }
        thresholds.push(threshold);
    }
    thresholds.push(target);
    thresholds
}

/// Mark every pending milestone at or above `current_score` as reached.
/// Already achieved milestones keep their original date.
pub fn update_progress(goal: &Goal, current_score: u32, now: Timestamp) -> Goal {
    let mut updated = goal.clone();
    for milestone in updated
        .milestones
        .iter_mut()
        .filter(|m| !m.achieved && m.threshold >= current_score)
    {
        milestone.achieved = true;
        milestone.achieved_on = Some(now);
    }
    updated
}

/// Share of the baseline-to-target distance covered, 0–100.
pub fn progress_percent(goal: &Goal, current_score: u32) -> f64 {
    let span = f64::from(goal.baseline_score) - f64::from(goal.target_score);
    if span <= 0.0 {
        return 0.0;
    }
    let covered = f64::from(goal.baseline_score) - f64::from(current_score);
    (covered / span).clamp(0.0, 1.0) * 100.0
}

/// Calendar days from `today` to the target date; negative once overdue.
pub fn days_until_target(goal: &Goal, today: Date) -> Result<i32, InsightError> {
    Ok(today.until(goal.target_date)?.get_days())
}

pub fn is_complete(goal: &Goal, current_score: u32) -> bool {
    current_score <= goal.target_score
}

/// Assemble the read-time progress view. Without a current score the goal
/// sits at 0% and is not complete.
pub fn progress(
    goal: &Goal,
    current_score: Option<u32>,
    today: Date,
) -> Result<GoalProgress, InsightError> {
    Ok(GoalProgress {
        goal_id: goal.id,
        current_score,
        percent: current_score.map_or(0.0, |s| progress_percent(goal, s)),
        milestones_achieved: goal.milestones.iter().filter(|m| m.achieved).count(),
        milestones_total: goal.milestones.len(),
        days_remaining: days_until_target(goal, today)?,
        complete: current_score.is_some_and(|s| is_complete(goal, s)),
    })
}
