//! End-to-end run against a file store.
//!
//! Completes a few PHQ-9 screenings, sets a goal from the latest score,
//! prints the enriched history and goal progress, schedules a weekly
//! reminder and dumps the CSV export.
//!
//! Usage:
//!   PEACE_DATA_DIR=/tmp/peace \
//!   PEACE_LOG_JSON=1 \
//!   cargo run -p peace-engine --example walkthrough
//!
//! Without `PEACE_DATA_DIR` records go to a temporary directory that is
//! removed on exit.

use jiff::ToSpan;
use peace_core::models::assessment::ResponseSet;
use peace_core::models::instrument::InstrumentId;
use peace_core::models::schedule::{Frequency, ScheduleRule};
use peace_engine::{Engine, EngineConfig};
use peace_instruments::{Instrument, instrument};
use tracing_subscriber::EnvFilter;

fn answers(id: InstrumentId, total: u32) -> ResponseSet {
    let mut remaining = total;
    instrument(id)
        .questions()
        .iter()
        .map(|q| {
            let value = remaining.min(q.max_value());
            remaining -= value;
            (q.id.clone(), value)
        })
        .collect()
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var("PEACE_LOG_JSON").is_ok() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let scratch = tempfile::tempdir()?;
    let data_dir = std::env::var("PEACE_DATA_DIR")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| scratch.path().to_path_buf());
    let engine = Engine::open(EngineConfig::new(&data_dir));

    println!("Instruments:");
    for entry in engine.catalog() {
        println!(
            "  {:<14} {:<28} {} questions, max {}",
            entry.id().as_str(),
            entry.short_name(),
            entry.questions().len(),
            entry.max_score()
        );
    }
    println!();

    for score in [18, 14] {
        let result = engine
            .complete_assessment(InstrumentId::Phq9, answers(InstrumentId::Phq9, score))
            .await?;
        println!(
            "PHQ-9 {} / {} ({})",
            result.score,
            result.max_score,
            result.severity.display().label
        );
        println!("  {}", result.interpretation);
    }
    println!();

    println!("History:");
    for entry in engine.enriched_history(InstrumentId::Phq9, None).await? {
        let trend = entry
            .score_trend
            .map(|t| t.display().label)
            .unwrap_or("first");
        println!(
            "  {}  score {:>2}  {}",
            entry.result.completed_at, entry.result.score, trend
        );
    }
    println!();

    let today = jiff::Zoned::now().date();
    let goal = match engine
        .create_goal(InstrumentId::Phq9, 4, today.checked_add(90.days())?)
        .await
    {
        Ok(goal) => goal,
        Err(peace_engine::EngineError::GoalExists { goal_id, .. }) => {
            engine.get_goal(goal_id).await?
        }
        Err(e) => return Err(e.into()),
    };
    let progress = engine.goal_progress(goal.id).await?;
    println!(
        "Goal {} -> {}: {:.0}% ({} of {} milestones), {} days left",
        goal.baseline_score,
        goal.target_score,
        progress.percent,
        progress.milestones_achieved,
        progress.milestones_total,
        progress.days_remaining
    );

    let reminder = engine
        .add_schedule(
            InstrumentId::Phq9,
            ScheduleRule {
                frequency: Frequency::Weekly,
                hour: 9,
                minute: 0,
                day_of_week: Some(1),
                day_of_month: None,
            },
        )
        .await?;
    println!("Next reminder: {}", reminder.next_scheduled);
    println!();

    println!("{}", engine.export_csv(None).await?);
    Ok(())
}
