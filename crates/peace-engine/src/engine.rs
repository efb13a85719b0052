use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Arc;

use jiff::Zoned;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use uuid::Uuid;

use peace_core::clock::{Clock, SystemClock};
use peace_core::models::assessment::{
    AssessmentResult, AssessmentSummary, EnrichedResult, ResponseSet,
};
use peace_core::models::draft::AssessmentDraft;
use peace_core::models::goal::{Goal, GoalProgress};
use peace_core::models::instrument::InstrumentId;
use peace_core::models::schedule::{ReassessmentSchedule, ScheduleRule};
use peace_insights::analytics::{self, HistorySummary};
use peace_insights::{goals, history, schedule};
use peace_instruments::scoring::validate_answers;
use peace_instruments::severity::classify;
use peace_instruments::{Instrument, evaluate, instrument};
use peace_storage::file::FileStore;
use peace_storage::store::Store;

use crate::config::EngineConfig;
use crate::error::EngineError;

/// Entry point for every assessment operation.
///
/// Holds a store, a clock and the caller's time zone. The time zone drives
/// calendar questions: goal days remaining and when reminders fire.
pub struct Engine {
    store: Arc<dyn Store>,
    clock: Arc<dyn Clock>,
    tz: TimeZone,
    config: EngineConfig,
}

impl Engine {
    pub fn new(store: Arc<dyn Store>, clock: Arc<dyn Clock>, config: EngineConfig) -> Self {
        Self {
            store,
            clock,
            tz: TimeZone::system(),
            config,
        }
    }

    /// File-backed engine rooted at `config.data_dir`, on the wall clock.
    pub fn open(config: EngineConfig) -> Self {
        let store = Arc::new(FileStore::new(config.data_dir.clone()));
        Self::new(store, Arc::new(SystemClock), config)
    }

    pub fn with_time_zone(mut self, tz: TimeZone) -> Self {
        self.tz = tz;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn now_zoned(&self) -> Zoned {
        self.clock.now().to_zoned(self.tz.clone())
    }

    fn today(&self) -> Date {
        self.now_zoned().date()
    }

    // Catalog

    pub fn catalog(&self) -> Vec<&'static dyn Instrument> {
        peace_instruments::all_instruments()
    }

    pub fn instrument(&self, id: &str) -> Result<&'static dyn Instrument, EngineError> {
        Ok(peace_instruments::get_instrument(id)?)
    }

    // Results

    /// Score, classify and interpret a full response set, persist the
    /// result, clear the instrument's draft and apply the new score to the
    /// instrument's goals.
    pub async fn complete_assessment(
        &self,
        id: InstrumentId,
        responses: ResponseSet,
    ) -> Result<AssessmentResult, EngineError> {
        let evaluation = evaluate(instrument(id), &responses)?;

        let result = AssessmentResult {
            id: Uuid::new_v4(),
            instrument: id,
            score: evaluation.score,
            max_score: evaluation.max_score,
            severity: evaluation.severity,
            interpretation: evaluation.interpretation.text,
            recommendations: evaluation.interpretation.recommendations,
            resources: evaluation.interpretation.resources,
            responses,
            completed_at: self.clock.now(),
        };
        self.store.insert_result(result.clone()).await?;
        tracing::info!(
            id = %result.id,
            instrument = %id,
            score = result.score,
            severity = %result.severity,
            "assessment completed"
        );

        // The result is committed; follow-up failures must not report the
        // assessment as lost.
        if let Err(e) = self.store.delete_draft(id).await {
            tracing::warn!(instrument = %id, error = %e, "failed to clear draft after completion");
        }
        if let Err(e) = self.apply_score(id, result.score).await {
            tracing::warn!(instrument = %id, error = %e, "failed to update goals after completion");
        }
        Ok(result)
    }

    /// The newest `limit` results (config default when `None`), each
    /// compared with the result before it. The oldest entry in the window
    /// still sees its predecessor when one exists.
    pub async fn enriched_history(
        &self,
        id: InstrumentId,
        limit: Option<usize>,
    ) -> Result<Vec<EnrichedResult>, EngineError> {
        let limit = limit.unwrap_or(self.config.history_limit);
        let window = self
            .store
            .list_results(Some(id), Some(limit.saturating_add(1)))
            .await?;
        let mut enriched = history::enrich(&window);
        enriched.truncate(limit);
        tracing::debug!(instrument = %id, count = enriched.len(), "history enriched");
        Ok(enriched)
    }

    pub async fn history_summary(
        &self,
        id: InstrumentId,
    ) -> Result<Option<HistorySummary>, EngineError> {
        let window = self
            .store
            .list_results(Some(id), Some(self.config.analytics_window))
            .await?;
        Ok(analytics::summarize(&window))
    }

    /// Newest result per catalog instrument.
    pub async fn latest_results(
        &self,
    ) -> Result<BTreeMap<InstrumentId, Option<AssessmentSummary>>, EngineError> {
        let results = self.store.list_results(None, None).await?;
        Ok(analytics::latest_by_instrument(&results))
    }

    pub async fn get_result(&self, id: Uuid) -> Result<AssessmentResult, EngineError> {
        Ok(self.store.get_result(id).await?)
    }

    pub async fn delete_result(&self, id: Uuid) -> Result<(), EngineError> {
        self.store.delete_result(id).await?;
        Ok(())
    }

    /// CSV of every result, or one instrument's, newest first.
    pub async fn export_csv(&self, id: Option<InstrumentId>) -> Result<String, EngineError> {
        let results = self.store.list_results(id, None).await?;
        tracing::info!(count = results.len(), "results exported");
        Ok(peace_export::csv::to_csv(&results))
    }

    /// Stream the same CSV into `writer`, e.g. a download file.
    pub async fn export_csv_to<W: Write>(
        &self,
        id: Option<InstrumentId>,
        writer: W,
    ) -> Result<usize, EngineError> {
        let results = self.store.list_results(id, None).await?;
        peace_export::csv::write_csv(&results, writer)?;
        tracing::info!(count = results.len(), "results exported");
        Ok(results.len())
    }

    // Goals

    /// Goal from the instrument's latest score down to `target`.
    pub async fn create_goal(
        &self,
        id: InstrumentId,
        target: u32,
        target_date: Date,
    ) -> Result<Goal, EngineError> {
        if let Some(existing) = self
            .store
            .list_goals()
            .await?
            .into_iter()
            .find(|g| g.instrument == id)
        {
            return Err(EngineError::GoalExists {
                instrument: id,
                goal_id: existing.id,
            });
        }

        let latest = self
            .store
            .list_results(Some(id), Some(1))
            .await?
            .into_iter()
            .next()
            .ok_or(EngineError::NoBaseline(id))?;

        let goal = goals::create_goal(
            instrument(id),
            latest.score,
            target,
            target_date,
            self.clock.now(),
        )?;
        self.store.put_goal(goal.clone()).await?;
        tracing::info!(
            id = %goal.id,
            instrument = %id,
            baseline = goal.baseline_score,
            target = goal.target_score,
            milestones = goal.milestones.len(),
            "goal created"
        );
        Ok(goal)
    }

    pub async fn list_goals(&self) -> Result<Vec<Goal>, EngineError> {
        Ok(self.store.list_goals().await?)
    }

    pub async fn get_goal(&self, id: Uuid) -> Result<Goal, EngineError> {
        Ok(self.store.get_goal(id).await?)
    }

    pub async fn delete_goal(&self, id: Uuid) -> Result<(), EngineError> {
        self.store.delete_goal(id).await?;
        Ok(())
    }

    /// Apply `score` to one goal. The score must be in the goal
    /// instrument's range.
    pub async fn record_progress(&self, goal_id: Uuid, score: u32) -> Result<Goal, EngineError> {
        let goal = self.store.get_goal(goal_id).await?;
        classify(instrument(goal.instrument), score)?;
        self.save_progress(&goal, score).await
    }

    /// Apply each instrument's latest score to its goals.
    pub async fn refresh_goals(&self) -> Result<Vec<Goal>, EngineError> {
        let latest = self.latest_results().await?;
        let mut refreshed = Vec::new();
        for goal in self.store.list_goals().await? {
            match latest.get(&goal.instrument).copied().flatten() {
                Some(summary) => refreshed.push(self.save_progress(&goal, summary.score).await?),
                None => refreshed.push(goal),
            }
        }
        Ok(refreshed)
    }

    pub async fn goal_progress(&self, goal_id: Uuid) -> Result<GoalProgress, EngineError> {
        let goal = self.store.get_goal(goal_id).await?;
        let current = self
            .store
            .list_results(Some(goal.instrument), Some(1))
            .await?
            .first()
            .map(|r| r.score);
        Ok(goals::progress(&goal, current, self.today())?)
    }

    async fn apply_score(&self, id: InstrumentId, score: u32) -> Result<(), EngineError> {
        for goal in self.store.list_goals().await? {
            if goal.instrument == id {
                self.save_progress(&goal, score).await?;
            }
        }
        Ok(())
    }

    /// Persist only when a milestone changed.
    async fn save_progress(&self, goal: &Goal, score: u32) -> Result<Goal, EngineError> {
        let updated = goals::update_progress(goal, score, self.clock.now());
        if updated != *goal {
            self.store.put_goal(updated.clone()).await?;
            let achieved = updated.milestones.iter().filter(|m| m.achieved).count();
            tracing::info!(
                id = %updated.id,
                score,
                achieved,
                total = updated.milestones.len(),
                "goal milestones reached"
            );
        }
        Ok(updated)
    }

    // Drafts

    /// Replace the instrument's draft. Answers are checked against the
    /// catalog; unanswered questions are fine.
    pub async fn save_draft(
        &self,
        id: InstrumentId,
        current_question: usize,
        answers: ResponseSet,
    ) -> Result<AssessmentDraft, EngineError> {
        validate_answers(instrument(id), &answers)?;
        let draft = AssessmentDraft {
            instrument: id,
            current_question,
            answers,
            updated_at: self.clock.now(),
        };
        self.store.put_draft(draft.clone()).await?;
        Ok(draft)
    }

    pub async fn resume_draft(
        &self,
        id: InstrumentId,
    ) -> Result<Option<AssessmentDraft>, EngineError> {
        Ok(self.store.get_draft(id).await?)
    }

    pub async fn discard_draft(&self, id: InstrumentId) -> Result<(), EngineError> {
        self.store.delete_draft(id).await?;
        Ok(())
    }

    // Schedules

    pub async fn add_schedule(
        &self,
        id: InstrumentId,
        rule: ScheduleRule,
    ) -> Result<ReassessmentSchedule, EngineError> {
        let next = schedule::next_occurrence(&rule, &self.now_zoned())?;
        let created = ReassessmentSchedule {
            id: Uuid::new_v4(),
            instrument: id,
            rule,
            enabled: true,
            next_scheduled: next.timestamp(),
        };
        self.store.put_schedule(created.clone()).await?;
        Ok(created)
    }

    /// Replace the rule and recompute the next run.
    pub async fn update_schedule(
        &self,
        schedule_id: Uuid,
        rule: ScheduleRule,
    ) -> Result<ReassessmentSchedule, EngineError> {
        let mut existing = self.store.get_schedule(schedule_id).await?;
        existing.next_scheduled = schedule::next_occurrence(&rule, &self.now_zoned())?.timestamp();
        existing.rule = rule;
        self.store.put_schedule(existing.clone()).await?;
        Ok(existing)
    }

    /// Flip the enabled flag. Re-enabling recomputes the next run so a
    /// paused reminder does not fire for a time already past.
    pub async fn toggle_schedule(
        &self,
        schedule_id: Uuid,
    ) -> Result<ReassessmentSchedule, EngineError> {
        let mut existing = self.store.get_schedule(schedule_id).await?;
        existing.enabled = !existing.enabled;
        if existing.enabled {
            existing.next_scheduled =
                schedule::next_occurrence(&existing.rule, &self.now_zoned())?.timestamp();
        }
        self.store.put_schedule(existing.clone()).await?;
        Ok(existing)
    }

    pub async fn remove_schedule(&self, schedule_id: Uuid) -> Result<(), EngineError> {
        self.store.delete_schedule(schedule_id).await?;
        Ok(())
    }

    pub async fn list_schedules(&self) -> Result<Vec<ReassessmentSchedule>, EngineError> {
        Ok(self.store.list_schedules().await?)
    }
}
