use std::future::Future;
use std::pin::Pin;

use uuid::Uuid;

use peace_core::models::assessment::AssessmentResult;
use peace_core::models::draft::AssessmentDraft;
use peace_core::models::goal::Goal;
use peace_core::models::instrument::InstrumentId;
use peace_core::models::schedule::ReassessmentSchedule;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Completed results. Results are immutable once inserted.
pub trait ResultStore: Send + Sync {
    /// Persist a result and return its id. An id already stored is
    /// rejected with [`StorageError::AlreadyExists`].
    fn insert_result(&self, result: AssessmentResult) -> BoxFuture<'_, Result<Uuid, StorageError>>;

    /// Results newest first, optionally for one instrument and capped at `limit`.
    fn list_results(
        &self,
        instrument: Option<InstrumentId>,
        limit: Option<usize>,
    ) -> BoxFuture<'_, Result<Vec<AssessmentResult>, StorageError>>;

    fn get_result(&self, id: Uuid) -> BoxFuture<'_, Result<AssessmentResult, StorageError>>;

    fn delete_result(&self, id: Uuid) -> BoxFuture<'_, Result<(), StorageError>>;
}

pub trait GoalStore: Send + Sync {
    /// Insert or replace.
    fn put_goal(&self, goal: Goal) -> BoxFuture<'_, Result<(), StorageError>>;

    fn get_goal(&self, id: Uuid) -> BoxFuture<'_, Result<Goal, StorageError>>;

    /// All goals, oldest first.
    fn list_goals(&self) -> BoxFuture<'_, Result<Vec<Goal>, StorageError>>;

    fn delete_goal(&self, id: Uuid) -> BoxFuture<'_, Result<(), StorageError>>;
}

/// At most one draft per instrument; a put replaces the previous draft.
pub trait DraftStore: Send + Sync {
    fn put_draft(&self, draft: AssessmentDraft) -> BoxFuture<'_, Result<(), StorageError>>;

    fn get_draft(
        &self,
        instrument: InstrumentId,
    ) -> BoxFuture<'_, Result<Option<AssessmentDraft>, StorageError>>;

    /// Removing a missing draft is not an error.
    fn delete_draft(&self, instrument: InstrumentId) -> BoxFuture<'_, Result<(), StorageError>>;
}

pub trait ScheduleStore: Send + Sync {
    fn put_schedule(&self, schedule: ReassessmentSchedule)
    -> BoxFuture<'_, Result<(), StorageError>>;

    fn get_schedule(&self, id: Uuid) -> BoxFuture<'_, Result<ReassessmentSchedule, StorageError>>;

    /// Ordered by next scheduled time.
    fn list_schedules(&self) -> BoxFuture<'_, Result<Vec<ReassessmentSchedule>, StorageError>>;

    fn delete_schedule(&self, id: Uuid) -> BoxFuture<'_, Result<(), StorageError>>;
}

/// Everything the engine persists.
pub trait Store: ResultStore + GoalStore + DraftStore + ScheduleStore {}

impl<T: ResultStore + GoalStore + DraftStore + ScheduleStore> Store for T {}

/// Newest first; ties broken by id so listings are stable across backends.
pub(crate) fn sort_newest_first(results: &mut [AssessmentResult]) {
    results.sort_by(|a, b| {
        b.completed_at
            .cmp(&a.completed_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

pub(crate) fn sort_goals(goals: &mut [Goal]) {
    goals.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
}

pub(crate) fn sort_schedules(schedules: &mut [ReassessmentSchedule]) {
    schedules.sort_by(|a, b| {
        a.next_scheduled
            .cmp(&b.next_scheduled)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Filter, order and cap a result listing.
pub(crate) fn select_results(
    mut results: Vec<AssessmentResult>,
    instrument: Option<InstrumentId>,
    limit: Option<usize>,
) -> Vec<AssessmentResult> {
    if let Some(instrument) = instrument {
        results.retain(|r| r.instrument == instrument);
    }
    sort_newest_first(&mut results);
    if let Some(limit) = limit {
        results.truncate(limit);
    }
    results
}
