use std::collections::HashMap;

use tokio::sync::Mutex;
use uuid::Uuid;

use peace_core::keys;
use peace_core::models::assessment::AssessmentResult;
use peace_core::models::draft::AssessmentDraft;
use peace_core::models::goal::Goal;
use peace_core::models::instrument::InstrumentId;
use peace_core::models::schedule::ReassessmentSchedule;

use crate::error::StorageError;
use crate::store::{
    BoxFuture, DraftStore, GoalStore, ResultStore, ScheduleStore, select_results, sort_goals,
    sort_schedules,
};

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Records>,
}

#[derive(Debug, Default)]
struct Records {
    results: HashMap<Uuid, AssessmentResult>,
    goals: HashMap<Uuid, Goal>,
    drafts: HashMap<InstrumentId, AssessmentDraft>,
    schedules: HashMap<Uuid, ReassessmentSchedule>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(key: String) -> StorageError {
    StorageError::NotFound { key }
}

impl ResultStore for MemoryStore {
    fn insert_result(&self, result: AssessmentResult) -> BoxFuture<'_, Result<Uuid, StorageError>> {
        Box::pin(async move {
            let id = result.id;
            let mut inner = self.inner.lock().await;
            if inner.results.contains_key(&id) {
                return Err(StorageError::AlreadyExists {
                    key: keys::result(id),
                });
            }
            inner.results.insert(id, result);
            Ok(id)
        })
    }

    fn list_results(
        &self,
        instrument: Option<InstrumentId>,
        limit: Option<usize>,
    ) -> BoxFuture<'_, Result<Vec<AssessmentResult>, StorageError>> {
        Box::pin(async move {
            let all = self.inner.lock().await.results.values().cloned().collect();
            Ok(select_results(all, instrument, limit))
        })
    }

    fn get_result(&self, id: Uuid) -> BoxFuture<'_, Result<AssessmentResult, StorageError>> {
        Box::pin(async move {
            self.inner
                .lock()
                .await
                .results
                .get(&id)
                .cloned()
                .ok_or_else(|| not_found(keys::result(id)))
        })
    }

    fn delete_result(&self, id: Uuid) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.inner
                .lock()
                .await
                .results
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| not_found(keys::result(id)))
        })
    }
}

impl GoalStore for MemoryStore {
    fn put_goal(&self, goal: Goal) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.inner.lock().await.goals.insert(goal.id, goal);
            Ok(())
        })
    }

    fn get_goal(&self, id: Uuid) -> BoxFuture<'_, Result<Goal, StorageError>> {
        Box::pin(async move {
            self.inner
                .lock()
                .await
                .goals
                .get(&id)
                .cloned()
                .ok_or_else(|| not_found(keys::goal(id)))
        })
    }

    fn list_goals(&self) -> BoxFuture<'_, Result<Vec<Goal>, StorageError>> {
        Box::pin(async move {
            let mut goals: Vec<Goal> = self.inner.lock().await.goals.values().cloned().collect();
            sort_goals(&mut goals);
            Ok(goals)
        })
    }

    fn delete_goal(&self, id: Uuid) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.inner
                .lock()
                .await
                .goals
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| not_found(keys::goal(id)))
        })
    }
}

impl DraftStore for MemoryStore {
    fn put_draft(&self, draft: AssessmentDraft) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.inner.lock().await.drafts.insert(draft.instrument, draft);
            Ok(())
        })
    }

    fn get_draft(
        &self,
        instrument: InstrumentId,
    ) -> BoxFuture<'_, Result<Option<AssessmentDraft>, StorageError>> {
        Box::pin(async move { Ok(self.inner.lock().await.drafts.get(&instrument).cloned()) })
    }

    fn delete_draft(&self, instrument: InstrumentId) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.inner.lock().await.drafts.remove(&instrument);
            Ok(())
        })
    }
}

impl ScheduleStore for MemoryStore {
    fn put_schedule(
        &self,
        schedule: ReassessmentSchedule,
    ) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.inner.lock().await.schedules.insert(schedule.id, schedule);
            Ok(())
        })
    }

    fn get_schedule(&self, id: Uuid) -> BoxFuture<'_, Result<ReassessmentSchedule, StorageError>> {
        Box::pin(async move {
            self.inner
                .lock()
                .await
                .schedules
                .get(&id)
                .cloned()
                .ok_or_else(|| not_found(keys::schedule(id)))
        })
    }

    fn list_schedules(&self) -> BoxFuture<'_, Result<Vec<ReassessmentSchedule>, StorageError>> {
        Box::pin(async move {
            let mut schedules: Vec<ReassessmentSchedule> =
                self.inner.lock().await.schedules.values().cloned().collect();
            sort_schedules(&mut schedules);
            Ok(schedules)
        })
    }

    fn delete_schedule(&self, id: Uuid) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.inner
                .lock()
                .await
                .schedules
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| not_found(keys::schedule(id)))
        })
    }
}
