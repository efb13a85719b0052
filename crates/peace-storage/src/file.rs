use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
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

/// One pretty-printed JSON document per record under `root`, laid out by
/// [`peace_core::keys`]. Writes go to a temp file and are renamed into place,
/// so a reader never sees a half-written record.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let path = self.root.join(key);
        let json = serde_json::to_vec_pretty(value)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &json).await?;
        tokio::fs::rename(&tmp_path, &path).await?;
        Ok(())
    }

    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<T, StorageError> {
        let path = self.root.join(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                tracing::debug!(path = %path.display(), "record read");
                Ok(serde_json::from_slice(&bytes)?)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::NotFound {
                key: key.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.root.join(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::NotFound {
                key: key.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Every parseable record under `prefix`. Unreadable documents are
    /// logged and skipped so one bad file does not hide the rest.
    async fn read_all<T: DeserializeOwned>(&self, prefix: &str) -> Result<Vec<T>, StorageError> {
        let dir = self.root.join(prefix);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let parsed = tokio::fs::read(&path)
                .await
                .map_err(StorageError::from)
                .and_then(|bytes| serde_json::from_slice::<T>(&bytes).map_err(StorageError::from));
            match parsed {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable record");
                }
            }
        }
        tracing::debug!(dir = %dir.display(), count = records.len(), "records listed");
        Ok(records)
    }
}

impl ResultStore for FileStore {
    fn insert_result(&self, result: AssessmentResult) -> BoxFuture<'_, Result<Uuid, StorageError>> {
        Box::pin(async move {
            let key = keys::result(result.id);
            if tokio::fs::try_exists(self.root.join(&key)).await? {
                return Err(StorageError::AlreadyExists { key });
            }
            self.write_json(&key, &result).await?;
            tracing::info!(
                id = %result.id,
                instrument = %result.instrument,
                score = result.score,
                "result persisted"
            );
            Ok(result.id)
        })
    }

    fn list_results(
        &self,
        instrument: Option<InstrumentId>,
        limit: Option<usize>,
    ) -> BoxFuture<'_, Result<Vec<AssessmentResult>, StorageError>> {
        Box::pin(async move {
            let all = self.read_all(keys::RESULTS_PREFIX).await?;
            Ok(select_results(all, instrument, limit))
        })
    }

    fn get_result(&self, id: Uuid) -> BoxFuture<'_, Result<AssessmentResult, StorageError>> {
        Box::pin(async move { self.read_json(&keys::result(id)).await })
    }

    fn delete_result(&self, id: Uuid) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.remove(&keys::result(id)).await?;
            tracing::info!(%id, "result deleted");
            Ok(())
        })
    }
}

impl GoalStore for FileStore {
    fn put_goal(&self, goal: Goal) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.write_json(&keys::goal(goal.id), &goal).await?;
            tracing::info!(id = %goal.id, instrument = %goal.instrument, "goal persisted");
            Ok(())
        })
    }

    fn get_goal(&self, id: Uuid) -> BoxFuture<'_, Result<Goal, StorageError>> {
        Box::pin(async move { self.read_json(&keys::goal(id)).await })
    }

    fn list_goals(&self) -> BoxFuture<'_, Result<Vec<Goal>, StorageError>> {
        Box::pin(async move {
            let mut goals = self.read_all(keys::GOALS_PREFIX).await?;
            sort_goals(&mut goals);
            Ok(goals)
        })
    }

    fn delete_goal(&self, id: Uuid) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.remove(&keys::goal(id)).await?;
            tracing::info!(%id, "goal deleted");
            Ok(())
        })
    }
}

impl DraftStore for FileStore {
    fn put_draft(&self, draft: AssessmentDraft) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.write_json(&keys::draft(draft.instrument), &draft).await?;
            tracing::debug!(instrument = %draft.instrument, "draft saved");
            Ok(())
        })
    }

    fn get_draft(
        &self,
        instrument: InstrumentId,
    ) -> BoxFuture<'_, Result<Option<AssessmentDraft>, StorageError>> {
        Box::pin(async move {
            match self.read_json(&keys::draft(instrument)).await {
                Ok(draft) => Ok(Some(draft)),
                Err(StorageError::NotFound { .. }) => Ok(None),
                Err(e) => Err(e),
            }
        })
    }

    fn delete_draft(&self, instrument: InstrumentId) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            match self.remove(&keys::draft(instrument)).await {
                Ok(()) | Err(StorageError::NotFound { .. }) => Ok(()),
                Err(e) => Err(e),
            }
        })
    }
}

impl ScheduleStore for FileStore {
    fn put_schedule(
        &self,
        schedule: ReassessmentSchedule,
    ) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.write_json(&keys::schedule(schedule.id), &schedule).await?;
            tracing::info!(
                id = %schedule.id,
                instrument = %schedule.instrument,
                next = %schedule.next_scheduled,
                "schedule persisted"
            );
            Ok(())
        })
    }

    fn get_schedule(&self, id: Uuid) -> BoxFuture<'_, Result<ReassessmentSchedule, StorageError>> {
        Box::pin(async move { self.read_json(&keys::schedule(id)).await })
    }

    fn list_schedules(&self) -> BoxFuture<'_, Result<Vec<ReassessmentSchedule>, StorageError>> {
        Box::pin(async move {
            let mut schedules = self.read_all(keys::SCHEDULES_PREFIX).await?;
            sort_schedules(&mut schedules);
            Ok(schedules)
        })
    }

    fn delete_schedule(&self, id: Uuid) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.remove(&keys::schedule(id)).await?;
            tracing::info!(%id, "schedule deleted");
            Ok(())
        })
    }
}
