use async_trait::async_trait;
use chrono::Utc;
use rolegate_application::{ChangeLogRepository, RecordedChangeLog};
use rolegate_core::{AppError, AppResult};
use rolegate_domain::{ChangeLogEntry, EntityReference};
use tokio::sync::RwLock;
use tracing::debug;

/// Append-only in-memory change log.
#[derive(Debug, Default)]
pub struct InMemoryChangeLogRepository {
    entries: RwLock<Vec<RecordedChangeLog>>,
}

impl InMemoryChangeLogRepository {
    /// Creates an empty change log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded entry, oldest first.
    pub async fn entries(&self) -> Vec<RecordedChangeLog> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl ChangeLogRepository for InMemoryChangeLogRepository {
    async fn write(&self, entry: ChangeLogEntry) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        let id = i64::try_from(entries.len())
            .map(|count| count + 1)
            .map_err(|error| AppError::Internal(format!("change log is full: {error}")))?;

        entries.push(RecordedChangeLog {
            id,
            entry,
            created_at: Utc::now(),
        });

        Ok(())
    }

    async fn find_by_parent(&self, parent: EntityReference) -> AppResult<Vec<RecordedChangeLog>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|recorded| recorded.entry.parent_reference == parent)
            .cloned()
            .collect())
    }
}

/// Change log that drops every entry, used when auditing is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardingChangeLogRepository;

#[async_trait]
impl ChangeLogRepository for DiscardingChangeLogRepository {
    async fn write(&self, entry: ChangeLogEntry) -> AppResult<()> {
        debug!(
            parent_id = entry.parent_reference.id,
            operation = entry.operation.as_str(),
            "discarding change log entry"
        );
        Ok(())
    }

    async fn find_by_parent(&self, _parent: EntityReference) -> AppResult<Vec<RecordedChangeLog>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use rolegate_application::ChangeLogRepository;
    use rolegate_core::{AppResult, UserIdentity};
    use rolegate_domain::{ChangeLogEntry, EntityReference, Operation, Severity};

    use super::{DiscardingChangeLogRepository, InMemoryChangeLogRepository};

    fn entry(person_id: i64, message: &str) -> ChangeLogEntry {
        ChangeLogEntry {
            parent_reference: EntityReference::person(person_id),
            severity: Severity::Information,
            user_id: UserIdentity::new("carol"),
            message: message.to_owned(),
            child_kind: None,
            operation: Operation::Update,
        }
    }

    #[tokio::test]
    async fn entries_are_appended_with_sequential_ids() -> AppResult<()> {
        let repository = InMemoryChangeLogRepository::new();

        repository.write(entry(42, "first")).await?;
        repository.write(entry(7, "second")).await?;

        let entries = repository.entries().await;
        let ids: Vec<i64> = entries.iter().map(|recorded| recorded.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(entries[0].created_at <= entries[1].created_at);
        Ok(())
    }

    #[tokio::test]
    async fn find_by_parent_filters_on_subject() -> AppResult<()> {
        let repository = InMemoryChangeLogRepository::new();
        repository.write(entry(42, "first")).await?;
        repository.write(entry(7, "second")).await?;
        repository.write(entry(42, "third")).await?;

        let entries = repository
            .find_by_parent(EntityReference::person(42))
            .await?;

        let messages: Vec<&str> = entries
            .iter()
            .map(|recorded| recorded.entry.message.as_str())
            .collect();
        assert_eq!(messages, vec!["first", "third"]);
        Ok(())
    }

    #[tokio::test]
    async fn discarding_log_keeps_nothing() -> AppResult<()> {
        let repository = DiscardingChangeLogRepository;

        repository.write(entry(42, "first")).await?;

        assert!(
            repository
                .find_by_parent(EntityReference::person(42))
                .await?
                .is_empty()
        );
        Ok(())
    }
}
