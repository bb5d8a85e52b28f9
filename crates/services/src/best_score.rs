use std::sync::Arc;

use storage::repository::KeyValueStore;

/// Key under which the best score is persisted.
pub const BEST_SCORE_KEY: &str = "high_score";

/// Reads and raises the persisted best score.
///
/// Storage failures are logged and otherwise ignored: a broken store reads as
/// "no best score yet" and a failed write simply leaves the old value.
#[derive(Clone)]
pub struct BestScoreService {
    store: Arc<dyn KeyValueStore>,
}

impl BestScoreService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current best score, or 0 when missing or unreadable.
    pub async fn best(&self) -> u32 {
        match self.store.get(BEST_SCORE_KEY).await {
            Ok(Some(raw)) => raw.trim().parse::<u32>().unwrap_or_else(|err| {
                tracing::warn!(%err, raw = %raw, "stored best score is not an integer");
                0
            }),
            Ok(None) => 0,
            Err(err) => {
                tracing::warn!(%err, "failed to read best score");
                0
            }
        }
    }

    /// Store `score` if it strictly beats the current best.
    ///
    /// Returns whether a new best was written.
    pub async fn record(&self, score: u32) -> bool {
        let best = self.best().await;
        if score <= best {
            return false;
        }

        match self.store.set(BEST_SCORE_KEY, &score.to_string()).await {
            Ok(()) => {
                tracing::info!(score, previous = best, "new best score");
                true
            }
            Err(err) => {
                tracing::warn!(%err, score, "failed to write best score");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use storage::repository::{InMemoryRepository, StorageError};

    struct FailingStore;

    #[async_trait]
    impl KeyValueStore for FailingStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Connection("unavailable".to_string()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn missing_best_reads_as_zero() {
        let service = BestScoreService::new(Arc::new(InMemoryRepository::new()));
        assert_eq!(service.best().await, 0);
    }

    #[tokio::test]
    async fn best_only_increases() {
        let repo = InMemoryRepository::new();
        let service = BestScoreService::new(Arc::new(repo.clone()));

        assert!(service.record(3).await);
        assert!(!service.record(3).await);
        assert!(!service.record(1).await);
        assert_eq!(service.best().await, 3);
        assert!(service.record(5).await);
        assert_eq!(repo.get(BEST_SCORE_KEY).await.unwrap().as_deref(), Some("5"));
    }

    #[tokio::test]
    async fn zero_score_never_writes() {
        let repo = InMemoryRepository::new();
        let service = BestScoreService::new(Arc::new(repo.clone()));
        assert!(!service.record(0).await);
        assert_eq!(repo.get(BEST_SCORE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn garbage_value_reads_as_zero_and_is_replaced() {
        let repo = InMemoryRepository::new();
        repo.set(BEST_SCORE_KEY, "not-a-number").await.unwrap();
        let service = BestScoreService::new(Arc::new(repo));
        assert_eq!(service.best().await, 0);
        assert!(service.record(2).await);
        assert_eq!(service.best().await, 2);
    }

    #[tokio::test]
    async fn storage_failures_are_swallowed() {
        let service = BestScoreService::new(Arc::new(FailingStore));
        assert_eq!(service.best().await, 0);
        assert!(!service.record(4).await);
    }
}
