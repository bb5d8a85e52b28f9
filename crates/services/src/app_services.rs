use std::sync::Arc;

use quiz_core::model::QuestionSourceLocation;
use storage::repository::Storage;

use crate::Clock;
use crate::best_score::BestScoreService;
use crate::error::AppServicesError;
use crate::loader::{DEFAULT_SAMPLE_SIZE, QuestionLoader, QuestionSource, source_for_location};
use crate::quiz::{QuizLoopService, ResultsService};

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    quiz_loop: Arc<QuizLoopService>,
    results: Arc<ResultsService>,
    best_scores: Arc<BestScoreService>,
}

impl AppServices {
    /// Wire services over existing storage and a question source.
    #[must_use]
    pub fn new(
        storage: &Storage,
        source: Arc<dyn QuestionSource>,
        clock: Clock,
        sample_size: usize,
    ) -> Self {
        let loader = QuestionLoader::new(source).with_sample_size(sample_size);
        Self::from_loader(storage, loader, clock)
    }

    /// Wire services around a preconfigured loader (custom shuffler, sample size).
    #[must_use]
    pub fn from_loader(storage: &Storage, loader: QuestionLoader, clock: Clock) -> Self {
        let best_scores = Arc::new(BestScoreService::new(Arc::clone(&storage.kv)));
        let quiz_loop = Arc::new(QuizLoopService::new(
            clock,
            Arc::new(loader),
            Arc::clone(&best_scores),
        ));
        let results = Arc::new(ResultsService::new(Arc::clone(&best_scores)));

        Self {
            quiz_loop,
            results,
            best_scores,
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the source location is invalid or storage
    /// initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        source: &str,
        clock: Clock,
        sample_size: Option<usize>,
    ) -> Result<Self, AppServicesError> {
        let location = QuestionSourceLocation::parse(source)?;
        let storage = Storage::sqlite(db_url).await?;
        tracing::info!(%location, db_url, "services ready");
        Ok(Self::new(
            &storage,
            source_for_location(&location),
            clock,
            sample_size.unwrap_or(DEFAULT_SAMPLE_SIZE),
        ))
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultsService> {
        Arc::clone(&self.results)
    }

    #[must_use]
    pub fn best_scores(&self) -> Arc<BestScoreService> {
        Arc::clone(&self.best_scores)
    }
}
