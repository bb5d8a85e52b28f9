use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::{Client, Url};

use quiz_core::model::{Question, QuestionId, QuestionRecord, QuestionSourceLocation};

use crate::error::LoadError;
use crate::shuffle::{FisherYatesShuffler, Shuffler};

/// How many questions a session asks at most.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Where question records come from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Read the full ordered collection of question records.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source is unreachable, answers with a
    /// non-success status, or the payload is not a list of records.
    async fn fetch(&self) -> Result<Vec<QuestionRecord>, LoadError>;
}

/// Fetches the question document over HTTP, bypassing caches.
#[derive(Clone, Debug)]
pub struct HttpQuestionSource {
    client: Client,
    url: Url,
}

impl HttpQuestionSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch(&self) -> Result<Vec<QuestionRecord>, LoadError> {
        let response = self
            .client
            .get(self.url.clone())
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LoadError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Reads the question document from a local JSON file.
#[derive(Clone, Debug)]
pub struct FileQuestionSource {
    path: PathBuf,
}

impl FileQuestionSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    async fn fetch(&self) -> Result<Vec<QuestionRecord>, LoadError> {
        let body = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Serves a fixed list of records; used by tests and demos.
#[derive(Clone, Debug, Default)]
pub struct StaticQuestionSource {
    records: Vec<QuestionRecord>,
}

impl StaticQuestionSource {
    #[must_use]
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn fetch(&self) -> Result<Vec<QuestionRecord>, LoadError> {
        Ok(self.records.clone())
    }
}

/// Pick the source implementation for a parsed location.
#[must_use]
pub fn source_for_location(location: &QuestionSourceLocation) -> Arc<dyn QuestionSource> {
    match location {
        QuestionSourceLocation::Remote(url) => Arc::new(HttpQuestionSource::new(url.clone())),
        QuestionSourceLocation::File(path) => Arc::new(FileQuestionSource::new(path.clone())),
    }
}

/// Loads one session's worth of questions with shuffled options.
#[derive(Clone)]
pub struct QuestionLoader {
    source: Arc<dyn QuestionSource>,
    shuffler: Arc<dyn Shuffler>,
    sample_size: usize,
}

impl QuestionLoader {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            source,
            shuffler: Arc::new(FisherYatesShuffler),
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }

    #[must_use]
    pub fn with_shuffler(mut self, shuffler: Arc<dyn Shuffler>) -> Self {
        self.shuffler = shuffler;
        self
    }

    #[must_use]
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Fetch records, keep the first `sample_size`, and build questions with ids `1..=n`.
    ///
    /// Fewer records than `sample_size` yield fewer questions, possibly none.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if fetching fails or a record cannot become a question.
    pub async fn load(&self) -> Result<Vec<Question>, LoadError> {
        let mut records = self.source.fetch().await?;
        let available = records.len();
        records.truncate(self.sample_size);

        let questions = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Question::from_record(QuestionId::from_index(index), record, |options| {
                    self.shuffler.shuffle(options);
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(available, loaded = questions.len(), "questions loaded");
        Ok(questions)
    }
}
