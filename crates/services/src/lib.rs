#![forbid(unsafe_code)]

pub mod app_services;
pub mod best_score;
pub mod error;
pub mod loader;
pub mod quiz;
pub mod shuffle;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use best_score::{BEST_SCORE_KEY, BestScoreService};
pub use error::{AppServicesError, LoadError, SessionError};
pub use loader::{
    DEFAULT_SAMPLE_SIZE, FileQuestionSource, HttpQuestionSource, QuestionLoader, QuestionSource,
    StaticQuestionSource, source_for_location,
};
pub use quiz::{
    AdvanceOutcome, AdvanceReason, QuizLoopService, QuizProgress, QuizSession, ResultRow,
    ResultsReport, ResultsService, SECONDS_PER_QUESTION, TickOutcome, TimerToken,
};
pub use shuffle::{FisherYatesShuffler, IdentityShuffler, SeededShuffler, Shuffler};
