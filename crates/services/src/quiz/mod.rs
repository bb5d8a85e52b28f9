mod progress;
mod results;
mod session;
mod timer;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::SessionError;
pub use progress::{QuizProgress, progress_percent};
pub use results::{NO_ANSWER_LABEL, ResultRow, ResultsReport, ResultsService};
pub use session::{AdvanceOutcome, AdvanceReason, QuizSession, TickOutcome};
pub use timer::{SECONDS_PER_QUESTION, TimerToken};
pub use workflow::QuizLoopService;
