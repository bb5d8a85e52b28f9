mod answer;
mod ids;
mod question;
mod results;
mod source;

pub use answer::{AnswerRecord, Selection};
pub use ids::QuestionId;
pub use question::{Question, QuestionError, QuestionRecord};
pub use results::{QuizResults, score_answers};
pub use source::{QuestionSourceLocation, SourceLocationError};
