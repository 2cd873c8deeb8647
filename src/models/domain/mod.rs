pub mod progress;
pub mod question;

pub use progress::{DailyProgress, ProgressEntry, ProgressStats};
pub use question::{CorrectAnswer, Question, QuestionKind};
