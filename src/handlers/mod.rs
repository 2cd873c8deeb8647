pub mod progress_handler;
pub mod question_handler;

pub use progress_handler::{get_progress, record_progress};
pub use question_handler::{check_answer, generate_questions, health_check};
