pub mod grading_service;
pub mod model_service;
pub mod progress_service;
pub mod question_service;

pub use grading_service::GradingService;
pub use model_service::{GeminiModelService, GenerativeModel};
pub use progress_service::ProgressService;
pub use question_service::QuestionService;
