use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::dto::request::CheckAnswerRequest,
    services::model_service::GenerativeModel,
};

/// Judges semantic equivalence between a reference answer and a user answer
/// with a single yes/no model call.
pub struct GradingService {
    model: Arc<dyn GenerativeModel>,
}

impl GradingService {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Returns `true` iff the model answers with the bare token `true`.
    /// Any other content is coerced to `false` (fail-closed).
    pub async fn grade(&self, request: CheckAnswerRequest) -> AppResult<bool> {
        let prompt =
            prompts::answer_grading_prompt(&request.correct_answer, &request.user_answer);

        let text = self.model.generate_text(&prompt).await?;
        if text.is_empty() {
            return Err(AppError::EmptyModelResponse);
        }

        let is_correct = text.trim().to_lowercase() == "true";
        log::info!("Graded answer as {}", is_correct);

        Ok(is_correct)
    }
}
