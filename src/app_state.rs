use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        GeminiModelService, GenerativeModel, GradingService, ProgressService, QuestionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub grading_service: Arc<GradingService>,
    pub progress_service: Arc<ProgressService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let model: Arc<dyn GenerativeModel> = Arc::new(GeminiModelService::new(&config)?);
        Ok(Self::with_model(config, model))
    }

    /// Builds the state around an explicit model handle. Tests inject a stub
    /// here instead of the real client.
    pub fn with_model(config: Config, model: Arc<dyn GenerativeModel>) -> Self {
        let question_service = Arc::new(QuestionService::new(Arc::clone(&model)));
        let grading_service = Arc::new(GradingService::new(model));
        let progress_service = Arc::new(ProgressService::new());

        Self {
            question_service,
            grading_service,
            progress_service,
            config: Arc::new(config),
        }
    }
}
