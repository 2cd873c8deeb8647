use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{CheckAnswerRequest, GenerateQuestionsRequest},
        response::{CheckAnswerResponse, QuestionBatchResponse},
    },
};

#[post("/api/chat")]
pub async fn generate_questions(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let questions = state.question_service.generate(request).await?;
    Ok(HttpResponse::Ok().json(QuestionBatchResponse { questions }))
}

#[post("/api/check-answer")]
pub async fn check_answer(
    state: web::Data<AppState>,
    request: web::Json<CheckAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let is_correct = state.grading_service.grade(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CheckAnswerResponse { is_correct }))
}

#[get("/api/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}
