use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{ProgressQuery, RecordProgressRequest},
        response::RecordProgressResponse,
    },
};

#[get("/api/progress")]
pub async fn get_progress(
    state: web::Data<AppState>,
    query: web::Query<ProgressQuery>,
) -> Result<HttpResponse, AppError> {
    let stats = state
        .progress_service
        .stats(query.user_id.as_deref())
        .await;
    Ok(HttpResponse::Ok().json(stats))
}

#[post("/api/progress")]
pub async fn record_progress(
    state: web::Data<AppState>,
    request: web::Json<RecordProgressRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    state
        .progress_service
        .record(&request.user_id, &request.question_id, request.correct)
        .await;

    Ok(HttpResponse::Ok().json(RecordProgressResponse { success: true }))
}
