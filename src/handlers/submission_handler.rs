use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, models::dto::request::SubmitExamRequest,
};

/// Anonymous submission via the exam's capability link. The request body
/// may contain whatever score the client likes; grading happens here.
#[post("/api/exams/{link_id}/submissions")]
pub async fn submit_exam(
    state: web::Data<AppState>,
    link_id: web::Path<String>,
    request: web::Json<SubmitExamRequest>,
) -> Result<HttpResponse, AppError> {
    let report = state
        .submission_service
        .submit(&link_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(report))
}
