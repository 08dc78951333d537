use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_owner_or_admin, require_role, AuthenticatedUser},
    errors::AppError,
    models::domain::Role,
};

/// Public capability-link fetch; the response carries no answer key.
#[get("/api/exams/{link_id}")]
pub async fn get_exam(
    state: web::Data<AppState>,
    link_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let exam = state.exam_service.get_public_exam(&link_id).await?;
    Ok(HttpResponse::Ok().json(exam))
}

/// Results listing for the exam's owner (or a super admin). Registered
/// behind AuthMiddleware under /api/manage.
#[get("/exams/{link_id}/attempts")]
pub async fn exam_attempts(
    state: web::Data<AppState>,
    link_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_role(&auth.0, &[Role::Teacher, Role::SuperAdmin])?;

    let exam = state.exam_service.find_by_link_id(&link_id).await?;
    require_owner_or_admin(&auth.0, exam.teacher_id)?;

    let attempts = state.exam_service.list_attempts(exam.id).await?;
    Ok(HttpResponse::Ok().json(attempts))
}

#[get("/api/health")]
pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.db.health_check().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"status": "ok"})))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::auth::AuthMiddleware;
    use crate::test_utils::fixtures::{seed_exam_with_questions, seed_teacher, test_app_state};

    #[actix_web::test]
    async fn test_public_exam_has_no_answer_key() {
        let state = test_app_state().await;
        let teacher_id = seed_teacher(&state, "amina", "pw").await;
        let link_id = seed_exam_with_questions(&state, teacher_id, false).await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_exam),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/exams/{}", link_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("is_correct"));
        assert!(text.contains("Algebra midterm"));
    }

    #[actix_web::test]
    async fn test_unknown_link_is_404() {
        let state = test_app_state().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_exam),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/exams/not-a-link")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_attempts_listing_requires_token() {
        let state = test_app_state().await;
        let jwt = state.jwt_service.clone();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(jwt))
                .service(
                    web::scope("/api/manage")
                        .wrap(AuthMiddleware)
                        .service(exam_attempts),
                ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/manage/exams/some-link/attempts")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_health_check() {
        let state = test_app_state().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(health_check),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
