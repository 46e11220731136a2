use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::CurrentSession,
    models::dto::response::SessionSnapshotDto,
    services::http_helpers::success_json,
};

#[get("/api/session")]
pub async fn session_snapshot(
    state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let session_state = state.session_service.load(session.0).await?;
    Ok(success_json(SessionSnapshotDto::from(&session_state)))
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let active_sessions = state.session_service.active_sessions().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "active_sessions": active_sessions
    })))
}

#[get("/health/live")]
pub async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    use crate::{config::Config, handlers::build_app};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(build_app(AppState::new(Config::test_config()))).await;

        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_health_check_counts_active_sessions() {
        let app = test::init_service(build_app(AppState::new(Config::test_config()))).await;

        for _ in 0..2 {
            let req = test::TestRequest::post().uri("/dashboard/streak").to_request();
            assert!(test::call_service(&app, req).await.status().is_success());
        }

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["active_sessions"], 2);
    }

    #[actix_web::test]
    async fn test_health_check_live_reports_version() {
        let app = test::init_service(App::new().service(health_check_live)).await;

        let req = test::TestRequest::get().uri("/health/live").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "alive");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn fresh_session_snapshot_has_no_quiz() {
        let app = test::init_service(build_app(AppState::new(Config::test_config()))).await;

        let req = test::TestRequest::get().uri("/api/session").to_request();
        let snapshot: SessionSnapshotDto = test::call_and_read_body_json(&app, req).await;

        assert!(snapshot.quiz.is_none());
        assert_eq!(snapshot.learning_streak, 0);
    }
}
