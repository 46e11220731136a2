pub mod api_handler;
pub mod page_handler;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpRequest,
};

use crate::{app_state::AppState, errors::AppError, middleware::SessionMiddleware};

pub use api_handler::{health_check, health_check_live, session_snapshot};
pub use page_handler::{
    dashboard_page, home_page, keep_streak, motivation_boost, progress_page, quiz_page,
    set_daily_completion, set_learning_goal, submit_quiz, toggle_theme,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home_page)
        .service(motivation_boost)
        .service(set_learning_goal)
        .service(set_daily_completion)
        .service(quiz_page)
        .service(submit_quiz)
        .service(progress_page)
        .service(dashboard_page)
        .service(keep_streak)
        .service(toggle_theme)
        .service(session_snapshot)
        .service(health_check)
        .service(health_check_live);
}

pub async fn not_found(req: HttpRequest) -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::NotFound(format!("No page at '{}'", req.path())))
}

/// Application with routes, session middleware and shared state wired in.
pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let session_middleware = SessionMiddleware::new(&state.config.session_cookie_name);

    App::new()
        .app_data(web::Data::new(state))
        .wrap(session_middleware)
        .configure(configure)
        .default_service(web::to(not_found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};

    use crate::config::Config;

    #[actix_web::test]
    async fn unknown_route_is_a_json_not_found() {
        let app = test::init_service(build_app(AppState::new(Config::test_config()))).await;

        let req = test::TestRequest::get().uri("/settings").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 404);
        assert_eq!(body["error"], "Not found: No page at '/settings'");
    }
}
