use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::questions::QUIZ_QUESTIONS,
    errors::AppError,
    middleware::CurrentSession,
    models::{
        domain::{Page, ThemePreference},
        dto::request::{
            DailyCompletionRequest, LearningGoalRequest, QuizSubmissionRequest, ThemeToggleRequest,
        },
    },
    services::{
        http_helpers::{html_page, see_other},
        motivation_service::MotivationService,
    },
    views::{
        dashboard::{self, DashboardView},
        home::{self, HomeView},
        page_shell, progress,
        quiz::{self, QuizView},
    },
};

fn render_page(page: Page, theme: ThemePreference, body: String) -> HttpResponse {
    html_page(page_shell(page, theme, &body))
}

#[get("/")]
pub async fn home_page(
    state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let session_state = state.session_service.load(session.0).await?;
    let body = home::render(&HomeView::from_state(&session_state));
    Ok(render_page(Page::Home, session_state.theme, body))
}

#[post("/motivation")]
pub async fn motivation_boost(
    state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let session_state = state.session_service.load(session.0).await?;
    let view = HomeView::from_state(&session_state).with_motivation(MotivationService::boost());
    Ok(render_page(Page::Home, session_state.theme, home::render(&view)))
}

#[post("/goal")]
pub async fn set_learning_goal(
    state: web::Data<AppState>,
    session: CurrentSession,
    form: web::Form<LearningGoalRequest>,
) -> Result<HttpResponse, AppError> {
    form.validate()?;

    let session_state = state
        .session_service
        .set_learning_goal(session.0, &form.goal)
        .await?;
    let body = home::render(&HomeView::from_state(&session_state));
    Ok(render_page(Page::Home, session_state.theme, body))
}

#[post("/complete")]
pub async fn set_daily_completion(
    state: web::Data<AppState>,
    session: CurrentSession,
    form: web::Form<DailyCompletionRequest>,
) -> Result<HttpResponse, AppError> {
    let session_state = state
        .session_service
        .set_today_complete(session.0, form.is_complete())
        .await?;
    let body = home::render(&HomeView::from_state(&session_state));
    Ok(render_page(Page::Home, session_state.theme, body))
}

#[get("/quiz")]
pub async fn quiz_page(
    state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let session_state = state.session_service.load(session.0).await?;
    let body = quiz::render(&QuizView {
        questions: &QUIZ_QUESTIONS,
        selections: None,
        result: None,
    });
    Ok(render_page(Page::Quiz, session_state.theme, body))
}

#[post("/quiz")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    session: CurrentSession,
    form: web::Form<QuizSubmissionRequest>,
) -> Result<HttpResponse, AppError> {
    let selections = form.selections(&QUIZ_QUESTIONS)?;
    let attempt = state
        .session_service
        .submit_quiz(session.0, &selections)
        .await?;
    let session_state = state.session_service.load(session.0).await?;

    let body = quiz::render(&QuizView {
        questions: &QUIZ_QUESTIONS,
        selections: Some(&selections),
        result: Some(&attempt),
    });
    Ok(render_page(Page::Quiz, session_state.theme, body))
}

#[get("/progress")]
pub async fn progress_page(
    state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let session_state = state.session_service.load(session.0).await?;
    let body = progress::render(session_state.quiz_attempt.as_ref(), &QUIZ_QUESTIONS);
    Ok(render_page(Page::Progress, session_state.theme, body))
}

#[get("/dashboard")]
pub async fn dashboard_page(
    state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let session_state = state.session_service.load(session.0).await?;
    let body = dashboard::render(&DashboardView::from_state(
        &session_state,
        &state.config.share_url,
    ));
    Ok(render_page(Page::Dashboard, session_state.theme, body))
}

#[post("/dashboard/streak")]
pub async fn keep_streak(
    state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    state.session_service.increment_streak(session.0).await?;
    let session_state = state.session_service.load(session.0).await?;

    let view = DashboardView {
        streak_updated: true,
        ..DashboardView::from_state(&session_state, &state.config.share_url)
    };
    Ok(render_page(
        Page::Dashboard,
        session_state.theme,
        dashboard::render(&view),
    ))
}

#[post("/theme")]
pub async fn toggle_theme(
    state: web::Data<AppState>,
    session: CurrentSession,
    form: web::Form<ThemeToggleRequest>,
) -> Result<HttpResponse, AppError> {
    state.session_service.toggle_theme(session.0).await?;
    Ok(see_other(form.return_page().path()))
}
