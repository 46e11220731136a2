use std::sync::Arc;

use crate::{
    constants::questions::QUIZ_QUESTIONS,
    errors::AppResult,
    models::domain::{LearningStreak, QuizAttempt, SessionId, SessionState, ThemePreference},
    repositories::SessionRepository,
    services::quiz_service::QuizService,
};

pub struct SessionService {
    repository: Arc<dyn SessionRepository>,
}

impl SessionService {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Current state of the session; a session never written to reads as fresh.
    pub async fn load(&self, id: SessionId) -> AppResult<SessionState> {
        Ok(self.repository.get(id).await?.unwrap_or_default())
    }

    async fn update(
        &self,
        id: SessionId,
        apply: impl FnOnce(&mut SessionState) + Send + 'static,
    ) -> AppResult<SessionState> {
        self.repository.update(id, Box::new(apply)).await
    }

    pub async fn submit_quiz<S: AsRef<str>>(
        &self,
        id: SessionId,
        selections: &[S],
    ) -> AppResult<QuizAttempt> {
        let attempt = QuizService::evaluate(selections, &QUIZ_QUESTIONS)?;
        log::info!(
            "Session {} scored {}/{}",
            id,
            attempt.score(),
            attempt.total()
        );

        let recorded = attempt.clone();
        self.update(id, move |state| {
            state.record_attempt(recorded);
        })
        .await?;
        Ok(attempt)
    }

    pub async fn increment_streak(&self, id: SessionId) -> AppResult<LearningStreak> {
        let state = self
            .update(id, |state| {
                state.learning_streak.increment();
            })
            .await?;
        log::debug!(
            "Session {} streak is now {}",
            id,
            state.learning_streak.count()
        );
        Ok(state.learning_streak)
    }

    pub async fn toggle_theme(&self, id: SessionId) -> AppResult<ThemePreference> {
        let state = self
            .update(id, |state| {
                state.toggle_theme();
            })
            .await?;
        log::debug!("Session {} switched to {:?} theme", id, state.theme);
        Ok(state.theme)
    }

    pub async fn set_learning_goal(&self, id: SessionId, goal: &str) -> AppResult<SessionState> {
        let goal = goal.to_string();
        self.update(id, move |state| state.set_learning_goal(&goal)).await
    }

    pub async fn set_today_complete(
        &self,
        id: SessionId,
        complete: bool,
    ) -> AppResult<SessionState> {
        self.update(id, move |state| state.today_complete = complete).await
    }

    /// Number of live sessions in the store.
    pub async fn active_sessions(&self) -> AppResult<usize> {
        self.repository.count().await
    }
}
