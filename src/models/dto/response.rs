use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::domain::{QuizAttempt, SessionState, ThemePreference};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAttemptDto {
    pub responses: Vec<u8>,
    pub score: u32,
    pub total: u32,
    pub perfect: bool,
    pub attempted_on: NaiveDate,
}

impl From<&QuizAttempt> for QuizAttemptDto {
    fn from(attempt: &QuizAttempt) -> Self {
        QuizAttemptDto {
            responses: attempt.responses().to_vec(),
            score: attempt.score(),
            total: attempt.total(),
            perfect: attempt.is_perfect(),
            attempted_on: attempt.attempted_on(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshotDto {
    pub theme: ThemePreference,
    pub quiz: Option<QuizAttemptDto>,
    pub learning_streak: u32,
    pub learning_goal: Option<String>,
    pub today_complete: bool,
}

impl From<&SessionState> for SessionSnapshotDto {
    fn from(state: &SessionState) -> Self {
        SessionSnapshotDto {
            theme: state.theme,
            quiz: state.quiz_attempt.as_ref().map(QuizAttemptDto::from),
            learning_streak: state.learning_streak.count(),
            learning_goal: state.learning_goal.clone(),
            today_complete: state.today_complete,
        }
    }
}
