use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{LearningStreak, QuizAttempt, ThemePreference};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Everything one browser session knows about its user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionState {
    pub theme: ThemePreference,
    pub quiz_attempt: Option<QuizAttempt>,
    pub learning_streak: LearningStreak,
    pub learning_goal: Option<String>,
    pub today_complete: bool,
}

impl SessionState {
    /// Replaces any previous attempt; only the latest one is kept.
    pub fn record_attempt(&mut self, attempt: QuizAttempt) -> &QuizAttempt {
        self.quiz_attempt.insert(attempt)
    }

    pub fn toggle_theme(&mut self) -> ThemePreference {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Stores the trimmed goal; blank input clears it.
    pub fn set_learning_goal(&mut self, goal: &str) {
        let goal = goal.trim();
        self.learning_goal = if goal.is_empty() {
            None
        } else {
            Some(goal.to_string())
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn attempt(responses: Vec<u8>) -> QuizAttempt {
        QuizAttempt::new(
            responses,
            NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid date"),
        )
    }

    #[test]
    fn new_session_starts_dark_and_empty() {
        let state = SessionState::default();

        assert_eq!(state.theme, ThemePreference::Dark);
        assert!(state.quiz_attempt.is_none());
        assert_eq!(state.learning_streak.count(), 0);
        assert!(state.learning_goal.is_none());
        assert!(!state.today_complete);
    }

    #[test]
    fn recording_an_attempt_overwrites_the_previous_one() {
        let mut state = SessionState::default();
        state.record_attempt(attempt(vec![0, 0, 0]));
        state.record_attempt(attempt(vec![1, 1, 0]));

        let latest = state.quiz_attempt.as_ref().expect("attempt stored");
        assert_eq!(latest.responses(), &[1, 1, 0]);
        assert_eq!(latest.score(), 2);
    }

    #[test]
    fn toggling_theme_leaves_quiz_and_streak_alone() {
        let mut state = SessionState::default();
        state.record_attempt(attempt(vec![1, 0, 1]));
        state.learning_streak.increment();
        let before = state.clone();

        assert_eq!(state.toggle_theme(), ThemePreference::Light);

        assert_eq!(state.quiz_attempt, before.quiz_attempt);
        assert_eq!(state.learning_streak, before.learning_streak);
    }

    #[test]
    fn blank_learning_goal_clears_it() {
        let mut state = SessionState::default();

        state.set_learning_goal("  Learn Rust  ");
        assert_eq!(state.learning_goal.as_deref(), Some("Learn Rust"));

        state.set_learning_goal("   ");
        assert!(state.learning_goal.is_none());
    }

    #[test]
    fn session_id_round_trips_through_its_string_form() {
        let id = SessionId::new();
        assert_eq!(SessionId::parse(&id.to_string()), Some(id));
        assert_eq!(SessionId::parse("not-a-uuid"), None);
    }
}
