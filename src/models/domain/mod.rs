pub mod learning_streak;
pub mod page;
pub mod quiz_attempt;
pub mod quiz_question;
pub mod session_state;
pub mod theme;
pub use learning_streak::LearningStreak;
pub use page::Page;
pub use quiz_attempt::QuizAttempt;
pub use quiz_question::QuizQuestion;
pub use session_state::{SessionId, SessionState};
pub use theme::ThemePreference;
