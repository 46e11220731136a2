use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Page, QuizQuestion};

/// Form field carrying the selected option of question `index`.
pub fn answer_field(index: usize) -> String {
    format!("answer-{}", index)
}

/// Raw url-encoded quiz form, kept as pairs so the field set follows the
/// question list.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct QuizSubmissionRequest(pub Vec<(String, String)>);

impl QuizSubmissionRequest {
    /// Selections in question order. Every question needs exactly one of its
    /// own options.
    pub fn selections(&self, questions: &[QuizQuestion]) -> AppResult<Vec<String>> {
        questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let field = answer_field(index);
                let selection = self
                    .0
                    .iter()
                    .find(|(name, _)| *name == field)
                    .map(|(_, value)| value.as_str())
                    .ok_or_else(|| AppError::ValidationError(format!("{} is missing", field)))?;

                if !question.has_option(selection) {
                    return Err(AppError::ValidationError(format!(
                        "'{}' is not an option for \"{}\"",
                        selection, question.prompt
                    )));
                }
                Ok(selection.to_string())
            })
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LearningGoalRequest {
    #[validate(length(max = 200, message = "Learning goal must be at most 200 characters"))]
    pub goal: String,
}

/// Checkbox form: the field is only present when the box is ticked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyCompletionRequest {
    #[serde(default)]
    pub complete: Option<String>,
}

impl DailyCompletionRequest {
    pub fn is_complete(&self) -> bool {
        self.complete.is_some()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeToggleRequest {
    #[serde(default)]
    pub return_to: Option<String>,
}

impl ThemeToggleRequest {
    pub fn return_page(&self) -> Page {
        Page::from_form_value(self.return_to.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::questions::QUIZ_QUESTIONS;

    fn submission(values: &[&str]) -> QuizSubmissionRequest {
        QuizSubmissionRequest(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| (answer_field(i), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn selections_follow_question_order() {
        let request = QuizSubmissionRequest(vec![
            (answer_field(2), "Pointless".to_string()),
            (answer_field(0), "A learning opportunity".to_string()),
            (answer_field(1), "Opportunities to grow".to_string()),
        ]);

        let selections = request.selections(&QUIZ_QUESTIONS).unwrap();
        assert_eq!(
            selections,
            ["A learning opportunity", "Opportunities to grow", "Pointless"]
        );
    }

    #[test]
    fn missing_answer_is_rejected() {
        let request = submission(&["A learning opportunity", "Opportunities to grow"]);

        let err = request.selections(&QUIZ_QUESTIONS).unwrap_err();
        assert!(err.to_string().contains("answer-2 is missing"));
    }

    #[test]
    fn foreign_option_is_rejected() {
        let request = submission(&["A learning opportunity", "Pointless", "Pointless"]);

        assert!(matches!(
            request.selections(&QUIZ_QUESTIONS),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn long_learning_goal_fails_validation() {
        let request = LearningGoalRequest {
            goal: "x".repeat(201),
        };
        assert!(request.validate().is_err());

        let request = LearningGoalRequest {
            goal: "Practice piano daily".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn checkbox_presence_means_complete() {
        assert!(DailyCompletionRequest {
            complete: Some("on".to_string())
        }
        .is_complete());
        assert!(!DailyCompletionRequest::default().is_complete());
    }

    #[test]
    fn theme_toggle_returns_to_named_page() {
        let request = ThemeToggleRequest {
            return_to: Some("Dashboard".to_string()),
        };
        assert_eq!(request.return_page(), Page::Dashboard);
        assert_eq!(ThemeToggleRequest::default().return_page(), Page::Home);
    }
}
