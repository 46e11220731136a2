use chrono::{Local, NaiveDate};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QuizAttempt, QuizQuestion},
};

pub struct QuizService;

impl QuizService {
    /// Grade the selections against the questions, dated today.
    pub fn evaluate<S: AsRef<str>>(
        selections: &[S],
        questions: &[QuizQuestion],
    ) -> AppResult<QuizAttempt> {
        Self::evaluate_on(selections, questions, Local::now().date_naive())
    }

    /// Grade the selections against the questions with an explicit attempt date.
    pub fn evaluate_on<S: AsRef<str>>(
        selections: &[S],
        questions: &[QuizQuestion],
        attempted_on: NaiveDate,
    ) -> AppResult<QuizAttempt> {
        if selections.len() != questions.len() {
            return Err(AppError::ValidationError(format!(
                "Expected {} answers, got {}",
                questions.len(),
                selections.len()
            )));
        }

        let responses = questions
            .iter()
            .zip(selections)
            .map(|(question, selection)| Self::grade_question(question, selection.as_ref()))
            .collect();

        Ok(QuizAttempt::new(responses, attempted_on))
    }

    fn grade_question(question: &QuizQuestion, selection: &str) -> u8 {
        u8::from(question.is_correct(selection))
    }
}
