use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The latest quiz submission of a session. The score is derived from the
/// responses on every read and cannot be set on its own. Attempts are only
/// built by grading, so there is one response per question.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttempt {
    responses: Vec<u8>,
    attempted_on: NaiveDate,
}

impl QuizAttempt {
    pub(crate) fn new(responses: Vec<u8>, attempted_on: NaiveDate) -> Self {
        debug_assert!(responses.iter().all(|bit| *bit <= 1));
        Self {
            responses,
            attempted_on,
        }
    }

    pub fn responses(&self) -> &[u8] {
        &self.responses
    }

    pub fn score(&self) -> u32 {
        self.responses.iter().map(|bit| u32::from(*bit)).sum()
    }

    pub fn total(&self) -> u32 {
        self.responses.len() as u32
    }

    pub fn is_perfect(&self) -> bool {
        !self.responses.is_empty() && self.score() == self.total()
    }

    pub fn attempted_on(&self) -> NaiveDate {
        self.attempted_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).expect("valid date")
    }

    #[test]
    fn score_is_the_sum_of_responses() {
        let attempt = QuizAttempt::new(vec![0, 1, 0], day());

        assert_eq!(attempt.score(), 1);
        assert_eq!(attempt.total(), 3);
        assert!(!attempt.is_perfect());
    }

    #[test]
    fn all_correct_attempt_is_perfect() {
        let attempt = QuizAttempt::new(vec![1, 1, 1], day());

        assert_eq!(attempt.score(), 3);
        assert!(attempt.is_perfect());
    }

    #[test]
    fn attempt_keeps_its_date() {
        let attempt = QuizAttempt::new(vec![1, 0, 1], day());
        assert_eq!(attempt.attempted_on().to_string(), "2024-03-14");
    }
}
