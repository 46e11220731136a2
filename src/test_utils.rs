use crate::{constants::questions::QUIZ_QUESTIONS, models::dto::request::answer_field};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Growth-oriented answer to every question
    pub fn all_correct_selections() -> Vec<String> {
        QUIZ_QUESTIONS
            .iter()
            .map(|q| q.correct_option().to_string())
            .collect()
    }

    /// Scores [0, 1, 0]
    pub fn mixed_selections() -> Vec<String> {
        vec![
            "The end of the road".to_string(),
            "Opportunities to grow".to_string(),
            "Pointless".to_string(),
        ]
    }

    /// Url-encoded quiz form pairs for the given selections
    pub fn quiz_form(selections: &[String]) -> Vec<(String, String)> {
        selections
            .iter()
            .enumerate()
            .map(|(i, s)| (answer_field(i), s.clone()))
            .collect()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_all_correct_selections() {
        assert_eq!(
            all_correct_selections(),
            [
                "A learning opportunity",
                "Opportunities to grow",
                "Essential for improvement"
            ]
        );
    }

    #[test]
    fn test_fixtures_quiz_form_names_fields_by_index() {
        let form = quiz_form(&mixed_selections());
        assert_eq!(form.len(), 3);
        assert_eq!(form[0].0, "answer-0");
        assert_eq!(form[2], ("answer-2".to_string(), "Pointless".to_string()));
    }
}
