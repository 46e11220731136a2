use serde::Serialize;

/// A fixed two-option question. `options[0]` is the fixed-mindset answer,
/// `options[1]` the growth-oriented one that scores a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [&'static str; 2],
}

impl QuizQuestion {
    pub const fn new(prompt: &'static str, incorrect: &'static str, correct: &'static str) -> Self {
        Self {
            prompt,
            options: [incorrect, correct],
        }
    }

    pub fn correct_option(&self) -> &'static str {
        self.options[1]
    }

    /// Option pre-selected when the quiz form is first shown.
    pub fn default_option(&self) -> &'static str {
        self.options[0]
    }

    pub fn has_option(&self, text: &str) -> bool {
        self.options.iter().any(|option| *option == text)
    }

    pub fn is_correct(&self, selection: &str) -> bool {
        selection == self.correct_option()
    }
}
