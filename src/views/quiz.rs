use crate::{
    constants::content::{KEEP_PRACTICING_MESSAGE, STRONG_MINDSET_MESSAGE},
    models::{
        domain::{QuizAttempt, QuizQuestion},
        dto::request::answer_field,
    },
    views::components::{escape, notice, NoticeKind},
};

pub struct QuizView<'a> {
    pub questions: &'a [QuizQuestion],
    /// Options to pre-select; the first option of each question when absent.
    pub selections: Option<&'a [String]>,
    pub result: Option<&'a QuizAttempt>,
}

impl<'a> QuizView<'a> {
    fn selected(&self, index: usize, question: &QuizQuestion) -> &'a str {
        self.selections
            .and_then(|selections| selections.get(index))
            .map(String::as_str)
            .unwrap_or(question.default_option())
    }
}

pub fn render(view: &QuizView<'_>) -> String {
    let mut html = String::from("<h1>🧠 Growth Mindset Quiz</h1>\n<form method=\"post\" action=\"/quiz\">\n");

    for (index, question) in view.questions.iter().enumerate() {
        let field = answer_field(index);
        let selected = view.selected(index, question);

        html.push_str(&format!("<fieldset>\n<legend>{}</legend>\n", escape(question.prompt)));
        for option in question.options {
            let checked = if option == selected { " checked" } else { "" };
            html.push_str(&format!(
                r#"<label><input type="radio" name="{field}" value="{value}"{checked}> {value}</label><br>
"#,
                value = escape(option),
            ));
        }
        html.push_str("</fieldset>\n");
    }
    html.push_str("<button type=\"submit\">📊 See My Growth Mindset Score</button>\n</form>\n");

    if let Some(attempt) = view.result {
        html.push_str(&notice(
            NoticeKind::Success,
            &format!(
                "Your Growth Mindset Score: {} / {} 🎉",
                attempt.score(),
                attempt.total()
            ),
        ));
        let message = if attempt.is_perfect() {
            STRONG_MINDSET_MESSAGE
        } else {
            KEEP_PRACTICING_MESSAGE
        };
        html.push_str(&format!("<p>{}</p>", message));
    }

    html
}
