use crate::{
    constants::content::{PERFECT_SCORE_MESSAGE, TAKE_QUIZ_FIRST_MESSAGE},
    models::domain::{QuizAttempt, QuizQuestion},
    views::{
        chart::{Bar, BarChart},
        components::{notice, NoticeKind},
    },
};

pub fn results_chart<'a>(attempt: &QuizAttempt, questions: &'a [QuizQuestion]) -> BarChart<'a> {
    BarChart {
        title: "Growth Mindset Quiz Results",
        y_label: "Correct Answers",
        bars: questions
            .iter()
            .zip(attempt.responses())
            .map(|(question, bit)| Bar {
                label: question.prompt,
                correct: *bit == 1,
            })
            .collect(),
    }
}

pub fn render(attempt: Option<&QuizAttempt>, questions: &[QuizQuestion]) -> String {
    let mut html = String::from("<h1>📈 Your Growth Mindset Progress</h1>\n");

    let Some(attempt) = attempt else {
        html.push_str(&notice(NoticeKind::Warning, TAKE_QUIZ_FIRST_MESSAGE));
        return html;
    };

    html.push_str(&results_chart(attempt, questions).to_svg());
    html.push_str("\n<h3>🏆 Achievements</h3>\n");
    if attempt.is_perfect() {
        html.push_str(&notice(NoticeKind::Success, PERFECT_SCORE_MESSAGE));
    }
    html
}
