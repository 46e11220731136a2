use crate::{
    constants::content::{SHARE_MESSAGE, TAKE_QUIZ_FIRST_MESSAGE},
    models::domain::{LearningStreak, QuizAttempt, SessionState},
    views::components::{code_block, metric, notice, NoticeKind},
};

pub struct DashboardView<'a> {
    pub attempt: Option<&'a QuizAttempt>,
    pub streak: LearningStreak,
    pub streak_updated: bool,
    pub share_url: &'a str,
}

impl<'a> DashboardView<'a> {
    pub fn from_state(state: &'a SessionState, share_url: &'a str) -> Self {
        Self {
            attempt: state.quiz_attempt.as_ref(),
            streak: state.learning_streak,
            streak_updated: false,
            share_url,
        }
    }
}

pub fn render(view: &DashboardView<'_>) -> String {
    let mut html = String::from("<h1>📊 My Personalized Dashboard</h1>\n");

    match view.attempt {
        Some(attempt) => {
            html.push_str(&metric(
                "📊 Last Quiz Score",
                &format!("{} / {}", attempt.score(), attempt.total()),
            ));
            html.push_str(&metric(
                "📅 Last Quiz Attempt",
                &attempt.attempted_on().format("%Y-%m-%d").to_string(),
            ));
        }
        None => html.push_str(&notice(NoticeKind::Warning, TAKE_QUIZ_FIRST_MESSAGE)),
    }

    html.push_str(
        r#"<form method="post" action="/dashboard/streak"><button type="submit">🔥 Keep My Streak Going!</button></form>"#,
    );
    if view.streak_updated {
        html.push_str(&notice(
            NoticeKind::Success,
            &format!(
                "Streak Updated! Current Streak: {} days! 🔥",
                view.streak.count()
            ),
        ));
    }
    html.push_str(&metric(
        "🔥 Learning Streak",
        &format!("{} days", view.streak.count()),
    ));

    html.push_str("\n<h3>📢 Share Your Progress</h3>\n");
    html.push_str(&format!("<p>{}</p>", SHARE_MESSAGE));
    html.push_str(&code_block(view.share_url));
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SHARE_URL: &str = "https://yourapp.com/share";

    #[test]
    fn without_attempt_dashboard_advises_taking_the_quiz() {
        let state = SessionState::default();
        let html = render(&DashboardView::from_state(&state, SHARE_URL));

        assert!(html.contains(TAKE_QUIZ_FIRST_MESSAGE));
        assert!(!html.contains("Last Quiz Score"));
        assert!(!html.contains("0 / 3"));
        assert!(html.contains("0 days"));
    }

    #[test]
    fn attempt_metrics_are_shown() {
        let mut state = SessionState::default();
        state.record_attempt(QuizAttempt::new(
            vec![1, 0, 1],
            NaiveDate::from_ymd_opt(2024, 9, 30).unwrap(),
        ));
        let html = render(&DashboardView::from_state(&state, SHARE_URL));

        assert!(html.contains("2 / 3"));
        assert!(html.contains("2024-09-30"));
        assert!(!html.contains(TAKE_QUIZ_FIRST_MESSAGE));
    }

    #[test]
    fn streak_update_notice_only_after_the_action() {
        let mut state = SessionState::default();
        state.learning_streak.increment();

        let idle = render(&DashboardView::from_state(&state, SHARE_URL));
        assert!(!idle.contains("Streak Updated!"));

        let view = DashboardView {
            streak_updated: true,
            ..DashboardView::from_state(&state, SHARE_URL)
        };
        let html = render(&view);
        assert!(html.contains("Streak Updated! Current Streak: 1 days! 🔥"));
        assert!(html.contains("1 days"));
    }

    #[test]
    fn share_link_is_rendered_as_code() {
        let state = SessionState::default();
        let html = render(&DashboardView::from_state(&state, SHARE_URL));

        assert!(html.contains("<pre><code>"));
        assert!(html.contains(SHARE_MESSAGE));
    }
}
