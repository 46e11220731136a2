use crate::{
    constants::content::{
        APP_TITLE, DAILY_COMPLETE_MESSAGE, HOME_INTRO_MARKDOWN, HOME_SUBTITLE, MAX_GOAL_LENGTH,
    },
    models::domain::SessionState,
    views::components::{escape, markdown, notice, NoticeKind},
};

pub struct HomeView<'a> {
    pub learning_goal: Option<&'a str>,
    pub today_complete: bool,
    pub motivation: Option<&'a str>,
}

impl<'a> HomeView<'a> {
    pub fn from_state(state: &'a SessionState) -> Self {
        Self {
            learning_goal: state.learning_goal.as_deref(),
            today_complete: state.today_complete,
            motivation: None,
        }
    }

    pub fn with_motivation(mut self, message: &'a str) -> Self {
        self.motivation = Some(message);
        self
    }
}

pub fn render(view: &HomeView<'_>) -> String {
    let mut html = format!(
        "<h1>{}</h1>\n<h3>{}</h3>\n{}",
        APP_TITLE,
        HOME_SUBTITLE,
        markdown(HOME_INTRO_MARKDOWN)
    );

    html.push_str(
        r#"<form method="post" action="/motivation"><button type="submit">💡 Get a Motivation Boost!</button></form>"#,
    );
    if let Some(message) = view.motivation {
        html.push_str(&notice(NoticeKind::Success, &escape(message)));
    }

    let goal_value = view.learning_goal.map(escape).unwrap_or_default();
    html.push_str(&format!(
        r#"
<h3>📌 Set Your Learning Goal</h3>
<form method="post" action="/goal">
<label for="goal">What new skill or habit do you want to develop?</label>
<input id="goal" name="goal" type="text" maxlength="{}" value="{}">
<button type="submit">Save goal</button>
</form>"#,
        MAX_GOAL_LENGTH, goal_value
    ));
    if let Some(goal) = view.learning_goal {
        html.push_str(&format!(
            "<p>Awesome! Keep working on <code>{}</code> and stay consistent! 🎯</p>",
            escape(goal)
        ));
    }

    let checked = if view.today_complete { " checked" } else { "" };
    html.push_str(&format!(
        r#"
<h3>📆 Track Your Progress</h3>
<form method="post" action="/complete">
<label><input type="checkbox" name="complete"{} onchange="this.form.submit()"> Mark today's learning as complete</label>
<noscript><button type="submit">Update</button></noscript>
</form>"#,
        checked
    ));
    if view.today_complete {
        html.push_str(&notice(NoticeKind::Success, DAILY_COMPLETE_MESSAGE));
    }

    html
}
