use strum::{Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Page {
    #[default]
    Home,
    Quiz,
    Progress,
    Dashboard,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Quiz => "/quiz",
            Page::Progress => "/progress",
            Page::Dashboard => "/dashboard",
        }
    }

    /// Parses a page name coming back from a form, falling back to Home.
    pub fn from_form_value(value: Option<&str>) -> Self {
        value
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }
}
