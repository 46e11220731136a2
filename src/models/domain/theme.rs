use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

/// Colors applied to the page shell for a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub page_background: &'static str,
    pub app_background: &'static str,
    pub text: &'static str,
}

const DARK_PALETTE: Palette = Palette {
    page_background: "#1e1e1e",
    app_background: "#1e1e1e",
    text: "white",
};

const LIGHT_PALETTE: Palette = Palette {
    page_background: "white",
    app_background: "rgb(208, 183, 250)",
    text: "black",
};

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemePreference::Dark => DARK_PALETTE,
            ThemePreference::Light => LIGHT_PALETTE,
        }
    }

    /// Label of the control that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemePreference::Dark => "☀️ Light Mode",
            ThemePreference::Light => "🌙 Dark Mode",
        }
    }
}
