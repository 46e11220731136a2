use strum::IntoEnumIterator;

use crate::{
    constants::content::{APP_TITLE, FOOTER_MARKDOWN},
    models::domain::{Page, ThemePreference},
    views::components::markdown,
};

fn stylesheet(theme: ThemePreference) -> String {
    let palette = theme.palette();
    format!(
        "body {{ margin: 0; font-family: sans-serif; background-color: {page}; color: {text}; }}\n\
         .app {{ display: flex; min-height: 100vh; background-color: {app}; color: {text}; }}\n\
         .sidebar {{ width: 14rem; padding: 1.5rem; border-right: 1px solid currentColor; }}\n\
         .sidebar a {{ color: inherit; }}\n\
         .sidebar a[aria-current=\"page\"] {{ font-weight: bold; }}\n\
         main {{ flex: 1; padding: 2rem 3rem; max-width: 60rem; }}\n\
         .notice {{ padding: 0.75rem 1rem; margin: 1rem 0; border-radius: 0.5rem; }}\n\
         .notice-success {{ background: rgba(76, 175, 80, 0.25); }}\n\
         .notice-warning {{ background: rgba(255, 193, 7, 0.3); }}\n\
         .metric {{ margin: 1rem 0; }}\n\
         .metric-label {{ font-size: 0.9rem; opacity: 0.8; }}\n\
         .metric-value {{ font-size: 2rem; }}\n\
         .chart {{ max-width: 100%; height: auto; }}\n",
        page = palette.page_background,
        app = palette.app_background,
        text = palette.text,
    )
}

fn navigation(current: Page) -> String {
    Page::iter()
        .map(|page| {
            let marker = if page == current {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(r#"<li><a href="{}"{}>{}</a></li>"#, page.path(), marker, page)
        })
        .collect()
}

/// Wraps a page body with the sidebar, theme styles and footer.
pub fn page_shell(page: Page, theme: ThemePreference, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{page} · {title}</title>
<style>
{style}</style>
</head>
<body data-theme="{theme}">
<div class="app">
<aside class="sidebar">
<h2>📌 Navigation</h2>
<nav><ul>{nav}</ul></nav>
<form method="post" action="/theme">
<input type="hidden" name="return_to" value="{page}">
<button type="submit">{toggle}</button>
</form>
</aside>
<main>
{body}
<hr>
<footer>{footer}</footer>
</main>
</div>
</body>
</html>
"#,
        title = APP_TITLE,
        style = stylesheet(theme),
        theme = if theme == ThemePreference::Dark { "dark" } else { "light" },
        nav = navigation(page),
        toggle = theme.toggle_label(),
        footer = markdown(FOOTER_MARKDOWN),
    )
}
