use pulldown_cmark::{html, Parser};

/// Escapes untrusted text for use in HTML content or attributes.
pub fn escape(text: &str) -> String {
    ammonia::clean_text(text)
}

pub fn markdown(source: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(source));
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Warning => "notice notice-warning",
        }
    }
}

/// Callers pass markup; escape user text before handing it in.
pub fn notice(kind: NoticeKind, html: &str) -> String {
    format!(r#"<div class="{}" role="status">{}</div>"#, kind.class(), html)
}

pub fn metric(label: &str, value: &str) -> String {
    format!(
        r#"<div class="metric"><div class="metric-label">{}</div><div class="metric-value">{}</div></div>"#,
        label, value
    )
}

pub fn code_block(text: &str) -> String {
    format!("<pre><code>{}</code></pre>", escape(text))
}
