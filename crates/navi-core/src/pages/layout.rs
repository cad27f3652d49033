//! Shared page chrome and escaping helpers.

use std::borrow::Cow;

const STYLE: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; background: #f6f6f4; color: #1d1d1f; }
[data-theme="dark"] body { background: #17181a; color: #e6e6e6; }
nav { display: flex; gap: 14px; padding: 10px 18px; border-bottom: 1px solid #d0d0cc; }
[data-theme="dark"] nav { border-color: #2c2d30; }
nav a { color: inherit; text-decoration: none; opacity: 0.8; }
nav a:hover { opacity: 1; }
main { max-width: 760px; margin: 28px auto; padding: 0 18px; }
table { width: 100%; border-collapse: collapse; }
td, th { text-align: left; padding: 6px 8px; border-bottom: 1px solid #d0d0cc; }
[data-theme="dark"] td, [data-theme="dark"] th { border-color: #2c2d30; }
input, textarea, select { width: 100%; padding: 6px; margin: 4px 0 12px; font: inherit; }
textarea { min-height: 160px; font-family: ui-monospace, monospace; }
button, .button { padding: 6px 14px; cursor: pointer; }
.muted { opacity: 0.65; }
.empty { font-style: italic; opacity: 0.65; }
"#;

const NAV: &str = r#"<a href="navi://home">Home</a>
<a href="navi://pw">Sites</a>
<a href="navi://cws">Extensions</a>
<a href="navi://proxy">Proxy</a>
<a href="navi://settings">Settings</a>
<a href="navi://info">About</a>"#;

/// Wraps `body` in the common document, styled for the current theme.
pub(super) fn document(title: &str, dark: bool, body: &str) -> String {
    let theme = if dark { "dark" } else { "light" };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"{theme}\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n<nav>{nav}</nav>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = text(title),
        style = STYLE,
        nav = NAV,
    )
}

/// Escape for element content.
pub(super) fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

/// Escape for a double-quoted attribute value.
pub(super) fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// `navi://` link to `command` with each argument percent-encoded, ready for an attribute.
pub(super) fn navi_href(command: &str, args: &[&str]) -> String {
    let mut href = format!("navi://{command}");
    for arg in args {
        href.push('/');
        href.push_str(&urlencoding::encode(arg));
    }
    attr(&href).into_owned()
}
