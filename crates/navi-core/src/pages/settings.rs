//! Extension, proxy and settings pages.

use std::fmt::Write as _;

use crate::store::{ProxyKind, Store};

use super::layout::{attr, navi_href, text};
use super::Page;

pub fn extension_list(store: &Store) -> Page {
    let mut body = String::from("<h1>Extensions</h1>\n");
    let mut any = false;
    for ext in store.extensions() {
        if !any {
            body.push_str("<table>\n<tr><th>Name</th><th>State</th><th>Code</th><th></th></tr>\n");
            any = true;
        }
        let state = if ext.active { "active" } else { "disabled" };
        let toggle_label = if ext.active { "disable" } else { "enable" };
        let _ = writeln!(
            body,
            "<tr><td>{name}</td><td>{state}</td><td><code>{code}</code></td><td><a href=\"{toggle}\">{toggle_label}</a> &middot; <a href=\"{delete}\">delete</a></td></tr>",
            name = text(&ext.name),
            code = text(&ext.code),
            toggle = navi_href("cws/toggle", &[&ext.name]),
            delete = navi_href("cws/delete", &[&ext.name]),
        );
    }
    if any {
        body.push_str("</table>\n");
    } else {
        body.push_str("<p class=\"empty\">No extensions yet.</p>\n");
    }

    body.push_str(
        r#"<h2>Add extension</h2>
<p class="muted">Scripts run in every page after it loads, with full access to it.</p>
<form id="ext">
<label>Name <input id="ext-name" type="text"></label>
<label>Script <textarea id="ext-code"></textarea></label>
<button type="submit">Save</button>
</form>
<script>
document.getElementById('ext').addEventListener('submit', function (ev) {
  ev.preventDefault();
  var name = document.getElementById('ext-name').value.trim();
  var code = document.getElementById('ext-code').value;
  if (!name || !code) { alert('Name and script are required.'); return; }
  location.href = 'navi://cws/save/' + encodeURIComponent(name) + '/' + encodeURIComponent(code);
});
</script>"#,
    );
    Page::new("cws", "Extensions", store.dark_mode(), &body)
}

pub fn proxy_form(store: &Store) -> Page {
    let proxy = store.proxy();
    let mut options = String::new();
    for kind in ProxyKind::ALL {
        let selected = if kind == proxy.kind { " selected" } else { "" };
        let _ = write!(options, "<option value=\"{kind}\"{selected}>{kind}</option>");
    }
    let body = format!(
        r#"<h1>Proxy</h1>
<p class="muted">Settings are saved and the target opened directly; requests are not rerouted.</p>
<form id="proxy">
<label>Type <select id="proxy-type">{options}</select></label>
<label>Key <input id="proxy-key" type="text" value="{key}"></label>
<label>Address <input id="proxy-url" type="text" value="{url}"></label>
<button type="submit">Run</button>
</form>
<script>
document.getElementById('proxy').addEventListener('submit', function (ev) {{
  ev.preventDefault();
  var parts = ['proxy-type', 'proxy-key', 'proxy-url'].map(function (id) {{
    return encodeURIComponent(document.getElementById(id).value.trim());
  }});
  if (!parts[2]) {{ alert('Please enter an address.'); return; }}
  location.href = 'navi://proxy/run/' + parts.join('/');
}});
</script>"#,
        key = attr(&proxy.key),
        url = attr(&proxy.url),
    );
    Page::new("proxy", "Proxy", store.dark_mode(), &body)
}

pub fn settings(store: &Store) -> Page {
    let (state, next, label) = if store.dark_mode() {
        ("on", "off", "Switch to light")
    } else {
        ("off", "on", "Switch to dark")
    };
    let body = format!(
        "<h1>Settings</h1>\n<p>Dark mode is {state}. <a class=\"button\" href=\"{href}\">{label}</a></p>",
        href = navi_href("settings/dark", &[next]),
    );
    Page::new("settings", "Settings", store.dark_mode(), &body)
}
