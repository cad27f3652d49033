//! Personal site list and editor.

use std::fmt::Write as _;

use crate::command::SiteForm;
use crate::store::{domain_from_name, Store};

use super::layout::{attr, navi_href, text};
use super::Page;

pub fn site_list(store: &Store) -> Page {
    let mut body = String::from(
        "<h1>Personal sites</h1>\n<p><a class=\"button\" href=\"navi://pw/new\">New site</a></p>\n",
    );
    if store.site_count() == 0 {
        body.push_str("<p class=\"empty\">No sites yet.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Domain</th><th>Title</th><th></th></tr>\n");
        for site in store.sites() {
            let _ = writeln!(
                body,
                "<tr><td><a href=\"{open}\">{domain}</a></td><td>{title}</td><td><a href=\"{edit}\">edit</a> &middot; <a href=\"{delete}\">delete</a></td></tr>",
                open = navi_href("pw/open", &[&site.domain]),
                domain = text(&site.domain),
                title = text(&site.title),
                edit = navi_href("pw/edit", &[&site.domain]),
                delete = navi_href("pw/delete", &[&site.domain]),
            );
        }
        body.push_str("</table>\n");
    }
    Page::new("pw", "Personal sites", store.dark_mode(), &body)
}

/// Editor page. A locked form shows the name but does not let it change.
pub fn site_editor(form: &SiteForm, store: &Store) -> Page {
    let path = match (form.domain_locked, domain_from_name(&form.name)) {
        (true, Ok(domain)) => format!("pw/edit/{domain}"),
        _ => "pw/new".to_string(),
    };
    let heading = if form.domain_locked { "Edit site" } else { "New site" };
    let disabled = if form.domain_locked { " disabled" } else { "" };

    let body = format!(
        r#"<h1>{heading}</h1>
<form id="site">
<label>Name <span class="muted">(.pw-navi is added for you)</span>
<input id="name" type="text" value="{name}"{disabled}></label>
<label>Title <input id="title" type="text" value="{title}"></label>
<label>HTML <textarea id="html">{html}</textarea></label>
<button type="submit">Save</button> <a href="navi://pw">Cancel</a>
</form>
<script>
document.getElementById('site').addEventListener('submit', function (ev) {{
  ev.preventDefault();
  var name = document.getElementById('name').value.trim();
  if (!name) {{ alert('Please enter a site name.'); return; }}
  var title = document.getElementById('title').value;
  var html = document.getElementById('html').value;
  location.href = 'navi://pw/save/' + [name, title, html].map(encodeURIComponent).join('/');
}});
</script>"#,
        name = attr(&form.name),
        title = attr(&form.title),
        html = text(&form.html_content),
    );
    Page::new(path, heading, store.dark_mode(), &body)
}
