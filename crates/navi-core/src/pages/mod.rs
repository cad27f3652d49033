//! HTML for the `navi://` pages.
//!
//! Every stored string (site titles, extension names and code, proxy values)
//! is escaped before it lands in a generated page. Stored site HTML is only
//! ever rendered as its own document, never spliced into these pages.

mod layout;
mod settings;
mod sites;

use crate::config::NaviConfig;
use crate::store::Store;

use layout::{attr, document, text};

pub use settings::{extension_list, proxy_form, settings};
pub use sites::{site_editor, site_list};

/// A generated page and the command path it is shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Command path shown in the address bar as `navi://<path>`.
    pub path: String,
    pub title: String,
    pub html: String,
}

impl Page {
    fn new(path: impl Into<String>, title: &str, dark: bool, body: &str) -> Self {
        Self {
            path: path.into(),
            title: title.to_string(),
            html: document(title, dark, body),
        }
    }
}

pub fn home(store: &Store, config: &NaviConfig) -> Page {
    let body = format!(
        r#"<h1>Navi</h1>
<form id="search" data-search="{search}">
<input id="q" type="text" placeholder="Search or type an address" autofocus>
</form>
<p><a href="navi://pw">{sites} personal site(s)</a> &middot; <a href="navi://cws">{exts} active extension(s)</a></p>
<script>
document.getElementById('search').addEventListener('submit', function (ev) {{
  ev.preventDefault();
  var q = document.getElementById('q').value.trim();
  if (!q) return;
  var base = this.dataset.search;
  location.href = base + q.split(' ').map(encodeURIComponent).join('+');
}});
</script>"#,
        search = attr(&config.search_url),
        sites = store.site_count(),
        exts = store.active_extensions().count(),
    );
    Page::new("home", "Home", store.dark_mode(), &body)
}

pub fn info(store: &Store) -> Page {
    let body = format!(
        r#"<h1>About Navi</h1>
<p>Version {version}</p>
<p>Navi is a small browser shell. Pages are rendered by the embedded web view; Navi adds:</p>
<ul>
<li><b>Personal sites</b>: HTML pages stored on this machine under the <code>.pw-navi</code> domain.</li>
<li><b>Extensions</b>: scripts run in every page after it loads. They run with full page access; only add code you trust.</li>
<li><b>Proxy settings</b>: saved for reference only. Traffic is not rerouted.</li>
</ul>"#,
        version = text(env!("CARGO_PKG_VERSION")),
    );
    Page::new("info", "About", store.dark_mode(), &body)
}
