//! Virtual URL router.
//!
//! Classifies address-bar text into one of three routes, in fixed order:
//! 1. `navi://...` internal command paths,
//! 2. stored `.pw-navi` sites,
//! 3. ordinary external addresses (search, as given, or `https://` prepended).
//!
//! The router only decides; running internal commands is the dispatcher's job
//! and loading content is the rendering widget's.

mod address;
mod local;

use url::Url;

use crate::config::NaviConfig;
use crate::store::{is_site_domain, Store};

pub use address::{external_address, ExternalKind};
pub use local::{
    display_address, internal_base_url, site_base_url, LocalAddress, INTERNAL_HOST, SITE_HOST,
};

/// Prefix of the internal pseudo-protocol.
pub const INTERNAL_SCHEME: &str = "navi://";

/// Result of resolving address-bar text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Internal command path, without scheme or trailing slash.
    Internal { path: String },
    /// Stored site, rendered from memory under a synthetic base address.
    LocalSite {
        domain: String,
        title: String,
        html: String,
        base_url: String,
    },
    /// Hand the address to the rendering widget.
    External { kind: ExternalKind, url: String },
}

impl Route {
    /// Text shown in the address bar once this route is taken.
    pub fn address_bar_text(&self) -> String {
        match self {
            Route::Internal { path } => format!("{INTERNAL_SCHEME}{path}"),
            Route::LocalSite { domain, .. } => domain.clone(),
            Route::External { url, .. } => url.clone(),
        }
    }
}

/// Command path of `text` when it uses the internal scheme (case-insensitive).
/// Trailing slashes are dropped.
pub fn internal_path(text: &str) -> Option<&str> {
    let text = text.trim();
    let prefix = text.get(..INTERNAL_SCHEME.len())?;
    if !prefix.eq_ignore_ascii_case(INTERNAL_SCHEME) {
        return None;
    }
    Some(text[INTERNAL_SCHEME.len()..].trim_end_matches('/'))
}

/// Resolve free text from the address bar.
pub fn resolve(text: &str, store: &Store, config: &NaviConfig) -> Route {
    let text = text.trim();
    if text.is_empty() {
        let home = config.home_url.trim();
        if home.is_empty() {
            return Route::Internal {
                path: String::new(),
            };
        }
        return resolve_non_empty(home, store, config);
    }
    resolve_non_empty(text, store, config)
}

fn resolve_non_empty(text: &str, store: &Store, config: &NaviConfig) -> Route {
    if let Some(path) = internal_path(text) {
        return Route::Internal {
            path: path.to_string(),
        };
    }

    if is_site_domain(text) {
        let domain = text.to_ascii_lowercase();
        if let Some(site) = store.site(&domain) {
            return Route::LocalSite {
                base_url: site_base_url(&site.domain),
                domain: site.domain.clone(),
                title: site.title.clone(),
                html: site.html_content.clone(),
            };
        }
        tracing::debug!(domain = %domain, "no stored site; treating as external address");
    }

    let (kind, url) = external_address(text, &config.search_url);
    Route::External { kind, url }
}

/// What to do with an address the widget reports it navigated to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// A link into `navi://` or a stored site: resolve it like typed text.
    Reroute(String),
    /// Anything else: just show this text in the address bar.
    Show(String),
}

/// Classify a navigation reported by the rendering widget.
pub fn classify_navigation(address: &str, store: &Store) -> Navigation {
    if internal_path(address).is_some() {
        return Navigation::Reroute(address.trim().to_string());
    }
    if let Some(local) = LocalAddress::parse(address) {
        return Navigation::Show(local.display());
    }
    if let Ok(url) = Url::parse(address) {
        if let Some(host) = url.host_str() {
            if is_site_domain(host) && store.site(host).is_some() {
                return Navigation::Reroute(host.to_string());
            }
        }
    }
    Navigation::Show(address.to_string())
}
