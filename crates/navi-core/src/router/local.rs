//! Synthetic local addresses.
//!
//! Generated pages and stored sites are loaded into the rendering widget
//! under a `*.localhost` base address. The user never sees that wrapper:
//! [`display_address`] maps it back to `navi://<path>` or `<name>.pw-navi`.

use url::Url;

use super::INTERNAL_SCHEME;

/// Host used as base address for stored sites.
pub const SITE_HOST: &str = "pw-navi.localhost";

/// Host used as base address for generated internal pages.
pub const INTERNAL_HOST: &str = "navi.localhost";

/// Base address for a stored site: `http://pw-navi.localhost/<domain>/`.
pub fn site_base_url(domain: &str) -> String {
    format!("http://{SITE_HOST}/{}/", urlencoding::encode(domain))
}

/// Base address for an internal page: `http://navi.localhost/<path>`.
pub fn internal_base_url(path: &str) -> String {
    let encoded: Vec<String> = path
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("http://{INTERNAL_HOST}/{}", encoded.join("/"))
}

/// A synthetic address observed from the widget, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalAddress {
    Site { domain: String },
    Internal { path: String },
}

impl LocalAddress {
    /// Recognise a synthetic address; anything else is None.
    pub fn parse(address: &str) -> Option<Self> {
        let url = Url::parse(address).ok()?;
        if url.scheme() != "http" {
            return None;
        }
        let raw_path = url.path().trim_start_matches('/');
        match url.host_str()? {
            SITE_HOST => {
                let first = raw_path.split('/').next().unwrap_or_default();
                let domain = urlencoding::decode(first).ok()?.into_owned();
                if domain.is_empty() {
                    return None;
                }
                Some(LocalAddress::Site { domain })
            }
            INTERNAL_HOST => {
                let path = urlencoding::decode(raw_path).ok()?.into_owned();
                Some(LocalAddress::Internal {
                    path: path.trim_end_matches('/').to_string(),
                })
            }
            _ => None,
        }
    }

    /// User-facing form shown in the address bar.
    pub fn display(&self) -> String {
        match self {
            LocalAddress::Site { domain } => domain.clone(),
            LocalAddress::Internal { path } => format!("{INTERNAL_SCHEME}{path}"),
        }
    }
}

/// Address-bar text for an address reported by the widget.
pub fn display_address(address: &str) -> String {
    match LocalAddress::parse(address) {
        Some(local) => local.display(),
        None => address.to_string(),
    }
}
