//! Application store: locally hosted sites, extensions, proxy settings and the
//! theme flag.
//!
//! The store is an owned value. The browser session holds it and passes it by
//! reference to the router and the command dispatcher; there is no global
//! state. Mutations happen in memory and are written out by
//! [`StoreFile::persist`] after every mutating command.

mod domain;
mod persist;
mod types;

use std::collections::BTreeMap;

use serde::Serialize;

pub use domain::{domain_from_name, is_site_domain, name_of, SITE_SUFFIX};
pub use persist::StoreFile;
pub use types::{Extension, ProxyKind, ProxySettings, Site, UnknownProxyKind};

/// Schema version written into every persisted document.
pub const STORE_VERSION: u32 = 1;

/// Full persisted application state. Loading goes through
/// `Store::from_document`, which defaults each top-level key on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Store {
    version: u32,
    sites: BTreeMap<String, Site>,
    extensions: BTreeMap<String, Extension>,
    proxy: ProxySettings,
    dark_mode: bool,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            sites: BTreeMap::new(),
            extensions: BTreeMap::new(),
            proxy: ProxySettings::default(),
            dark_mode: false,
        }
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schema version this store was loaded with.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Sites ordered by domain.
    pub fn sites(&self) -> impl Iterator<Item = &Site> {
        self.sites.values()
    }

    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    pub fn site(&self, domain: &str) -> Option<&Site> {
        self.sites.get(domain)
    }

    /// Insert or replace a site under its domain. Last write wins.
    pub fn upsert_site(&mut self, site: Site) -> Option<Site> {
        self.sites.insert(site.domain.clone(), site)
    }

    pub fn remove_site(&mut self, domain: &str) -> Option<Site> {
        self.sites.remove(domain)
    }

    /// Extensions ordered by name.
    pub fn extensions(&self) -> impl Iterator<Item = &Extension> {
        self.extensions.values()
    }

    pub fn extension(&self, name: &str) -> Option<&Extension> {
        self.extensions.get(name)
    }

    /// Active extensions ordered by name; this is the injection order.
    pub fn active_extensions(&self) -> impl Iterator<Item = &Extension> {
        self.extensions.values().filter(|ext| ext.active)
    }

    /// Upsert an extension. Saving always (re)activates it.
    pub fn save_extension(&mut self, name: &str, code: &str) -> Option<Extension> {
        self.extensions.insert(
            name.to_string(),
            Extension {
                name: name.to_string(),
                code: code.to_string(),
                active: true,
            },
        )
    }

    /// Flip `active`; returns the new value, or None when no such extension exists.
    pub fn toggle_extension(&mut self, name: &str) -> Option<bool> {
        let ext = self.extensions.get_mut(name)?;
        ext.active = !ext.active;
        Some(ext.active)
    }

    pub fn remove_extension(&mut self, name: &str) -> Option<Extension> {
        self.extensions.remove(name)
    }

    pub fn proxy(&self) -> &ProxySettings {
        &self.proxy
    }

    /// Overwrite the proxy settings wholesale.
    pub fn set_proxy(&mut self, proxy: ProxySettings) {
        self.proxy = proxy;
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = enabled;
    }
}

#[cfg(test)]
mod tests;
