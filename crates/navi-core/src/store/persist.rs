//! Persist the Store to disk (one JSON document under the XDG state dir).
//!
//! Loading never fails the caller: a missing or malformed document leaves the
//! defaults in place. Saving logs and carries on; it is not retried.

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::{domain_from_name, Extension, Site, Store, STORE_VERSION};

/// Location of the store document, or none for a purely in-memory session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreFile {
    path: Option<PathBuf>,
}

impl StoreFile {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A store file that never touches disk.
    pub fn in_memory() -> Self {
        Self { path: None }
    }

    /// Default path for the store file: `~/.local/state/navi/store.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("navi")?;
        Ok(xdg_dirs.get_state_home().join("store.json"))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load the store, falling back to defaults on any failure.
    pub fn load(&self) -> Store {
        let Some(path) = self.path.as_deref() else {
            return Store::default();
        };
        match Store::load_from_path(path) {
            Ok(Some(store)) => {
                if store.version() > STORE_VERSION {
                    tracing::warn!(
                        path = %path.display(),
                        version = store.version(),
                        "store was written by a newer version; loaded best-effort"
                    );
                }
                tracing::debug!(
                    path = %path.display(),
                    sites = store.site_count(),
                    "loaded store"
                );
                store
            }
            Ok(None) => {
                tracing::debug!(path = %path.display(), "no store file yet; using defaults");
                Store::default()
            }
            Err(e) => {
                tracing::warn!("could not load store, using defaults: {:#}", e);
                Store::default()
            }
        }
    }

    /// Write the store out. Failures are logged and swallowed.
    pub fn persist(&self, store: &Store) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        match store.save_to_path(path) {
            Ok(()) => tracing::debug!(path = %path.display(), "store saved"),
            Err(e) => tracing::warn!("could not save store: {:#}", e),
        }
    }
}

impl Store {
    /// Save the store to the given path (creates parent dir if needed).
    /// Writes a sibling `.tmp` file and renames it over the target.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serialize store")?;
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, json).with_context(|| format!("write store: {}", tmp.display()))?;
        std::fs::rename(&tmp, path)
            .with_context(|| format!("replace store: {}", path.display()))?;
        Ok(())
    }

    /// Load a store from the given path. Missing file yields None; unreadable
    /// or malformed JSON is an error (callers fall back to defaults).
    pub fn load_from_path(path: &Path) -> Result<Option<Store>> {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("read store: {}", path.display())),
        };
        let doc: Value = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse store: {}", path.display()))?;
        let store = Store::from_document(doc)
            .with_context(|| format!("parse store: {}", path.display()))?;
        Ok(Some(store))
    }

    /// Build a store from a parsed document, one top-level key at a time.
    ///
    /// A key that is missing, null or of the wrong shape keeps its default
    /// without affecting the others; within `sites` and `extensions` the same
    /// holds per entry. Site keys are normalized to `<name>.pw-navi` and
    /// entries whose key is not a valid site name are dropped. Map keys win
    /// over the `domain` / `name` stored inside each record.
    pub(crate) fn from_document(doc: Value) -> Result<Store> {
        let Value::Object(mut doc) = doc else {
            bail!("store document is not a JSON object");
        };
        let mut store = Store::default();

        if let Some(version) = take_field(&mut doc, "version") {
            store.version = version;
        }
        if let Some(proxy) = take_field(&mut doc, "proxy") {
            store.proxy = proxy;
        }
        if let Some(dark_mode) = take_field(&mut doc, "dark_mode") {
            store.dark_mode = dark_mode;
        }

        for (key, mut site) in take_entries::<Site>(&mut doc, "sites") {
            let domain = match domain_from_name(&key) {
                Ok(domain) => domain,
                Err(e) => {
                    tracing::warn!(key = %key, "dropping stored site: {}", e);
                    continue;
                }
            };
            if domain != key {
                tracing::debug!(key = %key, domain = %domain, "normalized stored site key");
            }
            site.domain.clone_from(&domain);
            if let Some(replaced) = store.sites.insert(domain, site) {
                tracing::warn!(domain = %replaced.domain, "duplicate stored site after normalizing; keeping the last");
            }
        }

        for (name, mut ext) in take_entries::<Extension>(&mut doc, "extensions") {
            ext.name.clone_from(&name);
            store.extensions.insert(name, ext);
        }

        Ok(store)
    }
}

/// Remove and decode one top-level field. Invalid values are logged and yield None.
fn take_field<T: DeserializeOwned>(doc: &mut Map<String, Value>, key: &str) -> Option<T> {
    let value = doc.remove(key)?;
    match serde_json::from_value(value) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(field = key, "ignoring invalid store field: {}", e);
            None
        }
    }
}

/// Decode a keyed map entry by entry, skipping the ones that do not decode.
fn take_entries<T: DeserializeOwned>(doc: &mut Map<String, Value>, key: &str) -> Vec<(String, T)> {
    let Some(entries) = take_field::<Map<String, Value>>(doc, key) else {
        return Vec::new();
    };
    entries
        .into_iter()
        .filter_map(|(name, value)| match serde_json::from_value(value) {
            Ok(v) => Some((name, v)),
            Err(e) => {
                tracing::warn!(field = key, entry = %name, "ignoring invalid store entry: {}", e);
                None
            }
        })
        .collect()
}
