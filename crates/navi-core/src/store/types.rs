//! Records held by the store. Every field defaults on its own so a partial
//! document on disk keeps the defaults of whatever it omits.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A locally hosted site under the `.pw-navi` top-level domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    /// Unique key, always `<name>.pw-navi`. Immutable after creation.
    pub domain: String,
    pub title: String,
    pub html_content: String,
}

/// A named script injected into every loaded document while active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extension {
    pub name: String,
    pub code: String,
    pub active: bool,
}

impl Default for Extension {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            active: true,
        }
    }
}

/// Provider named by the proxy form. Purely cosmetic: no traffic is rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ProxyKind {
    #[default]
    Google,
    Cloudflare,
}

impl ProxyKind {
    pub const ALL: [ProxyKind; 2] = [ProxyKind::Google, ProxyKind::Cloudflare];

    pub fn as_str(self) -> &'static str {
        match self {
            ProxyKind::Google => "Google",
            ProxyKind::Cloudflare => "Cloudflare",
        }
    }
}

impl fmt::Display for ProxyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a proxy type name is neither `Google` nor `Cloudflare`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProxyKind(pub String);

impl fmt::Display for UnknownProxyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown proxy type `{}` (expected Google or Cloudflare)", self.0)
    }
}

impl std::error::Error for UnknownProxyKind {}

impl FromStr for ProxyKind {
    type Err = UnknownProxyKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProxyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownProxyKind(s.to_string()))
    }
}

/// Accepts any casing, like the `proxy/run` command does.
impl<'de> Deserialize<'de> for ProxyKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Singleton proxy settings, overwritten wholesale on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    #[serde(rename = "type")]
    pub kind: ProxyKind,
    pub key: String,
    pub url: String,
}
