use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default address opened by the home button and for empty input.
pub const DEFAULT_HOME_URL: &str = "navi://home";

/// Default search engine prefix; the `+`-joined query is appended verbatim.
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Global configuration loaded from `~/.config/navi/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaviConfig {
    /// Address opened by the home button and when the address bar is submitted empty.
    pub home_url: String,
    /// Address every new tab starts on.
    pub new_tab_url: String,
    /// Search engine prefix used for queries typed into the address bar.
    pub search_url: String,
    /// Window title shown by the shell.
    pub window_title: String,
    /// Optional override for the store file; defaults to `~/.local/state/navi/store.json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl Default for NaviConfig {
    fn default() -> Self {
        Self {
            home_url: DEFAULT_HOME_URL.to_string(),
            new_tab_url: DEFAULT_HOME_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            window_title: "Navi".to_string(),
            store_path: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("navi")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NaviConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<NaviConfig> {
    if !path.exists() {
        let default_cfg = NaviConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: NaviConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
