//! `navi://` command path parsing.

use std::borrow::Cow;

use crate::error::CommandError;
use crate::store::{ProxyKind, ProxySettings};

/// Every page and action reachable under `navi://`. The namespace is closed:
/// anything else is [`CommandError::UnknownCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalCommand {
    Home,
    Info,
    Settings,
    SetDarkMode(bool),
    Sites,
    NewSite,
    OpenSite {
        domain: String,
    },
    EditSite {
        domain: String,
    },
    SaveSite {
        name: String,
        title: String,
        html_content: String,
    },
    DeleteSite {
        domain: String,
    },
    Extensions,
    SaveExtension {
        name: String,
        code: String,
    },
    ToggleExtension {
        name: String,
    },
    DeleteExtension {
        name: String,
    },
    Proxy,
    RunProxy(ProxySettings),
}

impl InternalCommand {
    /// Parse a command path (scheme and trailing slash already stripped).
    ///
    /// Arguments are percent-decoded. The last argument of `cws/save`,
    /// `pw/save` and `proxy/run` takes the rest of the path, so an unencoded
    /// `/` inside a script or address survives.
    pub fn parse(path: &str) -> Result<Self, CommandError> {
        let path = path.trim_end_matches('/');
        let command = match path {
            "" | "home" => InternalCommand::Home,
            "info" => InternalCommand::Info,
            "settings" => InternalCommand::Settings,
            "pw" => InternalCommand::Sites,
            "pw/new" => InternalCommand::NewSite,
            "cws" => InternalCommand::Extensions,
            "proxy" => InternalCommand::Proxy,
            _ => return parse_with_args(path),
        };
        Ok(command)
    }

    /// Short name used in logs and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            InternalCommand::Home => "home",
            InternalCommand::Info => "info",
            InternalCommand::Settings => "settings",
            InternalCommand::SetDarkMode(_) => "settings/dark",
            InternalCommand::Sites => "pw",
            InternalCommand::NewSite => "pw/new",
            InternalCommand::OpenSite { .. } => "pw/open",
            InternalCommand::EditSite { .. } => "pw/edit",
            InternalCommand::SaveSite { .. } => "pw/save",
            InternalCommand::DeleteSite { .. } => "pw/delete",
            InternalCommand::Extensions => "cws",
            InternalCommand::SaveExtension { .. } => "cws/save",
            InternalCommand::ToggleExtension { .. } => "cws/toggle",
            InternalCommand::DeleteExtension { .. } => "cws/delete",
            InternalCommand::Proxy => "proxy",
            InternalCommand::RunProxy(_) => "proxy/run",
        }
    }

    /// True for commands that change the store.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            InternalCommand::SetDarkMode(_)
                | InternalCommand::SaveSite { .. }
                | InternalCommand::DeleteSite { .. }
                | InternalCommand::SaveExtension { .. }
                | InternalCommand::ToggleExtension { .. }
                | InternalCommand::DeleteExtension { .. }
                | InternalCommand::RunProxy(_)
        )
    }
}

fn parse_with_args(path: &str) -> Result<InternalCommand, CommandError> {
    if let Some(rest) = path.strip_prefix("pw/open/") {
        return Ok(InternalCommand::OpenSite {
            domain: decode("pw/open", rest)?.to_ascii_lowercase(),
        });
    }
    if let Some(rest) = path.strip_prefix("pw/edit/") {
        return Ok(InternalCommand::EditSite {
            domain: decode("pw/edit", rest)?.to_ascii_lowercase(),
        });
    }
    if let Some(rest) = path.strip_prefix("pw/delete/") {
        return Ok(InternalCommand::DeleteSite {
            domain: decode("pw/delete", rest)?.to_ascii_lowercase(),
        });
    }
    if let Some(rest) = path.strip_prefix("pw/save/") {
        // Title and body may be blank, which drops them with the trailing slash.
        let mut parts = rest.splitn(3, '/');
        let name = parts.next().unwrap_or_default();
        let title = parts.next().unwrap_or_default();
        let html = parts.next().unwrap_or_default();
        return Ok(InternalCommand::SaveSite {
            name: decode("pw/save", name)?,
            title: decode("pw/save", title)?,
            html_content: decode("pw/save", html)?,
        });
    }
    if let Some(rest) = path.strip_prefix("cws/save/") {
        let [name, code] = split_args::<2>("cws/save", rest)?;
        let name = decode("cws/save", name)?;
        if name.trim().is_empty() {
            return Err(CommandError::invalid("cws/save", "extension name is empty"));
        }
        return Ok(InternalCommand::SaveExtension {
            name,
            code: decode("cws/save", code)?,
        });
    }
    if let Some(rest) = path.strip_prefix("cws/toggle/") {
        return Ok(InternalCommand::ToggleExtension {
            name: decode("cws/toggle", rest)?,
        });
    }
    if let Some(rest) = path.strip_prefix("cws/delete/") {
        return Ok(InternalCommand::DeleteExtension {
            name: decode("cws/delete", rest)?,
        });
    }
    if let Some(rest) = path.strip_prefix("proxy/run/") {
        let [kind, key, url] = split_args::<3>("proxy/run", rest)?;
        let kind: ProxyKind = decode("proxy/run", kind)?
            .parse()
            .map_err(|e: crate::store::UnknownProxyKind| {
                CommandError::invalid("proxy/run", e.to_string())
            })?;
        let url = decode("proxy/run", url)?;
        if url.trim().is_empty() {
            return Err(CommandError::invalid("proxy/run", "target address is empty"));
        }
        return Ok(InternalCommand::RunProxy(ProxySettings {
            kind,
            key: decode("proxy/run", key)?,
            url,
        }));
    }
    if let Some(rest) = path.strip_prefix("settings/dark/") {
        return match rest {
            "on" => Ok(InternalCommand::SetDarkMode(true)),
            "off" => Ok(InternalCommand::SetDarkMode(false)),
            other => Err(CommandError::invalid(
                "settings/dark",
                format!("expected on or off, got `{other}`"),
            )),
        };
    }
    Err(CommandError::UnknownCommand(path.to_string()))
}

/// Split into exactly `N` raw arguments; the last one keeps any further `/`.
fn split_args<'a, const N: usize>(
    command: &'static str,
    rest: &'a str,
) -> Result<[&'a str; N], CommandError> {
    let mut out = [""; N];
    let mut parts = rest.splitn(N, '/');
    for slot in out.iter_mut() {
        *slot = parts.next().ok_or_else(|| {
            CommandError::invalid(command, format!("expected {N} arguments"))
        })?;
    }
    Ok(out)
}

fn decode(command: &'static str, raw: &str) -> Result<String, CommandError> {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .map_err(|e| CommandError::invalid(command, format!("bad percent-encoding: {e}")))
}
