//! `navi proxy [--set TYPE KEY URL]` – show or replace the proxy settings.

use anyhow::{bail, Result};
use navi_core::command::{InternalCommand, Outcome};
use navi_core::store::{ProxyKind, ProxySettings};

use crate::cli::Session;

pub fn run_proxy(session: &mut Session, set: Option<Vec<String>>) -> Result<()> {
    if let Some(values) = set {
        let [kind, key, url] = <[String; 3]>::try_from(values)
            .map_err(|v| anyhow::anyhow!("--set takes TYPE KEY URL, got {} value(s)", v.len()))?;
        let kind: ProxyKind = kind.parse()?;
        if url.is_empty() {
            bail!("proxy url must not be empty");
        }
        let outcome = session.execute(InternalCommand::RunProxy(ProxySettings { kind, key, url }))?;
        if let Outcome::Navigate { notice, .. } = outcome {
            println!("{notice}");
        }
        return Ok(());
    }

    let proxy = session.store().proxy();
    println!("type  {}", proxy.kind);
    println!("key   {}", proxy.key);
    println!("url   {}", proxy.url);
    Ok(())
}
