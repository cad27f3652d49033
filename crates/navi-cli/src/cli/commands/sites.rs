//! `navi sites`, `navi site-add`, `navi site-remove` – manage personal sites.

use anyhow::{Context, Result};
use navi_core::command::InternalCommand;
use std::path::Path;

use crate::cli::Session;

pub fn run_sites(session: &Session) -> Result<()> {
    let store = session.store();
    if store.site_count() == 0 {
        println!("No personal sites.");
        return Ok(());
    }
    println!("{:<30} {:<8} {}", "DOMAIN", "BYTES", "TITLE");
    for site in store.sites() {
        println!(
            "{:<30} {:<8} {}",
            site.domain,
            site.html_content.len(),
            site.title
        );
    }
    Ok(())
}

/// Saves through the same command as the site editor, so name validation and
/// persistence match the window.
pub fn run_site_add(
    session: &mut Session,
    name: String,
    title: String,
    html: Option<String>,
    html_file: Option<&Path>,
) -> Result<()> {
    let html_content = match (html, html_file) {
        (Some(html), _) => html,
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("read html: {}", path.display()))?,
        (None, None) => String::new(),
    };
    session.execute(InternalCommand::SaveSite {
        name: name.clone(),
        title,
        html_content,
    })?;
    let domain = navi_core::store::domain_from_name(&name)?;
    println!("Saved {domain}");
    Ok(())
}

/// Domains match case-insensitively, like `navi://pw/delete/`.
pub fn run_site_remove(session: &mut Session, domain: String) -> Result<()> {
    let domain = domain.trim().to_ascii_lowercase();
    let existed = session.store().site(&domain).is_some();
    session.execute(InternalCommand::DeleteSite {
        domain: domain.clone(),
    })?;
    if existed {
        println!("Removed {domain}");
    } else {
        println!("No site {domain}");
    }
    Ok(())
}
