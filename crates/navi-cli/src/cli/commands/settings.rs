//! `navi dark-mode`, `navi inject` – theme switch and extension preview.

use anyhow::Result;
use navi_core::inject;

use crate::cli::Session;

pub fn run_dark_mode(session: &mut Session, enabled: bool) -> Result<()> {
    session.set_dark_mode(enabled)?;
    println!("Dark mode {}", if enabled { "on" } else { "off" });
    Ok(())
}

pub fn run_inject(session: &Session) -> Result<()> {
    let scripts = inject::scripts_for(session.store());
    if scripts.is_empty() {
        println!("No active extensions.");
    }
    for script in scripts {
        println!("{script}");
        println!();
    }
    Ok(())
}
