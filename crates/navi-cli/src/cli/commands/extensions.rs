//! `navi extensions`, `navi ext-add`, `navi ext-toggle`, `navi ext-remove` – manage extensions.

use anyhow::Result;
use navi_core::command::InternalCommand;

use crate::cli::Session;

pub fn run_extensions(session: &Session) -> Result<()> {
    let mut exts = session.store().extensions().peekable();
    if exts.peek().is_none() {
        println!("No extensions.");
        return Ok(());
    }
    println!("{:<24} {:<8} {}", "NAME", "STATE", "BYTES");
    for ext in exts {
        let state = if ext.active { "active" } else { "off" };
        println!("{:<24} {:<8} {}", ext.name, state, ext.code.len());
    }
    Ok(())
}

pub fn run_ext_add(session: &mut Session, name: String, code: String) -> Result<()> {
    session.execute(InternalCommand::SaveExtension {
        name: name.clone(),
        code,
    })?;
    println!("Saved extension {name} (active)");
    Ok(())
}

pub fn run_ext_toggle(session: &mut Session, name: String) -> Result<()> {
    session.execute(InternalCommand::ToggleExtension { name: name.clone() })?;
    match session.store().extension(&name) {
        Some(ext) if ext.active => println!("Extension {name} is now active"),
        Some(_) => println!("Extension {name} is now off"),
        None => println!("No extension {name}"),
    }
    Ok(())
}

pub fn run_ext_remove(session: &mut Session, name: String) -> Result<()> {
    let existed = session.store().extension(&name).is_some();
    session.execute(InternalCommand::DeleteExtension { name: name.clone() })?;
    if existed {
        println!("Removed extension {name}");
    } else {
        println!("No extension {name}");
    }
    Ok(())
}
