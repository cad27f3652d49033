//! `navi open <address>` – run an address through a headless tab and print the result.

use anyhow::{Context, Result};

use crate::cli::headless::{HeadlessView, ViewEvent};
use crate::cli::Session;

/// Opens one tab on the configured start page, submits `address`, and prints
/// what the widget was asked to do. Mutating commands are persisted as they
/// would be in the window.
pub fn run_open(session: &mut Session, address: &str, inject: bool) -> Result<()> {
    let id = session.open_tab(HeadlessView::default());
    // Drop the start page load.
    if let Some(tab) = session.active_tab_mut() {
        tab.view_mut().take_events();
    }

    session
        .submit_address(address)
        .with_context(|| format!("open {}", address))?;
    if inject {
        session.on_load_finished(id, true);
    }

    let tab = session.active_tab_mut().context("no open tab")?;
    let events = tab.view_mut().take_events();
    println!("address   {}", tab.address_bar());
    if !tab.title().is_empty() {
        println!("title     {}", tab.title());
    }
    for event in events {
        print_event(&event);
    }
    Ok(())
}

fn print_event(event: &ViewEvent) {
    match event {
        ViewEvent::Load { base_url, html } => {
            println!("load      {}", base_url);
            println!();
            println!("{}", html);
        }
        ViewEvent::Navigate(url) => println!("navigate  {}", url),
        ViewEvent::Notice(text) => println!("notice    {}", text),
        ViewEvent::Script(script) => {
            println!("script");
            println!("{}", script);
        }
        ViewEvent::Back => println!("back"),
        ViewEvent::Forward => println!("forward"),
        ViewEvent::Reload => println!("reload"),
    }
}
