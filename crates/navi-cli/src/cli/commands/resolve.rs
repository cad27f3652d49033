//! `navi resolve <address>` – show the route an address takes, without running it.

use anyhow::Result;
use navi_core::command::InternalCommand;
use navi_core::router::{self, ExternalKind, Route};

use crate::cli::Session;

pub fn run_resolve(session: &Session, address: &str) -> Result<()> {
    let route = router::resolve(address, session.store(), session.config());
    match &route {
        Route::Internal { path } => match InternalCommand::parse(path) {
            Ok(command) => println!("internal  {} ({})", path, command.label()),
            Err(e) => println!("internal  {} ({})", path, e),
        },
        Route::LocalSite {
            domain, base_url, ..
        } => println!("site      {} (loaded at {})", domain, base_url),
        Route::External { kind, url } => {
            let how = match kind {
                ExternalKind::Search => "search",
                ExternalKind::AsGiven => "as given",
                ExternalKind::Https => "https added",
            };
            println!("external  {} ({})", url, how)
        }
    }
    println!("address   {}", route.address_bar_text());
    Ok(())
}
