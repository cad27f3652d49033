//! Runs parsed commands against the store.

use crate::config::NaviConfig;
use crate::error::CommandError;
use crate::pages::{self, Page};
use crate::store::{Store, StoreFile};

use super::{InternalCommand, SiteForm};

/// What the browser should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show a generated page.
    Page(Page),
    /// Tell the user something, then load `url` in the tab.
    Navigate { url: String, notice: String },
    /// Resolve `address` in the tab as if it had been typed.
    Open { address: String },
}

/// Borrowed view of everything a command may read or change.
pub struct Dispatcher<'a> {
    store: &'a mut Store,
    file: &'a StoreFile,
    config: &'a NaviConfig,
}

impl<'a> Dispatcher<'a> {
    pub fn new(store: &'a mut Store, file: &'a StoreFile, config: &'a NaviConfig) -> Self {
        Self {
            store,
            file,
            config,
        }
    }

    /// Parse and run a command path.
    pub fn run_path(&mut self, path: &str) -> Result<Outcome, CommandError> {
        let command = InternalCommand::parse(path)?;
        self.run(command)
    }

    /// Run a command. Mutations are persisted before the page is rendered.
    /// Missing sites or extensions are not errors: the store stays as it was.
    pub fn run(&mut self, command: InternalCommand) -> Result<Outcome, CommandError> {
        tracing::debug!(command = command.label(), "internal command");
        let outcome = match command {
            InternalCommand::Home => Outcome::Page(pages::home(self.store, self.config)),
            InternalCommand::Info => Outcome::Page(pages::info(self.store)),
            InternalCommand::Settings => Outcome::Page(pages::settings(self.store)),
            InternalCommand::SetDarkMode(enabled) => {
                self.store.set_dark_mode(enabled);
                self.file.persist(self.store);
                Outcome::Page(pages::settings(self.store))
            }
            InternalCommand::Sites => Outcome::Page(pages::site_list(self.store)),
            InternalCommand::NewSite => {
                Outcome::Page(pages::site_editor(&SiteForm::blank(), self.store))
            }
            InternalCommand::OpenSite { domain } => match self.store.site(&domain) {
                Some(site) => Outcome::Open {
                    address: site.domain.clone(),
                },
                None => {
                    tracing::debug!(domain = %domain, "open: no such site");
                    Outcome::Page(pages::site_list(self.store))
                }
            },
            InternalCommand::EditSite { domain } => {
                let form = match self.store.site(&domain) {
                    Some(site) => SiteForm::for_site(site),
                    None => {
                        tracing::debug!(domain = %domain, "edit: no such site; opening empty form");
                        SiteForm::blank()
                    }
                };
                Outcome::Page(pages::site_editor(&form, self.store))
            }
            InternalCommand::SaveSite {
                name,
                title,
                html_content,
            } => {
                let form = SiteForm {
                    name,
                    title,
                    html_content,
                    domain_locked: false,
                };
                let domain = form.submit(self.store)?;
                tracing::info!(domain = %domain, "site saved");
                self.file.persist(self.store);
                Outcome::Page(pages::site_list(self.store))
            }
            InternalCommand::DeleteSite { domain } => {
                if self.store.remove_site(&domain).is_some() {
                    tracing::info!(domain = %domain, "site deleted");
                    self.file.persist(self.store);
                } else {
                    tracing::debug!(domain = %domain, "delete: no such site");
                }
                Outcome::Page(pages::site_list(self.store))
            }
            InternalCommand::Extensions => Outcome::Page(pages::extension_list(self.store)),
            InternalCommand::SaveExtension { name, code } => {
                self.store.save_extension(&name, &code);
                tracing::info!(name = %name, "extension saved");
                self.file.persist(self.store);
                Outcome::Page(pages::extension_list(self.store))
            }
            InternalCommand::ToggleExtension { name } => {
                match self.store.toggle_extension(&name) {
                    Some(active) => {
                        tracing::info!(name = %name, active, "extension toggled");
                        self.file.persist(self.store);
                    }
                    None => tracing::debug!(name = %name, "toggle: no such extension"),
                }
                Outcome::Page(pages::extension_list(self.store))
            }
            InternalCommand::DeleteExtension { name } => {
                if self.store.remove_extension(&name).is_some() {
                    tracing::info!(name = %name, "extension deleted");
                    self.file.persist(self.store);
                } else {
                    tracing::debug!(name = %name, "delete: no such extension");
                }
                Outcome::Page(pages::extension_list(self.store))
            }
            InternalCommand::Proxy => Outcome::Page(pages::proxy_form(self.store)),
            InternalCommand::RunProxy(proxy) => {
                let url = proxy.url.clone();
                let notice = format!("Proxy settings saved ({}). Opening {url}", proxy.kind);
                tracing::info!(kind = %proxy.kind, url = %url, "proxy settings replaced");
                self.store.set_proxy(proxy);
                self.file.persist(self.store);
                Outcome::Navigate { url, notice }
            }
        };
        Ok(outcome)
    }
}
