//! Browser session: tabs, address bars, and the glue between router,
//! command dispatcher, store and the rendering widget.
//!
//! The session owns the [`Store`]; nothing else holds application state.
//! All entry points run on the UI thread and return quickly: the only I/O is
//! the synchronous store write after a mutating command.

mod tab;
mod webview;

use crate::command::{Dispatcher, InternalCommand, Outcome};
use crate::config::NaviConfig;
use crate::error::CommandError;
use crate::inject;
use crate::pages::Page;
use crate::router::{self, internal_base_url, Navigation, Route};
use crate::store::{Store, StoreFile};

pub use tab::{Tab, TabId};
pub use webview::WebView;

pub struct Browser<V> {
    store: Store,
    file: StoreFile,
    config: NaviConfig,
    tabs: Vec<Tab<V>>,
    active: usize,
    next_id: TabId,
}

impl<V: WebView> Browser<V> {
    /// Start a session with the store loaded from `file` (defaults on any failure).
    pub fn new(config: NaviConfig, file: StoreFile) -> Self {
        let store = file.load();
        Self::with_store(config, file, store)
    }

    pub fn with_store(config: NaviConfig, file: StoreFile, store: Store) -> Self {
        Self {
            store,
            file,
            config,
            tabs: Vec::new(),
            active: 0,
            next_id: 1,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn config(&self) -> &NaviConfig {
        &self.config
    }

    pub fn tabs(&self) -> &[Tab<V>] {
        &self.tabs
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab<V>> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    pub fn active_tab(&self) -> Option<&Tab<V>> {
        self.tabs.get(self.active)
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut Tab<V>> {
        self.tabs.get_mut(self.active)
    }

    fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    /// Add a tab, make it active and open the configured new-tab address.
    pub fn open_tab(&mut self, view: V) -> TabId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.tabs.push(Tab::new(id, view));
        self.active = self.tabs.len() - 1;
        tracing::debug!(tab = id, "tab opened");

        let start = self.config.new_tab_url.clone();
        if let Err(e) = self.navigate_index(self.active, &start) {
            tracing::warn!(tab = id, "new tab address failed: {}", e);
        }
        id
    }

    /// Close a tab. The last remaining tab cannot be closed.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        if self.tabs.len() <= 1 {
            return false;
        }
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.tabs.remove(index);
        if self.active > index || self.active >= self.tabs.len() {
            self.active = self.active.saturating_sub(1);
        }
        tracing::debug!(tab = id, "tab closed");
        true
    }

    pub fn activate(&mut self, id: TabId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    /// Handle text submitted from the active tab's address bar.
    pub fn submit_address(&mut self, text: &str) -> Result<(), CommandError> {
        if self.tabs.is_empty() {
            tracing::debug!("address submitted with no open tab");
            return Ok(());
        }
        self.navigate_index(self.active, text)
    }

    /// Handle text submitted for a specific tab.
    pub fn submit_address_in(&mut self, id: TabId, text: &str) -> Result<(), CommandError> {
        match self.index_of(id) {
            Some(index) => self.navigate_index(index, text),
            None => Ok(()),
        }
    }

    pub fn go_home(&mut self) -> Result<(), CommandError> {
        let home = self.config.home_url.clone();
        self.submit_address(&home)
    }

    pub fn back(&mut self) {
        if let Some(tab) = self.active_tab_mut() {
            tab.view.back();
        }
    }

    pub fn forward(&mut self) {
        if let Some(tab) = self.active_tab_mut() {
            tab.view.forward();
        }
    }

    /// Reload the active tab. Local content is regenerated from the store;
    /// external pages are reloaded by the widget.
    pub fn reload(&mut self) -> Result<(), CommandError> {
        let Some(tab) = self.tabs.get_mut(self.active) else {
            return Ok(());
        };
        if tab.shows_local_content() {
            let address = tab.address_bar.clone();
            return self.navigate_index(self.active, &address);
        }
        tab.view.reload();
        Ok(())
    }

    /// The widget reports that a tab's address changed.
    ///
    /// Links into `navi://` or to a stored site are routed like typed text;
    /// everything else only updates the address bar, with synthetic local
    /// addresses shown in their user-facing form.
    pub fn on_url_changed(&mut self, id: TabId, url: &str) -> Result<(), CommandError> {
        let Some(index) = self.index_of(id) else {
            return Ok(());
        };
        match router::classify_navigation(url, &self.store) {
            Navigation::Reroute(text) => self.navigate_index(index, &text),
            Navigation::Show(text) => {
                self.tabs[index].address_bar = text;
                Ok(())
            }
        }
    }

    /// The widget finished loading a document. On success every active
    /// extension is injected; returns how many scripts ran.
    pub fn on_load_finished(&mut self, id: TabId, ok: bool) -> usize {
        if !ok {
            return 0;
        }
        let Some(index) = self.index_of(id) else {
            return 0;
        };
        let scripts = inject::scripts_for(&self.store);
        let tab = &mut self.tabs[index];
        for script in &scripts {
            tab.view.run_script(script);
        }
        if !scripts.is_empty() {
            tracing::debug!(tab = id, count = scripts.len(), "extensions injected");
        }
        scripts.len()
    }

    pub fn on_title_changed(&mut self, id: TabId, title: &str) {
        if let Some(index) = self.index_of(id) {
            self.tabs[index].title = title.to_string();
        }
    }

    /// Switch theme, persist, and redraw the active tab if it shows a `navi://` page.
    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<(), CommandError> {
        self.store.set_dark_mode(enabled);
        self.file.persist(&self.store);
        let internal = self
            .active_tab()
            .filter(|tab| router::internal_path(&tab.address_bar).is_some())
            .map(|tab| tab.address_bar.clone());
        match internal {
            Some(address) => self.navigate_index(self.active, &address),
            None => Ok(()),
        }
    }

    /// Run a command without a tab (headless use). The outcome is returned
    /// instead of being shown.
    pub fn execute(&mut self, command: InternalCommand) -> Result<Outcome, CommandError> {
        Dispatcher::new(&mut self.store, &self.file, &self.config).run(command)
    }

    fn navigate_index(&mut self, index: usize, text: &str) -> Result<(), CommandError> {
        let route = router::resolve(text, &self.store, &self.config);
        let id = self.tabs[index].id;
        match route {
            Route::Internal { path } => {
                let outcome = Dispatcher::new(&mut self.store, &self.file, &self.config)
                    .run_path(&path)
                    .map_err(|e| {
                        tracing::warn!(tab = id, "navi://{}: {}", path, e);
                        e
                    })?;
                let tab = &mut self.tabs[index];
                match outcome {
                    Outcome::Page(page) => show_page(tab, page),
                    Outcome::Navigate { url, notice } => {
                        tab.view.show_notice(&notice);
                        tab.view.navigate(&url);
                        tab.address_bar = url;
                        tab.title.clear();
                    }
                    // Only stored site domains come back here, never `navi://`.
                    Outcome::Open { address } => return self.navigate_index(index, &address),
                }
            }
            Route::LocalSite {
                domain,
                title,
                html,
                base_url,
            } => {
                let tab = &mut self.tabs[index];
                tab.view.load_html(&html, &base_url);
                tab.title = if title.is_empty() {
                    domain.clone()
                } else {
                    title
                };
                tab.address_bar = domain;
            }
            Route::External { url, .. } => {
                let tab = &mut self.tabs[index];
                tab.view.navigate(&url);
                tab.address_bar = url;
                tab.title.clear();
            }
        }
        Ok(())
    }
}

fn show_page<V: WebView>(tab: &mut Tab<V>, page: Page) {
    tab.view.load_html(&page.html, &internal_base_url(&page.path));
    tab.address_bar = format!("{}{}", router::INTERNAL_SCHEME, page.path);
    tab.title = page.title;
}
