use super::WebView;

/// Tab identifier, unique for the lifetime of a `Browser`.
pub type TabId = u32;

/// One tab: its widget plus the text the shell shows for it.
#[derive(Debug)]
pub struct Tab<V> {
    pub(super) id: TabId,
    pub(super) address_bar: String,
    pub(super) title: String,
    pub(super) view: V,
}

impl<V: WebView> Tab<V> {
    pub(super) fn new(id: TabId, view: V) -> Self {
        Self {
            id,
            address_bar: String::new(),
            title: String::new(),
            view,
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    /// User-facing address; never a synthetic local address.
    pub fn address_bar(&self) -> &str {
        &self.address_bar
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// True while the tab shows a `navi://` page or a stored site, which the
    /// core re-renders itself instead of asking the widget to reload.
    pub(super) fn shows_local_content(&self) -> bool {
        crate::router::internal_path(&self.address_bar).is_some()
            || crate::store::is_site_domain(&self.address_bar)
    }
}
