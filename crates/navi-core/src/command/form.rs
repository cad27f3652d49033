//! Site editor form state.

use crate::error::FormError;
use crate::store::{domain_from_name, name_of, Site, Store};

/// Contents of the site editor. When editing an existing site the name is
/// locked: the domain of a stored site never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteForm {
    pub name: String,
    pub title: String,
    pub html_content: String,
    pub domain_locked: bool,
}

impl SiteForm {
    /// Empty form for a new site.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Form pre-populated from a stored site, with the name locked.
    pub fn for_site(site: &Site) -> Self {
        Self {
            name: name_of(&site.domain).to_string(),
            title: site.title.clone(),
            html_content: site.html_content.clone(),
            domain_locked: true,
        }
    }

    /// Validate and upsert into the store. Returns the stored domain.
    /// On rejection the store is left untouched.
    pub fn submit(&self, store: &mut Store) -> Result<String, FormError> {
        let domain = domain_from_name(&self.name)?;
        store.upsert_site(Site {
            domain: domain.clone(),
            title: self.title.clone(),
            html_content: self.html_content.clone(),
        });
        Ok(domain)
    }
}
