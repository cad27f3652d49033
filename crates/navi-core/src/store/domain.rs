//! Custom top-level domain rules for locally hosted sites.

use crate::error::FormError;

/// Fixed suffix carried by every stored site key.
pub const SITE_SUFFIX: &str = ".pw-navi";

/// True when `text` names something under the custom top-level domain.
pub fn is_site_domain(text: &str) -> bool {
    text.len() > SITE_SUFFIX.len()
        && text
            .get(text.len() - SITE_SUFFIX.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(SITE_SUFFIX))
}

/// Builds the full domain from the name typed into the site editor.
///
/// The suffix is optional in the input. The name is lowercased and must be
/// non-empty, made of ASCII letters, digits, `-`, `_`, with dots only between
/// labels. Rejecting `/`, `:` and whitespace keeps stored domains from ever
/// colliding with `navi://` paths.
pub fn domain_from_name(name: &str) -> Result<String, FormError> {
    let trimmed = name.trim().to_ascii_lowercase();
    let bare = trimmed
        .strip_suffix(SITE_SUFFIX)
        .unwrap_or(&trimmed)
        .to_string();

    if bare.is_empty() {
        return Err(FormError::BlankDomain);
    }

    let valid_chars = bare
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    let valid_dots = !bare.starts_with('.') && !bare.ends_with('.') && !bare.contains("..");
    if !valid_chars || !valid_dots {
        return Err(FormError::InvalidDomain(name.trim().to_string()));
    }

    Ok(format!("{bare}{SITE_SUFFIX}"))
}

/// Name part of a stored domain, as shown in the editor.
pub fn name_of(domain: &str) -> &str {
    domain.strip_suffix(SITE_SUFFIX).unwrap_or(domain)
}
