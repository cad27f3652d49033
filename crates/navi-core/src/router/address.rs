//! Heuristics for ordinary (external) addresses typed into the address bar.

/// How an external address was derived from the typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalKind {
    /// No dot and at least one space: sent to the search engine.
    Search,
    /// Already carried a scheme.
    AsGiven,
    /// Bare host or path; `https://` was prepended.
    Https,
}

/// Turns free text into a navigable address.
///
/// - no `.` and contains a space → `search_url` + query with spaces as `+`
/// - contains `://` → unchanged
/// - otherwise → `https://` prepended
pub fn external_address(text: &str, search_url: &str) -> (ExternalKind, String) {
    if !text.contains('.') && text.contains(' ') {
        let query = text.replace(' ', "+");
        return (ExternalKind::Search, format!("{search_url}{query}"));
    }
    if text.contains("://") {
        return (ExternalKind::AsGiven, text.to_string());
    }
    (ExternalKind::Https, format!("https://{text}"))
}
