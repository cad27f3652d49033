//! Extension injection.
//!
//! After every successful page load each active extension runs in the page's
//! script context, in name order. There is no isolation: no origin scoping,
//! no sandbox, no validation of the code. Extensions see and can change
//! everything on every page, including generated `navi://` pages and stored
//! sites. This is a known security gap.

use crate::store::{Extension, Store};

/// Script bodies to run after a page load, one per active extension.
pub fn scripts_for(store: &Store) -> Vec<String> {
    store.active_extensions().map(guarded).collect()
}

/// Wraps an extension so a runtime error in one does not stop the next.
/// Syntax errors still abort that extension's own script.
fn guarded(ext: &Extension) -> String {
    // A JSON string is a valid JS string literal.
    let label = serde_json::to_string(&ext.name).unwrap_or_else(|_| "\"extension\"".to_string());
    format!(
        "try {{\n{code}\n}} catch (e) {{ console.error('navi extension ' + {label} + ' failed:', e); }}",
        code = ext.code,
    )
}
