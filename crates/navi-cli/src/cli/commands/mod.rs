//! CLI command handlers, one file per command family.

mod completions;
mod extensions;
mod open;
mod proxy;
mod resolve;
mod settings;
mod sites;

pub use completions::{run_completions, run_man};
pub use extensions::{run_ext_add, run_ext_remove, run_ext_toggle, run_extensions};
pub use open::run_open;
pub use proxy::run_proxy;
pub use resolve::run_resolve;
pub use settings::{run_dark_mode, run_inject};
pub use sites::{run_site_add, run_site_remove, run_sites};
