//! Internal command dispatcher for `navi://` paths.
//!
//! A path is parsed once into [`InternalCommand`], a closed set of pages and
//! store mutations, then run by [`Dispatcher`]. Every mutation is written to
//! the store file before the follow-up page is rendered.

mod dispatch;
mod form;
mod parse;

pub use dispatch::{Dispatcher, Outcome};
pub use form::SiteForm;
pub use parse::InternalCommand;

#[cfg(test)]
mod tests;
