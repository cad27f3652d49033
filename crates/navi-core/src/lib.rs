pub mod config;
pub mod error;
pub mod logging;

pub mod browser;
pub mod command;
pub mod inject;
pub mod pages;
pub mod router;
pub mod store;
