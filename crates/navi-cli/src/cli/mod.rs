//! CLI for the Navi browser core.

mod commands;
mod headless;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use navi_core::browser::Browser;
use navi_core::config;
use navi_core::store::StoreFile;
use std::path::PathBuf;

use commands::{
    run_completions, run_dark_mode, run_ext_add, run_ext_remove, run_ext_toggle, run_extensions,
    run_inject, run_man, run_open, run_proxy, run_resolve, run_site_add, run_site_remove,
    run_sites,
};
use headless::HeadlessView;

/// Top-level CLI for the Navi browser core.
#[derive(Debug, Parser)]
#[command(name = "navi")]
#[command(about = "Navi: headless shell for the Navi browser core", long_about = None)]
pub struct Cli {
    /// Use this store file instead of the configured one.
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show how an address-bar entry would be routed, without running it.
    Resolve {
        /// Text as typed into the address bar.
        address: String,
    },

    /// Open an address in a headless tab and print what the page widget receives.
    Open {
        /// Text as typed into the address bar.
        address: String,
        /// Also print the extension scripts injected after the load.
        #[arg(long)]
        inject: bool,
    },

    /// List stored personal sites.
    Sites,

    /// Create or replace a personal site.
    SiteAdd {
        /// Site name; `.pw-navi` is appended when missing.
        name: String,
        /// Page title.
        #[arg(long, default_value = "")]
        title: String,
        /// Inline HTML content.
        #[arg(long, conflicts_with = "html_file")]
        html: Option<String>,
        /// Read the HTML content from a file.
        #[arg(long, value_name = "PATH")]
        html_file: Option<PathBuf>,
    },

    /// Delete a personal site by domain.
    SiteRemove {
        /// Full domain, e.g. `blog.pw-navi`.
        domain: String,
    },

    /// List stored extensions.
    Extensions,

    /// Create or replace an extension (saved as active).
    ExtAdd {
        /// Extension name.
        name: String,
        /// JavaScript source.
        code: String,
    },

    /// Flip an extension between active and inactive.
    ExtToggle {
        /// Extension name.
        name: String,
    },

    /// Delete an extension.
    ExtRemove {
        /// Extension name.
        name: String,
    },

    /// Show the proxy settings, or replace them with --set.
    Proxy {
        /// Replace the settings: TYPE (google|cloudflare), KEY and URL.
        #[arg(long, num_args = 3, value_names = ["TYPE", "KEY", "URL"])]
        set: Option<Vec<String>>,
    },

    /// Switch the theme of generated pages.
    DarkMode {
        #[arg(value_enum)]
        mode: Toggle,
    },

    /// Print the scripts injected into every page after a successful load.
    Inject,

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page to stdout.
    Man,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn enabled(self) -> bool {
        self == Toggle::On
    }
}

type Session = Browser<HeadlessView>;

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Neither needs config or store.
        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let file = match cli.store.or_else(|| cfg.store_path.clone()) {
            Some(path) => StoreFile::at(path),
            None => StoreFile::at(StoreFile::default_path()?),
        };
        let mut session: Session = Browser::new(cfg, file);

        match cli.command {
            CliCommand::Resolve { address } => run_resolve(&session, &address)?,
            CliCommand::Open { address, inject } => run_open(&mut session, &address, inject)?,
            CliCommand::Sites => run_sites(&session)?,
            CliCommand::SiteAdd {
                name,
                title,
                html,
                html_file,
            } => run_site_add(&mut session, name, title, html, html_file.as_deref())?,
            CliCommand::SiteRemove { domain } => run_site_remove(&mut session, domain)?,
            CliCommand::Extensions => run_extensions(&session)?,
            CliCommand::ExtAdd { name, code } => run_ext_add(&mut session, name, code)?,
            CliCommand::ExtToggle { name } => run_ext_toggle(&mut session, name)?,
            CliCommand::ExtRemove { name } => run_ext_remove(&mut session, name)?,
            CliCommand::Proxy { set } => run_proxy(&mut session, set)?,
            CliCommand::DarkMode { mode } => run_dark_mode(&mut session, mode.enabled())?,
            CliCommand::Inject => run_inject(&session)?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
