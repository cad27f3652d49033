//! Tests for command parsing and dispatch.

use tempfile::tempdir;

use super::*;
use crate::config::NaviConfig;
use crate::error::{CommandError, FormError};
use crate::store::{ProxyKind, ProxySettings, Site, Store, StoreFile};

fn run(store: &mut Store, path: &str) -> Result<Outcome, CommandError> {
    let file = StoreFile::in_memory();
    let config = NaviConfig::default();
    Dispatcher::new(store, &file, &config).run_path(path)
}

fn page_html(outcome: Outcome) -> String {
    match outcome {
        Outcome::Page(page) => page.html,
        other => panic!("expected a page, got {other:?}"),
    }
}

fn add_site(store: &mut Store, domain: &str) {
    store.upsert_site(Site {
        domain: domain.to_string(),
        title: domain.to_string(),
        html_content: String::new(),
    });
}

#[test]
fn parse_fixed_pages() {
    assert_eq!(InternalCommand::parse(""), Ok(InternalCommand::Home));
    assert_eq!(InternalCommand::parse("home"), Ok(InternalCommand::Home));
    assert_eq!(InternalCommand::parse("info"), Ok(InternalCommand::Info));
    assert_eq!(InternalCommand::parse("pw/"), Ok(InternalCommand::Sites));
    assert_eq!(InternalCommand::parse("pw/new"), Ok(InternalCommand::NewSite));
    assert_eq!(InternalCommand::parse("cws"), Ok(InternalCommand::Extensions));
    assert_eq!(InternalCommand::parse("proxy"), Ok(InternalCommand::Proxy));
    assert_eq!(InternalCommand::parse("settings"), Ok(InternalCommand::Settings));
}

#[test]
fn parse_decodes_arguments() {
    assert_eq!(
        InternalCommand::parse("cws/save/My%20Ext/console.log(%22hi%22)%3B"),
        Ok(InternalCommand::SaveExtension {
            name: "My Ext".to_string(),
            code: "console.log(\"hi\");".to_string(),
        })
    );
    assert_eq!(
        InternalCommand::parse("pw/edit/Blog.PW-NAVI"),
        Ok(InternalCommand::EditSite {
            domain: "blog.pw-navi".to_string()
        })
    );
}

#[test]
fn parse_last_argument_keeps_slashes() {
    assert_eq!(
        InternalCommand::parse("cws/save/x/a / b"),
        Ok(InternalCommand::SaveExtension {
            name: "x".to_string(),
            code: "a / b".to_string(),
        })
    );
    assert_eq!(
        InternalCommand::parse("proxy/run/cloudflare/k1/https://example.com/path"),
        Ok(InternalCommand::RunProxy(ProxySettings {
            kind: ProxyKind::Cloudflare,
            key: "k1".to_string(),
            url: "https://example.com/path".to_string(),
        }))
    );
}

#[test]
fn parse_rejects_unknown_and_malformed() {
    assert_eq!(
        InternalCommand::parse("nope"),
        Err(CommandError::UnknownCommand("nope".to_string()))
    );
    assert_eq!(
        InternalCommand::parse("pw/delete"),
        Err(CommandError::UnknownCommand("pw/delete".to_string()))
    );
    assert!(matches!(
        InternalCommand::parse("cws/save/only-name"),
        Err(CommandError::InvalidArgument { command: "cws/save", .. })
    ));
    assert!(matches!(
        InternalCommand::parse("proxy/run/tor/k/https://x"),
        Err(CommandError::InvalidArgument { command: "proxy/run", .. })
    ));
    assert!(matches!(
        InternalCommand::parse("settings/dark/maybe"),
        Err(CommandError::InvalidArgument { .. })
    ));
    assert!(matches!(
        InternalCommand::parse("cws/toggle/%FF"),
        Err(CommandError::InvalidArgument { .. })
    ));
}

#[test]
fn mutation_flags() {
    assert!(!InternalCommand::Sites.is_mutation());
    assert!(InternalCommand::SetDarkMode(true).is_mutation());
    assert!(InternalCommand::DeleteSite {
        domain: "a.pw-navi".to_string()
    }
    .is_mutation());
}

#[test]
fn delete_site_removes_key_and_list_omits_it() {
    let mut store = Store::new();
    add_site(&mut store, "foo.pw-navi");
    add_site(&mut store, "bar.pw-navi");

    let html = page_html(run(&mut store, "pw/delete/foo.pw-navi").unwrap());
    assert!(store.site("foo.pw-navi").is_none());
    assert!(!html.contains("foo.pw-navi"));
    assert!(html.contains("bar.pw-navi"));

    let again = page_html(run(&mut store, "pw").unwrap());
    assert!(!again.contains("foo.pw-navi"));
}

#[test]
fn delete_missing_is_a_quiet_noop() {
    let mut store = Store::new();
    add_site(&mut store, "keep.pw-navi");
    store.save_extension("keep", "1");
    let before = store.clone();

    assert!(run(&mut store, "pw/delete/ghost.pw-navi").is_ok());
    assert!(run(&mut store, "cws/delete/ghost").is_ok());
    assert!(run(&mut store, "cws/toggle/ghost").is_ok());
    assert_eq!(store, before);
}

#[test]
fn save_then_toggle_extension() {
    let mut store = Store::new();
    run(&mut store, "cws/save/Test/alert(1)").unwrap();
    let ext = store.extension("Test").unwrap();
    assert_eq!(ext.code, "alert(1)");
    assert!(ext.active);

    let html = page_html(run(&mut store, "cws/toggle/Test").unwrap());
    assert!(!store.extension("Test").unwrap().active);
    assert!(html.contains(">enable<"));

    run(&mut store, "cws/toggle/Test").unwrap();
    assert!(store.extension("Test").unwrap().active);
}

#[test]
fn delete_extension() {
    let mut store = Store::new();
    store.save_extension("gone", "1");
    run(&mut store, "cws/delete/gone").unwrap();
    assert!(store.extension("gone").is_none());
}

#[test]
fn edit_missing_site_opens_empty_form() {
    let mut store = Store::new();
    let html = page_html(run(&mut store, "pw/edit/ghost.pw-navi").unwrap());
    assert!(html.contains("<h1>New site</h1>"));
    assert!(html.contains("id=\"name\" type=\"text\" value=\"\""));
}

#[test]
fn save_site_validates_name() {
    let mut store = Store::new();
    assert_eq!(
        run(&mut store, "pw/save/%20/Title/%3Cp%3E"),
        Err(CommandError::Form(FormError::BlankDomain))
    );
    assert_eq!(store.site_count(), 0);

    run(&mut store, "pw/save/Blog/My%20Blog/%3Ch1%3EHi%3C%2Fh1%3E").unwrap();
    let site = store.site("blog.pw-navi").unwrap();
    assert_eq!(site.title, "My Blog");
    assert_eq!(site.html_content, "<h1>Hi</h1>");
}

#[test]
fn save_site_with_blank_title_and_body() {
    let mut store = Store::new();
    run(&mut store, "pw/save/empty").unwrap();
    let site = store.site("empty.pw-navi").unwrap();
    assert_eq!(site.title, "");
    assert_eq!(site.html_content, "");
}

#[test]
fn run_proxy_overwrites_and_navigates() {
    let mut store = Store::new();
    let outcome = run(
        &mut store,
        "proxy/run/Cloudflare/abc/https%3A%2F%2Fexample.com%2F",
    )
    .unwrap();
    assert_eq!(
        store.proxy(),
        &ProxySettings {
            kind: ProxyKind::Cloudflare,
            key: "abc".to_string(),
            url: "https://example.com/".to_string(),
        }
    );
    match outcome {
        Outcome::Navigate { url, notice } => {
            assert_eq!(url, "https://example.com/");
            assert!(notice.contains("Cloudflare"));
        }
        other => panic!("expected navigation, got {other:?}"),
    }
}

#[test]
fn dark_mode_command_flips_flag() {
    let mut store = Store::new();
    let html = page_html(run(&mut store, "settings/dark/on").unwrap());
    assert!(store.dark_mode());
    assert!(html.contains("data-theme=\"dark\""));
    run(&mut store, "settings/dark/off").unwrap();
    assert!(!store.dark_mode());
}

#[test]
fn unknown_command_leaves_store_alone() {
    let mut store = Store::new();
    add_site(&mut store, "a.pw-navi");
    let before = store.clone();
    assert_eq!(
        run(&mut store, "pw/purge"),
        Err(CommandError::UnknownCommand("pw/purge".to_string()))
    );
    assert_eq!(store, before);
}

#[test]
fn mutations_are_persisted() {
    let dir = tempdir().unwrap();
    let file = StoreFile::at(dir.path().join("store.json"));
    let config = NaviConfig::default();
    let mut store = file.load();

    Dispatcher::new(&mut store, &file, &config)
        .run_path("cws/save/persisted/1%2B1")
        .unwrap();

    let reloaded = file.load();
    assert_eq!(reloaded.extension("persisted").unwrap().code, "1+1");
}

#[test]
fn open_site_hands_back_the_stored_domain() {
    let mut store = Store::new();
    add_site(&mut store, "blog.pw-navi");
    assert_eq!(
        InternalCommand::parse("pw/open/Blog.pw-navi"),
        Ok(InternalCommand::OpenSite {
            domain: "blog.pw-navi".to_string()
        })
    );
    assert_eq!(
        run(&mut store, "pw/open/blog.pw-navi").unwrap(),
        Outcome::Open {
            address: "blog.pw-navi".to_string()
        }
    );
}

#[test]
fn open_missing_site_shows_the_list() {
    let mut store = Store::new();
    let html = page_html(run(&mut store, "pw/open/ghost.pw-navi").unwrap());
    assert!(html.contains("No sites yet."));
}
