//! Tests for Store state and persistence.

use tempfile::tempdir;

use super::*;

fn site(domain: &str, title: &str, html: &str) -> Site {
    Site {
        domain: domain.to_string(),
        title: title.to_string(),
        html_content: html.to_string(),
    }
}

#[test]
fn defaults_are_empty_and_light() {
    let store = Store::new();
    assert_eq!(store.version(), STORE_VERSION);
    assert_eq!(store.site_count(), 0);
    assert_eq!(store.extensions().count(), 0);
    assert_eq!(store.proxy(), &ProxySettings::default());
    assert!(!store.dark_mode());
}

#[test]
fn upsert_site_last_write_wins() {
    let mut store = Store::new();
    assert!(store.upsert_site(site("a.pw-navi", "one", "<p>1</p>")).is_none());
    let previous = store.upsert_site(site("a.pw-navi", "two", "<p>2</p>"));
    assert_eq!(previous.map(|s| s.title), Some("one".to_string()));
    assert_eq!(store.site_count(), 1);
    assert_eq!(store.site("a.pw-navi").unwrap().title, "two");
}

#[test]
fn toggle_twice_restores_active() {
    let mut store = Store::new();
    store.save_extension("Test", "alert(1)");
    let before = store.extension("Test").unwrap().active;
    assert_eq!(store.toggle_extension("Test"), Some(!before));
    assert_eq!(store.toggle_extension("Test"), Some(before));
    assert_eq!(store.extension("Test").unwrap().active, before);
}

#[test]
fn toggle_missing_extension_is_none() {
    let mut store = Store::new();
    assert_eq!(store.toggle_extension("ghost"), None);
    assert_eq!(store, Store::new());
}

#[test]
fn deleting_missing_entries_leaves_store_unchanged() {
    let mut store = Store::new();
    store.upsert_site(site("keep.pw-navi", "Keep", "<h1>k</h1>"));
    store.save_extension("keep", "1");
    let before = store.clone();

    assert!(store.remove_site("missing.pw-navi").is_none());
    assert!(store.remove_extension("missing").is_none());
    assert_eq!(store, before);
}

#[test]
fn saving_an_extension_reactivates_it() {
    let mut store = Store::new();
    store.save_extension("x", "1");
    store.toggle_extension("x");
    assert!(!store.extension("x").unwrap().active);
    store.save_extension("x", "2");
    let ext = store.extension("x").unwrap();
    assert!(ext.active);
    assert_eq!(ext.code, "2");
}

#[test]
fn active_extensions_are_name_ordered() {
    let mut store = Store::new();
    store.save_extension("zeta", "z");
    store.save_extension("alpha", "a");
    store.save_extension("mid", "m");
    store.toggle_extension("mid");
    let names: Vec<&str> = store.active_extensions().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "zeta"]);
}

#[test]
fn save_and_load_roundtrip_sites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state").join("store.json");

    let mut store = Store::new();
    store.upsert_site(site("blog.pw-navi", "My Blog", "<h1>Hello</h1>"));
    store.upsert_site(site("notes.pw-navi", "Notes", "<ul><li>x</li></ul>"));
    store.save_extension("dark", "document.body.style.background='#000'");
    store.set_proxy(ProxySettings {
        kind: ProxyKind::Cloudflare,
        key: "secret".to_string(),
        url: "https://example.com".to_string(),
    });
    store.set_dark_mode(true);
    store.save_to_path(&path).unwrap();

    let loaded = Store::load_from_path(&path).unwrap().expect("file exists");
    for original in store.sites() {
        let restored = loaded.site(&original.domain).expect("domain survives");
        assert_eq!(restored.title, original.title);
        assert_eq!(restored.html_content, original.html_content);
    }
    assert_eq!(loaded, store);
}

#[test]
fn persisted_document_has_expected_top_level_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    Store::new().save_to_path(&path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    for key in ["version", "sites", "extensions", "proxy", "dark_mode"] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(value["version"], 1);
    assert!(!dir.path().join("store.json.tmp").exists());
}

#[test]
fn load_missing_file_is_none() {
    let dir = tempdir().unwrap();
    let loaded = Store::load_from_path(&dir.path().join("absent.json")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn store_file_malformed_json_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Store::load_from_path(&path).is_err());
    assert_eq!(StoreFile::at(&path).load(), Store::default());
}

#[test]
fn partial_nested_object_keeps_field_defaults() {
    let json = r#"{
        "sites": { "a.pw-navi": { "title": "A" } },
        "proxy": { "key": "only-key" },
        "extensions": { "e": { "code": "1" } }
    }"#;
    let store = Store::from_document(serde_json::from_str(json).unwrap()).unwrap();

    assert_eq!(store.version(), STORE_VERSION);
    assert!(!store.dark_mode());
    let proxy = store.proxy();
    assert_eq!(proxy.kind, ProxyKind::Google);
    assert_eq!(proxy.key, "only-key");
    assert_eq!(proxy.url, "");
    let site = store.site("a.pw-navi").unwrap();
    assert_eq!(site.title, "A");
    assert_eq!(site.html_content, "");
    assert!(store.extension("e").unwrap().active);
}

#[test]
fn loading_copies_map_keys_into_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(
        &path,
        r#"{"sites":{"a.pw-navi":{"title":"A"}},"extensions":{"e":{"code":"1"}}}"#,
    )
    .unwrap();

    let store = Store::load_from_path(&path).unwrap().unwrap();
    assert_eq!(store.site("a.pw-navi").unwrap().domain, "a.pw-navi");
    assert_eq!(store.extension("e").unwrap().name, "e");
}

fn load_json(json: &str) -> Store {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, json).unwrap();
    StoreFile::at(&path).load()
}

#[test]
fn lowercase_proxy_type_loads_with_sites_intact() {
    let store = load_json(
        r#"{"sites":{"blog.pw-navi":{"title":"Blog"}},
            "proxy":{"type":"google","key":"k","url":"https://example.com"}}"#,
    );
    assert_eq!(store.site_count(), 1);
    assert_eq!(store.proxy().kind, ProxyKind::Google);
    assert_eq!(store.proxy().key, "k");
}

#[test]
fn invalid_top_level_field_only_resets_that_field() {
    let store = load_json(
        r#"{"sites":{"blog.pw-navi":{"title":"Blog"}},
            "extensions":{"e":{"code":"1","active":false}},
            "proxy":{"type":"tor","key":"k"},
            "dark_mode":null}"#,
    );
    assert_eq!(store.site("blog.pw-navi").unwrap().title, "Blog");
    assert!(!store.extension("e").unwrap().active);
    assert_eq!(store.proxy(), &ProxySettings::default());
    assert!(!store.dark_mode());
}

#[test]
fn invalid_entry_is_dropped_alone() {
    let store = load_json(
        r#"{"sites":{"a.pw-navi":{"title":"A"},"b.pw-navi":{"title":5}},
            "extensions":{"ok":{"code":"1"},"bad":null}}"#,
    );
    assert!(store.site("a.pw-navi").is_some());
    assert!(store.site("b.pw-navi").is_none());
    assert!(store.extension("ok").is_some());
    assert!(store.extension("bad").is_none());
}

#[test]
fn non_object_document_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "[1, 2]").unwrap();
    assert!(Store::load_from_path(&path).is_err());
}

#[test]
fn site_keys_are_normalized_on_load() {
    let store = load_json(
        r#"{"sites":{
            "Blog.PW-NAVI":{"title":"Blog"},
            "plain":{"title":"Plain"},
            "bad name/x":{"title":"Bad"}
        }}"#,
    );
    let domains: Vec<&str> = store.sites().map(|s| s.domain.as_str()).collect();
    assert_eq!(domains, vec!["blog.pw-navi", "plain.pw-navi"]);

    let config = crate::config::NaviConfig::default();
    assert!(matches!(
        crate::router::resolve("Blog.PW-NAVI", &store, &config),
        crate::router::Route::LocalSite { domain, .. } if domain == "blog.pw-navi"
    ));
    assert!(matches!(
        crate::router::resolve("plain.pw-navi", &store, &config),
        crate::router::Route::LocalSite { .. }
    ));
}

#[test]
fn in_memory_store_file_never_writes() {
    let file = StoreFile::in_memory();
    assert!(file.path().is_none());
    let mut store = file.load();
    store.set_dark_mode(true);
    file.persist(&store);
    assert_eq!(file.load(), Store::default());
}

#[test]
fn persist_to_unwritable_path_does_not_panic() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "file, not a dir").unwrap();
    let file = StoreFile::at(blocker.join("store.json"));
    file.persist(&Store::new());
    assert_eq!(file.load(), Store::default());
}
