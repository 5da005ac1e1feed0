// SPDX-License-Identifier: PMPL-1.0-or-later

//! Config loading and site assembly from files on disk

use blog_site::{Site, SiteConfig, SiteError};
use std::fs;
use std::path::Path;

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, contents).expect("write fixture");
}

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = SiteConfig::load_or_default(&dir.path().join("site.yaml")).expect("defaults");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn test_yaml_config_with_partial_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("site.yaml");
    write(
        &path,
        "title: Notes\nwebsite: https://notes.example/\ndefault_lang: zh_CN\nposts_per_page: 6\n",
    );

    let config = SiteConfig::load(&path).expect("valid config");
    assert_eq!(config.title, "Notes");
    assert_eq!(config.default_lang, "zh-cn");
    assert_eq!(config.posts_per_page, 6);
    assert_eq!(config.author, "");
    assert!(!config.strict_keys);

    let site = Site::build(config).expect("zh-cn is built in");
    assert_eq!(site.translator().default_lang(), "zh-cn");
    assert_eq!(site.translator().translate("fr", "nav.home"), Some("首页"));
}

#[test]
fn test_json_config_is_accepted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("site.json");
    write(&path, r#"{"title": "Blog", "author": "Sam", "posts_per_page": 3}"#);
    let config = SiteConfig::load(&path).expect("valid config");
    assert_eq!(config.author, "Sam");
    assert_eq!(config.posts_per_page, 3);
    assert_eq!(config.default_lang, "en");
}

#[test]
fn test_invalid_config_reports_field() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("site.yaml");
    write(&path, "posts_per_page: 0\n");
    let err = SiteConfig::load(&path).expect_err("zero posts per page");
    assert!(format!("{err:#}").contains("posts_per_page"), "{err:#}");

    write(&path, "title: [unterminated\n");
    let err = SiteConfig::load(&path).expect_err("broken yaml");
    assert!(format!("{err:#}").contains("parsing"), "{err:#}");
}

#[test]
fn test_relative_locales_dir_resolves_next_to_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(&dir.path().join("i18n/ja.yaml"), "nav.home: ホーム\n");
    write(&dir.path().join("i18n/en.json"), r#"{"nav.home": "Start"}"#);
    let path = dir.path().join("site.yaml");
    write(&path, "locales_dir: i18n\n");

    let config = SiteConfig::load(&path).expect("valid config");
    assert_eq!(config.locales_dir, Some(dir.path().join("i18n")));

    let site = Site::build(config).expect("non-strict build");
    assert_eq!(site.locale_files().len(), 2);
    let ja = site.localizer("ja");
    assert_eq!(ja.t("nav.home"), Some("ホーム"));
    assert_eq!(ja.t("nav.posts"), Some("Posts"));
    assert_eq!(site.localizer("en").t("nav.home"), Some("Start"));
}

#[test]
fn test_strict_keys_rejects_partial_dictionaries() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(&dir.path().join("ja.yaml"), "nav.home: ホーム\n");
    let config = SiteConfig {
        locales_dir: Some(dir.path().to_path_buf()),
        strict_keys: true,
        ..SiteConfig::default()
    };
    let err = Site::build(config).expect_err("ja is incomplete");
    let mismatch = err
        .downcast_ref::<SiteError>()
        .expect("key mismatch is a SiteError");
    assert!(matches!(mismatch, SiteError::KeyMismatch { default_lang, .. } if default_lang == "en"));
}

#[test]
fn test_strict_keys_accepts_builtin_catalog() {
    let config = SiteConfig {
        strict_keys: true,
        ..SiteConfig::default()
    };
    assert!(Site::build(config).is_ok());
}

#[test]
fn test_default_language_without_dictionary_fails() {
    let config = SiteConfig {
        default_lang: "ja".to_string(),
        ..SiteConfig::default()
    };
    let err = Site::build(config).expect_err("ja has no dictionary");
    assert!(matches!(
        err.downcast_ref::<SiteError>(),
        Some(SiteError::UnknownDefaultLanguage { .. })
    ));
}

#[test]
fn test_missing_locales_dir_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = SiteConfig {
        locales_dir: Some(dir.path().join("nope")),
        ..SiteConfig::default()
    };
    let err = Site::build(config).expect_err("directory does not exist");
    assert!(format!("{err:#}").contains("reading locale directory"));
}

#[test]
fn test_lookup_uses_default_language_when_unspecified() {
    let site = Site::build(SiteConfig::default()).expect("defaults build");
    assert_eq!(site.lookup(None, "nav.home").expect("builtin key"), "Home");
    assert_eq!(site.lookup(Some("ZH_CN"), "nav.home").expect("builtin key"), "首页");
    assert_eq!(site.lookup(Some("fr"), "nav.home").expect("falls back"), "Home");
}

#[test]
fn test_lookup_unresolved_key_is_an_error() {
    let site = Site::build(SiteConfig::default()).expect("defaults build");
    let err = site
        .lookup(Some("zh_CN"), "no.such.key")
        .expect_err("key exists nowhere");
    assert_eq!(
        err.to_string(),
        "no translation for `no.such.key` in zh-cn or en"
    );
}

#[test]
fn test_unchecked_build_keeps_other_errors() {
    let config = SiteConfig {
        default_lang: "ja".to_string(),
        strict_keys: true,
        ..SiteConfig::default()
    };
    let err = Site::build_unchecked(config).expect_err("ja has no dictionary");
    assert!(matches!(
        err.downcast_ref::<SiteError>(),
        Some(SiteError::UnknownDefaultLanguage { .. })
    ));
}
