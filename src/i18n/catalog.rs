// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale dictionaries and the registry that holds them.
//!
//! The blog ships with English and Simplified Chinese UI strings embedded as
//! static tables. At startup the registry can be extended from a directory of
//! locale files (`en.yaml`, `zh-cn.json`, `ja.yml`, ...); entries from files
//! override the built-ins key by key. After that the registry is never
//! mutated.
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add the translation to `ZH_CN` (missing keys fall back to the default
//!    language, and `blog-site check` will report them)

use super::tags;
use crate::error::SiteError;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Translated UI strings for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleDictionary {
    entries: BTreeMap<String, String>,
}

impl LocaleDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from a compile-time `(key, value)` table.
    pub fn from_static(table: &[(&str, &str)]) -> Self {
        table.iter().copied().collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlays `other` on top of this dictionary; `other` wins on conflicts.
    pub fn merge(&mut self, other: LocaleDictionary) {
        self.entries.extend(other.entries);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// All locale dictionaries, keyed by normalised language tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleRegistry {
    locales: BTreeMap<String, LocaleDictionary>,
}

/// Keys a language disagrees with the default language on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyDiff {
    pub lang: String,
    /// Defined by the default language but not by `lang`.
    pub missing: Vec<String>,
    /// Defined by `lang` but unknown to the default language.
    pub extra: Vec<String>,
}

impl KeyDiff {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

impl LocaleRegistry {
    /// An empty registry. Mostly useful for tests and custom catalogs.
    pub fn new() -> Self {
        Self::default()
    }

    /// The dictionaries embedded in the binary.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for &(tag, table) in BUILTIN {
            registry.insert(tag, LocaleDictionary::from_static(table));
        }
        registry
    }

    /// Adds (or merges into) the dictionary for `lang`.
    ///
    /// The tag is normalised first, so `zh_CN` and `zh-cn` share an entry.
    pub fn insert(&mut self, lang: &str, dictionary: LocaleDictionary) {
        let tag = tags::normalize(lang);
        match self.locales.get_mut(&tag) {
            Some(existing) => existing.merge(dictionary),
            None => {
                self.locales.insert(tag, dictionary);
            }
        }
    }

    /// Looks up a dictionary by exact (already normalised) tag.
    pub fn get(&self, lang: &str) -> Option<&LocaleDictionary> {
        self.locales.get(lang)
    }

    pub fn contains(&self, lang: &str) -> bool {
        self.locales.contains_key(lang)
    }

    /// Supported language tags in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleDictionary)> {
        self.locales.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Merges every locale file found directly under `dir`.
    ///
    /// Files are picked by extension (`json`, `yaml`, `yml`) and named after
    /// their language tag. Files whose stem is not a valid tag are skipped
    /// with a warning. Returns the paths that were loaded.
    pub fn merge_dir(&mut self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir)
            .and_then(|entries| entries.collect::<std::io::Result<Vec<_>>>())
            .with_context(|| format!("reading locale directory {}", dir.display()))?;
        let mut files: Vec<PathBuf> = entries
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_locale_file(path))
            .collect();
        files.sort();

        let mut loaded = Vec::new();
        for path in files {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let tag = tags::normalize(stem);
            if !tags::is_valid_tag(&tag) {
                warn!(path = %path.display(), "skipping locale file with invalid language tag");
                continue;
            }
            let dictionary: LocaleDictionary = load_json_or_yaml(&path)?;
            debug!(lang = %tag, keys = dictionary.len(), path = %path.display(), "loaded locale file");
            self.insert(&tag, dictionary);
            loaded.push(path);
        }
        Ok(loaded)
    }

    /// Compares every language's key set against `default_lang`.
    ///
    /// Only languages that differ are returned. If `default_lang` itself is
    /// not registered the result is empty; that case is reported by the
    /// translator instead.
    pub fn key_diffs(&self, default_lang: &str) -> Vec<KeyDiff> {
        let Some(reference) = self.get(default_lang) else {
            return Vec::new();
        };
        self.iter()
            .filter(|(lang, _)| *lang != default_lang)
            .map(|(lang, dict)| KeyDiff {
                lang: lang.to_string(),
                missing: reference
                    .keys()
                    .filter(|key| !dict.contains_key(key))
                    .map(str::to_string)
                    .collect(),
                extra: dict
                    .keys()
                    .filter(|key| !reference.contains_key(key))
                    .map(str::to_string)
                    .collect(),
            })
            .filter(|diff| !diff.is_clean())
            .collect()
    }

    /// Fails with [`SiteError::KeyMismatch`] unless every dictionary defines
    /// exactly the default language's keys.
    pub fn ensure_uniform_keys(&self, default_lang: &str) -> crate::error::Result<()> {
        let diffs = self.key_diffs(default_lang);
        if diffs.is_empty() {
            return Ok(());
        }
        let details = diffs
            .iter()
            .map(|diff| {
                format!(
                    "{} (missing {}, extra {})",
                    diff.lang,
                    diff.missing.len(),
                    diff.extra.len()
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        Err(SiteError::KeyMismatch {
            default_lang: default_lang.to_string(),
            details,
        })
    }
}

fn is_locale_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("json") | Some("yaml") | Some("yml")
    )
}

pub(crate) fn load_json_or_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str::<T>(&raw).with_context(|| format!("parsing {}", path.display()))
        }
        _ => serde_json::from_str::<T>(&raw).with_context(|| format!("parsing {}", path.display())),
    }
}

const BUILTIN: &[(&str, &[(&str, &str)])] = &[("en", EN), ("zh-cn", ZH_CN)];

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.posts", "Posts"),
    ("nav.tags", "Tags"),
    ("nav.archives", "Archives"),
    ("nav.about", "About"),
    ("nav.search", "Search"),
    ("nav.menu", "Menu"),
    // Post page
    ("post.published", "Published"),
    ("post.updated", "Updated"),
    ("post.reading_time", "min read"),
    ("post.toc", "Table of Contents"),
    ("post.prev", "Previous Post"),
    ("post.next", "Next Post"),
    ("post.share", "Share this post on"),
    ("post.back_to_top", "Back to Top"),
    ("post.edit", "Edit page"),
    ("post.draft", "Draft"),
    // Listings
    ("list.all_posts", "All the articles I've posted."),
    ("list.all_tags", "All the tags used in posts."),
    ("list.tagged", "All the articles with the tag"),
    ("list.archives", "All the articles I've archived."),
    ("list.recent", "Recent Posts"),
    ("list.featured", "Featured"),
    ("pagination.prev", "Prev"),
    ("pagination.next", "Next"),
    ("pagination.page", "Page"),
    // Search
    ("search.placeholder", "Search posts..."),
    ("search.no_results", "No results found"),
    // Footer and chrome
    ("footer.copyright", "Copyright"),
    ("footer.rights", "All rights reserved."),
    ("footer.rss", "RSS Feed"),
    ("theme.toggle", "Toggle light and dark mode"),
    ("lang.switch", "Language"),
    ("comments.title", "Comments"),
    // Errors
    ("error.not_found", "Page Not Found"),
    ("error.go_home", "Go back home"),
];

// ─── Simplified Chinese ─────────────────────────────────────────────

const ZH_CN: &[(&str, &str)] = &[
    ("nav.home", "首页"),
    ("nav.posts", "文章"),
    ("nav.tags", "标签"),
    ("nav.archives", "归档"),
    ("nav.about", "关于"),
    ("nav.search", "搜索"),
    ("nav.menu", "菜单"),
    ("post.published", "发布于"),
    ("post.updated", "更新于"),
    ("post.reading_time", "分钟阅读"),
    ("post.toc", "目录"),
    ("post.prev", "上一篇"),
    ("post.next", "下一篇"),
    ("post.share", "分享到"),
    ("post.back_to_top", "回到顶部"),
    ("post.edit", "编辑页面"),
    ("post.draft", "草稿"),
    ("list.all_posts", "我发布的所有文章。"),
    ("list.all_tags", "文章中使用的所有标签。"),
    ("list.tagged", "带有此标签的所有文章"),
    ("list.archives", "我归档的所有文章。"),
    ("list.recent", "最近文章"),
    ("list.featured", "精选"),
    ("pagination.prev", "上一页"),
    ("pagination.next", "下一页"),
    ("pagination.page", "页"),
    ("search.placeholder", "搜索文章..."),
    ("search.no_results", "没有找到结果"),
    ("footer.copyright", "版权所有"),
    ("footer.rights", "保留所有权利。"),
    ("footer.rss", "RSS 订阅"),
    ("theme.toggle", "切换浅色和深色模式"),
    ("lang.switch", "语言"),
    ("comments.title", "评论"),
    ("error.not_found", "页面未找到"),
    ("error.go_home", "返回首页"),
];
