// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language prefixes in site URLs.
//!
//! Pages in the default language live at the site root (`/posts/hello/`);
//! every other language is served under its tag (`/zh-cn/posts/hello/`).

use super::resolver::Translator;
use super::tags;

/// Reduces a full URL to its path; plain paths pass through unchanged.
/// Any query string or fragment is dropped.
fn path_of(url: &str) -> &str {
    let url = url.find(['?', '#']).map_or(url, |idx| &url[..idx]);
    let Some((_, rest)) = url.split_once("://") else {
        return url;
    };
    match rest.find('/') {
        Some(idx) => &rest[idx..],
        None => "/",
    }
}

/// Splits a leading language segment off `path`, if there is one the
/// registry knows. Returns the language and the remaining path.
fn split_lang_prefix<'a, 'p>(translator: &'a Translator, path: &'p str) -> Option<(&'a str, &'p str)> {
    let path = path_of(path);
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (segment, rest) = match trimmed.find('/') {
        Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
        None => (trimmed, "/"),
    };
    if segment.is_empty() {
        return None;
    }
    let tag = tags::normalize(segment);
    translator
        .registry()
        .languages()
        .find(|lang| *lang == tag)
        .map(|lang| (lang, rest))
}

/// The language a page belongs to, read from its URL.
///
/// ```
/// use blog_site::i18n::{lang_from_path, LocaleRegistry, Translator};
/// let translator = Translator::new(LocaleRegistry::builtin(), "en").unwrap();
/// assert_eq!(lang_from_path(&translator, "/zh-cn/posts/hello/"), "zh-cn");
/// assert_eq!(lang_from_path(&translator, "/posts/hello/"), "en");
/// ```
pub fn lang_from_path<'a>(translator: &'a Translator, path: &str) -> &'a str {
    split_lang_prefix(translator, path)
        .map(|(lang, _)| lang)
        .unwrap_or_else(|| translator.default_lang())
}

/// The path with any language prefix removed. Always starts with `/`.
pub fn strip_lang_prefix<'p>(translator: &Translator, path: &'p str) -> &'p str {
    match split_lang_prefix(translator, path) {
        Some((_, rest)) => rest,
        None => {
            let path = path_of(path);
            if path.is_empty() {
                "/"
            } else {
                path
            }
        }
    }
}

/// The URL path of the same page in `lang`.
///
/// ```
/// use blog_site::i18n::{localize_path, LocaleRegistry, Translator};
/// let translator = Translator::new(LocaleRegistry::builtin(), "en").unwrap();
/// assert_eq!(localize_path(&translator, "/posts/a/", "zh-cn"), "/zh-cn/posts/a/");
/// assert_eq!(localize_path(&translator, "/zh-cn/posts/a/", "en"), "/posts/a/");
/// ```
pub fn localize_path(translator: &Translator, path: &str, lang: &str) -> String {
    let rest = strip_lang_prefix(translator, path);
    let rest = if rest.starts_with('/') {
        rest.to_string()
    } else {
        format!("/{rest}")
    };
    let lang = tags::normalize(lang);
    if lang == translator.default_lang() {
        rest
    } else {
        format!("/{lang}{rest}")
    }
}
