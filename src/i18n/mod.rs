// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localised UI strings for the blog.
//!
//! ## Supported languages
//!
//! | Tag   | Language             | Native name |
//! |-------|----------------------|-------------|
//! | en    | English              | English     |
//! | zh-cn | Chinese (Simplified) | 简体中文     |
//!
//! More languages can be added at startup from locale files; see
//! [`LocaleRegistry::merge_dir`].
//!
//! ## Design
//!
//! Keys use dotted namespaces: `"nav.home"`, `"post.toc"`. A lookup tries the
//! requested language, then the site's default language, and returns `None`
//! when neither defines the key. Unknown languages are not an error; they
//! simply resolve everything through the default language.
//!
//! There is no global translator. The [`Translator`] is built once by
//! [`crate::site::Site`] and passed to whatever renders strings.

mod catalog;
mod resolver;
mod routing;
mod tags;

pub use catalog::{KeyDiff, LocaleDictionary, LocaleRegistry};
pub(crate) use catalog::load_json_or_yaml;
pub use resolver::{Localizer, Translator};
pub use routing::{lang_from_path, localize_path, strip_lang_prefix};
pub use tags::{is_valid_iso639_1, is_valid_tag, language_name, native_name, normalize};
