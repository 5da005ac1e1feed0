// SPDX-License-Identifier: PMPL-1.0-or-later

//! Blog site core: site configuration and localised UI strings.
//!
//! The blog itself is Markdown rendered by an external static-site
//! framework. This crate owns the two pieces the templates call into:
//!
//! 1. **Config**: title, author, base URL, default language and friends,
//!    read from `site.yaml`.
//! 2. **I18n**: a registry of per-language dictionaries and a translator
//!    that falls back to the default language when a key or language is
//!    missing.
//!
//! [`site::Site`] wires the two together once at startup.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod output;
pub mod site;

pub use config::SiteConfig;
pub use error::SiteError;
pub use i18n::{Localizer, Translator};
pub use site::Site;
