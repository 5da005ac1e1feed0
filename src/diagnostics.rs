// SPDX-License-Identifier: PMPL-1.0-or-later

//! Self-check for site configuration and locale data (`blog-site check`).

use crate::i18n;
use crate::site::Site;
use anyhow::{anyhow, Result};
use colored::*;

pub fn run_self_diagnostics(site: &Site) -> Result<()> {
    println!("{}", "blog-site self-diagnostics".bold().yellow());
    println!();

    let checks = collect(site);
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

/// Runs every check without printing.
pub fn collect(site: &Site) -> Vec<Diagnostic> {
    let config = site.config();
    let translator = site.translator();
    let default_lang = translator.default_lang();

    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("blog-site {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.push(Diagnostic::ok(
        "website",
        format!("{} ({} posts per page)", config.website, config.posts_per_page),
    ));
    checks.push(Diagnostic::ok(
        "default language",
        format!(
            "{} ({})",
            default_lang,
            i18n::language_name(default_lang).unwrap_or("unnamed")
        ),
    ));
    checks.push(check_locale_files(site));

    let diffs = translator.registry().key_diffs(default_lang);
    for (lang, dict) in translator.registry().iter() {
        if !i18n::is_valid_tag(lang) {
            checks.push(Diagnostic::warning(
                "language tag",
                format!("`{}` is not a valid language tag", lang),
            ));
        }
        if dict.is_empty() {
            checks.push(Diagnostic::warning(
                "dictionary",
                format!("{} defines no keys", lang),
            ));
            continue;
        }
        let blank: Vec<&str> = dict
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| key)
            .collect();
        if !blank.is_empty() {
            checks.push(Diagnostic::warning(
                "blank values",
                format!("{}: {}", lang, blank.join(", ")),
            ));
        }
        if lang == default_lang {
            continue;
        }
        match diffs.iter().find(|diff| diff.lang == lang) {
            None => checks.push(Diagnostic::ok(
                "key parity",
                format!("{} matches {} ({} keys)", lang, default_lang, dict.len()),
            )),
            Some(diff) => checks.push(key_mismatch(diff, default_lang, config.strict_keys)),
        }
    }

    checks
}

fn check_locale_files(site: &Site) -> Diagnostic {
    match &site.config().locales_dir {
        None => Diagnostic::ok("locale files", "built-in dictionaries only".to_string()),
        Some(dir) if site.locale_files().is_empty() => Diagnostic::warning(
            "locale files",
            format!("no locale files found in {}", dir.display()),
        ),
        Some(dir) => Diagnostic::ok(
            "locale files",
            format!("{} loaded from {}", site.locale_files().len(), dir.display()),
        ),
    }
}

fn key_mismatch(diff: &i18n::KeyDiff, default_lang: &str, strict: bool) -> Diagnostic {
    let mut parts = Vec::new();
    if !diff.missing.is_empty() {
        parts.push(format!("missing {}", diff.missing.join(", ")));
    }
    if !diff.extra.is_empty() {
        parts.push(format!("not in {}: {}", default_lang, diff.extra.join(", ")));
    }
    let detail = format!("{}: {}", diff.lang, parts.join("; "));
    if strict {
        Diagnostic::error("key parity", detail)
    } else {
        Diagnostic::warning("key parity", detail)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red().bold(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:18} {}", self.level.tag(), self.label, self.detail);
    }
}
