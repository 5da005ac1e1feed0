// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialisation of locale data for templating collaborators

use crate::i18n::Translator;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

/// The export payload: the default language plus one dictionary per
/// language. With `resolved`, each dictionary already has fallbacks applied
/// so consumers need no lookup logic of their own.
#[derive(Debug, Serialize)]
pub struct LocaleExport<'a> {
    pub default_lang: &'a str,
    pub locales: BTreeMap<&'a str, crate::i18n::LocaleDictionary>,
}

impl<'a> LocaleExport<'a> {
    pub fn new(translator: &'a Translator, langs: &[&'a str], resolved: bool) -> Self {
        let locales = langs
            .iter()
            .map(|&lang| {
                let dict = if resolved {
                    translator.resolved(lang)
                } else {
                    translator.registry().get(lang).cloned().unwrap_or_default()
                };
                (lang, dict)
            })
            .collect();
        Self {
            default_lang: translator.default_lang(),
            locales,
        }
    }
}

/// Settles the export format and destination. An explicit format wins,
/// then the output file's extension, then JSON; an output path without an
/// extension gets the chosen format's.
pub fn resolve_target(
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
) -> (OutputFormat, Option<PathBuf>) {
    let format = format
        .or_else(|| {
            output
                .as_ref()
                .and_then(|p| p.extension())
                .and_then(|e| e.to_str())
                .and_then(OutputFormat::parse)
        })
        .unwrap_or(OutputFormat::Json);
    let output = output.map(|path| {
        if path.extension().is_none() {
            path.with_extension(format.extension())
        } else {
            path
        }
    });
    (format, output)
}

/// Normalised language tags to export; an empty request selects every
/// registered language.
pub fn select_langs(translator: &Translator, requested: &[String]) -> Vec<String> {
    if requested.is_empty() {
        translator.registry().languages().map(str::to_string).collect()
    } else {
        requested.iter().map(|lang| crate::i18n::normalize(lang)).collect()
    }
}

/// Writes `value` to `path`, creating parent directories; `None` prints to
/// stdout instead.
pub fn write_output<T: Serialize>(value: &T, format: OutputFormat, path: Option<&Path>) -> Result<()> {
    let rendered = format.serialize(value)?;
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?;
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleRegistry;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("yml"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::parse("toml"), None);
        assert_eq!(OutputFormat::Yaml.extension(), "yaml");
    }

    #[test]
    fn export_json_contains_every_language() {
        let translator = Translator::new(LocaleRegistry::builtin(), "en").expect("en is built in");
        let export = LocaleExport::new(&translator, &["en", "zh-cn"], false);
        let json = OutputFormat::Json.serialize(&export).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["default_lang"], "en");
        assert_eq!(value["locales"]["zh-cn"]["nav.home"], "首页");
        assert_eq!(value["locales"]["en"]["nav.home"], "Home");
    }

    #[test]
    fn resolved_export_fills_unknown_language() {
        let translator = Translator::new(LocaleRegistry::builtin(), "en").expect("en is built in");
        let raw = LocaleExport::new(&translator, &["fr"], false);
        assert!(raw.locales["fr"].is_empty());
        let resolved = LocaleExport::new(&translator, &["fr"], true);
        assert_eq!(resolved.locales["fr"].get("nav.home"), Some("Home"));
    }

    #[test]
    fn resolve_target_infers_format_from_extension() {
        let (format, path) = resolve_target(None, Some(PathBuf::from("out/locales.yml")));
        assert_eq!(format, OutputFormat::Yaml);
        assert_eq!(path, Some(PathBuf::from("out/locales.yml")));

        let (format, path) = resolve_target(None, Some(PathBuf::from("locales.txt")));
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(path, Some(PathBuf::from("locales.txt")));

        assert_eq!(resolve_target(None, None), (OutputFormat::Json, None));
    }

    #[test]
    fn resolve_target_appends_missing_extension() {
        let (format, path) = resolve_target(Some(OutputFormat::Yaml), Some(PathBuf::from("dist/locales")));
        assert_eq!(format, OutputFormat::Yaml);
        assert_eq!(path, Some(PathBuf::from("dist/locales.yaml")));

        let (format, path) = resolve_target(None, Some(PathBuf::from("dist/locales")));
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(path, Some(PathBuf::from("dist/locales.json")));

        // An explicit format does not rewrite an extension the user gave.
        let (format, path) = resolve_target(Some(OutputFormat::Json), Some(PathBuf::from("a.yaml")));
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(path, Some(PathBuf::from("a.yaml")));
    }

    #[test]
    fn select_langs_normalises_or_takes_all() {
        let translator = Translator::new(LocaleRegistry::builtin(), "en").expect("en is built in");
        assert_eq!(
            select_langs(&translator, &["ZH_CN".to_string(), " En ".to_string()]),
            vec!["zh-cn".to_string(), "en".to_string()]
        );
        assert_eq!(select_langs(&translator, &[]), vec!["en".to_string(), "zh-cn".to_string()]);
    }

    #[test]
    fn write_output_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/locales.yaml");
        let translator = Translator::new(LocaleRegistry::builtin(), "en").expect("en is built in");
        let export = LocaleExport::new(&translator, &["zh-cn"], true);
        write_output(&export, OutputFormat::Yaml, Some(&path)).expect("write succeeds");
        let written = fs::read_to_string(&path).expect("read back");
        assert!(written.contains("default_lang: en"));
        let value: serde_yaml::Value = serde_yaml::from_str(&written).expect("valid yaml");
        assert_eq!(value["locales"]["zh-cn"]["nav.home"].as_str(), Some("首页"));
    }
}
