// SPDX-License-Identifier: PMPL-1.0-or-later

//! blog-site: inspect and check the blog's configuration and UI strings
//!
//! The static-site build reads the same `site.yaml` and locale files; this
//! tool resolves individual keys, shows how URLs map to languages, checks
//! that every dictionary covers the default language's keys, and exports the
//! dictionaries for the templates.

use anyhow::Result;
use blog_site::config::{SiteConfig, DEFAULT_CONFIG_FILE};
use blog_site::i18n;
use blog_site::output::{self, LocaleExport, OutputFormat};
use blog_site::{diagnostics, Site};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blog-site")]
#[command(version)]
#[command(about = "Site configuration and localised UI strings for the blog")]
#[command(long_about = None)]
struct Cli {
    /// Site configuration file (YAML or JSON); defaults apply if it is missing
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the configured default language
    #[arg(long, global = true, value_name = "LANG")]
    default_lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single key
    Translate {
        /// Lookup key, e.g. nav.home
        #[arg(value_name = "KEY")]
        key: String,

        /// Language to resolve in (defaults to the default language)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// List supported languages
    Languages,

    /// Show the language of a URL path and its localised variants
    Route {
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Check configuration and key parity across dictionaries
    Check,

    /// Export dictionaries for the templates
    Export {
        /// Output format (inferred from --output, else json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Apply default-language fallback to every dictionary
        #[arg(long)]
        resolved: bool,

        /// Only export these languages (repeatable)
        #[arg(short, long = "lang", value_name = "LANG")]
        langs: Vec<String>,
    },

    /// Print the effective configuration
    Config {
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut config = SiteConfig::load_or_default(&cli.config)?;
    if let Some(lang) = &cli.default_lang {
        config = config.with_default_lang(lang)?;
    }
    // `check` reports key mismatches itself, as ERR under strict_keys.
    let site = if matches!(cli.command, Commands::Check) {
        Site::build_unchecked(config)?
    } else {
        Site::build(config)?
    };
    let translator = site.translator();

    match cli.command {
        Commands::Translate { key, lang } => {
            println!("{}", site.lookup(lang.as_deref(), &key)?);
        }

        Commands::Languages => {
            for (lang, dict) in translator.registry().iter() {
                let line = format!(
                    "{:8} {:24} {:10} {} keys",
                    lang,
                    i18n::language_name(lang).unwrap_or("-"),
                    i18n::native_name(lang).unwrap_or("-"),
                    dict.len()
                );
                if lang == translator.default_lang() {
                    println!("{} {}", line.bold(), "(default)".green());
                } else {
                    println!("{}", line);
                }
            }
        }

        Commands::Route { path } => {
            let detected = i18n::lang_from_path(translator, &path);
            println!("Language: {}", detected.bold());
            println!("Page:     {}", i18n::strip_lang_prefix(translator, &path));
            println!();
            for lang in translator.registry().languages() {
                let localized = i18n::localize_path(translator, &path, lang);
                println!(
                    "  {:8} {:32} {}",
                    lang,
                    localized,
                    site.config().absolute_url(&localized)
                );
            }
        }

        Commands::Check => {
            diagnostics::run_self_diagnostics(&site)?;
        }

        Commands::Export {
            format,
            output,
            resolved,
            langs,
        } => {
            let (format, output) = output::resolve_target(format, output);
            let requested = output::select_langs(translator, &langs);
            let selected: Vec<&str> = requested.iter().map(String::as_str).collect();
            let export = LocaleExport::new(translator, &selected, resolved);
            output::write_output(&export, format, output.as_deref())?;
            if let Some(path) = output {
                eprintln!("Exported {} language(s) to {}", selected.len(), path.display());
            }
        }

        Commands::Config { format } => {
            output::write_output(site.config(), format, None)?;
        }
    }

    Ok(())
}
