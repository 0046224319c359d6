// SPDX-License-Identifier: PMPL-1.0-or-later

//! lalie: command-line access to the Lalie Spa site content
//!
//! Resolves copy, filters the catalog, builds booking links and renders
//! whole page views in English or Arabic without a browser.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use lalie_site::catalog::CategorySelector;
use lalie_site::content::{self, DEFAULT_VARIANT};
use lalie_site::diagnostics::{self, LOG_ENV};
use lalie_site::i18n::{direction_for, Lang};
use lalie_site::links::BookingTarget;
use lalie_site::render::{OutputFormat, SiteBrowser, SiteFormatter};
use lalie_site::storage;
use lalie_site::types::SiteContent;
use lalie_site::ui::{UiAction, UiState};
use lalie_site::view::PageView;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "lalie")]
#[command(version)]
#[command(about = "Bilingual content, catalog and booking links for the Lalie Spa site")]
#[command(long_about = None)]
struct Cli {
    /// Site variant file (.yaml/.yml/.json); defaults to the built-in variant
    #[arg(long, global = true, value_name = "FILE")]
    site: Option<PathBuf>,

    /// Display language tag (en, ar, ar-SA, ...)
    #[arg(short, long, global = true, default_value = "en")]
    lang: Lang,

    /// More log output on stderr (repeat for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a copy key
    Resolve {
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// List services, optionally filtered by category
    Services {
        /// Canonical (English) category key, or "all"
        #[arg(short, long, default_value = "all")]
        category: String,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List category selectors with localized labels
    Categories {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List packages
    Packages {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show working hours
    Hours {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show contact details and outbound links
    Contact {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the WhatsApp booking link for a service or package id
    Book {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Render the full resolved page view
    Page {
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Viewport scroll offset in pixels
        #[arg(long, default_value = "0")]
        scroll: u32,

        /// Render with the mobile menu open
        #[arg(long)]
        menu_open: bool,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Browse the page interactively in the terminal
    Browse,

    /// Export page views for every language
    Export {
        /// Output directory (default: ./exports)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Formats to write
        #[arg(short, long, value_enum, value_delimiter = ',', default_value = "json")]
        format: Vec<OutputFormat>,

        #[arg(short, long, default_value = "all")]
        category: String,
    },

    /// Check a site variant against the content contracts
    Validate {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Check list for a site variant
    Doctor,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => std::env::var(LOG_ENV)
            .ok()
            .and_then(|value| value.trim().parse::<Level>().ok())
            .unwrap_or(Level::WARN),
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

fn load_site(path: Option<&PathBuf>) -> Result<(SiteContent, String)> {
    match path {
        Some(path) => {
            let site = content::load(path)
                .with_context(|| format!("loading site variant {}", path.display()))?;
            Ok((site, path.display().to_string()))
        }
        None => {
            let site = content::builtin(DEFAULT_VARIANT).context("loading built-in site variant")?;
            Ok((site, "built-in".to_string()))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (site, source) = load_site(cli.site.as_ref())?;
    let lang = cli.lang;
    let formatter = SiteFormatter::new();
    tracing::debug!(site = %site.id, %lang, dir = direction_for(lang).as_attr(), "starting");

    match cli.command {
        Commands::Resolve { key } => {
            println!("{}", site.t(&key, lang));
        }

        Commands::Services { category, format } => {
            let state = state_for(lang, &category);
            let view = PageView::build(&site, &state);
            let out = format.encode(&view.services.cards, || formatter.services(&view.services))?;
            print!("{out}");
        }

        Commands::Categories { format } => {
            let view = PageView::build(&site, &UiState::new(lang));
            let out = format.encode(&view.services.categories, || {
                formatter.categories(&view.services.categories) + "\n"
            })?;
            print!("{out}");
        }

        Commands::Packages { format } => {
            let view = PageView::build(&site, &UiState::new(lang));
            let out = format.encode(&view.packages.cards, || formatter.packages(&view.packages))?;
            print!("{out}");
        }

        Commands::Hours { format } => {
            let view = PageView::build(&site, &UiState::new(lang));
            let contact = &view.contact;
            let out = format.encode(&contact.hours, || {
                formatter.hours(&contact.hours_title, &contact.hours)
            })?;
            print!("{out}");
        }

        Commands::Contact { format } => {
            let view = PageView::build(&site, &UiState::new(lang));
            let out = format.encode(&view.contact, || formatter.contact(&view.contact))?;
            print!("{out}");
        }

        Commands::Book { id } => {
            let target = site
                .service(&id)
                .map(BookingTarget::Service)
                .or_else(|| site.package(&id).map(BookingTarget::Package))
                .ok_or_else(|| anyhow!("no service or package with id '{id}' in {}", site.id))?;
            println!("{}", target.link(&site.contact));
        }

        Commands::Page {
            category,
            scroll,
            menu_open,
            format,
            output,
        } => {
            let mut state = state_for(lang, &category);
            state.apply(UiAction::Scroll(scroll));
            if menu_open {
                state.apply(UiAction::ToggleMenu);
            }
            let view = PageView::build(&site, &state);
            match output {
                Some(path) => {
                    let out = format.encode(&view, || SiteFormatter::plain().page(&view))?;
                    std::fs::write(&path, out)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Page view saved to: {}", path.display());
                }
                None => {
                    let out = format.encode(&view, || formatter.page(&view))?;
                    print!("{out}");
                }
            }
        }

        Commands::Browse => {
            let state = SiteBrowser::run(&site, UiState::new(lang))?;
            tracing::debug!(?state, "browser closed");
        }

        Commands::Export {
            dir,
            format,
            category,
        } => {
            let state = state_for(lang, &category);
            let paths = storage::export_views(&site, &state, dir.as_deref(), &format)?;
            for path in &paths {
                println!("Exported: {}", path.display());
            }
        }

        Commands::Validate { format } => {
            let report = content::validate(&site);
            let out = format.encode(&report, || {
                let mut lines = vec![format!(
                    "{}: {} error(s), {} warning(s)",
                    source,
                    report.errors.len(),
                    report.warnings.len()
                )];
                lines.extend(report.errors.iter().map(|e| format!("  error: {e}")));
                lines.extend(report.warnings.iter().map(|w| format!("  warning: {w}")));
                lines.join("\n") + "\n"
            })?;
            print!("{out}");
            if !report.is_ok() {
                return Err(anyhow!("{} failed validation", source));
            }
        }

        Commands::Doctor => {
            diagnostics::run_doctor(&site, &source)?;
        }
    }

    Ok(())
}

fn state_for(lang: Lang, category: &str) -> UiState {
    let mut state = UiState::new(lang);
    state.apply(UiAction::SelectCategory(CategorySelector::parse(category)));
    state
}
