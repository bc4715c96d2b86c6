//! Inspect binary - prints what the map would show for a selection
//!
//! Usage:
//!   cargo run --bin inspect -- english french
//!   cargo run --bin inspect -- --un english "haitian creole"
//!
//! Reads the snapshot files from DATA_DIR (defaults to static/data).

use anyhow::{Context, Result};

use language_map::coloring::ColorAssignment;
use language_map::config::Config;
use language_map::format::{capitalize, format_language_percentage, format_number};
use language_map::store::LanguageStore;
use language_map::summary::{filter_by_membership, summarize};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("language_map=warn".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let locale = config.default_locale.as_str();

    let mut un_only = false;
    let mut names = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--un" {
            un_only = true;
        } else {
            names.push(arg);
        }
    }

    let store = LanguageStore::load(&config.data_dir).context(format!(
        "Failed to load snapshots from {} (run the preprocess binary first)",
        config.data_dir.display()
    ))?;

    if names.is_empty() {
        println!("{} languages available:", store.language_names().len());
        for name in store.language_names() {
            println!("  {}", name);
        }
        return Ok(());
    }

    let selected = store.languages_by_name(&names);
    if selected.len() < names.len() {
        println!(
            "Resolved {} of {} requested languages",
            selected.len(),
            names.len()
        );
    }

    let colors = ColorAssignment::assign(&selected);
    let shown = if un_only {
        filter_by_membership(&selected, true)
    } else {
        selected.clone()
    };

    println!("\n{}", "=".repeat(60));
    for language in &shown {
        println!(
            "{} [{}]: {} speakers in {} countries",
            capitalize(&language.name),
            colors.color_for_language(&language.name),
            format_number(language.statistics.speakers(un_only), locale),
            language.statistics.countries(un_only)
        );
        for country in &language.countries {
            let share = country
                .languages
                .iter()
                .find(|entry| entry.language.eq_ignore_ascii_case(&language.name))
                .map(|entry| format_language_percentage(entry.percentage, locale))
                .unwrap_or_default();
            println!(
                "  {} {} ({}%)",
                country.flag().unwrap_or_default(),
                country.common_name,
                share
            );
        }
    }

    let totals = summarize(&selected);
    println!("{}", "-".repeat(60));
    println!(
        "Totals: {} speakers in {} countries",
        format_number(totals.statistics.speakers(un_only), locale),
        totals.statistics.countries(un_only)
    );
    println!("{}", "=".repeat(60));

    Ok(())
}
