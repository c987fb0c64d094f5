//! One-shot command implementations: search, categories, export.
//!
//! Each command runs the loader once, queries in memory, and prints. The
//! interactive viewer lives in [`crate::tui`].

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use khlex_common::{
    export_file_name, query, results_count_label, sanitize, write_export, ExportEnvelope,
    LexiconData, QueryState, Term,
};
use owo_colors::OwoColorize;

use crate::cli::VERSION;
use crate::loader::{Loader, LexiconSource};

async fn load(source: &LexiconSource) -> Result<LexiconData> {
    Loader::new(source.clone())?
        .load()
        .await
        .with_context(|| format!("failed to load lexicon from {}", source.describe()))
}

/// `khlexctl search <query> [--category <key>] [--json]`
pub async fn search(
    source: &LexiconSource,
    search_text: &str,
    category: String,
    json: bool,
) -> Result<()> {
    let data = load(source).await?;
    let state = QueryState::new(search_text, category);
    let matches = query(&data.terms, &state);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    println!("{}", results_count_label(matches.len()).bold());

    if matches.is_empty() {
        println!();
        println!("  No terms match your search.");
        return Ok(());
    }

    for term in matches {
        print_card(term, &data);
    }

    Ok(())
}

/// `khlexctl categories [--json]`
pub async fn categories(source: &LexiconSource, json: bool) -> Result<()> {
    let data = load(source).await?;

    if json {
        let listing: Vec<serde_json::Value> = data
            .categories
            .iter()
            .map(|(key, category)| {
                serde_json::json!({
                    "key": key,
                    "nameEn": category.name_en,
                    "nameKm": category.name_km,
                    "terms": data.term_count(key),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!(
        "{} ({} terms total)",
        "Categories".bold(),
        data.terms.len()
    );
    for (key, category) in &data.categories {
        println!(
            "  {} {} / {}  {} ({} terms)",
            data.category_icon(key),
            sanitize(&category.name_en),
            sanitize(&category.name_km),
            format!("[{}]", key).dimmed(),
            data.term_count(key)
        );
    }

    Ok(())
}

/// `khlexctl export [--output <path>]`
pub async fn export(source: &LexiconSource, output: Option<PathBuf>) -> Result<()> {
    let data = load(source).await?;

    let now = Utc::now();
    let path = output.unwrap_or_else(|| PathBuf::from(export_file_name(now.date_naive())));
    let envelope = ExportEnvelope::new(&data, now, &format!("khlexctl v{}", VERSION));

    write_export(&envelope, &path)
        .with_context(|| format!("failed to write export to {}", path.display()))?;

    println!(
        "{} {} terms to {}",
        "Exported".green().bold(),
        envelope.metadata.total_terms,
        path.display()
    );

    Ok(())
}

fn print_card(term: &Term, data: &LexiconData) {
    println!();
    println!(
        "  {}  {}",
        sanitize(&term.english_name).bold(),
        sanitize(&term.khmer_name)
    );
    println!(
        "  {} {}",
        data.category_icon(&term.category_key),
        data.category_label(&term.category_key).dimmed()
    );

    if let Some(description) = &term.description {
        for line in textwrap::wrap(&sanitize(description), 72) {
            println!("    {}", line);
        }
    }
    if let Some(tags) = &term.tags {
        let tags: Vec<String> = tags.iter().map(|t| sanitize(t)).collect();
        println!("    {}", tags.join(", ").dimmed());
    }
    if term.is_verified() {
        println!("    {}", "verified".green());
    }
}
