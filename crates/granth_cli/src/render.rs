//! Plain-text rendering of core view models.

use crate::cli::Layout;
use granth_core::view::{format_count, format_short_date};
use granth_core::{ArticleCardView, ArticleDetailView, CategoryOption, DashboardRow, DashboardStats};
use std::fmt::{self, Write};

pub fn categories(options: &[CategoryOption]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for option in options {
        writeln!(out, "{:<14} {}", option.id, option.name)?;
    }
    Ok(out)
}

pub fn listing(
    cards: &[ArticleCardView],
    total: usize,
    layout: Layout,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write!(out, "Found {} articles", cards.len())?;
    if cards.len() < total {
        write!(out, " out of {total}")?;
    }
    writeln!(out)?;
    for card in cards {
        match layout {
            Layout::List => {
                writeln!(
                    out,
                    "[{}] {} ({}, {} views)",
                    card.category,
                    card.title,
                    card.published,
                    format_count(card.views)
                )?;
            }
            Layout::Grid => {
                writeln!(out)?;
                write_card(&mut out, card)?;
            }
        }
    }
    Ok(out)
}

fn write_card(out: &mut String, card: &ArticleCardView) -> fmt::Result {
    writeln!(out, "{}  [{}]", card.title, card.category)?;
    writeln!(out, "  {}", card.description)?;
    let mut tags = card.preview_tags.join(", ");
    if card.hidden_tag_count > 0 {
        write!(tags, " +{}", card.hidden_tag_count)?;
    }
    writeln!(out, "  tags: {tags}")?;
    writeln!(
        out,
        "  {} | {} views | {} refs | id: {}",
        card.published,
        format_count(card.views),
        card.shloka_count,
        card.id
    )?;
    Ok(())
}

pub fn detail(view: &ArticleDetailView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", view.title)?;
    writeln!(
        out,
        "{} | {} | {} views | {} references",
        view.category,
        view.published,
        format_count(view.views),
        view.reference_count()
    )?;
    writeln!(out, "\n{}\n\n{}", view.description, view.content)?;

    for (index, shloka) in view.shlokas.iter().enumerate() {
        writeln!(out, "\nShloka {}: {}", index + 1, shloka.reference)?;
        writeln!(out, "  {}", shloka.text)?;
        writeln!(out, "  \"{}\"", shloka.translation)?;
    }

    if !view.tags.is_empty() {
        writeln!(out, "\nTags: {}", view.tags.join(", "))?;
    }

    if !view.related.is_empty() {
        writeln!(out, "\nMore articles from {}:", view.category)?;
        for card in &view.related {
            writeln!(out, "  - {} ({})", card.title, card.id)?;
        }
    }
    Ok(out)
}

pub fn dashboard(stats: &DashboardStats, rows: &[DashboardRow]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "Total: {}  Published: {}  Drafts: {}  Views: {}",
        stats.total,
        stats.published,
        stats.draft,
        format_count(stats.total_views)
    )?;
    if rows.is_empty() {
        writeln!(out, "No articles found")?;
        return Ok(out);
    }
    for row in rows {
        let date = row
            .published_at
            .map(format_short_date)
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:<24} {:<14} {:<10} {:>7} {:<13} {}",
            row.id,
            row.category.as_str(),
            row.status.as_str(),
            format_count(row.views),
            date,
            row.title
        )?;
    }
    Ok(out)
}
