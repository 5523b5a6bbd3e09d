//! `granth` command-line entry point.
//!
//! # Responsibility
//! - Parse arguments and route them to `granth_core` services.
//! - Render results as text or JSON; no business rules live here.

mod cli;
mod render;

use clap::Parser;
use cli::{Cli, Commands};
use granth_core::{
    category_options, dashboard_seed, default_log_level, init_logging, ArticleCardView,
    ArticleCatalog, ArticleService, DashboardFilter, DashboardService, InMemoryArticleRepository,
    QueryParams, StatusFilter,
};
use log::warn;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::process::ExitCode;

type CliResult = Result<(), String>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run(&cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> CliResult {
    match &cli.command {
        Commands::Ping => {
            let text = format!(
                "granth_core ping={}\ngranth_core version={}\n",
                granth_core::ping(),
                granth_core::core_version()
            );
            write_text(out, &text)
        }
        Commands::Categories => {
            let options = category_options();
            emit(out, cli.json, &options, || render::categories(&options))
        }
        Commands::List {
            category,
            search,
            sort,
            layout,
        } => {
            let catalog = ArticleCatalog::sample();
            let params = QueryParams::from_raw(category, search, sort);
            let result = ArticleService::new(&catalog).list(&params);
            let cards: Vec<ArticleCardView> = result
                .items
                .iter()
                .map(|article| ArticleCardView::from_article(article))
                .collect();
            emit(out, cli.json, &cards, || {
                render::listing(&cards, result.total, *layout)
            })
        }
        Commands::Show { id } => {
            let catalog = ArticleCatalog::sample();
            let Some(view) = ArticleService::new(&catalog).detail(id) else {
                warn!("event=cli_show module=cli status=not_found");
                return Err(format!("Article not found: {id}"));
            };
            emit(out, cli.json, &view, || render::detail(&view))
        }
        Commands::Dashboard { status, search } => {
            let repo = InMemoryArticleRepository::seeded(dashboard_seed())
                .map_err(|err| err.to_string())?;
            let dashboard = DashboardService::new(repo);
            let filter = DashboardFilter {
                title_search: search.clone(),
                status: StatusFilter::parse_or_all(status),
            };
            let stats = dashboard.stats().map_err(|err| err.to_string())?;
            let rows = dashboard.list(&filter).map_err(|err| err.to_string())?;

            if cli.json {
                let payload = serde_json::json!({ "stats": stats, "rows": rows });
                return write_json(out, &payload);
            }
            let text = render::dashboard(&stats, &rows).map_err(|err| err.to_string())?;
            write_text(out, &text)
        }
    }
}

fn emit<T: Serialize>(
    out: &mut impl Write,
    json: bool,
    value: &T,
    text: impl FnOnce() -> Result<String, fmt::Error>,
) -> CliResult {
    if json {
        write_json(out, value)
    } else {
        let text = text().map_err(|err| err.to_string())?;
        write_text(out, &text)
    }
}

fn write_text(out: &mut impl Write, text: &str) -> CliResult {
    out.write_all(text.as_bytes()).map_err(|err| err.to_string())
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> CliResult {
    let encoded = serde_json::to_string_pretty(value).map_err(|err| err.to_string())?;
    writeln!(out, "{encoded}").map_err(|err| err.to_string())
}
