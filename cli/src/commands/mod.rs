pub mod check;
pub mod list;
pub mod render;
pub mod show;
pub mod tags;

use anyhow::Result;

use crate::{
    cli::{Cli, Commands},
    content::{load_config, load_store},
};

pub fn run(cli: Cli) -> Result<()> {
    let source = cli.source;
    match cli.command {
        // Rendering reads a single file; no store or config needed.
        Commands::Render {
            file,
            format,
        } => render::run(&file, format),
        Commands::List {
            query,
            category,
            page,
            page_size,
            format,
        } => {
            let config = load_config(&source)?;
            let config = match page_size {
                Some(size) => config.with_page_size(size),
                None => config,
            };
            let store = load_store(&source)?;
            list::run(&store, &config, &query, category, page, format)
        },
        Commands::Show {
            id,
            related,
        } => {
            let config = load_config(&source)?;
            let store = load_store(&source)?;
            show::run(&store, &id, related.unwrap_or(config.related_limit))
        },
        Commands::Tags {
            limit,
        } => {
            let config = load_config(&source)?;
            let store = load_store(&source)?;
            tags::run(&store, limit.unwrap_or(config.popular_tag_limit))
        },
        Commands::Check => {
            let store = load_store(&source)?;
            check::run(&store)
        },
    }
}
