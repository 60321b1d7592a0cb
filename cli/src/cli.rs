use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use inkscribe_shared::CategoryFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryOutputFormat {
    Table,
    Vertical,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "ink-cli", version, about = "Inkscribe content CLI")]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceArgs,
    #[command(subcommand)]
    pub command: Commands,
}

/// Where articles and site settings come from.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Directory of `*.md` articles with YAML frontmatter. Uses the built-in
    /// sample articles when omitted.
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,
    /// JSON file with site settings (page size, related limit, ...).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List articles matching a search query and category.
    List {
        /// Case-insensitive search over title, excerpt and tags.
        #[arg(long, default_value = "")]
        query: String,
        /// `all`, `technology`, `design`, `business` or `lifestyle`.
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Articles per page (overrides the site config).
        #[arg(long)]
        page_size: Option<usize>,
        /// Output format.
        #[arg(long, value_enum, default_value = "table")]
        format: QueryOutputFormat,
    },
    /// Show one article with its rendered body and related articles.
    Show {
        /// Article id.
        id: String,
        /// Number of related articles (overrides the site config).
        #[arg(long)]
        related: Option<usize>,
    },
    /// Classify each line of a markdown file into blocks.
    Render {
        /// Markdown file path. Frontmatter, if any, is skipped.
        #[arg(long)]
        file: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value = "text")]
        format: RenderFormat,
    },
    /// Print the popular tags across all articles.
    Tags {
        /// Maximum number of tags (overrides the site config).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Load the content source and report what it contains.
    Check,
}
