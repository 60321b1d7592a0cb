//! Builds a [`ContentStore`] from the sample articles or a markdown directory.

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use inkscribe_shared::{avatar_url, render_blocks, Article, Block, ContentStore, SiteConfig};
use walkdir::WalkDir;

use crate::{
    cli::SourceArgs,
    utils::{display_date, estimate_read_time, format_read_time, parse_markdown, truncate},
};

const DEFAULT_AUTHOR: &str = "Inkscribe";
const EXCERPT_MAX_CHARS: usize = 160;

pub fn load_config(source: &SourceArgs) -> Result<SiteConfig> {
    let Some(path) = &source.config else {
        return Ok(SiteConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    SiteConfig::from_json(&raw).with_context(|| format!("invalid config {}", path.display()))
}

pub fn load_store(source: &SourceArgs) -> Result<ContentStore> {
    match &source.content_dir {
        Some(dir) => {
            let articles = scan_articles(dir)?;
            tracing::info!("Loaded {} articles from {}", articles.len(), dir.display());
            ContentStore::new(articles)
                .with_context(|| format!("invalid content directory {}", dir.display()))
        },
        None => Ok(ContentStore::sample()),
    }
}

/// Parse every `*.md` file under `dir`, in path order.
///
/// Files that fail to parse are logged and skipped; only an unreadable
/// directory is an error.
pub fn scan_articles(dir: &Path) -> Result<Vec<Article>> {
    if !dir.is_dir() {
        bail!("content directory {} does not exist", dir.display());
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry =
            entry.with_context(|| format!("failed to walk content directory {}", dir.display()))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().and_then(|s| s.to_str()) == Some("md") {
            paths.push(path.to_path_buf());
        }
    }
    paths.sort();

    let mut articles = Vec::with_capacity(paths.len());
    for path in paths {
        match read_article(&path) {
            Ok(article) => articles.push(article),
            Err(e) => tracing::warn!("Failed to parse {}: {:#}", path.display(), e),
        }
    }
    Ok(articles)
}

pub fn read_article(path: &Path) -> Result<Article> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let stem = file_stem(path)?;
    article_from_markdown(&stem, &raw)
}

/// Build an article from frontmatter plus body. `fallback_id` is used when
/// the frontmatter has no `id`.
pub fn article_from_markdown(fallback_id: &str, raw: &str) -> Result<Article> {
    let (mut frontmatter, body) = parse_markdown(raw)?;
    let body = body.trim_start_matches('\n').to_string();

    let Some(title) = frontmatter.title.take().filter(|t| !t.trim().is_empty()) else {
        bail!("missing `title` in frontmatter");
    };
    let Some(category) = frontmatter.category.take().filter(|c| !c.trim().is_empty()) else {
        bail!("missing `category` in frontmatter");
    };

    let excerpt = frontmatter.excerpt().unwrap_or_else(|| {
        first_paragraph(&body)
            .map(|p| truncate(&p, EXCERPT_MAX_CHARS))
            .unwrap_or_default()
    });
    let author = frontmatter
        .author
        .take()
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());
    let author_avatar = frontmatter
        .author_avatar
        .take()
        .unwrap_or_else(|| avatar_url(&author));
    let minutes = frontmatter
        .read_time
        .unwrap_or_else(|| estimate_read_time(&body));

    Ok(Article {
        id: frontmatter.id.take().unwrap_or_else(|| fallback_id.to_string()),
        title,
        excerpt,
        image: frontmatter.image().unwrap_or_default(),
        author,
        author_avatar,
        date: frontmatter
            .date
            .as_deref()
            .map(display_date)
            .unwrap_or_default(),
        read_time: format_read_time(minutes),
        likes: frontmatter.likes.unwrap_or(0),
        comments: frontmatter.comments.unwrap_or(0),
        tags: frontmatter.tags.take().map(|t| t.into_vec()).unwrap_or_default(),
        featured: frontmatter.featured.unwrap_or(false),
        category,
        content: body,
    })
}

fn first_paragraph(body: &str) -> Option<String> {
    render_blocks(body).into_iter().find_map(|block| match block {
        Block::Paragraph(text) => Some(text.trim().to_string()),
        _ => None,
    })
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .with_context(|| format!("invalid file name {}", path.display()))
}

/// Read a markdown file for rendering, dropping frontmatter if present.
/// Files without frontmatter come back untouched.
pub fn read_body(path: &Path) -> Result<String> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    if !raw.starts_with("---") {
        return Ok(raw);
    }
    let (_, body) = parse_markdown(&raw)?;
    Ok(body)
}
