use anyhow::Result;
use chrono::NaiveDate;
use gray_matter::{engine::YAML, Matter};
use serde::Deserialize;

/// Frontmatter accepted on article markdown files.
#[derive(Debug, Default, Deserialize)]
pub struct Frontmatter {
    pub id: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub featured_image: Option<String>,
    pub author: Option<String>,
    pub author_avatar: Option<String>,
    pub date: Option<String>,
    pub read_time: Option<u32>,
    pub likes: Option<u32>,
    pub comments: Option<u32>,
    pub tags: Option<TagList>,
    pub category: Option<String>,
    pub featured: Option<bool>,
}

/// Tags written either as a YAML list or as one comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagList {
    List(Vec<String>),
    Csv(String),
}

impl TagList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            TagList::List(tags) => tags
                .into_iter()
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
            TagList::Csv(raw) => parse_tags(&raw),
        }
    }
}

impl Frontmatter {
    /// `excerpt` wins over the older `summary` key.
    pub fn excerpt(&mut self) -> Option<String> {
        self.excerpt.take().or_else(|| self.summary.take())
    }

    pub fn image(&mut self) -> Option<String> {
        self.image.take().or_else(|| self.featured_image.take())
    }
}

pub fn parse_markdown(content: &str) -> Result<(Frontmatter, String)> {
    let matter = Matter::<YAML>::new();
    let parsed = matter.parse(content);

    let frontmatter = parsed
        .data
        .map(|data| data.deserialize::<Frontmatter>())
        .transpose()?
        .unwrap_or_default();

    Ok((frontmatter, parsed.content))
}

pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_string())
        .collect()
}

/// Minutes at 200 words per minute, rounded up, never below one.
pub fn estimate_read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    let minutes = (words as f32 / 200.0).ceil() as u32;
    minutes.max(1)
}

pub fn format_read_time(minutes: u32) -> String {
    format!("{minutes} min read")
}

/// `2024-01-15` becomes `Jan 15, 2024`; anything else is kept as written.
pub fn display_date(raw: &str) -> String {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Cut `text` to at most `max_chars` characters, marking the cut with `...`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept = text.chars().take(max_chars.saturating_sub(3)).collect::<String>();
    format!("{kept}...")
}
