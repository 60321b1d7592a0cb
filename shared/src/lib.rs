//! Core content model and session state for the Inkscribe blog.
//!
//! Everything here is target independent so the same code runs inside the
//! Yew frontend (wasm32) and the native CLI.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub mod comments;
pub mod config;
pub mod content_store;
pub mod engagement;
pub mod forms;
pub mod markdown;
pub mod pagination;
pub mod sample_data;
pub mod schema;
pub mod search;

pub use comments::{avatar_url, CommentForm, CommentThread};
pub use config::SiteConfig;
pub use content_store::{ContentStore, StoreError};
pub use engagement::LikeState;
pub use forms::{ContactForm, ContactMessage, FormError, FormField, NewsletterForm};
pub use markdown::{group_list_items, render_blocks, Block, BlockGroup};
pub use pagination::{
    clamp_page, paginate, visible_page_slots, BlogListing, ListingView, Page, PageSlot,
};
pub use sample_data::{sample_articles, sample_comments};
pub use search::{filter_articles, popular_tags, ArticleQuery};

// 完整文章数据模型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String, // markdown 子集文本
    pub image: String,
    pub author: String,
    pub author_avatar: String,
    pub date: String,      // 展示用字符串，如 "Jan 15, 2024"
    pub read_time: String, // 展示用字符串，如 "8 min read"
    pub likes: u32,
    pub comments: u32,
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    /// Stored category value. Kept as the raw string so values outside
    /// [`Category`] still load and simply never match a category filter.
    pub category: String,
}

impl Article {
    /// The known category of this article, if the stored value is one.
    pub fn known_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }
}

/// Session-local comment shown under an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub avatar: String,
    pub content: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Design,
    Business,
    Lifestyle,
}

impl Category {
    pub const ALL: [Category; 4] =
        [Category::Technology, Category::Design, Category::Business, Category::Lifestyle];

    /// The value stored on [`Article::category`].
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Design => "design",
            Category::Business => "business",
            Category::Lifestyle => "lifestyle",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}`")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    // Stored values are lowercase; matching stays case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Category selector: the `all` sentinel or one known category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_SENTINEL: &'static str = "all";

    /// Selector options in the order the blog page shows them.
    pub const ALL_OPTIONS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Technology),
        CategoryFilter::Only(Category::Design),
        CategoryFilter::Only(Category::Business),
        CategoryFilter::Only(Category::Lifestyle),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_SENTINEL,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Exact comparison against the stored category value.
    pub fn matches(self, stored: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => category.as_str() == stored,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_SENTINEL {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_filter_parses_selector_values() {
        let parsed = ["all", "technology", "design", "business", "lifestyle"]
            .iter()
            .map(|raw| raw.parse::<CategoryFilter>().expect("known selector"))
            .collect::<Vec<_>>();
        assert_eq!(parsed, CategoryFilter::ALL_OPTIONS.to_vec());
        assert_eq!(CategoryFilter::Only(Category::Design).to_string(), "design");
    }

    #[test]
    fn category_parsing_is_case_sensitive() {
        assert!("Technology".parse::<Category>().is_err());
        assert_eq!(
            "ALL".parse::<CategoryFilter>(),
            Err(ParseCategoryError("ALL".to_string()))
        );
    }

    #[test]
    fn unknown_stored_category_only_matches_all() {
        assert!(CategoryFilter::All.matches("gardening"));
        assert!(CategoryFilter::ALL_OPTIONS[1..]
            .iter()
            .all(|filter| !filter.matches("gardening")));
    }

    #[test]
    fn article_uses_camel_case_fields_and_optional_featured() {
        let raw = r#"{
            "id": "7",
            "title": "T",
            "excerpt": "E",
            "content": "C",
            "image": "i.jpg",
            "author": "A",
            "authorAvatar": "a.svg",
            "date": "Jan 1, 2024",
            "readTime": "1 min read",
            "likes": 0,
            "comments": 0,
            "tags": [],
            "category": "design"
        }"#;
        let article: Article = serde_json::from_str(raw).expect("valid article json");
        assert!(!article.featured);
        assert_eq!(article.read_time, "1 min read");
        assert_eq!(article.known_category(), Some(Category::Design));
    }

    #[test]
    fn category_filter_serializes_as_plain_string() {
        let json = serde_json::to_string(&CategoryFilter::Only(Category::Business))
            .expect("serialize filter");
        assert_eq!(json, "\"business\"");
        let back: CategoryFilter = serde_json::from_str("\"all\"").expect("deserialize filter");
        assert_eq!(back, CategoryFilter::All);
    }
}
