//! Immutable in-memory article store.
//!
//! The store is built once and handed to every consumer explicitly. Cloning
//! is cheap (the articles live behind an `Arc`), which keeps Yew context and
//! prop comparisons fast.

use std::{collections::HashSet, sync::Arc};

use crate::{sample_data, Article};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("duplicate article id `{0}`")]
    DuplicateId(String),
    #[error("invalid article json: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ContentStore {
    articles: Arc<[Article]>,
}

impl PartialEq for ContentStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.articles, &other.articles) || self.articles == other.articles
    }
}

impl ContentStore {
    /// Build a store, keeping the given order. Fails on a repeated id.
    pub fn new(articles: Vec<Article>) -> Result<Self, StoreError> {
        if let Some(duplicate) = first_duplicate_id(&articles) {
            return Err(StoreError::DuplicateId(duplicate.to_string()));
        }

        tracing::debug!(count = articles.len(), "content store loaded");
        Ok(Self {
            articles: articles.into(),
        })
    }

    /// The compiled-in sample articles.
    pub fn sample() -> Self {
        Self {
            articles: sample_data::sample_articles().into(),
        }
    }

    /// Parse a JSON array of articles.
    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        let articles: Vec<Article> = serde_json::from_str(raw)?;
        Self::new(articles)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    /// First article flagged as featured, in store order.
    pub fn featured(&self) -> Option<&Article> {
        self.articles.iter().find(|article| article.featured)
    }

    pub fn recent(&self, count: usize) -> &[Article] {
        &self.articles[..count.min(self.articles.len())]
    }

    /// Other articles sharing `article`'s stored category, in store order.
    pub fn related(&self, article: &Article, limit: usize) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|candidate| candidate.id != article.id && candidate.category == article.category)
            .take(limit)
            .collect()
    }

    /// Distinct stored category values in first-appearance order.
    pub fn categories_in_use(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.articles
            .iter()
            .map(|article| article.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }
}

fn first_duplicate_id(articles: &[Article]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(articles.len());
    articles
        .iter()
        .map(|article| article.id.as_str())
        .find(|id| !seen.insert(*id))
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::sample()
    }
}
