//! Free-text + category filtering over the content store.
//!
//! Filtering is a stable `retain`: matches keep their original relative order
//! and nothing is ranked.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Article, CategoryFilter};

/// Blog listing criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleQuery {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub category: CategoryFilter,
}

impl ArticleQuery {
    pub fn new(text: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    pub fn has_filters(&self) -> bool {
        !self.text.is_empty() || self.category != CategoryFilter::All
    }

    pub fn matches(&self, article: &Article) -> bool {
        self.category.matches(&article.category) && matches_text(article, &self.text.to_lowercase())
    }

    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        filter_articles(articles, &self.text, self.category)
    }
}

/// Articles matching both the category selector and the free-text query.
///
/// The query is matched case-insensitively as a substring of the title, the
/// excerpt or any tag. An empty query matches everything.
pub fn filter_articles<'a>(
    articles: &'a [Article],
    query: &str,
    category: CategoryFilter,
) -> Vec<&'a Article> {
    let needle = query.to_lowercase();
    let matched = articles
        .iter()
        .filter(|article| category.matches(&article.category) && matches_text(article, &needle))
        .collect::<Vec<_>>();

    tracing::debug!(
        query,
        category = category.as_str(),
        total = articles.len(),
        matched = matched.len(),
        "filtered articles"
    );
    matched
}

// `needle` is already lowercased.
fn matches_text(article: &Article, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    article.title.to_lowercase().contains(needle)
        || article.excerpt.to_lowercase().contains(needle)
        || article
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Distinct tags in first-appearance order, at most `limit` of them.
pub fn popular_tags(articles: &[Article], limit: usize) -> Vec<&str> {
    let mut seen = HashSet::new();
    articles
        .iter()
        .flat_map(|article| article.tags.iter().map(String::as_str))
        .filter(|tag| seen.insert(*tag))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sample_data::sample_articles, Category};

    fn ids<'a>(articles: &[&'a Article]) -> Vec<&'a str> {
        articles.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn empty_query_and_all_is_identity() {
        let articles = sample_articles();
        let filtered = filter_articles(&articles, "", CategoryFilter::All);
        assert_eq!(filtered.len(), articles.len());
        assert!(filtered.iter().zip(&articles).all(|(a, b)| *a == b));
    }

    #[test]
    fn technology_filter_keeps_store_order() {
        let articles = sample_articles();
        let filtered = filter_articles(&articles, "", Category::Technology.into());
        assert_eq!(ids(&filtered), vec!["1", "5"]);
    }

    #[test]
    fn text_match_is_case_insensitive_across_fields() {
        let articles = sample_articles();
        // title
        assert_eq!(ids(&filter_articles(&articles, "MINIMALIST", CategoryFilter::All)), vec!["2"]);
        // excerpt
        assert_eq!(
            ids(&filter_articles(&articles, "environmental impact", CategoryFilter::All)),
            vec!["4"]
        );
        // tag
        assert_eq!(ids(&filter_articles(&articles, "ai", CategoryFilter::All)).first(), Some(&"1"));
        assert_eq!(ids(&filter_articles(&articles, "ui/ux", CategoryFilter::All)), vec!["2"]);
    }

    #[test]
    fn both_predicates_must_hold() {
        let articles = sample_articles();
        let filtered = filter_articles(&articles, "branding", Category::Technology.into());
        assert!(filtered.is_empty());
        let filtered = filter_articles(&articles, "branding", Category::Design.into());
        assert_eq!(ids(&filtered), vec!["6"]);
    }

    #[test]
    fn query_is_not_trimmed() {
        let articles = sample_articles();
        assert!(filter_articles(&articles, "  design  ", CategoryFilter::All).is_empty());
    }

    #[test]
    fn filtering_is_idempotent_and_a_subsequence() {
        let articles = sample_articles();
        for query in ["", "a", "design", "learning", "zzz"] {
            for category in CategoryFilter::ALL_OPTIONS {
                let once = filter_articles(&articles, query, category)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>();
                let twice = filter_articles(&once, query, category)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>();
                assert_eq!(once, twice, "query={query:?} category={category}");

                let positions = once
                    .iter()
                    .map(|hit| articles.iter().position(|a| a.id == hit.id).expect("hit in source"))
                    .collect::<Vec<_>>();
                assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
            }
        }
    }

    #[test]
    fn unknown_category_never_matches_specific_filter() {
        let mut articles = sample_articles();
        articles[0].category = "Technology".to_string();
        let filtered = filter_articles(&articles, "", Category::Technology.into());
        assert_eq!(ids(&filtered), vec!["5"]);
        assert_eq!(filter_articles(&articles, "", CategoryFilter::All).len(), 6);
    }

    #[test]
    fn query_struct_matches_free_function() {
        let articles = sample_articles();
        let query = ArticleQuery::new("Design", Category::Design.into());
        assert!(query.has_filters());
        assert!(!ArticleQuery::default().has_filters());
        assert_eq!(ids(&query.apply(&articles)), vec!["2", "6"]);
        assert!(query.matches(&articles[1]));
        assert!(!query.matches(&articles[0]));
    }

    #[test]
    fn popular_tags_are_distinct_and_limited() {
        let articles = sample_articles();
        let tags = popular_tags(&articles, 10);
        assert_eq!(tags.len(), 10);
        assert_eq!(&tags[..4], &["Technology", "Web Development", "AI", "Trends"]);
        assert_eq!(tags.iter().filter(|tag| **tag == "AI").count(), 1);
    }
}
