#[cfg(test)]
mod tests {
    use std::io::Write;

    use ink_cli::utils;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_markdown_reads_frontmatter_and_content() {
        let mut file = NamedTempFile::new().expect("create temp file");
        let markdown = r#"---
title: "Hello"
excerpt: "Short excerpt"
tags:
  - rust
  - wasm
category: "technology"
author: "Ada"
date: "2024-01-01"
featured_image: "hero.jpg"
read_time: 3
featured: true
---

# Heading

Body content.
"#;
        file.write_all(markdown.as_bytes()).expect("write markdown");
        file.flush().expect("flush markdown");

        let content = std::fs::read_to_string(file.path()).expect("read markdown");
        let (mut frontmatter, body) = utils::parse_markdown(&content).expect("parse markdown");

        assert_eq!(frontmatter.title.as_deref(), Some("Hello"));
        assert_eq!(frontmatter.excerpt().as_deref(), Some("Short excerpt"));
        assert_eq!(frontmatter.image().as_deref(), Some("hero.jpg"));
        assert_eq!(frontmatter.category.as_deref(), Some("technology"));
        assert_eq!(frontmatter.author.as_deref(), Some("Ada"));
        assert_eq!(frontmatter.read_time, Some(3));
        assert_eq!(frontmatter.featured, Some(true));
        assert_eq!(
            frontmatter.tags.map(|tags| tags.into_vec()),
            Some(vec!["rust".to_string(), "wasm".to_string()])
        );
        assert!(body.contains("# Heading"));
        assert!(body.contains("Body content."));
    }

    #[test]
    fn markdown_without_frontmatter_has_defaults() {
        let (frontmatter, body) = utils::parse_markdown("Just text").expect("parse markdown");
        assert!(frontmatter.title.is_none());
        assert!(frontmatter.tags.is_none());
        assert!(body.contains("Just text"));
    }

    #[test]
    fn comma_separated_tags_are_split() {
        let (frontmatter, _) = utils::parse_markdown("---\ntags: \"rust, , wasm ,yew\"\n---\nbody")
            .expect("parse markdown");
        assert_eq!(
            frontmatter.tags.map(|tags| tags.into_vec()),
            Some(vec!["rust".to_string(), "wasm".to_string(), "yew".to_string()])
        );
    }

    #[test]
    fn parse_tags_trims_and_filters() {
        let tags = utils::parse_tags(" rust, wasm ,, web ");
        assert_eq!(tags, vec!["rust", "wasm", "web"]);
    }

    #[test]
    fn estimate_read_time_is_at_least_one_minute() {
        assert_eq!(utils::estimate_read_time(""), 1);
        assert_eq!(utils::estimate_read_time(&"word ".repeat(200)), 1);
        assert_eq!(utils::estimate_read_time(&"word ".repeat(201)), 2);
        assert_eq!(utils::format_read_time(8), "8 min read");
    }

    #[test]
    fn iso_dates_are_shown_like_sample_dates() {
        assert_eq!(utils::display_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(utils::display_date("Jan 15, 2024"), "Jan 15, 2024");
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(utils::truncate("short", 10), "short");
        assert_eq!(utils::truncate("abcdefghij", 6), "abc...");
    }
}
