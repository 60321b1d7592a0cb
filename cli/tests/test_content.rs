#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use ink_cli::{
        cli::SourceArgs,
        content::{self, article_from_markdown},
        output::{format_blocks, format_table, format_vertical},
    };
    use inkscribe_shared::{render_blocks, CategoryFilter, ContentStore};
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).expect("write markdown");
    }

    const RUST_POST: &str = "---\ntitle: Rust Notes\ncategory: technology\ntags: [Rust, Systems]\nfeatured: true\ndate: \"2024-02-10\"\n---\n# Rust\n\nOwnership keeps things tidy.\n- borrow\n- move\n";
    const GARDEN_POST: &str = "---\ntitle: Garden Log\ncategory: gardening\n---\nTomatoes again.\n";

    #[test]
    fn scan_loads_markdown_and_skips_broken_files() {
        let dir = TempDir::new().expect("create temp dir");
        write(dir.path(), "rust-notes.md", RUST_POST);
        write(dir.path(), "garden.md", GARDEN_POST);
        write(dir.path(), "untitled.md", "---\ncategory: design\n---\nNo title here.\n");
        write(dir.path(), "readme.txt", "not markdown");

        let articles = content::scan_articles(dir.path()).expect("scan directory");
        let ids = articles.iter().map(|a| a.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["garden", "rust-notes"]);

        let rust = &articles[1];
        assert_eq!(rust.title, "Rust Notes");
        assert_eq!(rust.date, "Feb 10, 2024");
        assert_eq!(rust.read_time, "1 min read");
        assert_eq!(rust.excerpt, "Ownership keeps things tidy.");
        assert_eq!(rust.author, "Inkscribe");
        assert!(rust.author_avatar.ends_with("?seed=Inkscribe"));
        assert!(rust.featured);
    }

    #[test]
    fn unknown_categories_load_but_only_match_all() {
        let dir = TempDir::new().expect("create temp dir");
        write(dir.path(), "garden.md", GARDEN_POST);

        let source = SourceArgs {
            content_dir: Some(dir.path().to_path_buf()),
            config: None,
        };
        let store = content::load_store(&source).expect("load store");
        assert_eq!(store.len(), 1);
        assert_eq!(
            inkscribe_shared::filter_articles(store.articles(), "", CategoryFilter::All).len(),
            1
        );
        assert!(CategoryFilter::ALL_OPTIONS[1..].iter().all(|filter| {
            inkscribe_shared::filter_articles(store.articles(), "", *filter).is_empty()
        }));
    }

    #[test]
    fn duplicate_ids_fail_the_load() {
        let dir = TempDir::new().expect("create temp dir");
        write(dir.path(), "a.md", "---\nid: same\ntitle: A\ncategory: design\n---\nA\n");
        write(dir.path(), "b.md", "---\nid: same\ntitle: B\ncategory: design\n---\nB\n");

        let source = SourceArgs {
            content_dir: Some(dir.path().to_path_buf()),
            config: None,
        };
        let err = content::load_store(&source).expect_err("duplicate ids");
        assert!(format!("{err:#}").contains("same"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().expect("create temp dir");
        assert!(content::scan_articles(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn no_content_dir_uses_sample_articles() {
        let store = content::load_store(&SourceArgs::default()).expect("sample store");
        assert_eq!(store, ContentStore::sample());
        assert_eq!(content::load_config(&SourceArgs::default()).expect("config").page_size, 9);
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("site.json");
        fs::write(&path, r#"{"page_size": 0, "related_limit": 5}"#).expect("write config");

        let source = SourceArgs {
            content_dir: None,
            config: Some(path),
        };
        let config = content::load_config(&source).expect("load config");
        assert_eq!(config.page_size, 1);
        assert_eq!(config.related_limit, 5);
    }

    #[test]
    fn render_body_skips_frontmatter_only_when_present() {
        let dir = TempDir::new().expect("create temp dir");
        write(dir.path(), "plain.md", "#NoSpace\n- item\n");
        let body = content::read_body(&dir.path().join("plain.md")).expect("read body");
        assert_eq!(body, "#NoSpace\n- item\n");
        assert_eq!(
            format_blocks(&render_blocks(&body)),
            "# #NoSpace\n  * item\n\n"
        );
    }

    #[test]
    fn headings_are_clamped_for_display() {
        let text = format_blocks(&render_blocks("##### Deep\nText"));
        assert_eq!(text, "### Deep\nText\n");
    }

    #[test]
    fn article_needs_title_and_category() {
        assert!(article_from_markdown("x", "no frontmatter").is_err());
        assert!(article_from_markdown("x", "---\ntitle: T\n---\nbody").is_err());
        let article =
            article_from_markdown("x", "---\ntitle: T\ncategory: design\ntags: a, b\n---\nbody")
                .expect("valid article");
        assert_eq!(article.id, "x");
        assert_eq!(article.tags, vec!["a", "b"]);
    }

    #[test]
    fn table_and_vertical_output() {
        let store = ContentStore::sample();
        let first = store.articles().iter().take(2).collect::<Vec<_>>();

        let table = format_table(&first);
        assert_eq!(table.lines().count(), 6);
        assert!(table.lines().nth(1).unwrap_or_default().contains("| id "));

        let vertical = format_vertical(&first, 4);
        assert!(vertical.contains("[4]"));
        assert!(vertical.contains("[5]"));
        assert!(vertical.contains("id: 1\n"));

        assert_eq!(format_table(&[]), "(no rows)\n");
        assert_eq!(format_vertical(&[], 1), "(no rows)\n");
    }
}
