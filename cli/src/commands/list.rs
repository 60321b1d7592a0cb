use anyhow::Result;
use inkscribe_shared::{BlogListing, CategoryFilter, ContentStore, SiteConfig};

use crate::{
    cli::QueryOutputFormat,
    output::{format_table, format_vertical},
};

pub fn run(
    store: &ContentStore,
    config: &SiteConfig,
    query: &str,
    category: CategoryFilter,
    page: usize,
    format: QueryOutputFormat,
) -> Result<()> {
    let mut listing = BlogListing::new(config.page_size).with_category(category);
    listing.set_query(query);
    listing.go_to_page(store.articles(), page);
    if listing.page() != page {
        tracing::warn!("Page {} is out of range, showing page {}", page, listing.page());
    }

    let view = listing.view(store.articles());
    match format {
        QueryOutputFormat::Table => print!("{}", format_table(&view.items)),
        QueryOutputFormat::Vertical => {
            let first_row = (view.page - 1) * listing.page_size() + 1;
            print!("{}", format_vertical(&view.items, first_row));
        },
        QueryOutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&view.items)?);
            return Ok(());
        },
    }

    tracing::info!(
        "{} (page {} of {})",
        view.summary(),
        view.page,
        view.total_pages.max(1)
    );
    Ok(())
}
