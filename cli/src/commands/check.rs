use anyhow::Result;
use inkscribe_shared::{Category, ContentStore};

/// Summarize the loaded store. Unknown categories are reported but never
/// fail the check; such articles only show up under `all`.
pub fn run(store: &ContentStore) -> Result<()> {
    tracing::info!("{} articles loaded", store.len());

    match store.featured() {
        Some(article) => tracing::info!("Featured: [{}] {}", article.id, article.title),
        None => tracing::warn!("No featured article"),
    }

    for category in store.categories_in_use() {
        let count = store
            .articles()
            .iter()
            .filter(|article| article.category == category)
            .count();
        if category.parse::<Category>().is_ok() {
            tracing::info!("Category {}: {} articles", category, count);
        } else {
            tracing::warn!(
                "Unknown category `{}` on {} articles; they only appear under `all`",
                category,
                count
            );
        }
    }
    Ok(())
}
