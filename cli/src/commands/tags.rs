use anyhow::Result;
use inkscribe_shared::{popular_tags, ContentStore};

pub fn run(store: &ContentStore, limit: usize) -> Result<()> {
    let tags = popular_tags(store.articles(), limit);
    if tags.is_empty() {
        tracing::info!("No tags found");
        return Ok(());
    }
    for tag in tags {
        println!("{tag}");
    }
    Ok(())
}
