use anyhow::{Context, Result};
use inkscribe_shared::{render_blocks, ContentStore, LikeState};

use crate::output::format_blocks;

pub fn run(store: &ContentStore, id: &str, related_limit: usize) -> Result<()> {
    let article = store
        .get(id)
        .with_context(|| format!("article `{id}` not found"))?;

    println!("{}", article.title);
    println!(
        "{} · {} · {} · {}",
        article.author, article.date, article.read_time, article.category
    );
    if !article.tags.is_empty() {
        println!("tags: {}", article.tags.join(", "));
    }
    println!(
        "{} · {} comments",
        LikeState::new(article.likes).label(),
        article.comments
    );
    println!();
    print!("{}", format_blocks(&render_blocks(&article.content)));

    let related = store.related(article, related_limit);
    if !related.is_empty() {
        println!();
        println!("Related articles:");
        for other in related {
            println!("  [{}] {}", other.id, other.title);
        }
    }
    Ok(())
}
