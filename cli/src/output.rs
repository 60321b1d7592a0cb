//! Plain-text formatting for articles and rendered blocks.

use std::fmt::Write as _;

use inkscribe_shared::{group_list_items, Article, Block, BlockGroup};

use crate::utils::truncate;

const TITLE_MAX_CHARS: usize = 48;

/// Fixed-width table with one row per article.
pub fn format_table(articles: &[&Article]) -> String {
    if articles.is_empty() {
        return "(no rows)\n".to_string();
    }

    let headers = ["id", "category", "date", "likes", "title"];
    let rows = articles
        .iter()
        .map(|article| {
            [
                article.id.clone(),
                article.category.clone(),
                article.date.clone(),
                article.likes.to_string(),
                truncate(&article.title, TITLE_MAX_CHARS),
            ]
        })
        .collect::<Vec<_>>();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let border = format!("+{border}+\n");

    let mut output = String::new();
    output.push_str(&border);
    push_row(&mut output, &headers.map(str::to_string), &widths);
    output.push_str(&border);
    for row in &rows {
        push_row(&mut output, row, &widths);
    }
    output.push_str(&border);
    output
}

fn push_row(output: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    output.push('|');
    for (cell, &width) in cells.iter().zip(widths) {
        let _ = write!(output, " {cell:<width$} |");
    }
    output.push('\n');
}

/// One `field: value` block per article, numbered from `first_row`.
pub fn format_vertical(articles: &[&Article], first_row: usize) -> String {
    let mut output = String::new();

    for (offset, article) in articles.iter().enumerate() {
        let _ = writeln!(
            output,
            "*************************** [{}] ***************************",
            first_row + offset
        );
        let fields = [
            ("id", article.id.clone()),
            ("title", article.title.clone()),
            ("category", article.category.clone()),
            ("author", article.author.clone()),
            ("date", article.date.clone()),
            ("read_time", article.read_time.clone()),
            ("likes", article.likes.to_string()),
            ("comments", article.comments.to_string()),
            ("featured", article.featured.to_string()),
            ("tags", article.tags.join(", ")),
            ("excerpt", article.excerpt.clone()),
        ];
        for (name, value) in fields {
            let _ = writeln!(output, "{name}: {value}");
        }
        output.push('\n');
    }

    if output.is_empty() {
        output.push_str("(no rows)\n");
    }
    output
}

/// Text layout of rendered blocks: headings underlined by level, adjacent
/// list items kept together, empty lines preserved.
pub fn format_blocks(blocks: &[Block]) -> String {
    let mut output = String::new();

    for group in group_list_items(blocks) {
        match group {
            BlockGroup::List(items) => {
                for item in items {
                    let _ = writeln!(output, "  * {item}");
                }
            },
            BlockGroup::Single(block) => match block {
                Block::Heading {
                    text, ..
                } => {
                    let level = block.presentation_level().unwrap_or(1);
                    let _ = writeln!(output, "{} {text}", "#".repeat(level));
                },
                Block::Paragraph(text) => {
                    let _ = writeln!(output, "{text}");
                },
                Block::Empty => output.push('\n'),
                Block::ListItem(text) => {
                    let _ = writeln!(output, "  * {text}");
                },
            },
        }
    }
    output
}
