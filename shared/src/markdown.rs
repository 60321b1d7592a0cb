//! Line classifier for the markdown subset used in article bodies.
//!
//! Each line becomes exactly one [`Block`]; nothing spans lines and there is
//! no inline markup. Rendering choices (heading tags, list grouping) belong to
//! the consumer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// `level` is the raw count of leading `#`, never clamped.
    Heading { level: usize, text: String },
    ListItem(String),
    Paragraph(String),
    Empty,
}

impl Block {
    /// Heading level limited to `1..=3`, for picking `h1`..`h3`.
    pub fn presentation_level(&self) -> Option<usize> {
        match self {
            Block::Heading {
                level, ..
            } => Some((*level).clamp(1, 3)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Block::Empty)
    }
}

/// Classify every line of `content`, splitting on `'\n'` only.
pub fn render_blocks(content: &str) -> Vec<Block> {
    content.split('\n').map(classify_line).collect()
}

pub fn classify_line(line: &str) -> Block {
    if line.starts_with('#') {
        let level = line.chars().take_while(|c| *c == '#').count();
        return Block::Heading {
            level,
            text: heading_text(line, level).to_string(),
        };
    }

    if let Some(rest) = line.strip_prefix("- ") {
        return Block::ListItem(rest.to_string());
    }

    if line.trim().is_empty() {
        return Block::Empty;
    }

    Block::Paragraph(line.to_string())
}

// The marker run and one whitespace char are removed together; without that
// whitespace char the line is kept whole.
fn heading_text(line: &str, level: usize) -> &str {
    let after_marks = &line[level..];
    let mut chars = after_marks.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => line,
    }
}

/// A run of blocks as a page would lay them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockGroup<'a> {
    Single(&'a Block),
    /// Directly adjacent list items.
    List(Vec<&'a str>),
}

pub fn group_list_items(blocks: &[Block]) -> Vec<BlockGroup<'_>> {
    let mut groups = Vec::new();
    let mut pending: Vec<&str> = Vec::new();

    for block in blocks {
        match block {
            Block::ListItem(text) => pending.push(text),
            other => {
                if !pending.is_empty() {
                    groups.push(BlockGroup::List(std::mem::take(&mut pending)));
                }
                groups.push(BlockGroup::Single(other));
            },
        }
    }

    if !pending.is_empty() {
        groups.push(BlockGroup::List(pending));
    }

    groups
}
