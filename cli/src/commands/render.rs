use std::path::Path;

use anyhow::Result;
use inkscribe_shared::render_blocks;

use crate::{cli::RenderFormat, content::read_body, output::format_blocks};

pub fn run(file: &Path, format: RenderFormat) -> Result<()> {
    let body = read_body(file)?;
    let blocks = render_blocks(&body);
    tracing::debug!("{} lines classified from {}", blocks.len(), file.display());

    match format {
        RenderFormat::Text => print!("{}", format_blocks(&blocks)),
        RenderFormat::Json => println!("{}", serde_json::to_string_pretty(&blocks)?),
    }
    Ok(())
}
