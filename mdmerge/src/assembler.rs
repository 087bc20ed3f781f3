//! Output assembly.
//!
//! Concatenates the finalized block sequence into the final document
//! string, choosing the separator from the previous block's type and
//! page-end flag.

use crate::config::MergeConfig;
use crate::models::{BlockType, FullyMergedBlock};

/// Returns the separator to insert between `prev_block` and the block that
/// follows it: the configured page separator after a page-ending block, a
/// blank line after body text, and a single newline otherwise.
pub fn block_separator(prev_block: &FullyMergedBlock, config: &MergeConfig) -> String {
    if prev_block.page_end {
        return config.page_separator.clone();
    }
    if prev_block.block_type == BlockType::Text {
        return "\n\n".to_string();
    }
    return "\n".to_string();
}

/// Concatenates the finalized blocks in order into the full markdown
/// document.
///
/// # Arguments
///
/// * `text_blocks` - The ordered finalized blocks.
/// * `config` - The merge configuration supplying the page separator.
///
/// # Returns
///
/// The assembled document string.
pub fn get_full_text(text_blocks: &[FullyMergedBlock], config: &MergeConfig) -> String {
    let mut full_text = String::new();
    let mut prev_block: Option<&FullyMergedBlock> = None;
    for block in text_blocks {
        if let Some(prev) = prev_block {
            full_text.push_str(&block_separator(prev, config));
        }
        full_text.push_str(&block.text);
        prev_block = Some(block);
    }
    return full_text;
}
