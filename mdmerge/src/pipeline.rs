//! End-to-end pipeline entry points.

use crate::accumulator::merge_lines;
use crate::assembler::get_full_text;
use crate::config::MergeConfig;
use crate::merger::merge_spans;
use crate::models::{FullyMergedBlock, Page};
use anyhow::Result;

/// Runs the full reconstruction pipeline over the given pages.
///
/// Spans are merged into lines, lines are folded into finalized blocks, and
/// the blocks are assembled into the markdown document.
///
/// # Arguments
///
/// * `pages` - The upstream pages in document order.
/// * `config` - The merge configuration.
///
/// # Returns
///
/// The ordered finalized block records and the assembled document string.
pub fn reconstruct(pages: &[Page], config: &MergeConfig) -> (Vec<FullyMergedBlock>, String) {
    let merged = merge_spans(pages);
    let text_blocks = merge_lines(&merged, config);
    let full_text = get_full_text(&text_blocks, config);
    tracing::info!(
        pages = pages.len(),
        blocks = text_blocks.len(),
        chars = full_text.chars().count(),
        "reconstructed document"
    );
    return (text_blocks, full_text);
}

/// Parses a JSON array of pages as produced by the upstream layout stage.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or does not match the page
/// schema.
pub fn pages_from_json(json: &str) -> Result<Vec<Page>> {
    let pages: Vec<Page> = serde_json::from_str(json)?;
    return Ok(pages);
}

/// Serializes finalized blocks to pretty-printed JSON for structured
/// downstream consumers.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn blocks2json(text_blocks: &[FullyMergedBlock]) -> Result<String> {
    let json = serde_json::to_string_pretty(text_blocks)?;
    return Ok(json);
}
