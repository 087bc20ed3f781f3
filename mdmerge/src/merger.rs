//! Span merging.
//!
//! Concatenates each line's spans into a single string, inserting bold and
//! italic markers where a styled run ends, and regroups the surviving lines
//! into per-page merged block records.

use crate::formatter::surround_text;
use crate::models::{MergedBlock, MergedLine, Page, Span};

/// Minimum trimmed length for a span to act as the style look-ahead;
/// shorter spans are recognition noise and skipped.
const MIN_LOOKAHEAD_LEN: usize = 3;

/// Minimum trimmed length for a span to receive emphasis markers.
const MIN_EMPHASIS_LEN: usize = 4;

/// Returns the first span after index `idx` whose trimmed text is long
/// enough to carry a meaningful style signal.
fn lookahead_span(spans: &[Span], idx: usize) -> Option<&Span> {
    spans[idx + 1..]
        .iter()
        .find(|span| span.text.trim().chars().count() >= MIN_LOOKAHEAD_LEN)
}

/// Merges each line's spans into a single string with emphasis applied, and
/// groups the results into one `MergedBlock` per surviving input block.
///
/// A span is wrapped in `*`/`**` when its style run ends at that span
/// (the look-ahead span is missing or unstyled). Italic takes precedence
/// over bold. The first and last spans of a line and spans with a trimmed
/// length of at most 3 characters are never wrapped, so the line joiner can
/// still inspect the first and last characters of the line.
///
/// Lines without spans are dropped; blocks without surviving lines are
/// dropped.
///
/// # Arguments
///
/// * `pages` - The upstream pages in document order.
///
/// # Returns
///
/// Per page, the ordered list of merged blocks.
pub fn merge_spans(pages: &[Page]) -> Vec<Vec<MergedBlock>> {
    let mut merged_pages = Vec::new();
    for page in pages {
        let mut page_blocks = Vec::new();
        for block in &page.blocks {
            let mut block_lines = Vec::new();
            for line in &block.lines {
                if line.spans.is_empty() {
                    continue;
                }
                let mut line_text = String::new();
                let mut fonts = Vec::new();
                let last = line.spans.len() - 1;
                for (i, span) in line.spans.iter().enumerate() {
                    fonts.push(span.font.to_lowercase());
                    let mut span_text = span.text.clone();
                    let wrappable = i > 0
                        && i < last
                        && span_text.trim().chars().count() >= MIN_EMPHASIS_LEN;
                    if wrappable {
                        let next = lookahead_span(&line.spans, i);
                        if span.italic && next.map_or(true, |s| !s.italic) {
                            span_text = surround_text(&span_text, "*");
                        } else if span.bold && next.map_or(true, |s| !s.bold) {
                            span_text = surround_text(&span_text, "**");
                        }
                    }
                    line_text.push_str(&span_text);
                }
                block_lines.push(MergedLine {
                    text: line_text,
                    fonts,
                    bbox: line.bbox,
                });
            }
            if !block_lines.is_empty() {
                page_blocks.push(MergedBlock {
                    lines: block_lines,
                    block_type: block.block_type.clone(),
                    heading_level: block.heading_level,
                    bbox: block.bbox,
                    pnum: block.pnum,
                });
            }
        }
        merged_pages.push(page_blocks);
    }
    return merged_pages;
}
