//! Builders for input and intermediate structures, used across the test
//! suites to keep fixtures short.

use crate::models::{BBox, Block, BlockType, Line, MergedBlock, MergedLine, Page, PageNumber};

/// Builds a `MergedLine` with the given text and box and no font metadata.
pub fn merged_line(text: &str, bbox: BBox) -> MergedLine {
    MergedLine {
        text: text.to_string(),
        fonts: Vec::new(),
        bbox,
    }
}

/// Builds a `MergedBlock` holding a single line whose box equals the block
/// box.
pub fn merged_block(block_type: BlockType, text: &str, bbox: BBox) -> MergedBlock {
    merged_block_with_lines(block_type, vec![merged_line(text, bbox)], bbox)
}

/// Builds a `MergedBlock` from explicit lines.
pub fn merged_block_with_lines(
    block_type: BlockType,
    lines: Vec<MergedLine>,
    bbox: BBox,
) -> MergedBlock {
    MergedBlock {
        lines,
        block_type,
        heading_level: None,
        bbox,
        pnum: 0,
    }
}

/// Builds an input `Line` holding one unstyled span.
pub fn single_span_line(text: &str, bbox: BBox) -> Line {
    let mut line = Line::new(bbox);
    line.add_span(text, "Times", false, false);
    return line;
}

/// Builds an input `Block` holding one line with one unstyled span; the
/// line box equals the block box.
pub fn single_span_block(
    block_type: BlockType,
    text: &str,
    bbox: BBox,
    pnum: PageNumber,
) -> Block {
    let mut block = Block::new(block_type, bbox, pnum);
    block.lines.push(single_span_line(text, bbox));
    return block;
}

/// Builds a one-block page from the given block.
pub fn single_block_page(block: Block, pnum: PageNumber) -> Page {
    let mut page = Page::new(pnum);
    page.blocks.push(block);
    return page;
}
