//! Block accumulation and flushing.
//!
//! `BlockAccumulator` folds the per-page merged blocks into a running text
//! buffer using the line joiner, and flushes the buffer into finalized
//! blocks on type changes, heading-level changes, length overflow, page
//! boundaries, and at the end of the stream.

use crate::config::MergeConfig;
use crate::formatter::block_surround;
use crate::joiner::line_separator;
use crate::models::{BBox, BlockType, FullyMergedBlock, MergedBlock, MergedLine};

/// State machine accumulating merged blocks into finalized output blocks.
///
/// The state carried across `feed` calls is the previous block type and
/// heading level (a change in either closes the buffer), the previous line's
/// bounding box (for geometric continuation), the text buffer itself, and
/// the running bounding-box union of the blocks that contributed to it.
///
/// Flush triggers are checked in a fixed order: type/level change first,
/// then the length threshold, then (from the driver) page boundaries and
/// stream end.
pub struct BlockAccumulator<'a> {
    config: &'a MergeConfig,
    prev_type: Option<BlockType>,
    prev_heading_level: Option<i8>,
    prev_line_bbox: Option<BBox>,
    block_text: String,
    bbox: Option<BBox>,
    last_block_bbox: Option<BBox>,
}

impl<'a> BlockAccumulator<'a> {
    /// Creates an empty accumulator over the given configuration.
    pub fn new(config: &'a MergeConfig) -> BlockAccumulator<'a> {
        BlockAccumulator {
            config,
            prev_type: None,
            prev_heading_level: None,
            prev_line_bbox: None,
            block_text: String::new(),
            bbox: None,
            last_block_bbox: None,
        }
    }

    /// Returns whether `line` geometrically continues the previously seen
    /// line: equal height, equal left edge, and a vertical gap below the
    /// configured threshold.
    fn is_continuation(&self, line: &MergedLine) -> bool {
        match self.prev_line_bbox {
            Some(prev) => {
                let vertical_dist = f32::min(
                    (line.bbox.y0 - prev.y1).abs(),
                    (line.bbox.y1 - prev.y0).abs(),
                );
                line.bbox.height() == prev.height()
                    && line.bbox.x0 == prev.x0
                    && vertical_dist < self.config.max_block_gap
            }
            None => false,
        }
    }

    /// Closes the current buffer into a `FullyMergedBlock`.
    ///
    /// The buffer is formatted with the type and heading level of the blocks
    /// being closed, not the incoming one. When no bounding box has been
    /// accumulated yet the triggering block's own box is used, so a flushed
    /// block always carries a defined box.
    fn flush(&mut self, id: String, page_end: bool, fallback_bbox: &BBox) -> FullyMergedBlock {
        let bbox = self.bbox.take().unwrap_or(*fallback_bbox);
        let block_type = self
            .prev_type
            .clone()
            .unwrap_or_else(|| self.config.default_block_type.clone());
        let text = block_surround(&self.block_text, &block_type, self.prev_heading_level);
        self.block_text.clear();
        tracing::debug!(id = %id, block_type = %block_type, page_end, "flushed block");
        FullyMergedBlock {
            text,
            block_type,
            page_end,
            bbox,
            id,
        }
    }

    /// Feeds one merged block into the accumulator.
    ///
    /// Returns the blocks finalized while processing it: a type or
    /// heading-level change closes the previous buffer before the block is
    /// appended, and a length overflow closes the buffer right after, so a
    /// single feed can emit up to two finalized blocks.
    ///
    /// # Arguments
    ///
    /// * `page_idx` - Zero-based index of the page being processed.
    /// * `block_num` - Zero-based index of the block within its page.
    /// * `block` - The merged block to append.
    pub fn feed(
        &mut self,
        page_idx: usize,
        block_num: usize,
        block: &MergedBlock,
    ) -> Vec<FullyMergedBlock> {
        let mut finished = Vec::new();

        let type_changed = self.prev_type.as_ref().is_some_and(|t| *t != block.block_type);
        let level_changed =
            self.prev_heading_level.is_some() && block.heading_level != self.prev_heading_level;
        if type_changed || level_changed {
            let id = format!("{}|-{}", page_idx + 1, block_num);
            finished.push(self.flush(id, false, &block.bbox));
        }

        self.bbox = Some(match self.bbox {
            Some(current) => current.union(&block.bbox),
            None => block.bbox,
        });
        self.last_block_bbox = Some(block.bbox);
        self.prev_type = Some(block.block_type.clone());
        self.prev_heading_level = block.heading_level;

        for line in &block.lines {
            let is_continuation = self.is_continuation(line);
            self.prev_line_bbox = Some(line.bbox);
            if self.block_text.is_empty() {
                self.block_text = line.text.clone();
            } else {
                self.block_text =
                    line_separator(&self.block_text, &line.text, &block.block_type, is_continuation);
            }
        }

        // Tables are exempt so rows are never split mid-table.
        if self.block_text.chars().count() > self.config.max_block_length
            && block.block_type != BlockType::Table
        {
            let id = format!("{}|-{}", page_idx + 1, block_num);
            finished.push(self.flush(id, false, &block.bbox));
        }

        return finished;
    }

    /// Forces a flush at a page boundary. The resulting block is marked
    /// `page_end` so the assembler inserts the page separator after it.
    ///
    /// Returns `None` when nothing has ever been accumulated (no bounding
    /// box can be derived for an empty document).
    pub fn end_page(&mut self, page_idx: usize, page_len: usize) -> Option<FullyMergedBlock> {
        let fallback = self.bbox.or(self.last_block_bbox)?;
        let id = format!("{}|-{}", page_idx + 1, page_len);
        Some(self.flush(id, true, &fallback))
    }

    /// Flushes whatever remains in the buffer after the last page.
    ///
    /// Returns `None` when nothing has ever been accumulated.
    pub fn finish(&mut self, num_pages: usize) -> Option<FullyMergedBlock> {
        let fallback = self.bbox.or(self.last_block_bbox)?;
        let id = format!("{}|-final", num_pages + 1);
        Some(self.flush(id, false, &fallback))
    }
}

/// Folds an ordered stream of per-page merged blocks into the flat sequence
/// of finalized blocks.
///
/// Each page's blocks are fed in order; when pagination is enabled a flush
/// is forced after every page; a final flush closes the stream. Finalized
/// blocks whose formatted text trims to nothing are dropped from the result
/// (their boxes still participate in the unions up to that point).
///
/// # Arguments
///
/// * `pages` - Per-page merged block lists, in document order.
/// * `config` - The merge configuration.
///
/// # Returns
///
/// The ordered sequence of finalized blocks; insertion order is reading
/// order.
pub fn merge_lines(pages: &[Vec<MergedBlock>], config: &MergeConfig) -> Vec<FullyMergedBlock> {
    let mut accumulator = BlockAccumulator::new(config);
    let mut text_blocks = Vec::new();
    for (page_idx, page) in pages.iter().enumerate() {
        for (block_num, block) in page.iter().enumerate() {
            text_blocks.extend(accumulator.feed(page_idx, block_num, block));
        }
        if config.paginate_output {
            if let Some(block) = accumulator.end_page(page_idx, page.len()) {
                text_blocks.push(block);
            }
        }
    }
    if let Some(block) = accumulator.finish(pages.len()) {
        text_blocks.push(block);
    }
    text_blocks.retain(|block| !block.text.trim().is_empty());
    return text_blocks;
}
