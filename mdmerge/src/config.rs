use crate::models::BlockType;

/// `MergeConfig` carries the fixed configuration consumed by the block
/// accumulator and the output assembler.
///
/// The values are not reloaded mid-run; passing the configuration as an
/// explicit value keeps the pipeline reentrant, so tests can run with
/// different configurations in parallel.
///
/// # Fields
///
/// * `page_separator` - String inserted after a block whose flush was forced
///   by a page boundary.
/// * `paginate_output` - Whether to force a flush at every page boundary.
/// * `default_block_type` - Type assigned to a flushed block when no input
///   block has been seen yet.
/// * `max_block_length` - Character count above which a non-table buffer is
///   flushed immediately.
/// * `max_block_gap` - Vertical distance (in page units) below which two
///   aligned lines of equal height count as a geometric continuation.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeConfig {
    pub page_separator: String,
    pub paginate_output: bool,
    pub default_block_type: BlockType,
    pub max_block_length: usize,
    pub max_block_gap: f32,
}

impl MergeConfig {
    /// Creates a new `MergeConfig` with default values: a form-feed page
    /// separator, pagination disabled, `Text` as the default block type, a
    /// 1000-character block length limit, and a 15-unit continuation gap.
    pub fn new() -> MergeConfig {
        MergeConfig {
            page_separator: "\n\n\u{000C}\n\n".to_string(),
            paginate_output: false,
            default_block_type: BlockType::Text,
            max_block_length: 1000,
            max_block_gap: 15.0,
        }
    }
}

impl Default for MergeConfig {
    fn default() -> MergeConfig {
        MergeConfig::new()
    }
}
