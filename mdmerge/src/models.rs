use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use strum::{Display, EnumString};

pub type PageNumber = i16;

/// Block type classification produced by the upstream layout stage.
///
/// The set of recognized types is closed; any string the upstream stage
/// emits outside of it deserializes to `Other`, which falls through the
/// formatter unchanged and takes the default join rule in the joiner.
///
/// # Variants
///
/// * `Title` - Document title.
/// * `SectionHeader` - Section heading, optionally carrying a heading level.
/// * `Text` - Normal body text (default).
/// * `ListItem` - A single list item.
/// * `Table` - Tabular content.
/// * `Code` - Source code listing.
/// * `Formula` - Display math.
/// * `Caption` - Figure/table captions.
/// * `Figure` - Figure body text.
/// * `Footnote` - Footnote text.
/// * `Other` - Catch-all for unrecognized upstream types.
#[derive(Debug, Clone, PartialEq, Eq, Default, Display, EnumString)]
pub enum BlockType {
    Title,
    #[strum(serialize = "Section-header")]
    SectionHeader,
    #[default]
    Text,
    #[strum(serialize = "List-item")]
    ListItem,
    Table,
    Code,
    Formula,
    Caption,
    Figure,
    Footnote,
    Other,
}

impl Serialize for BlockType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BlockType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<BlockType, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(BlockType::from_str(&value).unwrap_or(BlockType::Other))
    }
}

/// An axis-aligned bounding box in page coordinates.
///
/// # Fields
///
/// * `x0` - The x-coordinate of the left edge.
/// * `y0` - The y-coordinate of the top edge.
/// * `x1` - The x-coordinate of the right edge.
/// * `y1` - The y-coordinate of the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BBox {
    /// Creates a new `BBox` from its four edge coordinates.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> BBox {
        BBox { x0, y0, x1, y1 }
    }

    /// Returns the width of the box.
    pub fn width(&self) -> f32 {
        return self.x1 - self.x0;
    }

    /// Returns the height of the box.
    pub fn height(&self) -> f32 {
        return self.y1 - self.y0;
    }

    /// Returns the coordinate-wise union of this box with another.
    ///
    /// The union takes the minimum of the top-left coordinates and the
    /// maximum of the bottom-right coordinates.
    ///
    /// # Arguments
    ///
    /// * `other` - Another `BBox` to union with.
    ///
    /// # Returns
    ///
    /// A `BBox` covering both input boxes.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: f32::min(self.x0, other.x0),
            y0: f32::min(self.y0, other.y0),
            x1: f32::max(self.x1, other.x1),
            y1: f32::max(self.y1, other.y1),
        }
    }
}

/// The `Span` struct is the smallest unit of recognized text, carrying font
/// and style metadata.
///
/// # Fields
///
/// * `text` - The recognized text content, whitespace preserved.
/// * `font` - The font identifier reported by the recognition stage.
/// * `bold` - Whether the span was recognized as bold.
/// * `italic` - Whether the span was recognized as italic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub font: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl Span {
    /// Creates a new `Span` with the given text, font, and style flags.
    pub fn new(text: &str, font: &str, bold: bool, italic: bool) -> Span {
        Span {
            text: text.to_string(),
            font: font.to_string(),
            bold,
            italic,
        }
    }
}

/// The `Line` struct represents one visual text line: an ordered run of
/// spans plus the line's bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub spans: Vec<Span>,
    pub bbox: BBox,
}

impl Line {
    /// Creates a new `Line` with the given bounding box and no spans.
    pub fn new(bbox: BBox) -> Line {
        Line {
            spans: Vec::new(),
            bbox,
        }
    }

    /// Adds a new `Span` to the `Line`.
    ///
    /// # Arguments
    ///
    /// * `text` - The text content of the span.
    /// * `font` - The font identifier of the span.
    /// * `bold` - Whether the span is bold.
    /// * `italic` - Whether the span is italic.
    pub fn add_span(&mut self, text: &str, font: &str, bold: bool, italic: bool) {
        self.spans.push(Span::new(text, font, bold, italic));
    }
}

/// The `Block` struct represents a structurally classified region of a page
/// as produced by the upstream layout stage.
///
/// # Fields
///
/// * `lines` - The ordered lines inside the block.
/// * `block_type` - The structural classification of the block.
/// * `heading_level` - Heading depth, only meaningful for section headers.
/// * `bbox` - The block's bounding box.
/// * `pnum` - The page number the block belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub lines: Vec<Line>,
    pub block_type: BlockType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<i8>,
    pub bbox: BBox,
    pub pnum: PageNumber,
}

impl Block {
    /// Creates a new `Block` with the given type, box, and page number.
    pub fn new(block_type: BlockType, bbox: BBox, pnum: PageNumber) -> Block {
        Block {
            lines: Vec::new(),
            block_type,
            heading_level: None,
            bbox,
            pnum,
        }
    }
}

/// The `Page` struct represents one page of upstream output: an ordered
/// sequence of classified blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub blocks: Vec<Block>,
    pub pnum: PageNumber,
}

impl Page {
    /// Creates a new `Page` with the given page number and no blocks.
    pub fn new(pnum: PageNumber) -> Page {
        Page {
            blocks: Vec::new(),
            pnum,
        }
    }
}

/// A line whose spans have been concatenated into a single string with
/// emphasis markers applied. Immutable once produced.
///
/// # Fields
///
/// * `text` - The merged line text.
/// * `fonts` - Lowercased font identifiers of the contributing spans.
/// * `bbox` - The source line's bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedLine {
    pub text: String,
    pub fonts: Vec<String>,
    pub bbox: BBox,
}

/// A block whose lines have been merged span-wise, still carrying the
/// upstream type and heading metadata. One per surviving input block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedBlock {
    pub lines: Vec<MergedLine>,
    pub block_type: BlockType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<i8>,
    pub bbox: BBox,
    pub pnum: PageNumber,
}

/// The unit of final output: a fully joined, markdown-formatted block.
///
/// # Fields
///
/// * `text` - The formatted markdown text.
/// * `block_type` - The type of the blocks that contributed the text.
/// * `page_end` - Whether the flush was forced by a page boundary.
/// * `bbox` - Union of the bounding boxes of every contributing input block.
/// * `id` - Identifier encoding the 1-based page number and a position hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullyMergedBlock {
    pub text: String,
    pub block_type: BlockType,
    pub page_end: bool,
    pub bbox: BBox,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_type_roundtrip() {
        let json = serde_json::to_string(&BlockType::SectionHeader).unwrap();
        assert_eq!(json, "\"Section-header\"");
        let parsed: BlockType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, BlockType::SectionHeader);

        let json = serde_json::to_string(&BlockType::ListItem).unwrap();
        assert_eq!(json, "\"List-item\"");
    }

    #[test]
    fn test_block_type_unknown_falls_back_to_other() {
        let parsed: BlockType = serde_json::from_str("\"Page-footer\"").unwrap();
        assert_eq!(parsed, BlockType::Other);
    }

    #[test]
    fn test_bbox_union() {
        let a = BBox::new(10.0, 20.0, 100.0, 40.0);
        let b = BBox::new(5.0, 30.0, 90.0, 60.0);
        let u = a.union(&b);
        assert_eq!(u, BBox::new(5.0, 20.0, 100.0, 60.0));
    }

    #[test]
    fn test_bbox_dimensions() {
        let b = BBox::new(10.0, 20.0, 110.0, 35.0);
        assert_eq!(b.width(), 100.0);
        assert_eq!(b.height(), 15.0);
    }

    #[test]
    fn test_page_deserializes_from_json() {
        let json = r#"{
            "pnum": 0,
            "blocks": [
                {
                    "block_type": "Text",
                    "bbox": {"x0": 0.0, "y0": 0.0, "x1": 100.0, "y1": 20.0},
                    "pnum": 0,
                    "lines": [
                        {
                            "bbox": {"x0": 0.0, "y0": 0.0, "x1": 100.0, "y1": 10.0},
                            "spans": [{"text": "hello", "font": "Times"}]
                        }
                    ]
                }
            ]
        }"#;
        let page: Page = serde_json::from_str(json).unwrap();
        assert_eq!(page.blocks.len(), 1);
        assert_eq!(page.blocks[0].block_type, BlockType::Text);
        assert_eq!(page.blocks[0].lines[0].spans[0].text, "hello");
        assert!(!page.blocks[0].lines[0].spans[0].bold);
    }
}
